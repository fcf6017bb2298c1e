//! # Decorator Pattern
//!
//! Thêm hành vi cho object mà không đổi type gốc. Mỗi decorator bọc một
//! `Beverage` khác và cộng thêm giá của nó.

use lessons_core::{Console, Lesson, Result, Topic};

pub trait Beverage {
    fn cost(&self) -> u32;
}

pub struct Coffee;

impl Beverage for Coffee {
    fn cost(&self) -> u32 {
        5
    }
}

pub struct MilkDecorator<B: Beverage> {
    inner: B,
}

impl<B: Beverage> MilkDecorator<B> {
    pub fn new(inner: B) -> Self {
        Self { inner }
    }
}

impl<B: Beverage> Beverage for MilkDecorator<B> {
    fn cost(&self) -> u32 {
        self.inner.cost() + 2
    }
}

pub struct SugarDecorator<B: Beverage> {
    inner: B,
}

impl<B: Beverage> SugarDecorator<B> {
    pub fn new(inner: B) -> Self {
        Self { inner }
    }
}

impl<B: Beverage> Beverage for SugarDecorator<B> {
    fn cost(&self) -> u32 {
        self.inner.cost() + 1
    }
}

pub struct DecoratorLesson;

impl Lesson for DecoratorLesson {
    fn id(&self) -> &'static str {
        "decorator"
    }

    fn title(&self) -> &'static str {
        "Decorator Pattern"
    }

    fn topic(&self) -> Topic {
        Topic::Structural
    }

    fn summary(&self) -> &'static str {
        "Wrap an object to add behaviour without changing its type"
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        let coffee = Coffee;
        console.say(format!("Plain Coffee: {}", coffee.cost()));

        let milk_coffee = MilkDecorator::new(coffee);
        console.say(format!("With Milk: {}", milk_coffee.cost()));

        let sweet_milk_coffee = SugarDecorator::new(milk_coffee);
        console.say(format!("With Milk + Sugar: {}", sweet_milk_coffee.cost()));
        Ok(())
    }
}
