//! # Strategy Pattern
//!
//! Thay vì if/else chọn thuật toán, mỗi thuật toán là một type riêng và
//! được chọn lúc tạo context. Closure cũng là strategy hợp lệ.

use lessons_core::{Console, Lesson, Result, Topic};

pub trait PaymentStrategy {
    fn pay(&self, amount: u32, console: &mut Console);
}

pub struct PayPalPayment;

impl PaymentStrategy for PayPalPayment {
    fn pay(&self, amount: u32, console: &mut Console) {
        console.say(format!("Paying {}$ using PayPal.", amount));
    }
}

pub struct CreditCardPayment;

impl PaymentStrategy for CreditCardPayment {
    fn pay(&self, amount: u32, console: &mut Console) {
        console.say(format!("Paying {}$ using Credit Card.", amount));
    }
}

pub struct BitcoinPayment;

impl PaymentStrategy for BitcoinPayment {
    fn pay(&self, amount: u32, console: &mut Console) {
        console.say(format!("Paying {}$ using Bitcoin.", amount));
    }
}

impl<F> PaymentStrategy for F
where
    F: Fn(u32, &mut Console),
{
    fn pay(&self, amount: u32, console: &mut Console) {
        self(amount, console)
    }
}

/// Context
pub struct ShoppingCart {
    payment_strategy: Box<dyn PaymentStrategy>,
}

impl ShoppingCart {
    pub fn new(payment_strategy: impl PaymentStrategy + 'static) -> Self {
        Self {
            payment_strategy: Box::new(payment_strategy),
        }
    }

    pub fn checkout(&self, amount: u32, console: &mut Console) {
        self.payment_strategy.pay(amount, console);
    }
}

pub struct StrategyLesson;

impl Lesson for StrategyLesson {
    fn id(&self) -> &'static str {
        "strategy"
    }

    fn title(&self) -> &'static str {
        "Strategy Pattern"
    }

    fn topic(&self) -> Topic {
        Topic::Behavioral
    }

    fn summary(&self) -> &'static str {
        "Select an algorithm's behaviour at runtime"
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        let cart1 = ShoppingCart::new(PayPalPayment);
        cart1.checkout(50, console);

        let cart2 = ShoppingCart::new(BitcoinPayment);
        cart2.checkout(120, console);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkout(cart: &ShoppingCart, amount: u32) -> Vec<String> {
        let mut console = Console::capture();
        cart.checkout(amount, &mut console);
        console.into_lines()
    }

    #[test]
    fn test_each_strategy() {
        assert_eq!(
            checkout(&ShoppingCart::new(PayPalPayment), 50),
            ["Paying 50$ using PayPal."]
        );
        assert_eq!(
            checkout(&ShoppingCart::new(CreditCardPayment), 75),
            ["Paying 75$ using Credit Card."]
        );
        assert_eq!(
            checkout(&ShoppingCart::new(BitcoinPayment), 120),
            ["Paying 120$ using Bitcoin."]
        );
    }

    #[test]
    fn test_closure_strategy() {
        let cart = ShoppingCart::new(|amount: u32, console: &mut Console| {
            console.say(format!("Paying {}$ in cash.", amount))
        });
        assert_eq!(checkout(&cart, 10), ["Paying 10$ in cash."]);
    }
}
