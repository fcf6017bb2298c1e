//! Polymorphism - cùng một method, hành vi khác nhau tùy type

use lessons_core::{Console, Lesson, Result, Topic};

pub trait Speaker {
    fn name(&self) -> &str;

    fn speak(&self, console: &mut Console) {
        console.say(format!("{}I am an animal", self.name()));
    }
}

pub struct Dog(pub String);

impl Speaker for Dog {
    fn name(&self) -> &str {
        &self.0
    }

    fn speak(&self, console: &mut Console) {
        console.say(format!("{} I am a dog", self.0));
    }
}

pub struct Cat(pub String);

impl Speaker for Cat {
    fn name(&self) -> &str {
        &self.0
    }

    fn speak(&self, console: &mut Console) {
        console.say(format!("{} I am a cat", self.0));
    }
}

pub struct PolymorphismLesson;

impl Lesson for PolymorphismLesson {
    fn id(&self) -> &'static str {
        "polymorphism"
    }

    fn title(&self) -> &'static str {
        "Polymorphism"
    }

    fn topic(&self) -> Topic {
        Topic::Oop
    }

    fn summary(&self) -> &'static str {
        "Same method, different behaviour per type"
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        let animals: Vec<Box<dyn Speaker>> = vec![
            Box::new(Dog("Rocky".to_string())),
            Box::new(Cat("Luna".to_string())),
        ];
        for animal in &animals {
            // Each object runs its own version of speak()
            animal.speak(console);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Parrot;

    impl Speaker for Parrot {
        fn name(&self) -> &str {
            "Kiwi"
        }
    }

    #[test]
    fn test_dispatch_per_type() {
        let mut console = Console::capture();
        PolymorphismLesson.run(&mut console).unwrap();
        assert_eq!(console.lines(), ["Rocky I am a dog", "Luna I am a cat"]);
    }

    #[test]
    fn test_default_speak() {
        let mut console = Console::capture();
        Parrot.speak(&mut console);
        assert_eq!(console.lines(), ["KiwiI am an animal"]);
    }
}
