//! # Inheritance
//!
//! Rust không có kế thừa class. Hành vi "base class" nằm trong default
//! method của trait; type con override method đó khi cần.

use lessons_core::{Console, Lesson, Result, Topic};

pub trait Animal {
    fn name(&self) -> &str;

    /// Hành vi mặc định của "base class"
    fn speak(&self, console: &mut Console) {
        console.say("Animal makes sound");
    }
}

/// Dùng nguyên hành vi mặc định
pub struct GenericAnimal {
    pub name: String,
}

impl Animal for GenericAnimal {
    fn name(&self) -> &str {
        &self.name
    }
}

pub struct Dog {
    pub name: String,
}

impl Animal for Dog {
    fn name(&self) -> &str {
        &self.name
    }

    fn speak(&self, console: &mut Console) {
        console.say(format!("{} makes sound", self.name));
    }
}

pub struct Cat {
    pub name: String,
}

impl Animal for Cat {
    fn name(&self) -> &str {
        &self.name
    }

    fn speak(&self, console: &mut Console) {
        console.say(format!("{} makes sound", self.name));
    }
}

pub struct InheritanceLesson;

impl Lesson for InheritanceLesson {
    fn id(&self) -> &'static str {
        "inheritance"
    }

    fn title(&self) -> &'static str {
        "Inheritance"
    }

    fn topic(&self) -> Topic {
        Topic::Oop
    }

    fn summary(&self) -> &'static str {
        "Share default behaviour and override it where needed"
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        let cat = Cat {
            name: "Lucy".to_string(),
        };
        cat.speak(console);
        let dog = Dog {
            name: "Bob".to_string(),
        };
        dog.speak(console);
        Ok(())
    }
}
