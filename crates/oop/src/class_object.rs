//! Class & object: struct là "class", mỗi giá trị là một object

use lessons_core::{Console, Lesson, Result, Topic};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dog {
    // Attributes
    pub name: String,
    pub breed: String,
}

impl Dog {
    pub fn new(name: impl Into<String>, breed: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            breed: breed.into(),
        }
    }

    // Method
    pub fn bark(&self, console: &mut Console) {
        console.say(format!("{} says woof!", self.name));
    }
}

pub struct ClassObjectLesson;

impl Lesson for ClassObjectLesson {
    fn id(&self) -> &'static str {
        "class-object"
    }

    fn title(&self) -> &'static str {
        "Class & Object"
    }

    fn topic(&self) -> Topic {
        Topic::Oop
    }

    fn summary(&self) -> &'static str {
        "A type bundles attributes and methods; each value is an object"
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        let dog1 = Dog::new("Bob", "Golden Retriever");
        dog1.bark(console);
        let dog2 = Dog::new("Luna", "Husky");
        dog2.bark(console);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_object_has_own_state() {
        let bob = Dog::new("Bob", "Golden Retriever");
        let luna = Dog::new("Luna", "Husky");
        assert_ne!(bob, luna);
        assert_eq!(luna.breed, "Husky");

        let mut console = Console::capture();
        ClassObjectLesson.run(&mut console).unwrap();
        assert_eq!(console.lines(), ["Bob says woof!", "Luna says woof!"]);
    }
}
