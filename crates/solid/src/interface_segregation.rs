//! # I - Interface Segregation Principle
//!
//! Không ép client phụ thuộc vào method nó không dùng. Tách trait lớn
//! thành các trait nhỏ.

use lessons_core::{Console, Lesson, Result, Topic};

/// ❌ `Robot` buộc phải implement `eat`
pub mod before {
    use lessons_core::Console;

    pub trait Worker {
        fn work(&self, console: &mut Console);
        fn eat(&self, console: &mut Console);
    }

    pub struct Robot;

    impl Worker for Robot {
        fn work(&self, console: &mut Console) {
            console.say("Robot working...");
        }

        // Pointless implementation
        fn eat(&self, _console: &mut Console) {}
    }
}

pub trait Workable {
    fn work(&self, console: &mut Console);
}

pub trait Eatable {
    fn eat(&self, console: &mut Console);
}

pub struct Human;

impl Workable for Human {
    fn work(&self, console: &mut Console) {
        console.say("Human working...");
    }
}

impl Eatable for Human {
    fn eat(&self, console: &mut Console) {
        console.say("Human eating...");
    }
}

pub struct Robot;

impl Workable for Robot {
    fn work(&self, console: &mut Console) {
        console.say("Robot working...");
    }
}

pub struct InterfaceSegregationLesson {
    pub show_bad: bool,
}

impl Lesson for InterfaceSegregationLesson {
    fn id(&self) -> &'static str {
        "interface-segregation"
    }

    fn title(&self) -> &'static str {
        "I - Interface Segregation"
    }

    fn topic(&self) -> Topic {
        Topic::Solid
    }

    fn summary(&self) -> &'static str {
        "Split large interfaces into small, specific ones"
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        if self.show_bad {
            use before::Worker as _;

            console.say("❌ Before:");
            before::Robot.work(console);
            before::Robot.eat(console);
            console.say("✅ After:");
        }

        Human.work(console);
        Human.eat(console);
        Robot.work(console);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workers_share_only_workable() {
        let workers: Vec<Box<dyn Workable>> = vec![Box::new(Human), Box::new(Robot)];
        let mut console = Console::capture();
        for worker in &workers {
            worker.work(&mut console);
        }
        assert_eq!(console.lines(), ["Human working...", "Robot working..."]);
    }

    #[test]
    fn test_before_robot_eat_does_nothing() {
        use before::Worker as _;

        let mut console = Console::capture();
        before::Robot.eat(&mut console);
        assert!(console.lines().is_empty());
    }

    #[test]
    fn test_transcript() {
        let mut console = Console::capture();
        InterfaceSegregationLesson { show_bad: false }
            .run(&mut console)
            .unwrap();
        assert_eq!(
            console.lines(),
            ["Human working...", "Human eating...", "Robot working..."]
        );
    }
}
