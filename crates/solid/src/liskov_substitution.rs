//! # L - Liskov Substitution Principle
//!
//! Mọi implementation phải thay thế được cho abstraction mà không làm
//! hỏng chương trình.

use lessons_core::{Console, Lesson, Result, Topic};

/// ❌ `Ostrich` implement `Bird` nhưng `fly` luôn lỗi
pub mod before {
    use lessons_core::{Console, LessonError, Result};

    pub trait Bird {
        fn fly(&self, console: &mut Console) -> Result<()>;
    }

    pub struct Sparrow;

    impl Bird for Sparrow {
        fn fly(&self, console: &mut Console) -> Result<()> {
            console.say("Flying...");
            Ok(())
        }
    }

    pub struct Ostrich;

    impl Bird for Ostrich {
        // Violates LSP
        fn fly(&self, _console: &mut Console) -> Result<()> {
            Err(LessonError::CannotFly("Ostriches".to_string()))
        }
    }
}

pub trait Bird {
    fn name(&self) -> &'static str;
}

/// Chỉ loài bay được mới implement
pub trait Fly: Bird {
    fn fly(&self, console: &mut Console) {
        console.say("Flying...");
    }
}

pub struct FlyingBird;

impl Bird for FlyingBird {
    fn name(&self) -> &'static str {
        "eagle"
    }
}

impl Fly for FlyingBird {}

pub struct Ostrich;

impl Bird for Ostrich {
    fn name(&self) -> &'static str {
        "ostrich"
    }
}

impl Ostrich {
    pub fn run(&self, console: &mut Console) {
        console.say("Running fast!");
    }
}

/// Nhận bất kỳ loài nào bay được; `Ostrich` không compile ở đây
pub fn take_off(bird: &dyn Fly, console: &mut Console) {
    bird.fly(console);
}

pub struct LiskovSubstitutionLesson {
    pub show_bad: bool,
}

impl Lesson for LiskovSubstitutionLesson {
    fn id(&self) -> &'static str {
        "liskov-substitution"
    }

    fn title(&self) -> &'static str {
        "L - Liskov Substitution"
    }

    fn topic(&self) -> Topic {
        Topic::Solid
    }

    fn summary(&self) -> &'static str {
        "Implementations must be substitutable for their abstraction"
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        if self.show_bad {
            use before::Bird as _;

            console.say("❌ Before:");
            let birds: Vec<Box<dyn before::Bird>> =
                vec![Box::new(before::Sparrow), Box::new(before::Ostrich)];
            for bird in &birds {
                if let Err(e) = bird.fly(console) {
                    console.say(format!("Error: {}", e));
                }
            }
            console.say("✅ After:");
        }

        let eagle = FlyingBird;
        take_off(&eagle, console);

        let ostrich = Ostrich;
        ostrich.run(console);
        Ok(())
    }
}
