//! Naming - dùng tên có ý nghĩa, mô tả đúng việc hàm làm

use lessons_core::{Console, Lesson, Result, Topic};

/// ❌ Tên không nói gì về việc hàm làm
pub fn f(a: f64, b: f64) -> f64 {
    a * b / 2.0
}

/// Diện tích tam giác: (base * height) / 2
pub fn calculate_triangle_area(base: f64, height: f64) -> f64 {
    base * height / 2.0
}

pub struct NamingLesson {
    pub show_bad: bool,
}

impl Lesson for NamingLesson {
    fn id(&self) -> &'static str {
        "naming"
    }

    fn title(&self) -> &'static str {
        "Naming"
    }

    fn topic(&self) -> Topic {
        Topic::CleanCode
    }

    fn summary(&self) -> &'static str {
        "Use meaningful, descriptive names"
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        if self.show_bad {
            console.say("❌ Before:");
            let result = f(10.0, 5.0);
            console.say(format!("{:?}", result));
            console.say("✅ After:");
        }

        let area = calculate_triangle_area(10.0, 5.0);
        console.say(format!("Triangle area: {:?}", area));
        Ok(())
    }
}
