//! YAGNI - You Ain't Gonna Need It

use lessons_core::{Console, Lesson, Result, Topic};

/// ❌ Thêm những tính năng không ai dùng
#[allow(dead_code)]
pub struct ReportGenerator {
    format: String,
    // Not used anywhere!
    enable_encryption: bool,
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            format: "PDF".to_string(),
            enable_encryption: true,
        }
    }

    pub fn generate(&self, _data: &str, console: &mut Console) {
        console.say("Generating PDF report...");
    }
}

/// Chỉ implement những gì thực sự cần
pub struct SimpleReport;

impl SimpleReport {
    pub fn generate(&self, _data: &str, console: &mut Console) {
        console.say("Generating simple report...");
    }
}

pub struct YagniLesson {
    pub show_bad: bool,
}

impl Lesson for YagniLesson {
    fn id(&self) -> &'static str {
        "yagni"
    }

    fn title(&self) -> &'static str {
        "YAGNI"
    }

    fn topic(&self) -> Topic {
        Topic::CleanCode
    }

    fn summary(&self) -> &'static str {
        "Don't build features you don't need"
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        if self.show_bad {
            console.say("❌ Before:");
            ReportGenerator::new().generate("Sales data", console);
            console.say("✅ After:");
        }

        let report = SimpleReport;
        report.generate("Sales data", console);
        Ok(())
    }
}
