//! # S - Single Responsibility Principle
//!
//! Một type chỉ nên có một lý do để thay đổi.

use lessons_core::{Console, Lesson, Result, Topic};

/// ❌ Một type làm ba việc
pub mod before {
    use lessons_core::Console;

    pub struct Report;

    impl Report {
        pub fn generate(&self, console: &mut Console) {
            console.say("Generating report...");
        }

        pub fn save_to_file(&self, console: &mut Console) {
            console.say("Saving to file...");
        }

        pub fn send_email(&self, console: &mut Console) {
            console.say("Sending via email...");
        }
    }
}

pub struct Report;

impl Report {
    pub fn generate(&self, console: &mut Console) {
        console.say("Generating report...");
    }
}

pub struct FileSaver;

impl FileSaver {
    pub fn save(&self, _report: &Report, console: &mut Console) {
        console.say("Saving report to file...");
    }
}

pub struct EmailSender;

impl EmailSender {
    pub fn send(&self, _report: &Report, console: &mut Console) {
        console.say("Sending report via email...");
    }
}

pub struct SingleResponsibilityLesson {
    pub show_bad: bool,
}

impl Lesson for SingleResponsibilityLesson {
    fn id(&self) -> &'static str {
        "single-responsibility"
    }

    fn title(&self) -> &'static str {
        "S - Single Responsibility"
    }

    fn topic(&self) -> Topic {
        Topic::Solid
    }

    fn summary(&self) -> &'static str {
        "A type should have only one reason to change"
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        if self.show_bad {
            console.say("❌ Before:");
            let report = before::Report;
            report.generate(console);
            report.save_to_file(console);
            report.send_email(console);
            console.say("✅ After:");
        }

        let report = Report;
        report.generate(console);
        FileSaver.save(&report, console);
        EmailSender.send(&report, console);
        Ok(())
    }
}
