//! # Console Module
//!
//! Nơi lesson in transcript của nó. `Console::stdout()` in ra màn hình,
//! `Console::capture()` giữ lại các dòng để test so sánh.

use std::fmt::Display;

#[derive(Debug)]
enum Sink {
    Stdout,
    Capture,
}

/// Line sink cho transcript của lesson
#[derive(Debug)]
pub struct Console {
    sink: Sink,
    lines: Vec<String>,
}

impl Console {
    /// Console in thẳng ra stdout
    pub fn stdout() -> Self {
        Self {
            sink: Sink::Stdout,
            lines: Vec::new(),
        }
    }

    /// Console ghi lại mọi dòng (dùng cho test)
    pub fn capture() -> Self {
        Self {
            sink: Sink::Capture,
            lines: Vec::new(),
        }
    }

    /// In một dòng
    pub fn say(&mut self, line: impl Display) {
        let line = line.to_string();
        match self.sink {
            Sink::Stdout => println!("{}", line),
            Sink::Capture => self.lines.push(line),
        }
    }

    /// In một dòng trống
    pub fn blank(&mut self) {
        self.say("");
    }

    /// Các dòng đã capture (rỗng với stdout console)
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn is_capturing(&self) -> bool {
        matches!(self.sink, Sink::Capture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_keeps_order() {
        let mut console = Console::capture();
        console.say("first");
        console.say(format!("second {}", 2));
        console.blank();

        assert!(console.is_capturing());
        assert_eq!(console.lines(), ["first", "second 2", ""]);
    }

    #[test]
    fn test_stdout_records_nothing() {
        let mut console = Console::stdout();
        console.say("printed, not kept");
        assert!(console.into_lines().is_empty());
    }
}
