//! # Builder Pattern
//!
//! Xây dựng object phức tạp từng bước. Mỗi setter trả về builder để có
//! thể chain; `build` trả về giá trị đã lắp ráp, không validate.

use lessons_core::{Console, Lesson, Result, Topic};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Computer {
    pub cpu: Option<String>,
    pub gpu: Option<String>,
    pub ram: Option<String>,
}

fn part(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("None")
}

impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Computer(cpu={}, gpu={}, ram={})",
            part(&self.cpu),
            part(&self.gpu),
            part(&self.ram)
        )
    }
}

#[derive(Debug, Default)]
pub struct ComputerBuilder {
    computer: Computer,
}

impl ComputerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_cpu(mut self, cpu: impl Into<String>) -> Self {
        self.computer.cpu = Some(cpu.into());
        self
    }

    pub fn add_gpu(mut self, gpu: impl Into<String>) -> Self {
        self.computer.gpu = Some(gpu.into());
        self
    }

    pub fn add_ram(mut self, ram: impl Into<String>) -> Self {
        self.computer.ram = Some(ram.into());
        self
    }

    pub fn build(self) -> Computer {
        self.computer
    }
}

pub struct BuilderLesson;

impl Lesson for BuilderLesson {
    fn id(&self) -> &'static str {
        "builder"
    }

    fn title(&self) -> &'static str {
        "Builder Pattern"
    }

    fn topic(&self) -> Topic {
        Topic::Creational
    }

    fn summary(&self) -> &'static str {
        "Step-by-step construction of complex objects"
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        let computer = ComputerBuilder::new()
            .add_cpu("Intel i9")
            .add_gpu("NVIDIA RTX 4090")
            .add_ram("64GB")
            .build();
        console.say(&computer);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_full_computer() {
        let computer = ComputerBuilder::new()
            .add_cpu("Intel i9")
            .add_gpu("NVIDIA RTX 4090")
            .add_ram("64GB")
            .build();

        assert_eq!(computer.cpu.as_deref(), Some("Intel i9"));
        assert_eq!(computer.gpu.as_deref(), Some("NVIDIA RTX 4090"));
        assert_eq!(computer.ram.as_deref(), Some("64GB"));
        assert_eq!(
            computer.to_string(),
            "Computer(cpu=Intel i9, gpu=NVIDIA RTX 4090, ram=64GB)"
        );
    }

    #[test]
    fn test_partial_build() {
        let computer = ComputerBuilder::new().add_ram("16GB").build();
        assert_eq!(computer.to_string(), "Computer(cpu=None, gpu=None, ram=16GB)");
    }

    #[test]
    fn test_last_setter_wins() {
        let computer = ComputerBuilder::new()
            .add_cpu("Intel i5")
            .add_cpu("AMD Ryzen 9")
            .build();
        assert_eq!(computer.cpu.as_deref(), Some("AMD Ryzen 9"));
    }
}
