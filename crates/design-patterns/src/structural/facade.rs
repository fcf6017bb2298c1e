//! # Facade Pattern
//!
//! Một interface đơn giản cho cả hệ thống con phức tạp.

use lessons_core::{Console, Lesson, Result, Topic};

pub struct Cpu;

impl Cpu {
    pub fn freeze(&self, console: &mut Console) {
        console.say("Freezing CPU...");
    }

    pub fn jump(&self, position: u64, console: &mut Console) {
        console.say(format!("Jumping to {}...", position));
    }

    pub fn execute(&self, console: &mut Console) {
        console.say("Executing instructions...");
    }
}

pub struct Memory;

impl Memory {
    pub fn load(&self, position: u64, data: &str, console: &mut Console) {
        console.say(format!(
            "Loading data {} into position {}...",
            data, position
        ));
    }
}

pub struct HardDrive;

impl HardDrive {
    pub fn read(&self, lba: u64, size: u64) -> String {
        format!("Data from sector {} (size {})", lba, size)
    }
}

/// Ẩn CPU, Memory và HardDrive sau một lời gọi
pub struct ComputerFacade {
    cpu: Cpu,
    memory: Memory,
    hard_drive: HardDrive,
}

impl Default for ComputerFacade {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputerFacade {
    const BOOT_ADDRESS: u64 = 0;
    const BOOT_SECTOR: u64 = 0;
    const BOOT_SECTOR_SIZE: u64 = 100;

    pub fn new() -> Self {
        Self {
            cpu: Cpu,
            memory: Memory,
            hard_drive: HardDrive,
        }
    }

    pub fn start_computer(&self, console: &mut Console) {
        console.say("Starting computer...");
        self.cpu.freeze(console);
        let data = self
            .hard_drive
            .read(Self::BOOT_SECTOR, Self::BOOT_SECTOR_SIZE);
        self.memory.load(Self::BOOT_ADDRESS, &data, console);
        self.cpu.jump(Self::BOOT_ADDRESS, console);
        self.cpu.execute(console);
    }
}

pub struct FacadeLesson;

impl Lesson for FacadeLesson {
    fn id(&self) -> &'static str {
        "facade"
    }

    fn title(&self) -> &'static str {
        "Facade Pattern"
    }

    fn topic(&self) -> Topic {
        Topic::Structural
    }

    fn summary(&self) -> &'static str {
        "A simple interface to a complex subsystem"
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        let computer = ComputerFacade::new();
        computer.start_computer(console);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hard_drive_read() {
        assert_eq!(HardDrive.read(3, 512), "Data from sector 3 (size 512)");
    }

    #[test]
    fn test_boot_sequence() {
        let mut console = Console::capture();
        ComputerFacade::new().start_computer(&mut console);
        assert_eq!(
            console.lines(),
            [
                "Starting computer...",
                "Freezing CPU...",
                "Loading data Data from sector 0 (size 100) into position 0...",
                "Jumping to 0...",
                "Executing instructions...",
            ]
        );
    }
}
