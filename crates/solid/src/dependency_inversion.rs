//! # D - Dependency Inversion Principle
//!
//! Module cấp cao không phụ thuộc module cấp thấp; cả hai phụ thuộc vào
//! abstraction (`Switchable`).

use lessons_core::{Console, Lesson, Result, Topic};

/// ❌ `Switch` gắn chặt với `LightBulb`
pub mod before {
    use lessons_core::Console;

    pub struct LightBulb;

    impl LightBulb {
        pub fn turn_on(&self, console: &mut Console) {
            console.say("Light on");
        }

        pub fn turn_off(&self, console: &mut Console) {
            console.say("Light off");
        }
    }

    pub struct Switch {
        bulb: LightBulb,
    }

    impl Switch {
        pub fn new(bulb: LightBulb) -> Self {
            Self { bulb }
        }

        pub fn operate(&self, on: bool, console: &mut Console) {
            if on {
                self.bulb.turn_on(console);
            } else {
                self.bulb.turn_off(console);
            }
        }
    }
}

pub trait Switchable {
    fn turn_on(&self, console: &mut Console);
    fn turn_off(&self, console: &mut Console);
}

pub struct LightBulb;

impl Switchable for LightBulb {
    fn turn_on(&self, console: &mut Console) {
        console.say("Light on");
    }

    fn turn_off(&self, console: &mut Console) {
        console.say("Light off");
    }
}

pub struct Fan;

impl Switchable for Fan {
    fn turn_on(&self, console: &mut Console) {
        console.say("Fan on");
    }

    fn turn_off(&self, console: &mut Console) {
        console.say("Fan off");
    }
}

pub struct Switch<D: Switchable> {
    device: D,
}

impl<D: Switchable> Switch<D> {
    pub fn new(device: D) -> Self {
        Self { device }
    }

    pub fn operate(&self, on: bool, console: &mut Console) {
        if on {
            self.device.turn_on(console);
        } else {
            self.device.turn_off(console);
        }
    }
}

pub struct DependencyInversionLesson {
    pub show_bad: bool,
}

impl Lesson for DependencyInversionLesson {
    fn id(&self) -> &'static str {
        "dependency-inversion"
    }

    fn title(&self) -> &'static str {
        "D - Dependency Inversion"
    }

    fn topic(&self) -> Topic {
        Topic::Solid
    }

    fn summary(&self) -> &'static str {
        "Depend on abstractions, not concrete types"
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        if self.show_bad {
            console.say("❌ Before:");
            before::Switch::new(before::LightBulb).operate(true, console);
            console.say("✅ After:");
        }

        let bulb_switch = Switch::new(LightBulb);
        let fan_switch = Switch::new(Fan);

        bulb_switch.operate(true, console);
        fan_switch.operate(false, console);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Recorder {
        on: Cell<bool>,
    }

    impl Switchable for Recorder {
        fn turn_on(&self, _console: &mut Console) {
            self.on.set(true);
        }

        fn turn_off(&self, _console: &mut Console) {
            self.on.set(false);
        }
    }

    #[test]
    fn test_switch_works_with_any_device() {
        let switch = Switch::new(Recorder { on: Cell::new(false) });
        let mut console = Console::capture();

        switch.operate(true, &mut console);
        assert!(switch.device.on.get());
        switch.operate(false, &mut console);
        assert!(!switch.device.on.get());
    }

    #[test]
    fn test_transcript() {
        let mut console = Console::capture();
        DependencyInversionLesson { show_bad: true }
            .run(&mut console)
            .unwrap();
        assert_eq!(
            console.lines(),
            ["❌ Before:", "Light on", "✅ After:", "Light on", "Fan off"]
        );
    }
}
