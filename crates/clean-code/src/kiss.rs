//! KISS - Keep It Simple, Stupid

use lessons_core::{Console, Lesson, Result, Topic};

/// ❌ Điều kiện thừa
#[allow(clippy::needless_bool)]
pub fn is_even(num: i64) -> bool {
    if num % 2 == 0 {
        true
    } else {
        false
    }
}

pub fn is_even_clean(num: i64) -> bool {
    num % 2 == 0
}

pub struct KissLesson {
    pub show_bad: bool,
}

impl Lesson for KissLesson {
    fn id(&self) -> &'static str {
        "kiss"
    }

    fn title(&self) -> &'static str {
        "KISS"
    }

    fn topic(&self) -> Topic {
        Topic::CleanCode
    }

    fn summary(&self) -> &'static str {
        "Keep It Simple: simpler is better"
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        if self.show_bad {
            console.say("❌ Before:");
            console.say(format!("is_even(4) = {}", is_even(4)));
            console.say("✅ After:");
        }

        console.say(format!("is_even_clean(4) = {}", is_even_clean(4)));
        console.say(format!("is_even_clean(7) = {}", is_even_clean(7)));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_versions_agree() {
        for num in -10..=10 {
            assert_eq!(is_even(num), is_even_clean(num), "num = {}", num);
        }
        assert!(is_even_clean(0));
        assert!(!is_even_clean(-3));
    }
}
