//! # SOLID Principles
//!
//! S - Single Responsibility → One type, one purpose.
//! O - Open/Closed → Extend behaviour without modifying existing code.
//! L - Liskov Substitution → Implementations must behave like their abstraction.
//! I - Interface Segregation → Smaller, focused traits are better.
//! D - Dependency Inversion → Depend on abstractions, not concrete types.
//!
//! Mỗi module có `before` (vi phạm nguyên tắc) và phần chính (đã sửa).

pub mod dependency_inversion;
pub mod interface_segregation;
pub mod liskov_substitution;
pub mod open_closed;
pub mod single_responsibility;

use lessons_core::{AppConfig, Lesson};

pub fn lessons(config: &AppConfig) -> Vec<Box<dyn Lesson>> {
    let show_bad = config.show_bad;
    vec![
        Box::new(single_responsibility::SingleResponsibilityLesson { show_bad }),
        Box::new(open_closed::OpenClosedLesson { show_bad }),
        Box::new(liskov_substitution::LiskovSubstitutionLesson { show_bad }),
        Box::new(interface_segregation::InterfaceSegregationLesson { show_bad }),
        Box::new(dependency_inversion::DependencyInversionLesson { show_bad }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use lessons_core::{Console, Topic};

    #[test]
    fn test_good_halves_only() {
        let config = AppConfig {
            show_bad: false,
            ..AppConfig::quiet()
        };
        let lessons = lessons(&config);
        assert_eq!(lessons.len(), 5);

        let mut console = Console::capture();
        for lesson in &lessons {
            assert_eq!(lesson.topic(), Topic::Solid);
            lesson.run(&mut console).unwrap();
        }
        assert!(console.lines().iter().all(|line| !line.starts_with('❌')));
    }
}
