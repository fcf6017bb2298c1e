//! # OOP Fundamentals
//!
//! Bốn khái niệm OOP cơ bản, diễn đạt bằng struct, module privacy và trait.

pub mod class_object;
pub mod encapsulation;
pub mod inheritance;
pub mod polymorphism;

use lessons_core::{AppConfig, Lesson};

pub fn lessons(_config: &AppConfig) -> Vec<Box<dyn Lesson>> {
    vec![
        Box::new(class_object::ClassObjectLesson),
        Box::new(encapsulation::EncapsulationLesson),
        Box::new(inheritance::InheritanceLesson),
        Box::new(polymorphism::PolymorphismLesson),
    ]
}
