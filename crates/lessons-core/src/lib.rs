//! Lessons core - nền tảng chung cho mọi lesson crate
//!
//! Crate này chứa `Lesson` trait, `Console` sink, `Catalog` registry,
//! error types và cấu hình dùng chung.

pub mod catalog;
pub mod config;
pub mod console;
pub mod error;
pub mod lesson;

pub use catalog::Catalog;
pub use config::AppConfig;
pub use console::Console;
pub use error::{LessonError, Result};
pub use lesson::{Lesson, LessonInfo, Topic};
