//! # Lesson Module
//!
//! `Lesson` trait và các metadata đi kèm.

use crate::console::Console;
use crate::error::{LessonError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Chủ đề của một lesson
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    /// Clean code & refactoring
    CleanCode,
    /// Creational design patterns
    Creational,
    /// Structural design patterns
    Structural,
    /// Behavioral design patterns
    Behavioral,
    /// Khái niệm OOP cơ bản
    Oop,
    /// SOLID principles
    Solid,
}

impl Topic {
    pub const ALL: [Topic; 6] = [
        Topic::CleanCode,
        Topic::Creational,
        Topic::Structural,
        Topic::Behavioral,
        Topic::Oop,
        Topic::Solid,
    ];

    /// Tên kebab-case
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::CleanCode => "clean-code",
            Topic::Creational => "creational",
            Topic::Structural => "structural",
            Topic::Behavioral => "behavioral",
            Topic::Oop => "oop",
            Topic::Solid => "solid",
        }
    }

    /// Creational, structural và behavioral đều là design patterns
    pub fn is_design_pattern(&self) -> bool {
        matches!(
            self,
            Topic::Creational | Topic::Structural | Topic::Behavioral
        )
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = LessonError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Topic::ALL
            .into_iter()
            .find(|topic| topic.as_str() == wanted)
            .ok_or_else(|| LessonError::UnknownTopic(s.to_string()))
    }
}

/// Metadata của lesson, dùng cho `lessons list --json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonInfo {
    pub id: String,
    pub title: String,
    pub topic: Topic,
    pub summary: String,
}

/// Một bài học before/after có transcript cố định.
///
/// `run` phải deterministic: cùng một cấu hình luôn in cùng các dòng,
/// theo cùng thứ tự.
pub trait Lesson: Send + Sync {
    /// Id kebab-case, duy nhất trong catalog
    fn id(&self) -> &'static str;

    fn title(&self) -> &'static str;

    fn topic(&self) -> Topic;

    /// Một câu tóm tắt ý chính
    fn summary(&self) -> &'static str;

    /// Chạy lesson, in transcript ra console
    fn run(&self, console: &mut Console) -> Result<()>;

    fn info(&self) -> LessonInfo {
        LessonInfo {
            id: self.id().to_string(),
            title: self.title().to_string(),
            topic: self.topic(),
            summary: self.summary().to_string(),
        }
    }
}
