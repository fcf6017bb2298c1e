//! Error types cho lessons

use thiserror::Error;

/// Lỗi dùng chung cho toàn bộ lesson crates
#[derive(Error, Debug)]
pub enum LessonError {
    #[error("Unknown lesson: {0}")]
    UnknownLesson(String),

    #[error("Unknown topic: {0}")]
    UnknownTopic(String),

    #[error("Unknown shape: {0}")]
    UnknownShape(String),

    #[error("Missing email")]
    MissingEmail,

    #[error("{0} can't fly!")]
    CannotFly(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: i64, available: i64 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias sử dụng LessonError
pub type Result<T> = std::result::Result<T, LessonError>;

impl LessonError {
    /// Kiểm tra có phải lỗi tra cứu (lesson/topic/shape không tồn tại)
    pub fn is_lookup_error(&self) -> bool {
        matches!(
            self,
            LessonError::UnknownLesson(_) | LessonError::UnknownTopic(_) | LessonError::UnknownShape(_)
        )
    }
}
