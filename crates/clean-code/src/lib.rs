//! # Clean Code & Refactoring
//!
//! Biến code "chạy được" thành code "viết tốt". Mỗi module là một lesson
//! before/after:
//! - Naming
//! - Function size
//! - Comments
//! - DRY (Don't Repeat Yourself)
//! - KISS (Keep It Simple, Stupid)
//! - YAGNI (You Ain't Gonna Need It)

pub mod comments;
pub mod dry;
pub mod function_size;
pub mod kiss;
pub mod naming;
pub mod yagni;

use lessons_core::{AppConfig, Lesson};

pub use comments::{add, calculate_discount};
pub use dry::process_payment;
pub use function_size::{process_user, process_user_refactored, validate_user};
pub use kiss::{is_even, is_even_clean};
pub use naming::calculate_triangle_area;
pub use yagni::{ReportGenerator, SimpleReport};

/// Tất cả clean code lessons theo thứ tự trình bày
pub fn lessons(config: &AppConfig) -> Vec<Box<dyn Lesson>> {
    let show_bad = config.show_bad;
    vec![
        Box::new(naming::NamingLesson { show_bad }),
        Box::new(function_size::FunctionSizeLesson { show_bad }),
        Box::new(comments::CommentsLesson { show_bad }),
        Box::new(dry::DryLesson { show_bad }),
        Box::new(kiss::KissLesson { show_bad }),
        Box::new(yagni::YagniLesson { show_bad }),
    ]
}
