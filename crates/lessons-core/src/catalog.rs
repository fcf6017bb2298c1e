//! Catalog - registry chứa mọi lesson theo thứ tự đăng ký

use crate::console::Console;
use crate::error::{LessonError, Result};
use crate::lesson::{Lesson, LessonInfo, Topic};

/// Registry cho lessons
///
/// Lessons giữ nguyên thứ tự đăng ký; `run_all` chạy theo đúng thứ tự đó.
/// Đăng ký trùng id sẽ thay thế lesson cũ tại vị trí cũ.
#[derive(Default)]
pub struct Catalog {
    lessons: Vec<Box<dyn Lesson>>,
}

impl Catalog {
    /// Tạo catalog rỗng
    pub fn new() -> Self {
        Self::default()
    }

    /// Đăng ký một lesson
    pub fn register(&mut self, lesson: Box<dyn Lesson>) {
        match self.lessons.iter().position(|l| l.id() == lesson.id()) {
            Some(index) => {
                log::warn!("Lesson '{}' registered twice, replacing", lesson.id());
                self.lessons[index] = lesson;
            }
            None => self.lessons.push(lesson),
        }
    }

    /// Đăng ký nhiều lessons
    pub fn register_all(&mut self, lessons: impl IntoIterator<Item = Box<dyn Lesson>>) {
        for lesson in lessons {
            self.register(lesson);
        }
    }

    /// Tìm lesson theo id
    pub fn get(&self, id: &str) -> Result<&dyn Lesson> {
        self.lessons
            .iter()
            .find(|l| l.id() == id)
            .map(|l| l.as_ref())
            .ok_or_else(|| LessonError::UnknownLesson(id.to_string()))
    }

    /// Metadata của mọi lesson, lọc theo topic nếu có
    pub fn list(&self, topic: Option<Topic>) -> Vec<LessonInfo> {
        self.lessons
            .iter()
            .filter(|l| topic.map_or(true, |t| l.topic() == t))
            .map(|l| l.info())
            .collect()
    }

    /// Chạy một lesson theo id
    pub fn run(&self, id: &str, console: &mut Console) -> Result<()> {
        let lesson = self.get(id)?;
        log::debug!("Running lesson '{}'", lesson.id());
        lesson.run(console)?;
        log::debug!("Lesson '{}' finished", lesson.id());
        Ok(())
    }

    /// Chạy tất cả lessons (hoặc của một topic), mỗi lesson có header riêng
    pub fn run_all(&self, topic: Option<Topic>, console: &mut Console) -> Result<usize> {
        let mut count = 0;
        for lesson in self
            .lessons
            .iter()
            .filter(|l| topic.map_or(true, |t| l.topic() == t))
        {
            if count > 0 {
                console.blank();
            }
            console.say(format!("=== {} ===", lesson.title()));
            self.run(lesson.id(), console)?;
            count += 1;
        }
        Ok(count)
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}
