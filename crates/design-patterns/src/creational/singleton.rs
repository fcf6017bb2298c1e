//! # Singleton Pattern
//!
//! Đảm bảo chỉ có một instance. `SingleInstance` là cell thread-safe:
//! dù nhiều thread cùng gọi lần đầu, `create` chỉ chạy đúng một lần.
//!
//! Global access point dễ thành code smell, nên lesson cũng trình bày
//! cách thay thế: tạo một instance duy nhất lúc khởi động rồi inject
//! (`Arc<Settings>`) vào những service cần nó.

use lessons_core::{Console, Lesson, Result, Topic};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Cell giữ tối đa một instance của `T`
pub struct SingleInstance<T> {
    cell: OnceCell<Arc<T>>,
}

impl<T> Default for SingleInstance<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SingleInstance<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Lấy instance, tạo nếu chưa có
    pub fn get_or_create(&self, create: impl FnOnce() -> T) -> Arc<T> {
        Arc::clone(self.cell.get_or_init(|| Arc::new(create())))
    }

    pub fn get(&self) -> Option<Arc<T>> {
        self.cell.get().cloned()
    }

    pub fn is_created(&self) -> bool {
        self.cell.get().is_some()
    }
}

#[derive(Debug)]
pub struct Singleton {
    _private: (),
}

impl Singleton {
    /// Instance duy nhất trong `holder`; lần tạo đầu tiên in ra thông báo
    pub fn instance(holder: &SingleInstance<Singleton>, console: &mut Console) -> Arc<Singleton> {
        holder.get_or_create(|| {
            console.say("Creating the single instance...");
            Singleton { _private: () }
        })
    }
}

/// Cấu hình dùng chung, tạo một lần lúc start-up
#[derive(Debug)]
pub struct Settings {
    pub app_name: String,
}

pub struct ReportService {
    settings: Arc<Settings>,
}

impl ReportService {
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Arc<Settings> {
        &self.settings
    }
}

pub struct BillingService {
    settings: Arc<Settings>,
}

impl BillingService {
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Arc<Settings> {
        &self.settings
    }
}

/// Lesson giữ cell của riêng nó: thông báo khởi tạo chỉ in ở lần chạy đầu
pub struct SingletonLesson {
    holder: SingleInstance<Singleton>,
}

impl Default for SingletonLesson {
    fn default() -> Self {
        Self::new()
    }
}

impl SingletonLesson {
    pub fn new() -> Self {
        Self {
            holder: SingleInstance::new(),
        }
    }
}

impl Lesson for SingletonLesson {
    fn id(&self) -> &'static str {
        "singleton"
    }

    fn title(&self) -> &'static str {
        "Singleton Pattern"
    }

    fn topic(&self) -> Topic {
        Topic::Creational
    }

    fn summary(&self) -> &'static str {
        "One instance with a single access point, or better: inject it"
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        let s1 = Singleton::instance(&self.holder, console);
        let s2 = Singleton::instance(&self.holder, console);
        console.say(Arc::ptr_eq(&s1, &s2));

        // Dependency injection thay cho global access point
        let settings = Arc::new(Settings {
            app_name: "lessons".to_string(),
        });
        let reports = ReportService::new(Arc::clone(&settings));
        let billing = BillingService::new(settings);
        console.say(format!(
            "Injected settings shared: {}",
            Arc::ptr_eq(reports.settings(), billing.settings())
        ));
        Ok(())
    }
}
