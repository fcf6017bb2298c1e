//! # Design Patterns
//!
//! Các pattern kinh điển (Gang of Four), viết lại bằng trait:
//! - Creational: Builder, Factory Method, Singleton
//! - Structural: Adapter, Decorator, Facade, Proxy
//! - Behavioral: Strategy

pub mod behavioral;
pub mod creational;
pub mod structural;

use lessons_core::{AppConfig, Lesson};

/// Tất cả pattern lessons: creational → structural → behavioral
pub fn lessons(config: &AppConfig) -> Vec<Box<dyn Lesson>> {
    vec![
        Box::new(creational::builder::BuilderLesson),
        Box::new(creational::factory_method::FactoryMethodLesson),
        Box::new(creational::singleton::SingletonLesson::new()),
        Box::new(structural::adapter::AdapterLesson),
        Box::new(structural::decorator::DecoratorLesson),
        Box::new(structural::facade::FacadeLesson),
        Box::new(structural::proxy::ProxyLesson::new(
            config.proxy_load_delay(),
            config.proxy_capacity,
        )),
        Box::new(behavioral::strategy::StrategyLesson),
    ]
}
