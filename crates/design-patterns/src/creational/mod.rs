//! Creational patterns

pub mod builder;
pub mod factory_method;
pub mod singleton;
