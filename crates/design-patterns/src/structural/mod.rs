//! Structural patterns

pub mod adapter;
pub mod decorator;
pub mod facade;
pub mod proxy;
