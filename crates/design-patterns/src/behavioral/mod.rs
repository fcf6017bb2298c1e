//! Behavioral patterns

pub mod strategy;
