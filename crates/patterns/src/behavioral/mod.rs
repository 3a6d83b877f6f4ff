//! Behavioral patterns

pub mod chain_of_responsibility;
pub mod command;
pub mod strategy;
pub mod template_method;
