//! Engine configuration
//!
//! [`spec`] holds the serde types for the JSON engine specification;
//! [`validation`] checks a parsed spec and reports every problem at once.

pub mod spec;
pub mod validation;

pub use spec::EngineSpec;
pub use validation::{ValidationEngine, ValidationReport};
