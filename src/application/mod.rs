//! Application layer - Use cases and orchestration

pub mod validate;

pub use validate::{ValidateService, ValidationReport};
