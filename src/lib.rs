//! omata-validate - Diary export schema checker
//!
//! Validates Omata diary exports (JSON) against the structural schema of an
//! `OmataDiaryDocument` and reports every violated field with its path.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ValidateError;
