//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::Cli;
pub use crate::domain::OutputFormat;
pub use output::{format_failure, format_success};
