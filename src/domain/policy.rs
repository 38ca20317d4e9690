//! Run policies: unknown-key handling and report format

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What to do with object keys that the schema does not declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnknownKeys {
    /// Accept unknown keys and drop them from the typed document
    #[default]
    Strip,
    /// Report every unknown key as an issue
    Reject,
}

impl UnknownKeys {
    pub fn is_strict(&self) -> bool {
        matches!(self, UnknownKeys::Reject)
    }
}

/// How a validation outcome is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// A single JSON object on stdout
    Json,
}
