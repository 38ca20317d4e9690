//! Configuration management

use crate::domain::{OutputFormat, UnknownKeys};
use crate::error::{Result, ValidateError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File looked up in the working directory when no `--config` is given
pub const CONFIG_FILE_NAME: &str = ".omata-validate.toml";

/// Export validated when no file argument is given
pub const DEFAULT_FILE: &str = "OMATA-NOTES  Year 5  Day 2 (Week 209).json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub default_file: String,
    pub unknown_keys: UnknownKeys,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_file: DEFAULT_FILE.to_string(),
            unknown_keys: UnknownKeys::default(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Load config from an explicit file, which must exist
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            ValidateError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::parse(&contents)
            .map_err(|e| ValidateError::Config(format!("{} in {}", e, path.display())))
    }

    /// Load `.omata-validate.toml` from the given directory, falling back
    /// to defaults when it does not exist
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE_NAME);

        match fs::read_to_string(&config_path) {
            Ok(contents) => Self::parse(&contents).map_err(|e| {
                ValidateError::Config(format!("{} in {}", e, config_path.display()))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %config_path.display(), "no config file, using defaults");
                Ok(Config::default())
            }
            Err(e) => Err(ValidateError::Io(e)),
        }
    }

    /// Explicit file if given, otherwise the working directory's config
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => Self::load_from_dir(&std::env::current_dir()?),
        }
    }

    fn parse(contents: &str) -> std::result::Result<Self, String> {
        toml::from_str(contents).map_err(|e| format!("Failed to parse config: {}", e.message()))
    }
}
