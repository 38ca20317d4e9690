//! Error types for omata-validate

use crate::domain::SchemaValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for a validation run
#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("Could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON does NOT conform to schema.\n{0}")]
    Validation(#[from] SchemaValidationError),

    #[error("Schema build error: {0}")]
    SchemaBuild(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ValidateError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ValidateError::Parse { .. } => 2,
            ValidateError::Validation(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ValidateError::Read { path, source }
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                format!(
                    "File not found: {}\n\n\
                    Suggestions:\n\
                    • Paths are resolved against the current directory\n\
                    • Pass the export file as the first argument: omata-validate <JSON_FILE>\n\
                    • Set default_file in .omata-validate.toml",
                    path.display()
                )
            }
            ValidateError::Parse { source, .. } => {
                format!(
                    "{}\n\n\
                    The problem is at line {}, column {}.",
                    self,
                    source.line(),
                    source.column()
                )
            }
            ValidateError::Config(msg) if msg.contains("Failed to parse config") => {
                format!(
                    "{}\n\n\
                    Valid keys:\n\
                    default_file = \"diary.json\"\n\
                    unknown_keys = \"strip\"   # or \"reject\"\n\
                    format = \"text\"          # or \"json\"",
                    msg
                )
            }
            ValidateError::Config(msg) => msg.clone(),
            _ => self.to_string(),
        }
    }

    /// Returns the schema issues when this is a validation failure
    pub fn as_validation(&self) -> Option<&SchemaValidationError> {
        match self {
            ValidateError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type using ValidateError
pub type Result<T> = std::result::Result<T, ValidateError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Issue, IssuePath};

    fn parse_error() -> ValidateError {
        let source = serde_json::from_str::<serde_json::Value>("{\n  \"a\": ,\n}").unwrap_err();
        ValidateError::Parse {
            path: PathBuf::from("diary.json"),
            source,
        }
    }

    fn validation_error() -> ValidateError {
        let issues = vec![Issue::new(
            IssuePath::root().key("metadata").key("num_entries"),
            "number",
            "string",
        )];
        ValidateError::Validation(SchemaValidationError::from_issues(issues).unwrap())
    }

    #[test]
    fn test_exit_codes() {
        let read = ValidateError::Read {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(read.exit_code(), 1);
        assert_eq!(parse_error().exit_code(), 2);
        assert_eq!(validation_error().exit_code(), 3);
        assert_eq!(ValidateError::Config("bad".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_missing_file_suggestions() {
        let err = ValidateError::Read {
            path: PathBuf::from("/tmp/missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let msg = err.display_with_suggestions();
        assert!(msg.contains("File not found: /tmp/missing.json"));
        assert!(msg.contains("Suggestions"));
        assert!(msg.contains(".omata-validate.toml"));
    }

    #[test]
    fn test_other_read_errors_fallback() {
        let err = ValidateError::Read {
            path: PathBuf::from("locked.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.display_with_suggestions(),
            "Could not read locked.json: denied"
        );
    }

    #[test]
    fn test_parse_error_reports_location() {
        let msg = parse_error().display_with_suggestions();
        assert!(msg.starts_with("diary.json is not valid JSON"));
        assert!(msg.contains("line 2"));
    }

    #[test]
    fn test_validation_error_lists_issues() {
        let err = validation_error();
        let msg = err.to_string();
        assert!(msg.starts_with("JSON does NOT conform to schema."));
        assert!(msg.contains("metadata.num_entries: Expected number, received string"));
        assert!(err.as_validation().is_some());
    }

    #[test]
    fn test_config_parse_suggestions() {
        let err = ValidateError::Config("Failed to parse config: unknown variant `x`".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("Valid keys"));
        assert!(msg.contains("unknown_keys = \"strip\""));
        assert!(msg.contains("format = \"text\""));
    }

    #[test]
    fn test_other_config_errors_fallback() {
        let err = ValidateError::Config("Failed to read custom.toml".to_string());
        assert_eq!(err.display_with_suggestions(), "Failed to read custom.toml");
    }
}
