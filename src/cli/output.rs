//! Output formatting utilities

use crate::domain::{OutputFormat, SchemaValidationError};
use serde_json::json;
use std::path::Path;

pub const SUCCESS_MESSAGE: &str = "✅ JSON conforms to schema.";
pub const FAILURE_MESSAGE: &str = "❌ JSON does NOT conform to schema.";

/// Format the report for a file that passed validation
pub fn format_success(format: OutputFormat, file: &Path) -> String {
    match format {
        OutputFormat::Text => SUCCESS_MESSAGE.to_string(),
        OutputFormat::Json => format!(
            "{:#}",
            json!({
                "file": file.display().to_string(),
                "valid": true,
                "issues": [],
            })
        ),
    }
}

/// Format the report for a file that failed validation
pub fn format_failure(format: OutputFormat, file: &Path, error: &SchemaValidationError) -> String {
    match format {
        OutputFormat::Text => format!("{}\n{}", FAILURE_MESSAGE, error),
        OutputFormat::Json => format!(
            "{:#}",
            json!({
                "file": file.display().to_string(),
                "valid": false,
                "issues": error.issues(),
            })
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Issue, IssuePath};

    fn error() -> SchemaValidationError {
        SchemaValidationError::from_issues(vec![
            Issue::new(
                IssuePath::root().key("metadata").key("num_entries"),
                "number",
                "string",
            ),
            Issue::new(
                IssuePath::root()
                    .key("entries")
                    .index(0)
                    .key("images")
                    .index(0)
                    .key("size_bytes"),
                "number",
                "missing",
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_text_success() {
        assert_eq!(
            format_success(OutputFormat::Text, Path::new("diary.json")),
            "✅ JSON conforms to schema."
        );
    }

    #[test]
    fn test_text_failure() {
        let output = format_failure(OutputFormat::Text, Path::new("diary.json"), &error());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "❌ JSON does NOT conform to schema.");
        assert_eq!(
            lines[1],
            "  • entries[0].images[0].size_bytes: Expected number, received missing"
        );
        assert_eq!(
            lines[2],
            "  • metadata.num_entries: Expected number, received string"
        );
    }

    #[test]
    fn test_json_success() {
        let output = format_success(OutputFormat::Json, Path::new("diary.json"));
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["valid"], true);
        assert_eq!(value["file"], "diary.json");
        assert_eq!(value["issues"], json!([]));
    }

    #[test]
    fn test_json_failure() {
        let output = format_failure(OutputFormat::Json, Path::new("diary.json"), &error());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["valid"], false);
        assert_eq!(value["issues"].as_array().unwrap().len(), 2);
        assert_eq!(value["issues"][1]["path"], "metadata.num_entries");
        assert_eq!(value["issues"][1]["expected"], "number");
        assert_eq!(value["issues"][1]["received"], "string");
    }
}
