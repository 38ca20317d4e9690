//! Validate export use case

use crate::domain::{DiarySchema, OmataDiaryDocument, UnknownKeys};
use crate::error::{Result, ValidateError};
use crate::infrastructure::DocumentSource;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub path: PathBuf,
    pub document: OmataDiaryDocument,
}

/// Service for checking diary exports against the schema
pub struct ValidateService {
    schema: DiarySchema,
}

impl ValidateService {
    /// Create a new validate service
    pub fn new(unknown_keys: UnknownKeys) -> Result<Self> {
        Ok(ValidateService {
            schema: DiarySchema::new(unknown_keys)?,
        })
    }

    pub fn schema(&self) -> &DiarySchema {
        &self.schema
    }

    /// Read, parse and validate the file at `path`, resolved against the
    /// current directory
    pub fn validate_file(&self, path: &Path) -> Result<ValidationReport> {
        let source = DocumentSource::resolve(path)?;
        self.validate_source(&source)
    }

    pub fn validate_source(&self, source: &DocumentSource) -> Result<ValidationReport> {
        tracing::debug!(path = %source.path().display(), "reading export");
        let text = source.read()?;

        tracing::debug!(bytes = text.len(), "parsing export");
        let value: Value = serde_json::from_str(&text).map_err(|e| ValidateError::Parse {
            path: source.path().to_path_buf(),
            source: e,
        })?;

        let document = self.validate_value(&value)?;
        tracing::info!(
            path = %source.path().display(),
            entries = document.entries.len(),
            text_lines = document.text_line_count(),
            images = document.image_count(),
            "export conforms to schema"
        );

        Ok(ValidationReport {
            path: source.path().to_path_buf(),
            document,
        })
    }

    /// Parse and validate JSON text that did not come from a file
    pub fn validate_str(&self, text: &str) -> Result<OmataDiaryDocument> {
        let value: Value = serde_json::from_str(text).map_err(|e| ValidateError::Parse {
            path: PathBuf::from("<input>"),
            source: e,
        })?;
        self.validate_value(&value)
    }

    pub fn validate_value(&self, value: &Value) -> Result<OmataDiaryDocument> {
        self.schema.validate(value).map_err(|err| {
            tracing::info!(issues = err.issues().len(), "export does not conform to schema");
            ValidateError::Validation(err)
        })
    }
}
