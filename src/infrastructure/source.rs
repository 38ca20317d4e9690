//! Reading export files from disk

use crate::error::{Result, ValidateError};
use std::fs;
use std::path::{Path, PathBuf};

/// An export file on disk, resolved against a base directory
#[derive(Debug, Clone)]
pub struct DocumentSource {
    path: PathBuf,
}

impl DocumentSource {
    /// Resolve `path` against the current working directory
    pub fn resolve(path: &Path) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::resolve_in(&cwd, path))
    }

    /// Resolve `path` against `base`; absolute paths are kept as they are
    pub fn resolve_in(base: &Path, path: &Path) -> Self {
        DocumentSource {
            path: base.join(path),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file as UTF-8 text
    pub fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|source| ValidateError::Read {
            path: self.path.clone(),
            source,
        })
    }
}
