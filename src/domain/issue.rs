//! Validation issues and the paths that locate them inside a document

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// One step from a parent value to a child value
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Location of a value inside a document, from the root down
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct IssuePath {
    segments: Vec<PathSegment>,
}

impl IssuePath {
    pub fn root() -> Self {
        IssuePath::default()
    }

    pub fn new(segments: Vec<PathSegment>) -> Self {
        IssuePath { segments }
    }

    /// Return a new path with `key` appended
    pub fn key(&self, key: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Key(key.into()));
        IssuePath { segments }
    }

    /// Return a new path with `index` appended
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        IssuePath { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl fmt::Display for IssuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "(root)");
        }

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => write!(f, "{}", key)?,
                PathSegment::Key(key) => write!(f, ".{}", key)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

impl Serialize for IssuePath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A single violated constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub path: IssuePath,
    /// Rendered constraint, e.g. `number` or `string | null`
    pub expected: String,
    /// Description of what was found instead, e.g. `string` or `missing`
    pub received: String,
}

impl Issue {
    pub fn new(path: IssuePath, expected: impl Into<String>, received: impl Into<String>) -> Self {
        Issue {
            path,
            expected: expected.into(),
            received: received.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Expected {}, received {}",
            self.path, self.expected, self.received
        )
    }
}

/// Every issue found while checking a document against the diary schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render_issues(.issues))]
pub struct SchemaValidationError {
    issues: Vec<Issue>,
}

impl SchemaValidationError {
    /// Build an error from a list of issues, sorted by path.
    ///
    /// Returns `None` when `issues` is empty: an error always carries at
    /// least one issue.
    pub fn from_issues(mut issues: Vec<Issue>) -> Option<Self> {
        if issues.is_empty() {
            return None;
        }
        issues.sort_by(|a, b| a.path.cmp(&b.path));
        issues.dedup();
        Some(SchemaValidationError { issues })
    }

    pub fn single(issue: Issue) -> Self {
        SchemaValidationError {
            issues: vec![issue],
        }
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Look up the first issue reported at exactly `path`
    pub fn issue_at(&self, path: &str) -> Option<&Issue> {
        self.issues.iter().find(|i| i.path.to_string() == path)
    }
}

fn render_issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  • {}", issue))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path_display() {
        assert_eq!(IssuePath::root().to_string(), "(root)");
    }

    #[test]
    fn test_nested_path_display() {
        let path = IssuePath::root()
            .key("entries")
            .index(0)
            .key("images")
            .index(3)
            .key("size_bytes");
        assert_eq!(path.to_string(), "entries[0].images[3].size_bytes");
    }

    #[test]
    fn test_issue_display() {
        let issue = Issue::new(
            IssuePath::root().key("metadata").key("num_entries"),
            "number",
            "string",
        );
        assert_eq!(
            issue.to_string(),
            "metadata.num_entries: Expected number, received string"
        );
    }

    #[test]
    fn test_empty_issue_list_is_not_an_error() {
        assert!(SchemaValidationError::from_issues(vec![]).is_none());
    }

    #[test]
    fn test_issues_sorted_by_path() {
        let err = SchemaValidationError::from_issues(vec![
            Issue::new(IssuePath::root().key("metadata"), "object", "missing"),
            Issue::new(IssuePath::root().key("entries"), "array", "null"),
        ])
        .unwrap();

        let paths: Vec<String> = err.issues().iter().map(|i| i.path.to_string()).collect();
        assert_eq!(paths, vec!["entries", "metadata"]);
    }

    #[test]
    fn test_error_lists_every_issue() {
        let err = SchemaValidationError::from_issues(vec![
            Issue::new(IssuePath::root().key("a"), "number", "string"),
            Issue::new(IssuePath::root().key("b"), "string", "missing"),
        ])
        .unwrap();

        let msg = err.to_string();
        assert!(msg.contains("a: Expected number, received string"));
        assert!(msg.contains("b: Expected string, received missing"));
        assert_eq!(msg.lines().count(), 2);
    }

    #[test]
    fn test_issue_serializes_path_as_string() {
        let issue = Issue::new(IssuePath::root().key("entries").index(1), "object", "null");
        let value = serde_json::to_value(&issue).unwrap();
        assert_eq!(value["path"], "entries[1]");
        assert_eq!(value["expected"], "object");
        assert_eq!(value["received"], "null");
    }
}
