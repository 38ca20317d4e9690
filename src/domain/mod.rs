//! Domain layer - Diary document model and its schema

pub mod document;
pub mod issue;
pub mod policy;
pub mod schema;

pub use document::{DiaryEntry, DiaryImage, DiaryTextLine, Metadata, OmataDiaryDocument};
pub use issue::{Issue, IssuePath, PathSegment, SchemaValidationError};
pub use policy::{OutputFormat, UnknownKeys};
pub use schema::DiarySchema;
