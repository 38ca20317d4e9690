//! Typed diary export document
//!
//! These types are only ever built from a value that already passed the
//! diary schema. Numeric fields keep the original JSON number, since the
//! schema accepts any number (integer or not).

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// One line of diary prose and where it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryTextLine {
    pub text: String,
    pub line: Number,
    pub filename: String,
}

/// An embedded image spanning a range of source lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryImage {
    /// Image type as written in the source, e.g. `png`
    #[serde(rename = "type")]
    pub kind: String,
    /// Encoded image payload, usually base64
    pub image_data: String,
    pub line_start: Number,
    pub line_end: Number,
    pub size_bytes: Number,
    pub filename: String,
}

/// One dated diary entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub dateline: String,
    pub dateline_line: Number,
    pub filename: String,
    pub text: Vec<DiaryTextLine>,
    pub images: Vec<DiaryImage>,
}

/// Summary of the whole export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub num_entries: Number,
    /// First and last source line covered, `[start, end]`
    pub line_range: (Number, Number),
    pub total_images: Number,
    pub total_words: Number,
    pub total_image_bytes: Number,
    pub first_entry: Option<String>,
    pub last_entry: Option<String>,
}

/// Document root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OmataDiaryDocument {
    pub metadata: Metadata,
    pub entries: Vec<DiaryEntry>,
}

impl OmataDiaryDocument {
    pub fn image_count(&self) -> usize {
        self.entries.iter().map(|e| e.images.len()).sum()
    }

    pub fn text_line_count(&self) -> usize {
        self.entries.iter().map(|e| e.text.len()).sum()
    }
}
