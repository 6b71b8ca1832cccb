// ============================================================
// Layer 3 — Document Domain Type
// ============================================================
// A single input document: the file name it came from and
// its full UTF-8 text, read into memory in one go.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// File name (not the full path), used as the report key
    pub source: String,

    /// Raw text before normalization
    pub text: String,
}

impl Document {
    /// Create a new Document from a source name and its text.
    ///
    /// Example:
    ///   let doc = Document::new("notes.txt", "今天天气真好");
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text:   text.into(),
        }
    }

    /// Number of characters (not bytes) in the raw text
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
