//! Extracted sentence spans

use serde::{Deserialize, Serialize};
use std::fmt;

/// A sentence cut from a document
///
/// `content` has surrounding whitespace trimmed. `line_number` is the
/// 1-based line of its first character and the offsets are byte positions
/// of the trimmed span in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sentence {
    /// Sentence text
    pub content: String,
    /// 1-based line of the first character
    pub line_number: usize,
    /// Byte offset of the first character
    pub start_offset: usize,
    /// Byte offset one past the last character
    pub end_offset: usize,
    /// Name of the document the sentence came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Sentence {
    /// Number of characters in the sentence
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}
