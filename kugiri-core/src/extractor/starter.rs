//! Sentence starters detection for boundary decision after abbreviations
//!
//! When an abbreviation such as `Inc.` is followed by a word that usually
//! opens a sentence, the abbreviation's dot also ends the sentence.

use std::collections::HashSet;

/// Words treated as sentence starters when no list is configured
pub const DEFAULT_SENTENCE_STARTERS: &[&str] = &[
    // pronouns
    "I", "He", "She", "It", "We", "They", "You",
    // determiners
    "The", "This", "That", "These", "Those", "There", "Our", "Their", "My", "His", "Her", "Its",
    // conjunctions and adverbs
    "But", "And", "So", "Yet", "However", "Then", "Next", "Meanwhile", "Also", "Still",
    "Therefore", "Thus", "Moreover", "Finally",
    // question words
    "What", "When", "Where", "Why", "How", "Who", "Which",
];

/// Case-sensitive sentence starter lookup
#[derive(Debug, Clone, Default)]
pub struct SentenceStarterSet {
    starters: HashSet<String>,
    /// Longest entry in bytes, for a quick length check
    max_length: usize,
}

impl SentenceStarterSet {
    /// Build from a list of words
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let starters: HashSet<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_string())
            .filter(|word| !word.is_empty())
            .collect();
        let max_length = starters.iter().map(String::len).max().unwrap_or(0);
        Self {
            starters,
            max_length,
        }
    }

    /// The built-in English list
    pub fn english() -> Self {
        Self::new(DEFAULT_SENTENCE_STARTERS)
    }

    /// Check if a word is a sentence starter
    pub fn is_sentence_starter(&self, word: &str) -> bool {
        word.len() <= self.max_length && self.starters.contains(word)
    }

    /// Whether the abbreviation ending right before `after_pos` also ends
    /// the sentence
    ///
    /// Requires whitespace right after the abbreviation, so `U.S.A.` style
    /// tokens never qualify, followed by a listed word.
    pub fn starts_after(&self, text: &str, after_pos: usize) -> bool {
        if self.starters.is_empty() {
            return false;
        }

        let remaining = &text[after_pos..];
        if !remaining.starts_with(char::is_whitespace) {
            return false;
        }

        let trimmed = remaining.trim_start();
        let word_end = trimmed
            .find(|c: char| !c.is_alphabetic())
            .unwrap_or(trimmed.len());

        word_end > 0 && self.is_sentence_starter(&trimmed[..word_end])
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.starters.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.starters.is_empty()
    }
}
