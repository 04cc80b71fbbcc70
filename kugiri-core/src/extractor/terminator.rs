//! Terminator character detection with O(1) lookup
//!
//! Optimized for hot-path performance with ASCII fast-path.

use crate::symbol::{SymbolCatalog, SymbolType};
use smallvec::SmallVec;
use std::collections::HashSet;

/// Characters that end a sentence
#[derive(Debug, Clone)]
pub struct TerminatorSet {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// HashSet for non-ASCII terminators (full-width punctuation)
    non_ascii: HashSet<char>,
    /// Registered characters in insertion order
    chars: SmallVec<[char; 3]>,
}

impl TerminatorSet {
    /// Create from a list of terminator characters
    pub fn new<I: IntoIterator<Item = char>>(terminators: I) -> Self {
        let mut set = Self {
            ascii_table: [false; 128],
            non_ascii: HashSet::new(),
            chars: SmallVec::new(),
        };

        for ch in terminators {
            if set.is_terminator(ch) {
                continue;
            }
            if ch.is_ascii() {
                set.ascii_table[ch as usize] = true;
            } else {
                set.non_ascii.insert(ch);
            }
            set.chars.push(ch);
        }

        set
    }

    /// Resolve FULL_STOP, QUESTION_MARK and EXCLAMATION_MARK from a catalog
    ///
    /// Roles the catalog does not configure fall back to the default table,
    /// so `.`, `?` and `!` are used at the very least.
    pub fn from_catalog(catalog: &SymbolCatalog) -> Self {
        let set = Self::new(
            SymbolType::TERMINATORS
                .iter()
                .map(|&role| catalog.value_or_default(role)),
        );
        for ch in &set.chars {
            tracing::debug!("\"{ch}\" is added as an end of sentence character");
        }
        set
    }

    /// Check if character is a terminator - hot path
    #[inline]
    pub fn is_terminator(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }

    /// Registered terminator characters
    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbol;

    #[test]
    fn test_terminator_lookup() {
        let table = TerminatorSet::new(['.', '!', '?', '。', '！', '？']);

        // ASCII fast path
        assert!(table.is_terminator('.'));
        assert!(table.is_terminator('!'));
        assert!(table.is_terminator('?'));
        assert!(!table.is_terminator(','));

        // Non-ASCII
        assert!(table.is_terminator('。'));
        assert!(table.is_terminator('！'));
        assert!(table.is_terminator('？'));
        assert!(!table.is_terminator('、'));
    }

    #[test]
    fn test_from_japanese_catalog() {
        let catalog = SymbolCatalog::resolve("ja", None, []);
        let set = TerminatorSet::from_catalog(&catalog);
        assert_eq!(set.chars(), &['。', '？', '！']);
        assert!(!set.is_terminator('.'));
    }

    #[test]
    fn test_missing_roles_fall_back_to_defaults() {
        let catalog =
            SymbolCatalog::from_symbols("xx", None, [Symbol::new(SymbolType::FullStop, '।', "")]);
        let set = TerminatorSet::from_catalog(&catalog);
        assert_eq!(set.chars(), &['।', '?', '!']);
    }

    #[test]
    fn test_duplicates_registered_once() {
        let set = TerminatorSet::new(['.', '.', '!']);
        assert_eq!(set.chars(), &['.', '!']);
    }
}
