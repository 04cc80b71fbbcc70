//! Enclosure (bracket/quote) mapping with O(1) lookup
//!
//! Handles paired delimiters with support for symmetric quotes.

use super::terminator::TerminatorSet;
use crate::symbol::{SymbolCatalog, SymbolType};
use smallvec::SmallVec;
use std::collections::HashMap;

/// Information about an enclosure character
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EnclosureInfo {
    /// Index of the pair this character belongs to
    pub type_id: u8,
    /// +1 for opening, -1 for closing, 0 for symmetric "unknown" mark
    pub delta: i8,
    /// true if identical char can mean both open/close (straight quote)
    pub symmetric: bool,
}

impl EnclosureInfo {
    /// Whether the character can close an enclosure
    pub fn can_close(&self) -> bool {
        self.symmetric || self.delta < 0
    }
}

/// Enclosure character mapping table
#[derive(Debug, Clone, Default)]
pub struct EnclosureTable {
    map: HashMap<char, EnclosureInfo>,
}

impl EnclosureTable {
    /// Create from `(open, close)` pairs; identical characters are symmetric
    pub fn new<I: IntoIterator<Item = (char, char)>>(pairs: I) -> Self {
        let mut map = HashMap::new();

        for (type_id, (open, close)) in pairs.into_iter().take(u8::MAX as usize).enumerate() {
            let type_id = type_id as u8;
            if open == close {
                map.insert(
                    open,
                    EnclosureInfo {
                        type_id,
                        delta: 0, // Context-dependent
                        symmetric: true,
                    },
                );
            } else {
                map.insert(
                    open,
                    EnclosureInfo {
                        type_id,
                        delta: 1,
                        symmetric: false,
                    },
                );
                map.insert(
                    close,
                    EnclosureInfo {
                        type_id,
                        delta: -1,
                        symmetric: false,
                    },
                );
            }
        }

        Self { map }
    }

    /// Collect the bracket and quotation pairs a catalog configures
    ///
    /// A pair is only used when both its opening and closing roles are
    /// present. Pairs that reuse a terminator character are skipped so the
    /// terminator keeps ending sentences.
    pub fn from_catalog(catalog: &SymbolCatalog, terminators: &TerminatorSet) -> Self {
        Self::new(SymbolType::PAIRS.iter().filter_map(|&(open, close)| {
            let left = catalog.symbol(open)?.value();
            let right = catalog.symbol(close)?.value();
            if terminators.is_terminator(left) || terminators.is_terminator(right) {
                tracing::warn!(
                    open = %open,
                    close = %close,
                    "enclosure pair \"{left}{right}\" overlaps a terminator and is ignored"
                );
                return None;
            }
            Some((left, right))
        }))
    }

    /// Look up enclosure info for character
    #[inline]
    pub fn get(&self, ch: char) -> Option<EnclosureInfo> {
        self.map.get(&ch).copied()
    }

    /// Whether `ch` can close an enclosure
    #[inline]
    pub fn is_closing(&self, ch: char) -> bool {
        self.get(ch).is_some_and(|info| info.can_close())
    }
}

/// Stack of currently open enclosures
#[derive(Debug, Clone, Default)]
pub struct EnclosureTracker {
    open: SmallVec<[u8; 8]>,
}

impl EnclosureTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an enclosure character
    ///
    /// Closing characters without a matching opener are ignored. Closing a
    /// pair also closes anything opened inside it. Symmetric quotes close
    /// when their pair is open and open otherwise.
    pub fn apply(&mut self, info: EnclosureInfo) {
        let is_open = self.open.contains(&info.type_id);
        let closes = if info.symmetric { is_open } else { info.delta < 0 };

        if closes {
            if is_open {
                while let Some(type_id) = self.open.pop() {
                    if type_id == info.type_id {
                        break;
                    }
                }
            }
        } else {
            self.open.push(info.type_id);
        }
    }

    /// Whether the pair `type_id` is currently open
    pub fn is_open_pair(&self, type_id: u8) -> bool {
        self.open.contains(&type_id)
    }

    /// Whether any enclosure is open
    pub fn is_open(&self) -> bool {
        !self.open.is_empty()
    }

    /// Current nesting depth
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Close everything
    pub fn reset(&mut self) {
        self.open.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asymmetric_pairs() {
        let table = EnclosureTable::new([('(', ')'), ('[', ']'), ('{', '}')]);

        // Opening brackets
        let info = table.get('(').unwrap();
        assert_eq!(info.type_id, 0);
        assert_eq!(info.delta, 1);
        assert!(!info.symmetric);

        // Closing brackets
        let info = table.get(')').unwrap();
        assert_eq!(info.type_id, 0);
        assert_eq!(info.delta, -1);
        assert!(!info.symmetric);
        assert!(table.is_closing(')'));
        assert!(!table.is_closing('('));
    }

    #[test]
    fn test_symmetric_quotes() {
        let table = EnclosureTable::new([('"', '"'), ('\'', '\'')]);

        let info = table.get('"').unwrap();
        assert_eq!(info.type_id, 0);
        assert_eq!(info.delta, 0); // Context-dependent
        assert!(info.symmetric);
        assert!(table.is_closing('"'));
    }

    #[test]
    fn test_from_japanese_catalog() {
        let catalog = SymbolCatalog::resolve("ja", None, []);
        let terminators = TerminatorSet::from_catalog(&catalog);
        let table = EnclosureTable::from_catalog(&catalog, &terminators);
        assert_eq!(table.get('「').unwrap().delta, 1);
        assert_eq!(table.get('」').unwrap().delta, -1);
        assert_eq!(table.get('“').unwrap().delta, 1);
        assert!(table.get('"').is_none());
    }

    #[test]
    fn test_pair_sharing_terminator_is_skipped() {
        use crate::symbol::Symbol;

        let catalog = SymbolCatalog::resolve(
            "en",
            None,
            [Symbol::new(SymbolType::RightParenthesis, '!', "")],
        );
        let terminators = TerminatorSet::from_catalog(&catalog);
        let table = EnclosureTable::from_catalog(&catalog, &terminators);
        assert!(table.get('!').is_none());
        assert!(table.get('(').is_none());
        assert_eq!(table.get('[').unwrap().delta, 1);
    }

    #[test]
    fn test_tracker_open_pair() {
        let table = EnclosureTable::new([('(', ')'), ('\'', '\'')]);
        let mut tracker = EnclosureTracker::new();

        tracker.apply(table.get('\'').unwrap());
        assert!(tracker.is_open_pair(1));
        assert!(!tracker.is_open_pair(0));
    }

    #[test]
    fn test_tracker_nesting() {
        let table = EnclosureTable::new([('(', ')'), ('"', '"')]);
        let mut tracker = EnclosureTracker::new();

        tracker.apply(table.get('(').unwrap());
        tracker.apply(table.get('"').unwrap());
        assert_eq!(tracker.depth(), 2);

        tracker.apply(table.get('"').unwrap());
        assert_eq!(tracker.depth(), 1);

        tracker.apply(table.get(')').unwrap());
        assert!(!tracker.is_open());
    }

    #[test]
    fn test_tracker_ignores_unmatched_close() {
        let table = EnclosureTable::new([('(', ')')]);
        let mut tracker = EnclosureTracker::new();

        tracker.apply(table.get(')').unwrap());
        assert!(!tracker.is_open());
    }

    #[test]
    fn test_tracker_close_pops_inner() {
        let table = EnclosureTable::new([('(', ')'), ('[', ']')]);
        let mut tracker = EnclosureTracker::new();

        tracker.apply(table.get('(').unwrap());
        tracker.apply(table.get('[').unwrap());
        tracker.apply(table.get(')').unwrap());
        assert!(!tracker.is_open());
    }
}
