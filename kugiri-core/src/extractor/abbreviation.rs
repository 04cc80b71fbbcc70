//! Abbreviations whose final dot does not end a sentence

use std::collections::HashSet;

/// Abbreviations recognised when no list is configured
pub const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "Mr.", "Mrs.", "Ms.", "Dr.", "Prof.", "Sr.", "Jr.", "St.", "Mt.", "vs.", "cf.", "e.g.",
    "i.e.", "a.m.", "p.m.", "Inc.", "Ltd.", "Co.", "Corp.", "Fig.", "Eq.", "approx.",
];

/// Tokens longer than this are never abbreviations
const MAX_TOKEN_CHARS: usize = 32;

/// Case-insensitive abbreviation lookup
///
/// Entries are stored without their trailing dot, so `"e.g."` and `"e.g"`
/// configure the same abbreviation.
#[derive(Debug, Clone, Default)]
pub struct AbbreviationSet {
    entries: HashSet<String>,
}

impl AbbreviationSet {
    /// Build from a list of abbreviations
    pub fn new<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = abbreviations
            .into_iter()
            .map(|abbr| normalize(abbr.as_ref()))
            .filter(|abbr| !abbr.is_empty())
            .collect();
        Self { entries }
    }

    /// The built-in English list
    pub fn english() -> Self {
        Self::new(DEFAULT_ABBREVIATIONS)
    }

    /// Whether the dot at `dot_pos` belongs to a listed abbreviation
    ///
    /// The token around the dot runs from the previous whitespace (or
    /// `floor`) to the next whitespace; surrounding punctuation such as
    /// brackets or a trailing comma is ignored.
    pub fn covers(&self, text: &str, floor: usize, dot_pos: usize) -> bool {
        if self.entries.is_empty() {
            return false;
        }

        let mut token_start = dot_pos;
        for (count, (i, c)) in text[floor..dot_pos].char_indices().rev().enumerate() {
            if c.is_whitespace() {
                break;
            }
            if count >= MAX_TOKEN_CHARS {
                return false;
            }
            token_start = floor + i;
        }

        let mut token_end = dot_pos;
        for (count, (i, c)) in text[dot_pos..].char_indices().enumerate() {
            if c.is_whitespace() {
                break;
            }
            if count >= MAX_TOKEN_CHARS {
                return false;
            }
            token_end = dot_pos + i + c.len_utf8();
        }

        self.entries.contains(&normalize(&text[token_start..token_end]))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize(token: &str) -> String {
    token
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .trim_end_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot_positions(text: &str) -> Vec<usize> {
        text.match_indices('.').map(|(i, _)| i).collect()
    }

    #[test]
    fn test_title_abbreviation() {
        let set = AbbreviationSet::english();
        let text = "Ask Dr. Smith.";
        let dots = dot_positions(text);
        assert!(set.covers(text, 0, dots[0]));
        assert!(!set.covers(text, 0, dots[1]));
    }

    #[test]
    fn test_multi_dot_abbreviation() {
        let set = AbbreviationSet::english();
        let text = "Fruit, e.g. apples";
        for dot in dot_positions(text) {
            assert!(set.covers(text, 0, dot));
        }
    }

    #[test]
    fn test_case_insensitive_and_bracketed() {
        let set = AbbreviationSet::english();
        let text = "(MR. Jones)";
        assert!(set.covers(text, 0, text.find('.').unwrap()));
    }

    #[test]
    fn test_pronoun_is_not_abbreviation() {
        let set = AbbreviationSet::english();
        let text = "Neither did I.";
        assert!(!set.covers(text, 0, text.len() - 1));
    }

    #[test]
    fn test_floor_limits_token() {
        let set = AbbreviationSet::new(["Co."]);
        let text = "Acme Co.";
        assert!(set.covers(text, 5, 7));
        assert!(!AbbreviationSet::new(Vec::<String>::new()).covers(text, 0, 7));
    }
}
