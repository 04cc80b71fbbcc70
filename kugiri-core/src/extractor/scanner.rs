//! Forward-only sentence scanner

use super::enclosure::EnclosureTracker;
use super::sentence::Sentence;
use super::SentenceExtractor;
use std::iter::FusedIterator;

/// Lazy sequence of sentences over one text
///
/// Created by [`SentenceExtractor::extract`]. Each call to `next` scans
/// forward from where the previous sentence ended; dropping the iterator
/// simply stops the scan.
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    extractor: &'a SentenceExtractor,
    text: &'a str,
    source: Option<&'a str>,
    pos: usize,
    line: usize,
    after_newline: bool,
    enclosures: EnclosureTracker,
}

impl<'a> Sentences<'a> {
    pub(super) fn new(
        extractor: &'a SentenceExtractor,
        text: &'a str,
        source: Option<&'a str>,
    ) -> Self {
        Self {
            extractor,
            text,
            source,
            pos: 0,
            line: 1,
            after_newline: false,
            enclosures: EnclosureTracker::new(),
        }
    }

    /// Byte position the next scan starts from
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Whether the single quote at `at` is an apostrophe rather than a
    /// quotation mark
    ///
    /// Contractions (`don't`), possessives (`dogs'`) and elided years
    /// (`'90s`) count; a possessive-looking quote closes an open quotation
    /// instead. Called once `pos` has moved past the quote.
    fn is_apostrophe(&self, at: usize, type_id: u8) -> bool {
        let prev = char_before(self.text, at);
        let next = char_at(self.text, self.pos);
        let word_before = prev.is_some_and(char::is_alphanumeric);
        let word_after = next.is_some_and(char::is_alphanumeric);

        if word_before && word_after {
            return true;
        }
        if word_before {
            return prev.is_some_and(char::is_alphabetic)
                && !self.enclosures.is_open_pair(type_id);
        }
        next.is_some_and(|c| c.is_ascii_digit())
    }

    fn emit(&self, start: usize, end: usize, line_number: usize) -> Sentence {
        let content = self.text[start..end].trim_end();
        Sentence {
            content: content.to_string(),
            line_number,
            start_offset: start,
            end_offset: start + content.len(),
            source: self.source.map(str::to_string),
        }
    }

    /// Decide whether the terminator run `text[run_start..run_end]`, with
    /// any closers up to `end`, ends the sentence that began at
    /// `sentence_start`
    fn is_boundary(
        &self,
        sentence_start: usize,
        run_start: usize,
        run_end: usize,
        end: usize,
    ) -> bool {
        let text = self.text;
        let run = &text[run_start..run_end];
        let single = run.chars().count() == 1;
        let prev = char_before(text, run_start);
        let next = char_at(text, end);

        // 3.14, 1.5?
        if single
            && prev.is_some_and(|c| c.is_ascii_digit())
            && next.is_some_and(|c| c.is_ascii_digit())
        {
            return false;
        }

        // example.com, but not 本当!次
        if self.extractor.require_space
            && run.is_ascii()
            && next.is_some_and(|c| c.is_ascii() && !c.is_ascii_whitespace())
        {
            return false;
        }

        if single
            && run.starts_with(self.extractor.full_stop)
            && self
                .extractor
                .abbreviations
                .covers(text, sentence_start, run_start)
        {
            return self.extractor.starters.starts_after(text, end);
        }

        true
    }
}

impl Iterator for Sentences<'_> {
    type Item = Sentence;

    fn next(&mut self) -> Option<Sentence> {
        let text = self.text;
        let extractor = self.extractor;
        let mut start: Option<(usize, usize)> = None;

        while let Some(ch) = char_at(text, self.pos) {
            let at = self.pos;
            self.pos += ch.len_utf8();

            if ch == '\n' {
                self.line += 1;
                // A blank line closes anything left open.
                if self.after_newline {
                    self.enclosures.reset();
                }
                self.after_newline = true;
                continue;
            }
            if ch.is_whitespace() {
                continue;
            }
            self.after_newline = false;

            let (sentence_start, line) = *start.get_or_insert((at, self.line));

            if extractor.suppress_enclosures {
                if let Some(info) = extractor.enclosures.get(ch) {
                    let apostrophe = extractor.apostrophe == Some(ch)
                        && self.is_apostrophe(at, info.type_id);
                    if !apostrophe {
                        self.enclosures.apply(info);
                    }
                    continue;
                }
            }

            if !extractor.terminators.is_terminator(ch) || self.enclosures.is_open() {
                continue;
            }

            // Consecutive terminators form a single boundary.
            while let Some(c) = char_at(text, self.pos) {
                if !extractor.terminators.is_terminator(c) {
                    break;
                }
                self.pos += c.len_utf8();
            }
            let run_end = self.pos;

            // Closing quotes and brackets right after the run stay with it.
            let mut end = run_end;
            while let Some(c) = char_at(text, end) {
                if !extractor.enclosures.is_closing(c) {
                    break;
                }
                end += c.len_utf8();
            }

            if self.is_boundary(sentence_start, at, run_end, end) {
                self.pos = end;
                return Some(self.emit(sentence_start, end, line));
            }
        }

        start.map(|(sentence_start, line)| self.emit(sentence_start, text.len(), line))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.text.len() - self.pos;
        (0, Some(remaining))
    }
}

impl FusedIterator for Sentences<'_> {}

#[inline]
fn char_at(text: &str, pos: usize) -> Option<char> {
    text[pos..].chars().next()
}

#[inline]
fn char_before(text: &str, pos: usize) -> Option<char> {
    text[..pos].chars().next_back()
}
