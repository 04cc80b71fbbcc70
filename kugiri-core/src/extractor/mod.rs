//! Sentence boundary extraction driven by a symbol catalog
//!
//! The extractor resolves its terminator characters (FULL_STOP,
//! QUESTION_MARK, EXCLAMATION_MARK) and bracket/quote pairs from a
//! [`SymbolCatalog`] once, then scans text forward:
//!
//! - consecutive terminators (`?!`, `...`) form a single boundary
//! - closing quotes and brackets right after a terminator stay with the sentence
//! - ASCII terminators directly followed by another ASCII character do not
//!   break, so `3.14` and `example.com` are not split; full-width
//!   terminators break immediately
//! - a dot closing a known abbreviation (`Dr.`, `e.g.`) is not a boundary,
//!   unless a sentence starter (`The`, `However`) follows it
//! - with enclosure suppression on, terminators inside open brackets or
//!   quotes do not end the sentence
//!
//! ```rust
//! use kugiri_core::{SentenceExtractor, SymbolCatalog};
//!
//! let catalog = SymbolCatalog::resolve("en", None, []);
//! let extractor = SentenceExtractor::new(&catalog);
//!
//! let sentences: Vec<_> = extractor.extract("Is it real?! Yes.").collect();
//! assert_eq!(sentences.len(), 2);
//! assert_eq!(sentences[0].content, "Is it real?!");
//! assert_eq!(sentences[1].content, "Yes.");
//! ```

pub mod abbreviation;
pub mod enclosure;
mod scanner;
pub mod sentence;
pub mod starter;
pub mod terminator;

pub use abbreviation::{AbbreviationSet, DEFAULT_ABBREVIATIONS};
pub use enclosure::{EnclosureInfo, EnclosureTable, EnclosureTracker};
pub use scanner::Sentences;
pub use sentence::Sentence;
pub use starter::{SentenceStarterSet, DEFAULT_SENTENCE_STARTERS};
pub use terminator::TerminatorSet;

use crate::error::{Error, Result};
use crate::input::{Document, Input};
use crate::symbol::{SymbolCatalog, SymbolType};
use serde::{Deserialize, Serialize};

/// Tunable extraction behavior
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ExtractorOptions {
    /// Do not split inside open brackets or quotes
    pub enclosure_suppression: bool,
    /// Abbreviations whose dot is not a boundary (`None` = built-in list)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abbreviations: Option<Vec<String>>,
    /// Words that end an abbreviation's sentence when they follow it
    /// (`None` = built-in list, empty = never)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentence_starters: Option<Vec<String>>,
    /// Require whitespace after ASCII terminators (`None` = on when the
    /// catalog's full stop is ASCII)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_space_after_ascii_terminator: Option<bool>,
}

/// Splits text into sentences
#[derive(Debug, Clone)]
pub struct SentenceExtractor {
    terminators: TerminatorSet,
    full_stop: char,
    enclosures: EnclosureTable,
    suppress_enclosures: bool,
    abbreviations: AbbreviationSet,
    starters: SentenceStarterSet,
    apostrophe: Option<char>,
    require_space: bool,
}

impl SentenceExtractor {
    /// Create an extractor with default options
    pub fn new(catalog: &SymbolCatalog) -> Self {
        Self::with_options(catalog, &ExtractorOptions::default())
    }

    /// Create an extractor with explicit options
    pub fn with_options(catalog: &SymbolCatalog, options: &ExtractorOptions) -> Self {
        let abbreviations = match &options.abbreviations {
            Some(list) => AbbreviationSet::new(list),
            None => AbbreviationSet::english(),
        };
        let starters = match &options.sentence_starters {
            Some(list) => SentenceStarterSet::new(list),
            None => SentenceStarterSet::english(),
        };
        let full_stop = catalog.value_or_default(SymbolType::FullStop);
        let require_space = options
            .require_space_after_ascii_terminator
            .unwrap_or(full_stop.is_ascii());
        let terminators = TerminatorSet::from_catalog(catalog);
        let enclosures = EnclosureTable::from_catalog(catalog, &terminators);

        tracing::debug!(
            language = catalog.language(),
            variant = catalog.variant(),
            enclosure_suppression = options.enclosure_suppression,
            require_space,
            abbreviations = abbreviations.len(),
            sentence_starters = starters.len(),
            "sentence extractor configured"
        );

        Self {
            terminators,
            full_stop,
            enclosures,
            suppress_enclosures: options.enclosure_suppression,
            abbreviations,
            starters,
            apostrophe: apostrophe_of(catalog),
            require_space,
        }
    }

    /// Start building an extractor
    pub fn builder<'a>() -> SentenceExtractorBuilder<'a> {
        SentenceExtractorBuilder::new()
    }

    /// Lazily split `text` into sentences
    pub fn extract<'a>(&'a self, text: &'a str) -> Sentences<'a> {
        Sentences::new(self, text, None)
    }

    /// Lazily split a document, tagging each sentence with its name
    pub fn extract_document<'a>(&'a self, document: &'a Document) -> Sentences<'a> {
        Sentences::new(self, document.text(), document.name())
    }

    /// Read, decode and split an input in one go
    pub fn extract_input(&self, input: Input) -> Result<Vec<Sentence>> {
        let document = input.into_document()?;
        Ok(self.extract_document(&document).collect())
    }

    /// Characters treated as sentence terminators
    pub fn terminators(&self) -> &TerminatorSet {
        &self.terminators
    }

    /// Whether terminators inside brackets and quotes are ignored
    pub fn suppresses_enclosures(&self) -> bool {
        self.suppress_enclosures
    }
}

/// Builder for [`SentenceExtractor`]
///
/// Provides a fluent interface for configuring the extractor.
#[derive(Debug, Default)]
pub struct SentenceExtractorBuilder<'a> {
    catalog: Option<&'a SymbolCatalog>,
    options: ExtractorOptions,
}

impl<'a> SentenceExtractorBuilder<'a> {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the symbol catalog
    pub fn catalog(mut self, catalog: &'a SymbolCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Replace all options at once
    pub fn options(mut self, options: ExtractorOptions) -> Self {
        self.options = options;
        self
    }

    /// Enable or disable enclosure suppression
    pub fn enclosure_suppression(mut self, enabled: bool) -> Self {
        self.options.enclosure_suppression = enabled;
        self
    }

    /// Set the abbreviation list
    pub fn abbreviations<I, S>(mut self, abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.abbreviations = Some(abbreviations.into_iter().map(Into::into).collect());
        self
    }

    /// Set the words that still end a sentence after an abbreviation
    pub fn sentence_starters<I, S>(mut self, starters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.sentence_starters = Some(starters.into_iter().map(Into::into).collect());
        self
    }

    /// Require whitespace after ASCII terminators
    pub fn require_space_after_ascii_terminator(mut self, required: bool) -> Self {
        self.options.require_space_after_ascii_terminator = Some(required);
        self
    }

    /// Build the extractor
    ///
    /// Fails with [`Error::MissingCatalog`] when no catalog was set.
    pub fn build(self) -> Result<SentenceExtractor> {
        let catalog = self.catalog.ok_or(Error::MissingCatalog)?;
        Ok(SentenceExtractor::with_options(catalog, &self.options))
    }
}

/// The single quote doubles as an apostrophe only when it is symmetric
fn apostrophe_of(catalog: &SymbolCatalog) -> Option<char> {
    let open = catalog.symbol(SymbolType::LeftSingleQuotationMark)?.value();
    let close = catalog.symbol(SymbolType::RightSingleQuotationMark)?.value();
    (open == close).then_some(open)
}
