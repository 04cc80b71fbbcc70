//! Language-aware symbol catalogs and sentence extraction
//!
//! This crate decides, per language and stylistic variant, which characters
//! act as sentence terminators, quotation marks and paired brackets, and
//! uses that catalog to split document text into sentences for downstream
//! rule checkers.
//!
//! # Architecture
//!
//! - **symbol**: built-in tables (default, Russian, three Japanese variants)
//!   and the per-configuration [`SymbolCatalog`] with override semantics
//! - **extractor**: the [`SentenceExtractor`], a forward-only scanner that
//!   yields [`Sentence`] spans lazily
//! - **input** / **config**: document decoding and the TOML configuration
//!
//! # Example
//!
//! ```rust
//! use kugiri_core::{SentenceExtractor, SymbolCatalog, SymbolType};
//!
//! let catalog = SymbolCatalog::resolve("ja", None, []);
//! assert_eq!(catalog.variant(), "zenkaku");
//! assert_eq!(catalog.value_or_default(SymbolType::FullStop), '。');
//!
//! let extractor = SentenceExtractor::new(&catalog);
//! let sentences: Vec<_> = extractor.extract("今日は晴れ。\n明日は雨？").collect();
//! assert_eq!(sentences.len(), 2);
//! assert_eq!(sentences[1].line_number, 2);
//! ```

pub mod config;
pub mod error;
pub mod extractor;
pub mod input;
pub mod symbol;

pub use config::SegmentationConfig;
pub use error::{Error, Result};
pub use extractor::{
    ExtractorOptions, Sentence, SentenceExtractor, SentenceExtractorBuilder, Sentences,
};
pub use input::{Document, Input};
pub use symbol::{BuiltinTable, Symbol, SymbolCatalog, SymbolType};
