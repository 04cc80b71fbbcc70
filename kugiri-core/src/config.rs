//! Segmentation configuration
//!
//! This module defines the TOML schema for choosing a language, a variant,
//! custom symbols and extractor options:
//!
//! ```toml
//! lang = "ja"
//! variant = "zenkaku2"
//!
//! [extractor]
//! enclosure-suppression = true
//! sentence-starters = ["The", "However"]
//!
//! [[symbols]]
//! name = "EXCLAMATION_MARK"
//! value = "!"
//! invalid-chars = "！"
//! ```

use crate::error::{Error, Result};
use crate::extractor::{ExtractorOptions, SentenceExtractor};
use crate::symbol::{Symbol, SymbolCatalog};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Root segmentation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SegmentationConfig {
    /// Language code (`en`, `ja`, `ru`, ...)
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Variant within the language (`hankaku`, `zenkaku2`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    /// Extraction options
    #[serde(default)]
    pub extractor: ExtractorOptions,
    /// Custom symbols applied over the built-in table, in order
    #[serde(default)]
    pub symbols: Vec<Symbol>,
}

fn default_lang() -> String {
    "en".to_string()
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            lang: default_lang(),
            variant: None,
            extractor: ExtractorOptions::default(),
            symbols: Vec::new(),
        }
    }
}

impl SegmentationConfig {
    /// Configuration for a language with no custom symbols
    pub fn new<S: Into<String>>(lang: S, variant: Option<String>) -> Self {
        Self {
            lang: lang.into(),
            variant,
            ..Self::default()
        }
    }

    /// Parse from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Self::parse(toml_str, "<string>")
    }

    /// Load from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            source_name: display.clone(),
            source,
        })?;
        Self::parse(&content, &display)
    }

    fn parse(toml_str: &str, origin: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| Error::Config {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        config.validate(origin)?;
        Ok(config)
    }

    fn validate(&self, origin: &str) -> Result<()> {
        if self.lang.trim().is_empty() {
            return Err(Error::Config {
                path: origin.to_string(),
                message: "lang must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Resolve the symbol catalog this configuration describes
    pub fn catalog(&self) -> SymbolCatalog {
        SymbolCatalog::resolve(
            &self.lang,
            self.variant.as_deref(),
            self.symbols.iter().cloned(),
        )
    }

    /// Build an extractor over a freshly resolved catalog
    pub fn extractor(&self) -> SentenceExtractor {
        SentenceExtractor::with_options(&self.catalog(), &self.extractor)
    }
}
