//! Validate command implementation

use anyhow::Result;
use clap::Args;
use kugiri_core::{SegmentationConfig, SentenceExtractor, SymbolCatalog};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to segmentation configuration file to validate
    #[arg(short = 'c', long = "config", value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        // Try to load and validate the configuration
        match SegmentationConfig::from_file(&self.config) {
            Ok(config) => {
                let catalog = config.catalog();
                let extractor = SentenceExtractor::with_options(&catalog, &config.extractor);

                println!("✓ Configuration is valid!");
                println!("  Language: {}", catalog.language());
                println!("  Variant: {}", display_variant(catalog.variant()));
                println!("  Custom symbols: {}", config.symbols.len());
                let terminators: String = extractor.terminators().chars().iter().collect();
                println!("  Sentence terminators: {terminators}");
                println!(
                    "  Enclosure suppression: {}",
                    if extractor.suppresses_enclosures() { "on" } else { "off" }
                );

                for warning in shared_values(&catalog) {
                    println!("  ! {warning}");
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

fn display_variant(variant: &str) -> &str {
    if variant.is_empty() {
        "(none)"
    } else {
        variant
    }
}

/// Characters claimed by more than one role
///
/// Only the last of them is found when looking a symbol up by character.
fn shared_values(catalog: &SymbolCatalog) -> Vec<String> {
    let symbols: Vec<_> = catalog.symbols().collect();
    let mut warnings = Vec::new();
    for (i, symbol) in symbols.iter().enumerate() {
        let sharing: Vec<String> = symbols[i + 1..]
            .iter()
            .filter(|other| other.value() == symbol.value())
            .map(|other| other.role().to_string())
            .collect();
        let already_reported = symbols[..i]
            .iter()
            .any(|other| other.value() == symbol.value());
        if !sharing.is_empty() && !already_reported {
            warnings.push(format!(
                "\"{}\" is used by {} and {}",
                symbol.value(),
                symbol.role(),
                sharing.join(", ")
            ));
        }
    }
    warnings
}
