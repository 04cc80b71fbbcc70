//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use kugiri_core::{SegmentationConfig, SymbolCatalog};
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new configuration
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Variant within the language
    #[arg(long, value_name = "VARIANT")]
    pub variant: Option<String>,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating segmentation configuration template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        // Generate template configuration
        let template = self.generate_template()?;

        // Write to file
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit or delete the [[symbols]] entries to customize punctuation");
        println!("2. Validate your configuration:");
        println!("   kugiri validate --config {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   kugiri process -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    ///
    /// Every symbol of the resolved table is written out, so the file is a
    /// complete starting point that can be trimmed down to the overrides
    /// actually wanted.
    fn generate_template(&self) -> Result<String> {
        let catalog = SymbolCatalog::resolve(&self.language_code, self.variant.as_deref(), []);
        let config = SegmentationConfig {
            lang: catalog.language().to_string(),
            variant: Some(catalog.variant().to_string()).filter(|v| !v.is_empty()),
            symbols: catalog.symbols().cloned().collect(),
            ..SegmentationConfig::default()
        };
        let body = config.to_toml_string()?;

        Ok(format!(
            r#"# Segmentation configuration for "{lang}" ({variant})
#
# Each [[symbols]] entry overrides one role of the built-in table.
# name          role, e.g. FULL_STOP, LEFT_DOUBLE_QUOTATION_MARK
# value         the character used for that role
# invalid-chars characters that must not be used in its place
# before-space  whether a space is expected before the symbol
# after-space   whether a space is expected after the symbol
#
# [extractor] options:
# enclosure-suppression = true     do not split inside brackets and quotes
# abbreviations = ["Dr.", "e.g."]  replaces the built-in abbreviation list

{body}"#,
            lang = catalog.language(),
            variant = if catalog.variant().is_empty() {
                "no variant"
            } else {
                catalog.variant()
            },
        ))
    }
}
