//! List command implementation

use crate::output::OutputFormat;
use anyhow::Result;
use clap::Subcommand;
use kugiri_core::{Symbol, SymbolCatalog};

/// Languages with a dedicated built-in table, and their variants
///
/// Any other language code resolves to the default table.
const LANGUAGES: &[(&str, &str, &[&str])] = &[
    ("en", "English and any other language (default table)", &[]),
    ("ru", "Russian", &[]),
    ("ja", "Japanese", &["zenkaku", "zenkaku2", "hankaku"]),
];

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List languages with built-in symbol tables
    Languages,

    /// List variants of each language
    Variants,

    /// List the resolved symbols of a language
    Symbols {
        /// Language code
        #[arg(short, long, value_name = "CODE", default_value = "en")]
        language: String,

        /// Variant within the language
        #[arg(long, value_name = "VARIANT")]
        variant: Option<String>,
    },

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Languages => {
                println!("Available languages:");
                for (code, name, _) in LANGUAGES {
                    println!("  {code:<4} {name}");
                }
            }
            ListCommands::Variants => {
                println!("Available variants:");
                for (code, _, variants) in LANGUAGES {
                    if let Some((default, rest)) = variants.split_first() {
                        println!("  {code:<4} {default} (default)");
                        for variant in rest {
                            println!("  {code:<4} {variant}");
                        }
                    }
                }
            }
            ListCommands::Symbols { language, variant } => {
                let catalog = SymbolCatalog::resolve(language, variant.as_deref(), []);
                println!(
                    "Symbols for {} ({}):",
                    catalog.language(),
                    if catalog.variant().is_empty() {
                        "no variant"
                    } else {
                        catalog.variant()
                    }
                );
                for symbol in catalog.symbols() {
                    println!("  {}", symbol_row(symbol));
                }
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                for format in OutputFormat::ALL {
                    println!("  {:<9} {}", format.name(), format.description());
                }
            }
        }
        Ok(())
    }
}

fn symbol_row(symbol: &Symbol) -> String {
    let mut row = format!("{:<28} {:?}", symbol.role(), symbol.value());
    if !symbol.invalid_chars().is_empty() {
        let invalid: String = symbol.invalid_chars().iter().collect();
        row.push_str(&format!("  invalid: {invalid}"));
    }
    match (symbol.needs_before_space(), symbol.needs_after_space()) {
        (true, true) => row.push_str("  space before and after"),
        (true, false) => row.push_str("  space before"),
        (false, true) => row.push_str("  space after"),
        (false, false) => {}
    }
    row
}
