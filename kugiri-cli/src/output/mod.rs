//! Output formatting module

use anyhow::Result;
use kugiri_core::Sentence;
use std::borrow::Cow;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Called before the sentences of each document
    fn begin_document(&mut self, _name: &str) -> Result<()> {
        Ok(())
    }

    /// Format and output a single sentence
    fn format_sentence(&mut self, sentence: &Sentence) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one sentence per line
    Text,
    /// JSON array of sentences with metadata
    Json,
    /// Markdown formatted output
    Markdown,
}

impl OutputFormat {
    /// All formats, in listing order
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Markdown,
    ];

    /// Name accepted on the command line
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description for `list formats`
    pub fn description(self) -> &'static str {
        match self {
            OutputFormat::Text => "Plain text, one sentence per line",
            OutputFormat::Json => "JSON array with line numbers and offsets",
            OutputFormat::Markdown => "Numbered markdown list per document",
        }
    }

    /// Build a formatter writing to `writer`
    pub fn formatter<W>(self, writer: W) -> Box<dyn OutputFormatter>
    where
        W: Write + Send + Sync + 'static,
    {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

/// Sentence text with line breaks folded into single spaces
pub(crate) fn single_line(content: &str) -> Cow<'_, str> {
    if content.contains('\n') {
        let folded: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        Cow::Owned(folded.join(" "))
    } else {
        Cow::Borrowed(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("One line."), "One line.");
        assert_eq!(single_line("Split\n  across\r\nlines."), "Split across lines.");
    }

    #[test]
    fn test_format_names_are_unique() {
        let mut names: Vec<_> = OutputFormat::ALL.iter().map(|f| f.name()).collect();
        names.dedup();
        assert_eq!(names, vec!["text", "json", "markdown"]);
    }
}
