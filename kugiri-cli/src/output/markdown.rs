//! Markdown output formatter

use super::{single_line, OutputFormatter};
use anyhow::Result;
use kugiri_core::Sentence;
use std::io::Write;

/// Markdown formatter - outputs sentences as a markdown list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    sentence_count: usize,
    document_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentence_count: 0,
            document_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn begin_document(&mut self, name: &str) -> Result<()> {
        if self.document_count > 0 {
            writeln!(self.writer)?;
        }
        self.document_count += 1;
        writeln!(self.writer, "## {name}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_sentence(&mut self, sentence: &Sentence) -> Result<()> {
        self.sentence_count += 1;
        writeln!(
            self.writer,
            "{}. {}",
            self.sentence_count,
            single_line(&sentence.content)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total sentences: {}*", self.sentence_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
