//! Plain text output formatter

use super::{single_line, OutputFormatter};
use anyhow::Result;
use kugiri_core::Sentence;
use std::io::Write;

/// Plain text formatter - outputs one sentence per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_sentence(&mut self, sentence: &Sentence) -> Result<()> {
        writeln!(self.writer, "{}", single_line(&sentence.content))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
