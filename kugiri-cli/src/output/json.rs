//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use kugiri_core::Sentence;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs sentences as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    sentences: Vec<SentenceData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct SentenceData {
    /// The sentence text
    pub text: String,
    /// Document the sentence came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// 1-based line of the first character
    pub line: usize,
    /// Starting byte offset in the original text
    pub offset: usize,
    /// Length of the sentence in bytes
    pub length: usize,
}

impl From<&Sentence> for SentenceData {
    fn from(sentence: &Sentence) -> Self {
        Self {
            text: sentence.content.clone(),
            file: sentence.source.clone(),
            line: sentence.line_number,
            offset: sentence.start_offset,
            length: sentence.end_offset - sentence.start_offset,
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentences: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_sentence(&mut self, sentence: &Sentence) -> Result<()> {
        self.sentences.push(SentenceData::from(sentence));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.sentences)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_array_with_metadata() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter
            .format_sentence(&Sentence {
                content: "二文目です。".to_string(),
                line_number: 2,
                start_offset: 10,
                end_offset: 28,
                source: Some("doc.txt".to_string()),
            })
            .unwrap();
        formatter.finish().unwrap();

        let parsed: Vec<SentenceData> = serde_json::from_slice(&formatter.writer).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].text, "二文目です。");
        assert_eq!(parsed[0].file.as_deref(), Some("doc.txt"));
        assert_eq!(parsed[0].line, 2);
        assert_eq!(parsed[0].offset, 10);
        assert_eq!(parsed[0].length, 18);
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter.finish().unwrap();
        assert_eq!(String::from_utf8(formatter.writer).unwrap(), "[]\n");
    }
}
