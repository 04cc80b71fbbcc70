//! Input abstraction for sentence extraction
//!
//! Text is decoded once when a [`Document`] is opened; the extractor itself
//! only ever sees valid UTF-8. A decoding failure aborts that document and
//! names it in the error.

use crate::error::{Error, Result};
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Unified input abstraction
///
/// Supports various input sources while providing a consistent interface
/// for text processing.
pub enum Input {
    /// Direct text string
    Text(String),
    /// File path to read from
    File(PathBuf),
    /// Bytes to decode as UTF-8, with an optional display name
    Bytes {
        /// Name reported in errors and attached to sentences
        name: Option<String>,
        /// Raw content
        bytes: Vec<u8>,
    },
    /// Reader stream (for stdin, network, etc.)
    Reader {
        /// Name reported in errors and attached to sentences
        name: String,
        /// Source stream, read to the end once
        reader: Box<dyn Read + Send>,
    },
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes { name, bytes } => f
                .debug_struct("Bytes")
                .field("name", name)
                .field("bytes", &format!("<{} bytes>", bytes.len()))
                .finish(),
            Input::Reader { name, .. } => f
                .debug_struct("Reader")
                .field("name", name)
                .field("reader", &"<Reader>")
                .finish(),
        }
    }
}

impl Input {
    /// Create input from a text string
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a file path
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes { name: None, bytes }
    }

    /// Create input from a reader
    pub fn from_reader<S, R>(name: S, reader: R) -> Self
    where
        S: Into<String>,
        R: Read + Send + 'static,
    {
        Input::Reader {
            name: name.into(),
            reader: Box::new(reader),
        }
    }

    /// Name used for this input in errors
    pub fn display_name(&self) -> String {
        match self {
            Input::Text(_) => "<text>".to_string(),
            Input::File(path) => path.display().to_string(),
            Input::Bytes { name, .. } => name.clone().unwrap_or_else(|| "<bytes>".to_string()),
            Input::Reader { name, .. } => name.clone(),
        }
    }

    /// Read and decode the input
    pub fn into_document(self) -> Result<Document> {
        match self {
            Input::Text(text) => Ok(Document::new(None, text)),
            Input::File(path) => {
                let name = path.display().to_string();
                let bytes = fs::read(&path).map_err(|source| Error::Io {
                    source_name: name.clone(),
                    source,
                })?;
                Document::from_bytes(Some(name), bytes)
            }
            Input::Bytes { name, bytes } => Document::from_bytes(name, bytes),
            Input::Reader { name, mut reader } => {
                let mut bytes = Vec::new();
                reader
                    .read_to_end(&mut bytes)
                    .map_err(|source| Error::Io {
                        source_name: name.clone(),
                        source,
                    })?;
                Document::from_bytes(Some(name), bytes)
            }
        }
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Input::from_bytes(bytes)
    }
}

/// Decoded document text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    name: Option<String>,
    text: String,
}

impl Document {
    /// Wrap already-decoded text
    pub fn new(name: Option<String>, text: String) -> Self {
        let text = match text.strip_prefix('\u{FEFF}') {
            Some(rest) => rest.to_string(),
            None => text,
        };
        Self { name, text }
    }

    /// Decode UTF-8 bytes
    pub fn from_bytes(name: Option<String>, bytes: Vec<u8>) -> Result<Self> {
        match String::from_utf8(bytes) {
            Ok(text) => Ok(Self::new(name, text)),
            Err(err) => {
                let position = err.utf8_error().valid_up_to();
                let source_name = name.unwrap_or_else(|| "<bytes>".to_string());
                tracing::warn!(source = %source_name, position, "input is not valid UTF-8");
                Err(Error::Encoding {
                    source_name,
                    position,
                })
            }
        }
    }

    /// Document name, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Document text
    pub fn text(&self) -> &str {
        &self.text
    }
}
