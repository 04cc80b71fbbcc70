//! File reading utilities

use anyhow::{Context, Result};
use kugiri_core::{Document, Input};
use std::fs;
use std::io;
use std::path::Path;

/// Reads inputs into decoded documents
pub struct FileReader;

impl FileReader {
    /// Read and decode a file
    ///
    /// Invalid UTF-8 fails with the file name and byte offset.
    pub fn read_document(path: &Path) -> Result<Document> {
        Input::from_file(path)
            .into_document()
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Read and decode standard input
    pub fn read_stdin() -> Result<Document> {
        Input::from_reader("<stdin>", io::stdin())
            .into_document()
            .context("Failed to read standard input")
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }
}
