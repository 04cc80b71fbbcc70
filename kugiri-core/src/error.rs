//! Error types for catalog configuration and document extraction
//!
//! Configuration and encoding failures abort work on a single document and
//! carry enough context (element name, file name) to be reported upward.
//! A lookup that finds nothing is not an error: catalog lookups return
//! `Option` and callers fall back through `value_or_default`.

use thiserror::Error;

/// Errors raised while configuring or running sentence extraction
#[derive(Error, Debug)]
pub enum Error {
    /// The extractor was built without a symbol catalog
    #[error("no symbol catalog was supplied to the sentence extractor")]
    MissingCatalog,

    /// A symbol name in a configuration does not match any known role
    #[error("unknown symbol type '{name}'")]
    UnknownSymbolType {
        /// The name that failed to parse
        name: String,
    },

    /// A configuration file or string could not be parsed
    #[error("configuration error in {path}: {message}")]
    Config {
        /// Configuration source (file path or `<string>`)
        path: String,
        /// Parser message
        message: String,
    },

    /// The input could not be decoded as UTF-8
    #[error("{source_name} is not valid UTF-8 (invalid byte sequence at offset {position})")]
    Encoding {
        /// Document identity (file name or `<stdin>`, `<bytes>`)
        source_name: String,
        /// Byte offset of the first invalid sequence
        position: usize,
    },

    /// The input could not be read
    #[error("failed to read {source_name}: {source}")]
    Io {
        /// Document identity
        source_name: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for kugiri operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_catalog_display() {
        assert_eq!(
            Error::MissingCatalog.to_string(),
            "no symbol catalog was supplied to the sentence extractor"
        );
    }

    #[test]
    fn test_encoding_error_names_file() {
        let err = Error::Encoding {
            source_name: "doc/readme.txt".to_string(),
            position: 17,
        };
        let msg = err.to_string();
        assert!(msg.contains("doc/readme.txt"));
        assert!(msg.contains("17"));
    }

    #[test]
    fn test_io_error_exposes_source() {
        use std::error::Error as _;

        let err = Error::Io {
            source_name: "missing.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().starts_with("failed to read missing.txt"));
        assert!(err.source().is_some());
    }
}
