//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No input file matched the given patterns
    NoInputs,
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Some inputs could not be processed
    InputsFailed {
        /// Number of inputs that failed
        failed: usize,
        /// Number of inputs attempted
        total: usize,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoInputs => write!(f, "No files found matching the provided patterns"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InputsFailed { failed, total } => {
                write!(f, "{failed} of {total} inputs could not be processed")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_inputs_error_display() {
        assert_eq!(
            CliError::NoInputs.to_string(),
            "No files found matching the provided patterns"
        );
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("unknown symbol type 'FULLSTOP'".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: unknown symbol type 'FULLSTOP'"
        );
    }

    #[test]
    fn test_inputs_failed_display() {
        let error = CliError::InputsFailed {
            failed: 2,
            total: 5,
        };
        assert_eq!(error.to_string(), "2 of 5 inputs could not be processed");
    }

    #[test]
    fn test_error_downcasts_from_anyhow() {
        let result: CliResult<()> = Err(CliError::NoInputs.into());
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::NoInputs)
        ));
    }

    #[test]
    fn test_error_with_special_characters() {
        let pattern_error = CliError::InvalidPattern("ファイル/**[!".to_string());
        assert_eq!(pattern_error.to_string(), "Invalid file pattern: ファイル/**[!");
    }
}
