//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Pattern that stands for standard input
pub const STDIN_PATTERN: &str = "-";

/// Resolve file patterns to actual file paths
///
/// `-` is skipped here; callers read it from stdin.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns.iter().filter(|p| *p != STDIN_PATTERN) {
        let paths =
            glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern} ({e})")))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    log::debug!("{} file(s) matched {:?}", files.len(), patterns);
    Ok(files)
}
