//! Crate-level error type.

use std::path::PathBuf;

use thiserror::Error;

use crate::analysis::{BruteForceError, FrequencyError};
use crate::config::ConfigError;

/// Errors surfaced by file-level operations and input parsing.
#[derive(Error, Debug)]
pub enum CaesarError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Invalid number: {0:?}")]
    InvalidShiftFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    BruteForce(#[from] BruteForceError),

    #[error("Frequency analysis failed: {0}")]
    Frequency(#[from] FrequencyError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Parses a user-supplied shift, ignoring surrounding whitespace.
pub fn parse_shift(input: &str) -> Result<i64, CaesarError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| CaesarError::InvalidShiftFormat(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shift() {
        assert_eq!(parse_shift("3").unwrap(), 3);
        assert_eq!(parse_shift("  -7\n").unwrap(), -7);
        assert_eq!(parse_shift("+12").unwrap(), 12);
        assert_eq!(parse_shift("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_shift_invalid() {
        for input in ["", "abc", "3.5", "1 2", "99999999999999999999"] {
            assert!(
                matches!(parse_shift(input), Err(CaesarError::InvalidShiftFormat(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_messages() {
        let err = CaesarError::FileNotFound(PathBuf::from("missing.txt"));
        assert_eq!(err.to_string(), "File not found: missing.txt");

        let err = parse_shift("x").unwrap_err();
        assert_eq!(err.to_string(), "Invalid number: \"x\"");

        let err = CaesarError::from(BruteForceError::Exhausted { tried: 33 });
        assert!(err.to_string().contains("Check manually"));
    }
}
