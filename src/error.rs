//! Error types for the inflight CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, InflightError>;

/// Main error type for the CLI.
#[derive(Error, Debug)]
pub enum InflightError {
    /// Could not read a named file
    #[error("cannot read '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed configuration file
    #[error("invalid configuration in '{path}': {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Category name not recognized
    #[error(transparent)]
    UnknownCategory(#[from] inflight_html::ParseCategoryError),

    /// Attribute argument not in `NAME[=VALUE]` form
    #[error("invalid attribute '{0}': expected NAME or NAME=VALUE")]
    InvalidAttribute(String),

    /// The lexer flagged the input as malformed
    #[error("malformed javascript in '{path}' at byte {offset}")]
    LexError { path: PathBuf, offset: usize },

    /// Line editor failure
    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = InflightError::InvalidAttribute("=x".into());
        assert_eq!(
            err.to_string(),
            "invalid attribute '=x': expected NAME or NAME=VALUE"
        );

        let err = InflightError::LexError {
            path: PathBuf::from("a.js"),
            offset: 7,
        };
        assert_eq!(err.to_string(), "malformed javascript in 'a.js' at byte 7");
    }

    #[test]
    fn test_category_error_is_transparent() {
        let err: InflightError = "font"
            .parse::<inflight_html::Category>()
            .unwrap_err()
            .into();
        assert_eq!(err.to_string(), "unknown resource category 'font'");
    }
}
