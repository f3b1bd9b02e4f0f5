//! Error types for the Fibonacci CLI
//!
//! The computation itself never fails; everything here comes from reading
//! input, loading configuration, or writing output.

use std::io;
use std::num::ParseIntError;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Fibonacci CLI
#[derive(Error, Debug)]
pub enum Error {
    // === Input Errors ===
    #[error("Invalid position '{input}': expected a base-10 integer ({source})")]
    InputFormat {
        input: String,
        #[source]
        source: ParseIntError,
    },

    // === Configuration Errors ===
    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an input format error for the given raw text
    pub fn input_format(input: &str, source: ParseIntError) -> Self {
        Self::InputFormat {
            input: input.to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_format_message_names_input() {
        let source = "abc".parse::<i64>().unwrap_err();
        let err = Error::input_format("abc", source);
        let message = err.to_string();
        assert!(message.contains("'abc'"), "message was: {message}");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_io_error_converts() {
        let err: Error = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, Error::Io(_)));
    }
}
