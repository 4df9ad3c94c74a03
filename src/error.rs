//! Error types for the wordmill library.
//!
//! All fallible wordmill operations return [`Result`], whose error type is
//! the [`WordmillError`] enum.

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for wordmill operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for creating specific error types.
#[derive(Error, Debug)]
pub enum WordmillError {
    /// I/O errors (stream reads, file operations, output writes).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Record splitting errors (boundary marker handling, buffer limits).
    #[error("Split error: {0}")]
    Split(String),

    /// Record parsing errors (pattern compilation and extraction).
    #[error("Parse error: {0}")]
    Parse(String),

    /// Word list / frequency table loading errors.
    #[error("Word list error: {0}")]
    WordList(String),

    /// Resource exhausted (buffer or queue limits exceeded).
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    /// Thread join errors.
    #[error("Thread join error: {0}")]
    ThreadJoinError(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with WordmillError.
pub type Result<T> = std::result::Result<T, WordmillError>;

impl WordmillError {
    /// Create a new split error.
    pub fn split<S: Into<String>>(msg: S) -> Self {
        WordmillError::Split(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        WordmillError::Parse(msg.into())
    }

    /// Create a new word list error.
    pub fn word_list<S: Into<String>>(msg: S) -> Self {
        WordmillError::WordList(msg.into())
    }

    /// Create a new resource exhausted error.
    pub fn resource_exhausted<S: Into<String>>(msg: S) -> Self {
        WordmillError::ResourceExhausted(msg.into())
    }

    /// Create a new thread join error.
    pub fn thread_join<S: Into<String>>(msg: S) -> Self {
        WordmillError::ThreadJoinError(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        WordmillError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = WordmillError::split("buffer limit exceeded");
        assert_eq!(error.to_string(), "Split error: buffer limit exceeded");

        let error = WordmillError::word_list("missing file");
        assert_eq!(error.to_string(), "Word list error: missing file");

        let error = WordmillError::invalid_argument("bad template");
        assert_eq!(error.to_string(), "Error: Invalid argument: bad template");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::UnexpectedEof, "stream closed");
        let error = WordmillError::from(io_error);

        match error {
            WordmillError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
