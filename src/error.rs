//! Error types for the Lipi library.
//!
//! Tokenization itself never fails. Errors come from the edges: compiling the
//! rule table, reading a record source, and persisting results.
//!
//! # Examples
//!
//! ```
//! use lipi::error::{LipiError, Result};
//!
//! fn open_corpus() -> Result<()> {
//!     Err(LipiError::source_unavailable("corpus.jsonl is missing"))
//! }
//!
//! match open_corpus() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lipi operations.
#[derive(Error, Debug)]
pub enum LipiError {
    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (pattern compilation)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// The record source is unavailable or yielded an unreadable record
    #[error("Source error: {0}")]
    Source(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LipiError.
pub type Result<T> = std::result::Result<T, LipiError>;

impl LipiError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LipiError::Analysis(msg.into())
    }

    /// Create a new source error (unavailable or unreadable source).
    pub fn source_unavailable<S: Into<String>>(msg: S) -> Self {
        LipiError::Source(msg.into())
    }

    /// Create a new serialization error.
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        LipiError::Serialization(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LipiError::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LipiError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");

        let error = LipiError::source_unavailable("missing file");
        assert_eq!(error.to_string(), "Source error: missing file");

        let error = LipiError::serialization("disk full");
        assert_eq!(error.to_string(), "Serialization error: disk full");

        let error = LipiError::invalid_argument("max examples");
        assert_eq!(error.to_string(), "Invalid argument: max examples");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let lipi_error = LipiError::from(io_error);

        match lipi_error {
            LipiError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
