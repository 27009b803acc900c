//! Error types for the Vellum library.
//!
//! All errors are represented by the [`VellumError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use vellum::error::{Result, VellumError};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(VellumError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Vellum operations.
///
/// This enum represents all possible errors that can occur in the Vellum
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum VellumError {
    /// I/O errors (callers feeding text from readers, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Segmentation-related errors (invalid part counts, chunk sizes, etc.)
    #[error("Segmentation error: {0}")]
    Segment(String),

    /// Statistics-related errors (invalid reading speeds, etc.)
    #[error("Statistics error: {0}")]
    Stats(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with VellumError.
pub type Result<T> = std::result::Result<T, VellumError>;

impl VellumError {
    /// Create a new segmentation error.
    pub fn segment<S: Into<String>>(msg: S) -> Self {
        VellumError::Segment(msg.into())
    }

    /// Create a new statistics error.
    pub fn stats<S: Into<String>>(msg: S) -> Self {
        VellumError::Stats(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        VellumError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        VellumError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VellumError::segment("num_parts must be at least 1");
        assert_eq!(
            err.to_string(),
            "Segmentation error: num_parts must be at least 1"
        );
    }

    #[test]
    fn test_invalid_argument_formatting() {
        let err = VellumError::invalid_argument("wpm must be at least 1");
        assert_eq!(
            err.to_string(),
            "Error: Invalid argument: wpm must be at least 1"
        );
    }
}
