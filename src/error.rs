//! Error types for the textonym library.
//!
//! All errors are represented by the [`TextonymError`] enum. Only layout
//! parsing can fail in the core: signatures and queries are total functions.
//!
//! # Examples
//!
//! ```
//! use textonym::error::{Result, TextonymError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TextonymError::layout("key has no digit"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for textonym operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for the common variants.
#[derive(Error, Debug)]
pub enum TextonymError {
    /// I/O errors (layout or word-list files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A keypad layout entry is malformed
    #[error("Invalid layout: {0}")]
    Layout(String),

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

/// Result type alias for operations that may fail with TextonymError.
pub type Result<T> = std::result::Result<T, TextonymError>;

impl TextonymError {
    /// Create a new layout error.
    pub fn layout<S: Into<String>>(msg: S) -> Self {
        TextonymError::Layout(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TextonymError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TextonymError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = TextonymError::layout("bad entry");
        assert_eq!(error.to_string(), "Invalid layout: bad entry");

        let error = TextonymError::other("something else");
        assert_eq!(error.to_string(), "Error: something else");

        let error = TextonymError::invalid_argument("empty word");
        assert_eq!(error.to_string(), "Error: Invalid argument: empty word");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let textonym_error = TextonymError::from(io_error);

        match textonym_error {
            TextonymError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
