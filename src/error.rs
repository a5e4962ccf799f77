//! Error types for the orthovar library.
//!
//! Dictionary operations themselves never fail: unknown words pass through
//! unchanged, removals of absent words are silent no-ops, and malformed
//! pairs are accepted as given. The fallible surface is limited to loading
//! external datasets, and those failures are represented by
//! [`OrthovarError`].

use std::io;

use thiserror::Error;

/// The main error type for orthovar operations.
#[derive(Error, Debug)]
pub enum OrthovarError {
    /// I/O errors while reading a dataset file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Dataset shape violations (empty spellings, malformed pair rows).
    #[error("Dataset error: {0}")]
    Dataset(String),
}

/// Result type alias for operations that may fail with [`OrthovarError`].
pub type Result<T> = std::result::Result<T, OrthovarError>;

impl OrthovarError {
    /// Create a new dataset error.
    pub fn dataset<S: Into<String>>(msg: S) -> Self {
        OrthovarError::Dataset(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = OrthovarError::dataset("empty gb spelling at row 3");
        assert_eq!(
            error.to_string(),
            "Dataset error: empty gb spelling at row 3"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = OrthovarError::from(io_error);

        match error {
            OrthovarError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
