//! Error types for `jsonl-merge-lib`.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for selection and merge operations.
#[derive(Error, Debug)]
pub enum MergeError {
    // === Selection Errors ===
    /// The glob pattern could not be compiled.
    #[error("Invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    // === Input Errors ===
    /// An input file could not be opened or read as text.
    #[error("Failed to read {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Output Errors ===
    /// Parent directories of the output could not be created.
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be created or truncated.
    #[error("Failed to create {}: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing or flushing the output failed.
    #[error("Failed to write {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type using `MergeError`.
pub type Result<T> = std::result::Result<T, MergeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_path() {
        let err = MergeError::ReadInput {
            path: PathBuf::from("json_output/train_0.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read json_output/train_0.json: missing"
        );
    }

    #[test]
    fn pattern_error_names_pattern() {
        let err = MergeError::InvalidPattern {
            pattern: "[".to_string(),
            reason: "unclosed".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid glob pattern '[': unclosed");
    }
}
