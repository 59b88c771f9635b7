//! Error types for `jsonl_merge`.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::Split;
use jsonl_merge_lib::MergeError;

/// Primary error type for a merge run.
#[derive(Error, Debug)]
pub enum AppError {
    // === Configuration Errors ===
    /// The input directory does not exist or is not a directory.
    #[error("Input directory not found: {}", .path.display())]
    InputDirNotFound { path: PathBuf },

    // === Selection Errors ===
    /// A split's pattern matched no files.
    #[error("No {split} files matched pattern '{pattern}' in {}", .directory.display())]
    NoFilesMatched {
        split: Split,
        pattern: String,
        directory: PathBuf,
    },

    // === I/O Errors ===
    /// Selection or merge failure from the library.
    #[error(transparent)]
    Merge(#[from] MergeError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_files_message_names_split_pattern_and_directory() {
        let err = AppError::NoFilesMatched {
            split: Split::Train,
            pattern: "*train*.json".to_string(),
            directory: PathBuf::from("json_output"),
        };
        assert_eq!(
            err.to_string(),
            "No train files matched pattern '*train*.json' in json_output"
        );
    }

    #[test]
    fn merge_errors_pass_through() {
        let err: AppError = MergeError::InvalidPattern {
            pattern: "[".to_string(),
            reason: "invalid range pattern".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid glob pattern '[': invalid range pattern"
        );
    }
}
