//! Merge command implementation.
//!
//! Runs the four stages in order: validate the input directory, select both
//! splits, refuse to continue if either selection is empty, then merge train
//! and test. Nothing is written unless both splits matched.

use std::path::PathBuf;

use crate::config::{MergeConfig, SplitConfig};
use crate::error::{AppError, Result};
use crate::format::{RunReport, SplitSummary};
use jsonl_merge_lib::{merge_files, select_files};

/// Execute the merge.
///
/// # Errors
///
/// Returns `InputDirNotFound` if the input directory is missing,
/// `NoFilesMatched` if either pattern selects nothing, or `Merge` for
/// pattern and I/O failures.
pub fn execute(config: &MergeConfig) -> Result<RunReport> {
    if !config.input_dir.is_dir() {
        return Err(AppError::InputDirNotFound {
            path: config.input_dir.clone(),
        });
    }

    let excluded = config.output_paths();
    let mut selections: Vec<(SplitConfig<'_>, Vec<PathBuf>)> = Vec::with_capacity(2);
    for split in config.splits() {
        let files = select_files(&config.input_dir, split.pattern, &excluded)?;
        tracing::debug!("Selected {} {} file(s)", files.len(), split.split);
        selections.push((split, files));
    }

    if let Some((split, _)) = selections.iter().find(|(_, files)| files.is_empty()) {
        return Err(AppError::NoFilesMatched {
            split: split.split,
            pattern: split.pattern.to_string(),
            directory: config.input_dir.clone(),
        });
    }

    let mut splits = Vec::with_capacity(selections.len());
    for (split, files) in selections {
        let stats = merge_files(&files, split.output)?;
        tracing::info!(
            "Wrote {} line(s) from {} {} file(s) to {}",
            stats.lines,
            stats.files,
            split.split,
            split.output.display()
        );
        splits.push(SplitSummary {
            split: split.split,
            files: stats.files,
            lines: stats.lines,
            output: split.output.to_path_buf(),
        });
    }

    Ok(RunReport { splits })
}
