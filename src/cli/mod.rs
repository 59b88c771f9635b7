//! Command-line interface for `jsonl_merge`.
//!
//! This module provides flag parsing using clap and hands the resolved
//! configuration to the merge driver.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::config::{
    DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_TEST, DEFAULT_OUTPUT_TRAIN, DEFAULT_TEST_PATTERN,
    DEFAULT_TRAIN_PATTERN, MergeConfig,
};
use crate::{format, logging};

/// `jsonl-merge` - merge per-dataset JSONL files into unified train/test splits.
#[derive(Parser, Debug)]
#[command(name = "jsonl-merge")]
#[command(
    author,
    version,
    about = "Merge per-dataset JSONL files into unified train/test splits",
    long_about = None,
    after_help = "Lines are copied verbatim (trimmed, blank lines dropped); JSON is never parsed."
)]
pub struct Cli {
    /// Directory containing per-dataset train/test JSONL files
    #[arg(long, default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Glob pattern for train files inside the input directory
    #[arg(long, default_value = DEFAULT_TRAIN_PATTERN)]
    pub train_pattern: String,

    /// Glob pattern for test files inside the input directory
    #[arg(long, default_value = DEFAULT_TEST_PATTERN)]
    pub test_pattern: String,

    /// Output path for the merged train JSONL file
    #[arg(long, default_value = DEFAULT_OUTPUT_TRAIN)]
    pub output_train: PathBuf,

    /// Output path for the merged test JSONL file
    #[arg(long, default_value = DEFAULT_OUTPUT_TEST)]
    pub output_test: PathBuf,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Resolve the parsed flags into a run configuration.
    #[must_use]
    pub fn to_config(&self) -> MergeConfig {
        MergeConfig {
            input_dir: self.input_dir.clone(),
            train_pattern: self.train_pattern.clone(),
            test_pattern: self.test_pattern.clone(),
            output_train: self.output_train.clone(),
            output_test: self.output_test.clone(),
        }
    }
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the merge fails at any stage.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet, None)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let config = cli.to_config();
    let report = commands::merge::execute(&config)?;
    format::print_report(&report, cli.json)?;

    Ok(())
}
