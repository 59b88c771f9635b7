//! `jsonl_merge` - merge per-dataset JSONL files into train/test splits.
//!
//! This crate provides the `jsonl-merge` CLI on top of `jsonl-merge-lib`,
//! which owns file selection and line merging.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap, plus the merge driver
//! - [`config`] - Resolved run configuration and defaults
//! - [`error`] - Error types and handling
//! - [`format`] - Summary output (text, JSON)
//! - [`logging`] - tracing subscriber setup

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;

pub use error::{AppError, Result};

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if configuration, selection or merging fails.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
