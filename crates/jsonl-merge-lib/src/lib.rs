//! `jsonl-merge-lib` — select and concatenate JSONL files.
//!
//! Two operations, both free of global state:
//!
//! - [`select::select_files`] lists the regular files in a directory that
//!   match a glob pattern, minus an exclusion set, in sorted order.
//! - [`merge::merge_files`] concatenates the non-blank lines of those files
//!   into a single output file and reports how many lines were written.
//!
//! Lines are treated as opaque text. Nothing here parses JSON.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::{Path, PathBuf};
//! use jsonl_merge_lib::{merge_files, select_files};
//!
//! let output = PathBuf::from("unified_train.json");
//! let files = select_files(Path::new("json_output"), "*train*.json", &[output.clone()]).unwrap();
//! let stats = merge_files(&files, &output).unwrap();
//! println!("{} files, {} lines", stats.files, stats.lines);
//! ```

pub mod error;
pub mod merge;
pub mod select;
pub mod util;

pub use error::{MergeError, Result};
pub use merge::{MergeStats, merge_files, merge_lines};
pub use select::select_files;
