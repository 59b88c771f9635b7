use crate::config::Split;
use serde::Serialize;
use std::path::PathBuf;

/// What was merged for one split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitSummary {
    pub split: Split,
    pub files: usize,
    pub lines: usize,
    pub output: PathBuf,
}

/// Summaries for a whole run, train first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub splits: Vec<SplitSummary>,
}
