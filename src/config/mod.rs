//! Configuration for a `jsonl_merge` run.
//!
//! Values come from command-line flags only; there are no config files or
//! environment overrides. Defaults match the layout produced by the
//! per-dataset export step:
//! - inputs in `json_output/`
//! - `*train*.json` / `*test*.json` selecting the two splits
//! - `unified_train.json` / `unified_test.json` as outputs

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_DIR: &str = "json_output";
pub const DEFAULT_TRAIN_PATTERN: &str = "*train*.json";
pub const DEFAULT_TEST_PATTERN: &str = "*test*.json";
pub const DEFAULT_OUTPUT_TRAIN: &str = "unified_train.json";
pub const DEFAULT_OUTPUT_TEST: &str = "unified_test.json";

/// One of the two output categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Test,
}

impl Split {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Train => "train",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pattern and destination for a single split.
#[derive(Debug, Clone, Copy)]
pub struct SplitConfig<'a> {
    pub split: Split,
    pub pattern: &'a str,
    pub output: &'a Path,
}

/// Fully resolved run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeConfig {
    pub input_dir: PathBuf,
    pub train_pattern: String,
    pub test_pattern: String,
    pub output_train: PathBuf,
    pub output_test: PathBuf,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            train_pattern: DEFAULT_TRAIN_PATTERN.to_string(),
            test_pattern: DEFAULT_TEST_PATTERN.to_string(),
            output_train: PathBuf::from(DEFAULT_OUTPUT_TRAIN),
            output_test: PathBuf::from(DEFAULT_OUTPUT_TEST),
        }
    }
}

impl MergeConfig {
    /// Both splits, train first.
    #[must_use]
    pub fn splits(&self) -> [SplitConfig<'_>; 2] {
        [
            SplitConfig {
                split: Split::Train,
                pattern: &self.train_pattern,
                output: &self.output_train,
            },
            SplitConfig {
                split: Split::Test,
                pattern: &self.test_pattern,
                output: &self.output_test,
            },
        ]
    }

    /// Paths excluded from every selection.
    #[must_use]
    pub fn output_paths(&self) -> [&Path; 2] {
        [&self.output_train, &self.output_test]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = MergeConfig::default();
        assert_eq!(config.input_dir, Path::new("json_output"));
        assert_eq!(config.train_pattern, "*train*.json");
        assert_eq!(config.test_pattern, "*test*.json");
        assert_eq!(config.output_train, Path::new("unified_train.json"));
        assert_eq!(config.output_test, Path::new("unified_test.json"));
    }

    #[test]
    fn splits_are_train_then_test() {
        let config = MergeConfig::default();
        let [train, test] = config.splits();
        assert_eq!(train.split, Split::Train);
        assert_eq!(train.pattern, "*train*.json");
        assert_eq!(test.split, Split::Test);
        assert_eq!(test.output, Path::new("unified_test.json"));
    }

    #[test]
    fn split_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Split::Train).unwrap(), "\"train\"");
        assert_eq!(Split::Test.to_string(), "test");
    }
}
