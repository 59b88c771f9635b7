//! Output formatting for `jsonl_merge`.
//!
//! Supports the human-readable summary lines and a single JSON document
//! (`--json`). Only the summary goes to stdout; diagnostics go to stderr.

mod output;
mod text;

pub use output::{RunReport, SplitSummary};
pub use text::format_summary_line;

use crate::error::Result;

/// Print the per-split summaries to stdout.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn print_report(report: &RunReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(report)?);
        return Ok(());
    }

    for summary in &report.splits {
        println!("{}", format_summary_line(summary));
    }
    Ok(())
}
