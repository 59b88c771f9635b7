//! Human-readable summary lines.

use super::SplitSummary;

/// Format a summary as `Merged <N> <split> files into <path> (<M> lines)`.
#[must_use]
pub fn format_summary_line(summary: &SplitSummary) -> String {
    format!(
        "Merged {} {} files into {} ({} lines)",
        summary.files,
        summary.split,
        summary.output.display(),
        summary.lines
    )
}
