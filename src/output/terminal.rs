//! Terminal output utilities.

use crate::processing::{Report, Summary};
use colored::Colorize;

/// One line per emitted candidate, invalid entries as diagnostics.
pub fn plain_lines(report: &Report) -> Vec<String> {
    report.lines()
}

/// Single-line run summary for stderr.
pub fn summary_line(summary: &Summary) -> String {
    format!(
        "# candidates={} {}={} {}={} {}={}",
        summary.candidates,
        "found".green(),
        summary.found,
        "not_found".yellow(),
        summary.not_found,
        "invalid".red(),
        summary.invalid
    )
}
