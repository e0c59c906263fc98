//! Output formatting for check results.
//!
//! This module handles formatting the report:
//! - [`terminal`] - Plain lines and the colored summary
//! - [`csv`] - CSV output formatting
//! - [`json`] - JSON output formatting

mod csv;
mod json;
mod terminal;

use crate::processing::Report;
use std::error::Error;

pub use csv::{csv_lines, escape_csv_field, CSV_HEADER};
pub use json::json_lines;
pub use terminal::{plain_lines, summary_line};

/// Output format selected with `--format`.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One entry per line
    #[default]
    Plain,
    /// Quoted CSV with a header row
    Csv,
    /// JSON array of records
    Json,
}

/// Render `report` in `format`, one string per output line.
pub fn render(report: &Report, format: OutputFormat) -> Result<Vec<String>, Box<dyn Error>> {
    match format {
        OutputFormat::Plain => Ok(plain_lines(report)),
        OutputFormat::Csv => Ok(csv_lines(report)),
        OutputFormat::Json => json_lines(report),
    }
}
