//! Check IPv4 addresses and CIDR subnets against a set of reference subnets.
//!
//! # Modules
//! - [`models`] - IPv4 subnet arithmetic, candidate entries, reporting mode
//! - [`processing`] - Containment checks and the found / not-found policy
//! - [`input`] - Line-oriented input files
//! - [`output`] - Plain, CSV and JSON output
//! - [`cli`] - Command line flags
//! - [`logging`] - log4rs setup

pub mod cli;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use cli::Config;
use processing::{check_entries, ReferenceSet, Report};
use std::error::Error;

/// Load both input files and check every candidate.
///
/// Both files are read before any checking starts, so a read error never
/// produces partial output.
pub fn run(config: &Config) -> Result<Report, Box<dyn Error>> {
    log::info!("#Start run() mode={:?} order={:?}", config.mode, config.order);

    let candidates = input::read_lines(&config.candidates_file, "IP")?;
    let references = ReferenceSet::new(input::read_lines(&config.subnets_file, "subnet")?);

    let report = check_entries(&candidates, &references, config.mode, config.order);
    log::info!(
        "# Checked {} candidates against {} subnets, {} to report",
        report.summary.candidates,
        references.len(),
        report.results.len()
    );
    Ok(report)
}
