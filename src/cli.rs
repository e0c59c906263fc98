//! Command line parsing.
//!
//! The historical flags are single-dash long names (`-ci`, `-nf`). clap only
//! understands single-character short flags, so they are rewritten to their
//! double-dash form before parsing.

use crate::models::Mode;
use crate::output::OutputFormat;
use crate::processing::OutputOrder;
use clap::{ArgGroup, Parser};
use std::ffi::OsString;

/// Usage line printed on flag misuse.
pub const USAGE: &str = "Usage: subnet-check -ci <ip_file> -s <subnet_file> (-f | -nf)";

const LEGACY_FLAGS: [&str; 2] = ["ci", "nf"];

#[derive(Parser, Debug)]
#[command(name = "subnet-check")]
#[command(about = "Report which IP addresses and subnets fall inside a set of reference subnets.")]
#[command(group(ArgGroup::new("mode").required(true).args(["found", "not_found"])))]
pub struct CommandLine {
    /// File with IP addresses and CIDR subnets to check, one per line
    #[arg(long = "ci", visible_alias = "candidates", value_name = "IP_FILE")]
    pub candidates: String,

    /// File with reference CIDR subnets, one per line
    #[arg(short = 's', long = "subnets", value_name = "SUBNET_FILE")]
    pub subnets: String,

    /// Report entries found in at least one subnet
    #[arg(short = 'f', long = "found")]
    pub found: bool,

    /// Report entries not found in any subnet
    #[arg(long = "nf", visible_alias = "not-found")]
    pub not_found: bool,

    /// Keep input order instead of printing subnets before addresses
    #[arg(long)]
    pub input_order: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Print a count summary to stderr when done
    #[arg(long)]
    pub summary: bool,

    /// log4rs configuration file
    #[arg(long, value_name = "FILE", default_value = "log4rs.yml")]
    pub log_config: String,

    /// More stderr logging when no log4rs file is found, can be repeated
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Validated run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub candidates_file: String,
    pub subnets_file: String,
    pub mode: Mode,
    pub order: OutputOrder,
    pub format: OutputFormat,
    pub summary: bool,
    pub log_config: String,
    pub verbose: u8,
}

impl From<CommandLine> for Config {
    fn from(cmd: CommandLine) -> Self {
        Config {
            candidates_file: cmd.candidates,
            subnets_file: cmd.subnets,
            mode: if cmd.found {
                Mode::ReportFound
            } else {
                Mode::ReportNotFound
            },
            order: if cmd.input_order {
                OutputOrder::InputOrder
            } else {
                OutputOrder::Grouped
            },
            format: cmd.format,
            summary: cmd.summary,
            log_config: cmd.log_config,
            verbose: cmd.verbose,
        }
    }
}

/// Rewrite `-ci`/`-nf` (and `-ci=path`) to `--ci`/`--nf`. Stops at `--`.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut after_separator = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if after_separator {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                after_separator = true;
                return arg;
            }
            let Some(flag) = text.strip_prefix('-') else {
                return arg;
            };
            let name = flag.split('=').next().unwrap_or(flag);
            if !flag.starts_with('-') && LEGACY_FLAGS.contains(&name) {
                OsString::from(format!("-{text}"))
            } else {
                arg
            }
        })
        .collect()
}

/// Parse a full argv (program name first) into a [`Config`].
pub fn parse_args<I, T>(args: I) -> Result<Config, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let cmd = CommandLine::try_parse_from(normalize_args(args))?;
    log::trace!("{cmd:?}");
    Ok(cmd.into())
}
