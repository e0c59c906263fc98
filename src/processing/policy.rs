//! Deciding which candidates are emitted, and in what order.

use super::evaluator::ReferenceSet;
use crate::models::{Entry, EntryKind, Mode};
use serde::Serialize;

/// Outcome of checking one candidate.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Found,
    NotFound,
    Invalid,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Status::Found => "found",
            Status::NotFound => "not_found",
            Status::Invalid => "invalid",
        };
        write!(f, "{name}")
    }
}

/// A candidate with its verdict.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub entry: String,
    pub kind: EntryKind,
    pub status: Status,
}

impl Classified {
    /// The plain output line for this candidate.
    pub fn line(&self) -> String {
        match self.status {
            Status::Invalid => format!("{} is not a valid IP address", self.entry),
            _ => self.entry.clone(),
        }
    }

    /// Invalid entries are reported under every mode.
    pub fn should_emit(&self, mode: Mode) -> bool {
        match self.status {
            Status::Invalid => true,
            Status::Found => mode.should_report(true),
            Status::NotFound => mode.should_report(false),
        }
    }
}

/// Output ordering of emitted candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputOrder {
    /// Subnet candidates first, then addresses and invalid lines.
    #[default]
    Grouped,
    /// Input line order.
    InputOrder,
}

/// Counts over every candidate, emitted or not.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub candidates: usize,
    pub found: usize,
    pub not_found: usize,
    pub invalid: usize,
}

/// Emitted candidates plus the run summary.
#[derive(Serialize, Debug, Clone, Default)]
pub struct Report {
    pub results: Vec<Classified>,
    pub summary: Summary,
}

impl Report {
    pub fn lines(&self) -> Vec<String> {
        self.results.iter().map(Classified::line).collect()
    }
}

/// Classify and check a single candidate.
pub fn evaluate(entry: &Entry, references: &ReferenceSet) -> Classified {
    let status = match entry {
        Entry::Invalid(_) => Status::Invalid,
        Entry::Address(text) | Entry::Subnet(text) => {
            if references.found_in_any(text) {
                Status::Found
            } else {
                Status::NotFound
            }
        }
    };
    Classified {
        entry: entry.text().to_string(),
        kind: entry.kind(),
        status,
    }
}

/// Check every candidate against the reference set and keep those `mode` reports.
pub fn check_entries(
    candidates: &[String],
    references: &ReferenceSet,
    mode: Mode,
    order: OutputOrder,
) -> Report {
    let entries: Vec<Entry> = candidates.iter().map(|c| Entry::classify(c)).collect();

    let ordered: Vec<&Entry> = match order {
        OutputOrder::InputOrder => entries.iter().collect(),
        OutputOrder::Grouped => entries
            .iter()
            .filter(|e| matches!(e, Entry::Subnet(_)))
            .chain(entries.iter().filter(|e| !matches!(e, Entry::Subnet(_))))
            .collect(),
    };

    let mut report = Report::default();
    for entry in ordered {
        let classified = evaluate(entry, references);
        report.summary.candidates += 1;
        match classified.status {
            Status::Found => report.summary.found += 1,
            Status::NotFound => report.summary.not_found += 1,
            Status::Invalid => {
                log::debug!("Invalid candidate: {}", classified.entry);
                report.summary.invalid += 1;
            }
        }
        if classified.should_emit(mode) {
            report.results.push(classified);
        }
    }
    report
}
