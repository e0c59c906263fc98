//! Candidate checking logic.
//!
//! This module contains the business logic for membership checks:
//! - [`containment`] - One candidate against one reference subnet
//! - [`evaluator`] - One candidate against the whole reference set
//! - [`policy`] - Found / not-found reporting and output ordering

mod containment;
mod evaluator;
mod policy;

// Re-export public functions
pub use containment::ip_in_subnet;
pub use evaluator::{found_in_any, ReferenceSet};
pub use policy::{check_entries, evaluate, Classified, OutputOrder, Report, Status, Summary};
