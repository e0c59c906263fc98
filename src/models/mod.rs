//! Domain models for subnet membership checks.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Ipv4`] - CIDR subnet with mask arithmetic
//! - [`Entry`] - A classified candidate line
//! - [`Mode`] - Found / not-found reporting mode

mod entry;
mod ipv4;
mod mode;

// Re-export public types
pub use entry::{is_valid_ip, Entry, EntryKind};
pub use ipv4::Ipv4;
pub use mode::Mode;
