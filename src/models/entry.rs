//! Candidate entry classification.

use regex::Regex;
use serde::Serialize;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Dotted-quad shape: four groups of one to three ASCII digits.
static ADDRESS_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_address_regex() -> &'static Regex {
    ADDRESS_REGEX.get_or_init(|| {
        Regex::new(r"^[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}$").expect("Invalid Regex")
    })
}

/// True if `text` is a bare IPv4 address.
///
/// The shape must match the dotted-quad pattern and every group must fit in a
/// byte without leading zeros, so `999.1.1.1` and `01.2.3.4` are rejected.
pub fn is_valid_ip(text: &str) -> bool {
    get_address_regex().is_match(text) && text.parse::<Ipv4Addr>().is_ok()
}

/// Structural kind of an [`Entry`].
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Address,
    Subnet,
    Invalid,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            EntryKind::Address => "address",
            EntryKind::Subnet => "subnet",
            EntryKind::Invalid => "invalid",
        };
        write!(f, "{name}")
    }
}

/// One candidate line, classified once at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A bare IPv4 address that passed validation.
    Address(String),
    /// Anything containing `/`. The CIDR may still fail to parse later.
    Subnet(String),
    /// Bare text that is not a valid IPv4 address.
    Invalid(String),
}

impl Entry {
    /// Classify a candidate line. Surrounding whitespace is ignored.
    pub fn classify(line: &str) -> Entry {
        let text = line.trim();
        if text.contains('/') {
            Entry::Subnet(text.to_string())
        } else if is_valid_ip(text) {
            Entry::Address(text.to_string())
        } else {
            Entry::Invalid(text.to_string())
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Entry::Address(text) | Entry::Subnet(text) | Entry::Invalid(text) => text,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Address(_) => EntryKind::Address,
            Entry::Subnet(_) => EntryKind::Subnet,
            Entry::Invalid(_) => EntryKind::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_ip() {
        assert!(is_valid_ip("10.0.0.5"));
        assert!(is_valid_ip("0.0.0.0"));
        assert!(is_valid_ip("255.255.255.255"));
        assert!(!is_valid_ip("300.1.1.1"));
        assert!(!is_valid_ip("999.1.1.1"));
        assert!(!is_valid_ip("01.2.3.4"));
        assert!(!is_valid_ip("1.2.3"));
        assert!(!is_valid_ip("1.2.3.4.5"));
        assert!(!is_valid_ip("1234.1.1.1"));
        assert!(!is_valid_ip("a.b.c.d"));
        assert!(!is_valid_ip(""));
        assert!(!is_valid_ip("::1"));
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Arabic-Indic digits would match a Unicode \d.
        assert!(!is_valid_ip("١.٢.٣.٤"));
    }

    #[test]
    fn test_classify_by_slash() {
        assert_eq!(
            Entry::classify("10.0.0.0/24"),
            Entry::Subnet("10.0.0.0/24".to_string())
        );
        // Still a subnet even though it will never parse.
        assert_eq!(
            Entry::classify("not/a-cidr"),
            Entry::Subnet("not/a-cidr".to_string())
        );
        assert_eq!(
            Entry::classify("  10.0.0.5 \t"),
            Entry::Address("10.0.0.5".to_string())
        );
        assert_eq!(
            Entry::classify("300.1.1.1"),
            Entry::Invalid("300.1.1.1".to_string())
        );
    }

    #[test]
    fn test_kind_and_text() {
        let entry = Entry::classify("hostname");
        assert_eq!(entry.kind(), EntryKind::Invalid);
        assert_eq!(entry.text(), "hostname");
        assert_eq!(Entry::classify("1.1.1.1").kind().to_string(), "address");
        assert_eq!(Entry::classify("1.1.1.0/24").kind().to_string(), "subnet");
    }
}
