//! Matching a candidate against the whole reference set.

use super::containment::ip_in_subnet;
use crate::models::Ipv4;
use colored::Colorize;

/// Reference subnets in file order. Read-only once loaded.
#[derive(Debug, Clone, Default)]
pub struct ReferenceSet {
    pub subnets: Vec<String>,
}

impl ReferenceSet {
    /// Build the set, warning once about each line that will never match.
    pub fn new(subnets: Vec<String>) -> ReferenceSet {
        for subnet in &subnets {
            if let Err(e) = Ipv4::new(subnet) {
                log::warn!(
                    "Reference subnet {subnet} is not valid CIDR and will never match: {e}",
                    subnet = subnet.on_red()
                );
            }
        }
        log::debug!("Loaded {} reference subnets", subnets.len());
        ReferenceSet { subnets }
    }

    pub fn len(&self) -> usize {
        self.subnets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subnets.is_empty()
    }

    /// True if `candidate` is contained in at least one reference subnet.
    pub fn found_in_any(&self, candidate: &str) -> bool {
        found_in_any(candidate, &self.subnets)
    }
}

/// Linear scan over `subnets`, stopping at the first match.
pub fn found_in_any(candidate: &str, subnets: &[String]) -> bool {
    match subnets.iter().find(|subnet| ip_in_subnet(candidate, subnet)) {
        Some(subnet) => {
            log::trace!("{candidate} matched {subnet}");
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(lines: &[&str]) -> ReferenceSet {
        ReferenceSet::new(lines.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_found_in_any() {
        let set = refs(&["192.168.0.0/16", "10.0.0.0/24"]);
        assert!(set.found_in_any("10.0.0.5"));
        assert!(set.found_in_any("192.168.44.1"));
        assert!(!set.found_in_any("10.0.1.5"));
    }

    #[test]
    fn test_empty_reference_set() {
        let set = refs(&[]);
        assert!(set.is_empty());
        assert!(!set.found_in_any("10.0.0.5"));
        assert!(!set.found_in_any("10.0.0.0/8"));
    }

    #[test]
    fn test_malformed_reference_does_not_stop_scan() {
        let set = refs(&["bogus", "10.0.0.0/33", "10.0.0.0/24"]);
        assert_eq!(set.len(), 3);
        assert!(set.found_in_any("10.0.0.9"));
    }

    #[test]
    fn test_order_does_not_change_result() {
        let a = refs(&["10.0.0.0/24", "172.16.0.0/12"]);
        let b = refs(&["172.16.0.0/12", "10.0.0.0/24"]);
        for candidate in ["10.0.0.1", "172.20.1.1", "8.8.8.8", "10.0.0.0/30"] {
            assert_eq!(a.found_in_any(candidate), b.found_in_any(candidate));
        }
    }

    #[test]
    fn test_duplicates_are_harmless() {
        let set = refs(&["10.0.0.0/24", "10.0.0.0/24"]);
        assert!(set.found_in_any("10.0.0.1"));
    }
}
