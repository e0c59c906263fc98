//! Containment of one candidate in one reference subnet.
//!
//! Both sides arrive as raw text and are parsed here, so every malformed
//! value simply means "not contained".

use crate::models::Ipv4;
use std::net::Ipv4Addr;

fn parse_subnet(text: &str) -> Option<Ipv4> {
    match Ipv4::new(text) {
        Ok(subnet) => Some(subnet),
        Err(e) => {
            log::trace!("not a subnet {text:?}: {e}");
            None
        }
    }
}

/// Check whether an IP address or subnet is within a reference subnet.
///
/// Subnet candidates match when either block's network address lies inside
/// the other one, so nesting is symmetric. Address candidates match when the
/// reference range holds them.
pub fn ip_in_subnet(candidate: &str, reference: &str) -> bool {
    match parse_subnet(candidate) {
        Some(candidate_subnet) => {
            let Some(reference_subnet) = parse_subnet(reference) else {
                return false;
            };
            reference_subnet.contains(candidate_subnet.addr)
                || candidate_subnet.contains(reference_subnet.addr)
        }
        None => {
            let Ok(addr) = candidate.trim().parse::<Ipv4Addr>() else {
                return false;
            };
            match parse_subnet(reference) {
                Some(reference_subnet) => reference_subnet.contains(addr),
                None => false,
            }
        }
    }
}
