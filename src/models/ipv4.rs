//! IPv4 CIDR subnets.
//!
//! Provides the [`Ipv4`] struct for representing a CIDR subnet, along with the
//! mask arithmetic used by the containment checks.

use std::error::Error;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
const MAX_LENGTH: u8 = 32;

/// Mask bits for a prefix length, with anything past 32 clamped to a full mask.
fn prefix_bits(len: u8) -> u32 {
    let right_len = u32::from(MAX_LENGTH.saturating_sub(len));
    u32::MAX.checked_shl(right_len).unwrap_or(0)
}

/// A CIDR subnet. The address is always the network base of the block.
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub struct Ipv4 {
    /// The network address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// Parse a CIDR string (e.g. "10.0.0.0/24").
    ///
    /// Host bits are cleared, so "10.0.0.5/24" yields `10.0.0.0/24`. The prefix
    /// is decimal digits only; leading zeros are allowed ("/024" is `/24`).
    pub fn new(addr_cidr: &str) -> Result<Ipv4, Box<dyn Error>> {
        let addr_cidr = addr_cidr.trim();
        let (addr, mask) = addr_cidr
            .split_once('/')
            .ok_or_else(|| format!("Missing '/' in {addr_cidr}"))?;
        if mask.contains('/') {
            return Err(format!("Invalid address/mask {addr_cidr}").into());
        }
        let addr: Ipv4Addr = addr
            .parse()
            .map_err(|_| format!("Invalid address {addr}"))?;
        if mask.is_empty() || !mask.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("Invalid subnet mask {mask}").into());
        }
        let mask: u8 = mask
            .parse()
            .map_err(|_| format!("Network length is too long: {mask}"))?;
        if mask > MAX_LENGTH {
            return Err("Network length is too long".into());
        }
        Ok(Ipv4 {
            addr: Ipv4Addr::from(u32::from(addr) & prefix_bits(mask)),
            mask,
        })
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        self.addr
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | !prefix_bits(self.mask))
    }

    /// True when `addr` lies between the network and broadcast address inclusive.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.lo() <= addr && addr <= self.hi()
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
