//! IPv4 network arithmetic.
//!
//! Provides [`Network`], an IPv4 address with a prefix length, along with the
//! bit helpers used by the supernet enumeration and the aggregation engine.

use crate::error::ToolError;
use crate::models::InputToken;
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

lazy_static! {
    // Four dot-decimal octets with an optional /prefix. Range checks happen after the match.
    static ref CIDR_RE: Regex =
        Regex::new(r"^(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})(?:/(\d{1,2}))?$")
            .expect("Invalid Regex?");
}

/// Convert a prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use net_cli_tools::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), Some(0xFFFFFF00));
/// assert_eq!(get_cidr_mask(33), None);
/// ```
pub fn get_cidr_mask(len: u8) -> Option<u32> {
    if len > MAX_LENGTH {
        return None;
    }
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;
    let mask = (all_bits >> right_len) << right_len;
    Some(mask as u32)
}

/// Clear every bit of `addr` beyond `len`.
///
/// Lengths above 32 are treated as 32, so a host address is returned unchanged.
pub fn canonicalize(addr: Ipv4Addr, len: u8) -> Ipv4Addr {
    let mask = get_cidr_mask(len.min(MAX_LENGTH)).unwrap_or(u32::MAX);
    Ipv4Addr::from(u32::from(addr) & mask)
}

/// True if `member` lies entirely inside `candidate`.
pub fn contains(candidate: &Network, member: &Network) -> bool {
    candidate.mask <= member.mask && canonicalize(member.addr, candidate.mask) == candidate.addr
}

/// Classify a raw token as a valid network or an invalid string.
///
/// A bare address is taken as a /32. Valid networks come back canonical.
pub fn parse_cidr(token: &str) -> InputToken {
    match Network::new(token) {
        Ok(network) => InputToken::Valid {
            raw: token.to_string(),
            network,
        },
        Err(e) => {
            log::debug!("parse_cidr() rejected token: {e}");
            InputToken::Invalid(token.to_string())
        }
    }
}

/// Parse a dotted quad with no prefix part.
pub fn parse_addr(text: &str) -> Option<Ipv4Addr> {
    let caps = CIDR_RE.captures(text.trim())?;
    if caps.get(5).is_some() {
        return None;
    }
    octets_to_addr(&caps)
}

fn octets_to_addr(caps: &regex::Captures) -> Option<Ipv4Addr> {
    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = caps.get(i + 1)?.as_str().parse().ok()?;
    }
    Some(Ipv4Addr::from(octets))
}

/// IPv4 network in CIDR notation.
///
/// Ordering is by address, then prefix length.
#[derive(Eq, Ord, PartialOrd, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Network {
    /// The network address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Network::new(&s).map_err(de::Error::custom)
    }
}

impl Network {
    /// Create a canonical [`Network`] from a CIDR string (e.g., "10.0.0.0/24").
    ///
    /// A missing prefix means /32. Host bits are cleared.
    pub fn new(addr_cidr: &str) -> Result<Network, ToolError> {
        let addr_cidr = addr_cidr.trim();
        let caps = CIDR_RE
            .captures(addr_cidr)
            .ok_or_else(|| ToolError::Parse(addr_cidr.to_string()))?;
        let addr = octets_to_addr(&caps).ok_or_else(|| ToolError::Parse(addr_cidr.to_string()))?;
        let mask = match caps.get(5) {
            Some(m) => m
                .as_str()
                .parse::<u8>()
                .map_err(|_| ToolError::Parse(addr_cidr.to_string()))?,
            None => MAX_LENGTH,
        };
        Network::from_parts(addr, mask).ok_or_else(|| ToolError::Parse(addr_cidr.to_string()))
    }

    /// Build a canonical network, `None` if the prefix is longer than 32.
    pub fn from_parts(addr: Ipv4Addr, mask: u8) -> Option<Network> {
        if mask > MAX_LENGTH {
            return None;
        }
        Some(Network {
            addr: canonicalize(addr, mask),
            mask,
        })
    }

    /// True for the all-zeros address, whatever the prefix.
    pub fn is_unspecified(&self) -> bool {
        self.addr.is_unspecified()
    }

    /// Get the highest (broadcast) address in the network.
    pub fn hi(&self) -> Ipv4Addr {
        let mask = get_cidr_mask(self.mask).unwrap_or(u32::MAX);
        Ipv4Addr::from(u32::from(self.addr) | !mask)
    }

    /// Get the lowest (network) address in the network.
    pub fn lo(&self) -> Ipv4Addr {
        canonicalize(self.addr, self.mask)
    }

    /// Number of addresses covered by the network.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask.min(MAX_LENGTH))
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
