//! Prefix length to subnet mask and inverse mask lookup.
//!
//! The table has one row per prefix length 0..=32 and is built on first use.

use super::network::{get_cidr_mask, MAX_LENGTH};
use lazy_static::lazy_static;
use std::net::Ipv4Addr;

/// One row of the mask table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MaskEntry {
    cidr: u8,
    mask: Ipv4Addr,
    inverse: Ipv4Addr,
}

lazy_static! {
    static ref MASK_TABLE: Vec<MaskEntry> = (0..=MAX_LENGTH)
        .map(|cidr| {
            let bits = get_cidr_mask(cidr).unwrap_or(u32::MAX);
            MaskEntry {
                cidr,
                mask: Ipv4Addr::from(bits),
                inverse: Ipv4Addr::from(!bits),
            }
        })
        .collect();
}

/// Dotted subnet mask for a prefix length.
pub fn mask_for_prefix(cidr: u8) -> Option<Ipv4Addr> {
    MASK_TABLE.get(cidr as usize).map(|e| e.mask)
}

/// Resolve a wildcard mask such as `0.0.0.255` to its prefix length.
///
/// Non-contiguous wildcards have no row and return `None`.
pub fn prefix_from_inverse_mask(inverse: &str) -> Option<u8> {
    let inverse: Ipv4Addr = inverse.trim().parse().ok()?;
    MASK_TABLE
        .iter()
        .find(|e| e.inverse == inverse)
        .map(|e| e.cidr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        let table: &[MaskEntry] = &MASK_TABLE;
        assert_eq!(table.len(), 33);
        assert_eq!(table[0].mask, Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(table[0].inverse, Ipv4Addr::new(255, 255, 255, 255));
        assert_eq!(table[32].mask, Ipv4Addr::new(255, 255, 255, 255));
        assert_eq!(table[32].inverse, Ipv4Addr::new(0, 0, 0, 0));
        for (i, e) in table.iter().enumerate() {
            assert_eq!(e.cidr as usize, i);
        }
    }

    #[test]
    fn test_prefix_from_inverse_mask() {
        assert_eq!(prefix_from_inverse_mask("0.0.0.255"), Some(24));
        assert_eq!(prefix_from_inverse_mask("0.0.255.255"), Some(16));
        assert_eq!(prefix_from_inverse_mask("0.0.0.0"), Some(32));
        assert_eq!(prefix_from_inverse_mask("0.0.0.3"), Some(30));
        assert_eq!(prefix_from_inverse_mask("255.255.255.255"), Some(0));
        assert_eq!(prefix_from_inverse_mask("0.0.255.0"), None);
        assert_eq!(prefix_from_inverse_mask("garbage"), None);
    }

    #[test]
    fn test_mask_lookups() {
        assert_eq!(mask_for_prefix(24), Some(Ipv4Addr::new(255, 255, 255, 0)));
        assert_eq!(mask_for_prefix(22), Some(Ipv4Addr::new(255, 255, 252, 0)));
        assert_eq!(mask_for_prefix(33), None);
    }
}
