//! Supernet enumeration and subnet listings.

use crate::models::{canonicalize, mask_for_prefix, Network, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Every network with a shorter prefix that contains `network`.
///
/// Starts at the immediate parent and walks down to /0 when
/// `include_default` is set, otherwise stops at /1.
pub fn supernets(network: &Network, include_default: bool) -> Vec<Network> {
    let floor = if include_default { 0 } else { 1 };
    (floor..network.mask)
        .rev()
        .map(|p| Network {
            addr: canonicalize(network.addr, p),
            mask: p,
        })
        .collect()
}

/// Every network from /0 to /32 that holds the address of `network`,
/// shortest prefix first, paired with its dotted subnet mask.
pub fn all_subnets_possible(network: &Network) -> Vec<(Network, Ipv4Addr)> {
    let host = Network {
        addr: network.addr,
        mask: MAX_LENGTH,
    };
    let mut subnets = supernets(&host, true);
    subnets.reverse();
    subnets.push(host);
    subnets
        .into_iter()
        .filter_map(|n| mask_for_prefix(n.mask).map(|mask| (n, mask)))
        .collect()
}

/// Iterate over every address in `network`, network and broadcast included.
pub fn hosts(network: &Network) -> impl Iterator<Item = Ipv4Addr> {
    let lo = u32::from(network.lo());
    let hi = u32::from(network.hi());
    (lo..=hi).map(Ipv4Addr::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net(s: &str) -> Network {
        Network::new(s).unwrap()
    }

    #[test]
    fn test_supernets_without_default() {
        let list = supernets(&net("10.1.2.0/24"), false);
        assert_eq!(list.len(), 23);
        assert_eq!(list[0], net("10.1.2.0/23"));
        assert_eq!(list[1], net("10.1.0.0/22"));
        assert_eq!(list.last(), Some(&net("0.0.0.0/1")));
        assert!(list.iter().all(|n| n.mask != 0));
    }

    #[test]
    fn test_supernets_with_default() {
        let list = supernets(&net("10.1.2.0/24"), true);
        assert_eq!(list.len(), 24);
        assert_eq!(list.iter().filter(|n| n.mask == 0).count(), 1);
        assert_eq!(list.last(), Some(&net("0.0.0.0/0")));
    }

    #[test]
    fn test_supernets_edges() {
        assert!(supernets(&net("0.0.0.0/0"), true).is_empty());
        assert!(supernets(&net("128.0.0.0/1"), false).is_empty());
        assert_eq!(supernets(&net("128.0.0.0/1"), true), vec![net("0.0.0.0/0")]);
        assert_eq!(supernets(&net("10.1.1.1/32"), true).len(), 32);
    }

    #[test]
    fn test_all_subnets_possible() {
        let list = all_subnets_possible(&net("192.168.1.0/24"));
        assert_eq!(list.len(), 33);
        assert_eq!(list[0].0, net("0.0.0.0/0"));
        assert_eq!(list[24], (net("192.168.1.0/24"), Ipv4Addr::new(255, 255, 255, 0)));
        assert_eq!(list[32].0.to_string(), "192.168.1.0/32");
    }

    #[test]
    fn test_hosts() {
        let all: Vec<Ipv4Addr> = hosts(&net("10.0.0.0/30")).collect();
        assert_eq!(
            all,
            vec![
                Ipv4Addr::new(10, 0, 0, 0),
                Ipv4Addr::new(10, 0, 0, 1),
                Ipv4Addr::new(10, 0, 0, 2),
                Ipv4Addr::new(10, 0, 0, 3),
            ]
        );
        assert_eq!(hosts(&net("10.0.0.9/32")).count(), 1);
        assert_eq!(hosts(&net("255.255.255.0/24")).last(), Some(Ipv4Addr::new(255, 255, 255, 255)));
    }
}
