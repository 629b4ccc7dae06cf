//! Bounded best-N selection over aggregation candidates.

use crate::models::Network;
use crate::processing::aggregate::{CoverageMap, CoverageRecord};
use serde::Serialize;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::net::Ipv4Addr;

/// Number of candidates kept when no size is configured.
pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopNEntry {
    pub network: Network,
    pub coverage: CoverageRecord,
}

/// Higher ranks first: more matches, then shorter prefix, then lower address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rank {
    matched: usize,
    mask: Reverse<u8>,
    addr: Reverse<Ipv4Addr>,
}

impl Rank {
    fn of(network: &Network, record: &CoverageRecord) -> Rank {
        Rank {
            matched: record.matched_count(),
            mask: Reverse(network.mask),
            addr: Reverse(network.addr),
        }
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.matched
            .cmp(&other.matched)
            .then_with(|| self.mask.cmp(&other.mask))
            .then_with(|| self.addr.cmp(&other.addr))
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Keep the `n` candidates that cover the most inputs, best first.
///
/// The heap holds at most `n` entries with the weakest on top; a challenger
/// only replaces it when it ranks strictly higher.
pub fn select_top_n(coverage: &CoverageMap, n: usize) -> Vec<TopNEntry> {
    log::debug!("select_top_n() n={n} candidates={}", coverage.len());
    let cap = n.min(coverage.len());
    if cap == 0 {
        return Vec::new();
    }

    let mut heap: BinaryHeap<Reverse<(Rank, Network)>> = BinaryHeap::with_capacity(cap + 1);
    for (network, record) in coverage {
        let rank = Rank::of(network, record);
        if heap.len() < cap {
            heap.push(Reverse((rank, *network)));
        } else if heap
            .peek()
            .is_some_and(|Reverse((weakest, _))| rank > *weakest)
        {
            heap.pop();
            heap.push(Reverse((rank, *network)));
        }
    }

    // Ascending order of Reverse is descending rank.
    heap.into_sorted_vec()
        .into_iter()
        .filter_map(|Reverse((_, network))| {
            coverage.get(&network).map(|record| TopNEntry {
                network,
                coverage: record.clone(),
            })
        })
        .collect()
}
