//! Aggregation and diff processing.
//!
//! - [`supernets`] - Supernet enumeration, subnet and host listings
//! - [`aggregate`] - Candidate supernets and their coverage
//! - [`top_n`] - Bounded best-N candidate selection
//! - [`differ`] - One-directional filter-list diff
//! - [`convert`] - ACL to prefix-list conversion

pub mod aggregate;
pub mod convert;
pub mod differ;
pub mod supernets;
pub mod top_n;

// Re-export public functions
pub use aggregate::{
    aggregate, aggregate_lines, classify_lines, classify_tokens, Aggregation, CoverageMap,
    CoverageRecord,
};
pub use convert::acl_to_prefix_list;
pub use differ::{symmetric_diff, DiffRecord, FilterListDiffer};
pub use supernets::{all_subnets_possible, hosts, supernets};
pub use top_n::{select_top_n, TopNEntry, DEFAULT_TOP_N};
