//! Domain models for the aggregation and diff pipelines.
//!
//! - [`Network`] - IPv4 network with CIDR notation support
//! - [`InputToken`] - a raw token classified as valid or invalid
//! - [`FilterListModel`] - parsed ACL or prefix-list

mod filter_list;
mod mask_table;
mod network;
mod token;

// Re-export public types
pub use filter_list::{Action, FilterListModel, FilterStatement, ListKind, ANY_KEY};
pub use mask_table::{mask_for_prefix, prefix_from_inverse_mask};
pub use network::{
    canonicalize, contains, get_cidr_mask, parse_addr, parse_cidr, Network, MAX_LENGTH,
};
pub use token::InputToken;
