//! IPv4 aggregation and ACL / prefix-list diff tools.
//!
//! Two independent pipelines:
//! - aggregation: [`models::parse_cidr`] -> [`processing::supernets`] ->
//!   [`processing::aggregate`] -> [`processing::select_top_n`]
//! - diff: [`models::FilterListModel::parse`] -> [`processing::FilterListDiffer`]
//!
//! Neither pipeline touches the filesystem; [`cli`] and [`output`] do.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::ToolError;
