//! Error types for the aggregation and diff pipelines.

use crate::models::ListKind;

/// Failures that are surfaced to the caller instead of being skipped.
///
/// Malformed tokens and statement lines are not errors: they are logged and
/// classified or skipped where they occur.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ToolError {
    #[error("Invalid CIDR '{0}'")]
    Parse(String),

    #[error("Prefix length bounds out of range: lower={lower} upper={upper}")]
    InvalidBound { lower: u8, upper: u8 },

    #[error("Expected a {expected} to compare with but received a {found}")]
    TypeMismatch { expected: ListKind, found: ListKind },

    #[error("A comparison has already been run on this differ")]
    AlreadyCompared,
}
