//! Classified input tokens.

use super::Network;

/// A raw input string after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputToken {
    /// Parsed network together with the text it came from.
    Valid { raw: String, network: Network },
    /// Text that is not an IPv4 address or CIDR.
    Invalid(String),
}

impl InputToken {
    /// The original text of the token.
    pub fn raw(&self) -> &str {
        match self {
            InputToken::Valid { raw, .. } => raw,
            InputToken::Invalid(raw) => raw,
        }
    }

    pub fn network(&self) -> Option<&Network> {
        match self {
            InputToken::Valid { network, .. } => Some(network),
            InputToken::Invalid(_) => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, InputToken::Valid { .. })
    }
}
