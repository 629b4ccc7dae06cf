//! Candidate supernet aggregation.
//!
//! Given a list of networks and a prefix-length window, finds every supernet
//! of the inputs that falls inside the window and records which inputs each
//! one covers.

use crate::error::ToolError;
use crate::models::{contains, parse_cidr, InputToken, Network, MAX_LENGTH};
use crate::processing::supernets::supernets;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Inputs covered and not covered by one candidate supernet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoverageRecord {
    pub matched: Vec<String>,
    pub unmatched: Vec<String>,
}

impl CoverageRecord {
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }
}

/// Candidate supernet -> coverage, ordered by network.
pub type CoverageMap = BTreeMap<Network, CoverageRecord>;

/// Result of one aggregation run.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    /// Every input token in input order.
    pub tokens: Vec<InputToken>,
    pub coverage: CoverageMap,
}

impl Aggregation {
    /// Raw text of the valid tokens, in input order.
    pub fn good(&self) -> Vec<&str> {
        self.tokens
            .iter()
            .filter(|t| t.is_valid())
            .map(InputToken::raw)
            .collect()
    }

    /// Raw text of the rejected tokens, in input order.
    pub fn bad(&self) -> Vec<&str> {
        self.tokens
            .iter()
            .filter(|t| !t.is_valid())
            .map(InputToken::raw)
            .collect()
    }

    pub fn valid_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_valid()).count()
    }
}

/// Classify every token in order.
pub fn classify_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<InputToken> {
    tokens.iter().map(|t| parse_cidr(t.as_ref())).collect()
}

/// Split lines on whitespace and classify every word.
pub fn classify_lines<S: AsRef<str>>(lines: &[S]) -> Vec<InputToken> {
    lines
        .iter()
        .flat_map(|line| line.as_ref().split_whitespace())
        .map(parse_cidr)
        .collect()
}

fn check_bounds(lower: u8, upper: u8) -> Result<(), ToolError> {
    if lower > MAX_LENGTH || upper > MAX_LENGTH || lower > upper {
        return Err(ToolError::InvalidBound { lower, upper });
    }
    Ok(())
}

/// Aggregate a flat list of tokens.
pub fn aggregate<S: AsRef<str>>(
    tokens: &[S],
    lower: u8,
    upper: u8,
) -> Result<Aggregation, ToolError> {
    aggregate_classified(classify_tokens(tokens), lower, upper)
}

/// Aggregate every whitespace separated word of `lines`.
pub fn aggregate_lines<S: AsRef<str>>(
    lines: &[S],
    lower: u8,
    upper: u8,
) -> Result<Aggregation, ToolError> {
    aggregate_classified(classify_lines(lines), lower, upper)
}

fn aggregate_classified(
    tokens: Vec<InputToken>,
    lower: u8,
    upper: u8,
) -> Result<Aggregation, ToolError> {
    check_bounds(lower, upper)?;
    log::debug!("#Start aggregate() window /{lower}../{upper}");

    let valid: Vec<(&str, &Network)> = tokens
        .iter()
        .filter_map(|t| t.network().map(|n| (t.raw(), n)))
        .collect();
    for bad in tokens.iter().filter(|t| !t.is_valid()) {
        log::warn!("Rejected token {:?}", bad.raw());
    }

    let candidates: BTreeSet<Network> = valid
        .iter()
        .filter(|(_, n)| !n.is_unspecified())
        .flat_map(|(_, n)| supernets(n, false))
        .filter(|c| c.mask >= lower && c.mask <= upper)
        .collect();

    let coverage: CoverageMap = candidates
        .into_iter()
        .map(|candidate| {
            let (matched, unmatched): (Vec<_>, Vec<_>) =
                valid.iter().partition(|(_, n)| contains(&candidate, n));
            let record = CoverageRecord {
                matched: matched.iter().map(|(raw, _)| raw.to_string()).collect(),
                unmatched: unmatched.iter().map(|(raw, _)| raw.to_string()).collect(),
            };
            (candidate, record)
        })
        .collect();

    log::info!(
        "# Got valid={} invalid={} candidates={}",
        valid.len(),
        tokens.len() - valid.len(),
        coverage.len()
    );

    Ok(Aggregation { tokens, coverage })
}
