//! JSON report of an aggregation run.

use crate::models::Network;
use crate::processing::{Aggregation, CoverageRecord, TopNEntry};
use serde::Serialize;
use std::collections::BTreeMap;

/// One ranked candidate with its matched count spelled out.
#[derive(Debug, Serialize)]
pub struct RankedCandidate<'a> {
    pub network: Network,
    pub matched_count: usize,
    pub matched: &'a [String],
    pub unmatched: &'a [String],
}

/// Everything a report writer needs from one run.
#[derive(Debug, Serialize)]
pub struct AggregationReport<'a> {
    pub total_valid: usize,
    pub good: Vec<&'a str>,
    pub bad: Vec<&'a str>,
    pub top_n: Vec<RankedCandidate<'a>>,
    pub candidates: BTreeMap<String, &'a CoverageRecord>,
}

impl<'a> AggregationReport<'a> {
    pub fn new(aggregation: &'a Aggregation, top_n: &'a [TopNEntry]) -> AggregationReport<'a> {
        AggregationReport {
            total_valid: aggregation.valid_count(),
            good: aggregation.good(),
            bad: aggregation.bad(),
            top_n: top_n
                .iter()
                .map(|e| RankedCandidate {
                    network: e.network,
                    matched_count: e.coverage.matched_count(),
                    matched: &e.coverage.matched,
                    unmatched: &e.coverage.unmatched,
                })
                .collect(),
            candidates: aggregation
                .coverage
                .iter()
                .map(|(n, rec)| (n.to_string(), rec))
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
