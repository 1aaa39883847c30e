//! Graph construction from aggregated interaction pairs

use std::collections::BTreeMap;

use crate::config::AnalysisConfig;
use crate::data::AggregatedPair;
use crate::error::AnalysisError;
use crate::graph::{EdgeAttrs, SocialGraph};

/// Guards the distance denominator when every pair was observed exactly
/// once.
const DENOM_EPSILON: f64 = 1e-9;

/// Builder for incrementally assembling a relationship graph from
/// aggregated interaction counts.
pub struct GraphBuilder {
    min_length: f64,
    max_length: f64,

    /// Accumulated counts keyed by unordered pair, endpoints sorted
    counts: BTreeMap<(String, String), u32>,
}

impl GraphBuilder {
    /// Create a builder using the configured edge-length bounds.
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            min_length: config.min_length,
            max_length: config.max_length,
            counts: BTreeMap::new(),
        }
    }

    /// Record an aggregated pair. Duplicate pairs fold by summing counts.
    /// Self-pairs and zero counts are dropped at ingestion.
    pub fn add_pair(&mut self, member_a: &str, member_b: &str, count: u32) {
        if member_a == member_b {
            log::debug!("dropping self-pair for member {}", member_a);
            return;
        }
        if count == 0 {
            log::debug!("dropping zero-count pair {} / {}", member_a, member_b);
            return;
        }

        let key = if member_a < member_b {
            (member_a.to_string(), member_b.to_string())
        } else {
            (member_b.to_string(), member_a.to_string())
        };
        *self.counts.entry(key).or_insert(0) += count;
    }

    /// Build the relationship graph, mapping interaction counts onto edge
    /// distances in `[min_length, max_length]`.
    ///
    /// The mapping is linear and inverse: the pair with the highest count
    /// sits at exactly `min_length` (ties included), and when the highest
    /// observed count is 1 every pair sits at exactly `max_length`.
    pub fn build(self) -> Result<SocialGraph, AnalysisError> {
        let max_count = match self.counts.values().copied().max() {
            Some(count) => count,
            None => return Err(AnalysisError::DegenerateInput),
        };

        let span = self.max_length - self.min_length;
        let denom = (max_count - 1) as f64 + DENOM_EPSILON;

        let mut graph = SocialGraph::new();
        for ((member_a, member_b), count) in self.counts {
            let distance = if count == max_count {
                if max_count == 1 {
                    self.max_length
                } else {
                    self.min_length
                }
            } else {
                self.max_length - (count - 1) as f64 / denom * span
            };
            graph.add_edge(&member_a, &member_b, EdgeAttrs { count, distance });
        }

        log::info!(
            "Built relationship graph with {} members and {} edges",
            graph.member_count(),
            graph.edge_count()
        );

        Ok(graph)
    }

    /// Build a graph straight from a list of aggregated pairs.
    pub fn from_pairs(
        pairs: &[AggregatedPair],
        config: &AnalysisConfig,
    ) -> Result<SocialGraph, AnalysisError> {
        let mut builder = Self::new(config);
        for pair in pairs {
            builder.add_pair(&pair.member_a, &pair.member_b, pair.count);
        }
        builder.build()
    }
}
