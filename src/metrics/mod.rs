//! Per-member and herd-level metrics, and the analysis pipeline

pub mod centrality;
pub mod herd;
pub mod risk;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::cluster::disruption;
use crate::graph::algorithms::Diameter;
use crate::graph::SocialGraph;

/// Structural metrics for a single member.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerMemberMetrics {
    /// Normalized betweenness centrality
    pub betweenness: f64,

    /// Degree divided by the maximum possible degree
    pub degree_centrality: f64,

    /// Plain neighbor count
    pub raw_degree: usize,

    /// Closeness centrality
    pub closeness: f64,

    /// Fraction of neighbors sitting in a different community
    pub community_disruption: f64,
}

/// Composite risk scores for a single member. Capped at 1.0 from above
/// with no lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskScores {
    pub conflict_risk: f64,
    pub isolation_risk: f64,
}

/// Herd-level summary statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HerdMetrics {
    pub member_count: usize,
    pub edge_count: usize,
    pub density: f64,
    pub avg_degree: f64,
    pub diameter: Diameter,
    pub avg_betweenness: f64,
    pub max_betweenness: f64,
    pub avg_degree_centrality: f64,
    pub max_degree: f64,
}

/// One entry of the ranked top-risk list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopRiskEntry {
    pub member_id: String,
    pub conflict_risk: f64,
    pub isolation_risk: f64,
}

/// Complete metrics bundle for one graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HerdAnalysis {
    pub per_member: BTreeMap<String, PerMemberMetrics>,
    pub herd: HerdMetrics,
    pub risk: BTreeMap<String, RiskScores>,
    pub top_risk: Vec<TopRiskEntry>,
}

/// Run the full metric pipeline on a graph.
pub fn analyze(graph: &SocialGraph) -> HerdAnalysis {
    let per_member = per_member_metrics(graph);
    let herd = herd::herd_metrics(graph, &per_member);
    let risk = risk::risk_scores(&per_member);
    let top_risk = herd::top_risk(&risk);

    HerdAnalysis {
        per_member,
        herd,
        risk,
        top_risk,
    }
}

/// Structural metrics for every member of the graph.
pub fn per_member_metrics(graph: &SocialGraph) -> BTreeMap<String, PerMemberMetrics> {
    let centralities = centrality::compute_centralities(graph);
    let disruption_scores = disruption::disruption_scores(graph);

    graph
        .members()
        .map(|id| {
            let metrics = PerMemberMetrics {
                betweenness: centralities.betweenness.get(id).copied().unwrap_or(0.0),
                degree_centrality: centralities.degree.get(id).copied().unwrap_or(0.0),
                raw_degree: graph.degree(id),
                closeness: centralities.closeness.get(id).copied().unwrap_or(0.0),
                community_disruption: disruption_scores.get(id).copied().unwrap_or(0.0),
            };
            (id.to_string(), metrics)
        })
        .collect()
}
