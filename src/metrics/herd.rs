//! Herd-level aggregation and risk ranking

use std::cmp::Ordering;
use std::collections::BTreeMap;

use itertools::Itertools;

use crate::graph::algorithms;
use crate::graph::SocialGraph;
use crate::metrics::{HerdMetrics, PerMemberMetrics, RiskScores, TopRiskEntry};

/// The ranked risk list carries at most this many members.
const TOP_RISK_COUNT: usize = 5;

/// Aggregate per-member metrics into herd-level summary statistics.
pub fn herd_metrics(
    graph: &SocialGraph,
    per_member: &BTreeMap<String, PerMemberMetrics>,
) -> HerdMetrics {
    let member_count = graph.member_count();
    let edge_count = graph.edge_count();

    let density = if member_count < 2 {
        0.0
    } else {
        2.0 * edge_count as f64 / (member_count as f64 * (member_count - 1) as f64)
    };

    let degrees: Vec<f64> = per_member
        .values()
        .map(|metrics| metrics.raw_degree as f64)
        .collect();
    let avg_degree = mean(&degrees);
    let max_raw_degree = degrees.iter().copied().fold(0.0_f64, f64::max);

    let betweenness: Vec<f64> = per_member.values().map(|m| m.betweenness).collect();
    let degree_centralities: Vec<f64> =
        per_member.values().map(|m| m.degree_centrality).collect();

    HerdMetrics {
        member_count,
        edge_count,
        density,
        avg_degree,
        diameter: algorithms::diameter(graph),
        avg_betweenness: mean(&betweenness),
        max_betweenness: betweenness.iter().copied().fold(0.0_f64, f64::max),
        avg_degree_centrality: mean(&degree_centralities),
        // avg_degree never exceeds the largest raw degree, so this is
        // effectively the herd's maximum degree.
        max_degree: avg_degree.max(max_raw_degree),
    }
}

/// Rank members by their dominant risk score, highest first, and keep the
/// top of the list. Ties order by member id so repeated runs return the
/// same ranking.
pub fn top_risk(risk_scores: &BTreeMap<String, RiskScores>) -> Vec<TopRiskEntry> {
    risk_scores
        .iter()
        .sorted_by(|(id_a, a), (id_b, b)| {
            let peak_a = a.conflict_risk.max(a.isolation_risk);
            let peak_b = b.conflict_risk.max(b.isolation_risk);
            peak_b
                .partial_cmp(&peak_a)
                .unwrap_or(Ordering::Equal)
                .then_with(|| id_a.cmp(id_b))
        })
        .take(TOP_RISK_COUNT)
        .map(|(id, scores)| TopRiskEntry {
            member_id: id.clone(),
            conflict_risk: scores.conflict_risk,
            isolation_risk: scores.isolation_risk,
        })
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
