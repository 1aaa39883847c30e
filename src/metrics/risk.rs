//! Composite risk scoring
//!
//! Metrics are normalized herd-wide with a robust z-score (median and
//! IQR) before entering the weighted formulas, so a single outlier cannot
//! drag the whole herd's scale.

use std::collections::BTreeMap;

use statrs::statistics::{Data, OrderStatistics, Statistics};

use crate::metrics::{PerMemberMetrics, RiskScores};

/// Sigmoid inputs are clipped to this magnitude.
const SIGMOID_CLIP: f64 = 10.0;

/// Term weights for the conflict formula.
const CONFLICT_BETWEENNESS_WEIGHT: f64 = 0.50;
const CONFLICT_DISRUPTION_WEIGHT: f64 = 0.15;
const CONFLICT_CENTRALITY_WEIGHT: f64 = 0.35;

/// Term weights for the isolation formula.
const ISOLATION_CENTRALITY_WEIGHT: f64 = 0.50;
const ISOLATION_CLOSENESS_WEIGHT: f64 = 0.30;
const ISOLATION_DEVIATION_WEIGHT: f64 = 0.20;

/// Logistic squashing, clipped to keep `exp` well-behaved.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x.clamp(-SIGMOID_CLIP, SIGMOID_CLIP)).exp())
}

/// Robust z-score normalization across the herd.
///
/// `z = (x - median) / (IQR / 1.35)`. When the IQR collapses to 0 the
/// denominator falls back to `std * 1.35`, and from there to 1.0, so a
/// constant-valued metric normalizes to all zeros instead of dividing by
/// zero.
pub fn robust_z_score(values: &BTreeMap<String, f64>) -> BTreeMap<String, f64> {
    if values.is_empty() {
        return BTreeMap::new();
    }

    let samples: Vec<f64> = values.values().copied().collect();
    let mut data = Data::new(samples.clone());
    let median = data.median();

    let mut iqr = data.interquartile_range();
    if iqr == 0.0 {
        iqr = samples.iter().population_std_dev() * 1.35;
        if iqr == 0.0 {
            iqr = 1.0;
        }
    }

    values
        .iter()
        .map(|(id, &value)| (id.clone(), (value - median) / (iqr / 1.35)))
        .collect()
}

/// Conflict and isolation risk for every member. Both scores cap at 1.0
/// and carry no lower bound.
pub fn risk_scores(
    per_member: &BTreeMap<String, PerMemberMetrics>,
) -> BTreeMap<String, RiskScores> {
    let betweenness: BTreeMap<String, f64> = per_member
        .iter()
        .map(|(id, metrics)| (id.clone(), metrics.betweenness))
        .collect();
    let raw_degrees: BTreeMap<String, f64> = per_member
        .iter()
        .map(|(id, metrics)| (id.clone(), metrics.raw_degree as f64))
        .collect();

    let z_betweenness = robust_z_score(&betweenness);
    let z_degree = robust_z_score(&raw_degrees);
    let z_degree_mean = if z_degree.is_empty() {
        0.0
    } else {
        z_degree.values().copied().mean()
    };

    per_member
        .iter()
        .map(|(id, metrics)| {
            let centrality_gap = 1.0 - metrics.degree_centrality;

            let conflict = CONFLICT_BETWEENNESS_WEIGHT
                * sigmoid(z_betweenness.get(id).copied().unwrap_or(0.0))
                + CONFLICT_DISRUPTION_WEIGHT * sigmoid(metrics.community_disruption)
                + CONFLICT_CENTRALITY_WEIGHT * centrality_gap;

            // The deviation term measures a raw degree against the mean
            // of the z-normalized degree distribution. The scales differ;
            // that mix is part of the scoring behavior under test, not a
            // bug to fix here.
            let deviation = (metrics.raw_degree as f64 - z_degree_mean).abs();
            let isolation = ISOLATION_CENTRALITY_WEIGHT * centrality_gap
                + ISOLATION_CLOSENESS_WEIGHT * (1.0 - metrics.closeness)
                + ISOLATION_DEVIATION_WEIGHT * deviation;

            let scores = RiskScores {
                conflict_risk: conflict.min(1.0),
                isolation_risk: isolation.min(1.0),
            };
            (id.clone(), scores)
        })
        .collect()
}
