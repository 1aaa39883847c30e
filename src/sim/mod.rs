//! Removal simulation engine

use serde::Serialize;

use crate::error::AnalysisError;
use crate::graph::SocialGraph;
use crate::metrics::{self, HerdAnalysis};

/// Outcome of removing one member from a baseline graph.
///
/// Holds an independent copy of the reduced graph; the baseline passed to
/// [`simulate_removal`] is never touched, so callers can run any number
/// of simulations against the same baseline.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationResult {
    pub modified_graph: SocialGraph,
    pub modified_metrics: HerdAnalysis,
    pub removed_member_degree: usize,
    pub summary: String,
}

/// Remove `member_id` from a copy of `baseline` and re-run the full
/// metric pipeline on the reduced graph.
///
/// The result is a pure function of the inputs: the same baseline and
/// target always produce the same output.
pub fn simulate_removal(
    baseline: &SocialGraph,
    member_id: &str,
) -> Result<SimulationResult, AnalysisError> {
    if baseline.is_empty() {
        return Err(AnalysisError::MissingBaseline);
    }
    if !baseline.contains(member_id) {
        return Err(AnalysisError::MemberNotFound {
            member_id: member_id.to_string(),
            member_count: baseline.member_count(),
        });
    }

    let mut modified_graph = baseline.clone();
    let removed_member_degree = modified_graph.remove_member(member_id).unwrap_or(0);

    log::info!(
        "Removed member {} (degree {}) from a herd of {}",
        member_id,
        removed_member_degree,
        baseline.member_count()
    );

    let modified_metrics = metrics::analyze(&modified_graph);
    let summary = format!(
        "Removed member {} (degree {}) from the social network. \
         Network now has {} members (down 1) and {} edges (down {}).",
        member_id,
        removed_member_degree,
        modified_graph.member_count(),
        modified_graph.edge_count(),
        removed_member_degree,
    );

    Ok(SimulationResult {
        modified_graph,
        modified_metrics,
        removed_member_degree,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeAttrs;

    fn edge(count: u32, distance: f64) -> EdgeAttrs {
        EdgeAttrs { count, distance }
    }

    fn baseline() -> SocialGraph {
        let mut graph = SocialGraph::new();
        graph.add_edge("a", "b", edge(3, 0.2));
        graph.add_edge("b", "c", edge(3, 0.2));
        graph.add_edge("a", "c", edge(1, 2.0));
        graph
    }

    #[test]
    fn removal_shrinks_the_graph_by_the_target_degree() {
        let graph = baseline();
        let result = simulate_removal(&graph, "b").expect("simulation should run");

        assert_eq!(result.removed_member_degree, 2);
        assert_eq!(result.modified_graph.member_count(), 2);
        assert_eq!(result.modified_graph.edge_count(), 1);
        assert!(result.modified_graph.edge("a", "c").is_some());
        assert_eq!(result.modified_metrics.herd.member_count, 2);
    }

    #[test]
    fn baseline_is_never_mutated() {
        let graph = baseline();
        let _ = simulate_removal(&graph, "b").expect("simulation should run");

        assert_eq!(graph.member_count(), 3);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn unknown_member_is_rejected_and_baseline_untouched() {
        let graph = baseline();
        let err = simulate_removal(&graph, "zed").expect_err("unknown member must fail");

        match err {
            AnalysisError::MemberNotFound {
                member_id,
                member_count,
            } => {
                assert_eq!(member_id, "zed");
                assert_eq!(member_count, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(graph.member_count(), 3);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn empty_baseline_is_rejected() {
        let err = simulate_removal(&SocialGraph::new(), "a")
            .expect_err("empty baseline must fail");
        assert!(matches!(err, AnalysisError::MissingBaseline));
    }

    #[test]
    fn repeated_simulations_agree() {
        let graph = baseline();
        let first = simulate_removal(&graph, "b").expect("simulation should run");
        let second = simulate_removal(&graph, "b").expect("simulation should run");

        assert_eq!(first.modified_graph, second.modified_graph);
        assert_eq!(first.summary, second.summary);
        assert_eq!(
            first.modified_metrics.top_risk,
            second.modified_metrics.top_risk
        );
    }

    #[test]
    fn summary_reports_the_delta() {
        let graph = baseline();
        let result = simulate_removal(&graph, "b").expect("simulation should run");

        assert!(result.summary.contains("Removed member b (degree 2)"));
        assert!(result.summary.contains("2 members"));
        assert!(result.summary.contains("down 2"));
    }
}
