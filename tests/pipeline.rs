//! End-to-end pipeline scenario

use herd_network_analyzer::config::AnalysisConfig;
use herd_network_analyzer::data::AggregatedPair;
use herd_network_analyzer::graph::algorithms::Diameter;
use herd_network_analyzer::graph::builder::GraphBuilder;
use herd_network_analyzer::graph::SocialGraph;
use herd_network_analyzer::{metrics, sim};

fn pair(a: &str, b: &str, count: u32) -> AggregatedPair {
    AggregatedPair {
        member_a: a.to_string(),
        member_b: b.to_string(),
        count,
    }
}

fn three_member_graph() -> SocialGraph {
    let pairs = vec![pair("A", "B", 3), pair("B", "C", 3), pair("A", "C", 1)];
    GraphBuilder::from_pairs(&pairs, &AnalysisConfig::default()).expect("graph should build")
}

#[test]
fn builds_the_expected_distances() {
    let graph = three_member_graph();

    assert_eq!(graph.member_count(), 3);
    assert_eq!(graph.edge_count(), 3);

    // Both max-count pairs pin to min_length exactly; the lone-count pair
    // pins to max_length exactly.
    assert_eq!(graph.edge("A", "B").map(|e| e.distance), Some(0.2));
    assert_eq!(graph.edge("B", "C").map(|e| e.distance), Some(0.2));
    assert_eq!(graph.edge("A", "C").map(|e| e.distance), Some(2.0));
}

#[test]
fn analysis_covers_the_whole_herd_within_bounds() {
    let graph = three_member_graph();
    let analysis = metrics::analyze(&graph);

    assert_eq!(analysis.herd.member_count, 3);
    assert_eq!(analysis.herd.edge_count, 3);
    // All three pairs share an edge, so the triangle is at full density
    // and one hop across.
    assert!((analysis.herd.density - 1.0).abs() < 1e-12);
    assert_eq!(analysis.herd.diameter, Diameter::Finite(1));

    for scores in analysis.risk.values() {
        assert!(scores.conflict_risk <= 1.0);
        assert!(scores.isolation_risk <= 1.0);
    }
    assert_eq!(analysis.top_risk.len(), 3);
}

#[test]
fn removing_the_hub_leaves_the_weak_edge() {
    let graph = three_member_graph();
    let result = sim::simulate_removal(&graph, "B").expect("simulation should run");

    assert_eq!(result.modified_graph.member_count(), 2);
    assert_eq!(result.modified_graph.edge_count(), 1);
    assert_eq!(result.removed_member_degree, 2);
    assert_eq!(
        result.modified_graph.edge("A", "C").map(|e| e.count),
        Some(1)
    );
    assert_eq!(result.modified_metrics.herd.diameter, Diameter::Finite(1));

    // The baseline stays intact for further simulations.
    assert_eq!(graph.member_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    let again = sim::simulate_removal(&graph, "B").expect("simulation should run");
    assert_eq!(again.summary, result.summary);
}

#[test]
fn snapshot_re_entry_matches_the_built_graph() {
    let graph = three_member_graph();

    let snapshot = serde_json::to_string(&graph).expect("graph should serialize");
    let restored: SocialGraph =
        serde_json::from_str(&snapshot).expect("snapshot should deserialize");

    assert_eq!(restored, graph);
    let result = sim::simulate_removal(&restored, "B").expect("simulation should run");
    assert_eq!(result.modified_graph.member_count(), 2);
}
