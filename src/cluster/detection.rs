//! Greedy modularity community detection

use std::collections::BTreeMap;

use crate::cluster::CommunityPartition;
use crate::graph::SocialGraph;

/// Detect communities by greedy modularity maximization.
///
/// Starts from singleton communities and repeatedly merges the connected
/// pair of communities with the largest modularity gain, stopping once no
/// merge improves modularity. The detection is unweighted: interaction
/// counts and edge distances play no part. Merge ties resolve toward the
/// lowest community-index pair, so the partition is deterministic.
pub fn detect_communities(graph: &SocialGraph) -> CommunityPartition {
    let members: Vec<String> = graph.members().map(str::to_string).collect();
    let edge_count = graph.edge_count();

    if edge_count == 0 {
        // Nothing to merge; every member stays in its own community.
        let singletons = members.into_iter().map(|member| vec![member]).collect();
        return CommunityPartition::from_communities(singletons);
    }

    let m = edge_count as f64;

    // Community state. Entries become None once merged away.
    let mut communities: Vec<Option<Vec<String>>> =
        members.iter().map(|id| Some(vec![id.clone()])).collect();
    let mut degree_sums: Vec<f64> = members.iter().map(|id| graph.degree(id) as f64).collect();
    let mut community_of: BTreeMap<String, usize> = members
        .iter()
        .enumerate()
        .map(|(index, id)| (id.clone(), index))
        .collect();

    loop {
        // Count edges running between each pair of live communities.
        let mut between: BTreeMap<(usize, usize), f64> = BTreeMap::new();
        for (a, b, _) in graph.edges() {
            let ca = community_of[a];
            let cb = community_of[b];
            if ca != cb {
                *between.entry((ca.min(cb), ca.max(cb))).or_insert(0.0) += 1.0;
            }
        }
        if between.is_empty() {
            break;
        }

        // Pick the merge with the largest modularity gain. Strict
        // comparison keeps the first (lowest-index) pair on ties.
        let mut best: Option<((usize, usize), f64)> = None;
        for (&(ca, cb), &edges_between) in &between {
            let gain = edges_between / m - degree_sums[ca] * degree_sums[cb] / (2.0 * m * m);
            let improves = match best {
                None => true,
                Some((_, best_gain)) => gain > best_gain,
            };
            if improves {
                best = Some(((ca, cb), gain));
            }
        }
        let ((ca, cb), gain) = match best {
            Some(found) => found,
            None => break,
        };
        if gain <= 0.0 {
            break;
        }

        // Merge the higher-indexed community into the lower-indexed one.
        let absorbed = match communities[cb].take() {
            Some(community) => community,
            None => break,
        };
        for member in &absorbed {
            community_of.insert(member.clone(), ca);
        }
        degree_sums[ca] += degree_sums[cb];
        degree_sums[cb] = 0.0;
        if let Some(target) = communities[ca].as_mut() {
            target.extend(absorbed);
        }
    }

    // Surviving communities, largest first with the smallest member id as
    // the secondary key.
    let mut result: Vec<Vec<String>> = communities.into_iter().flatten().collect();
    for community in &mut result {
        community.sort();
    }
    result.sort_by(|a, b| {
        b.len()
            .cmp(&a.len())
            .then_with(|| a.first().cmp(&b.first()))
    });

    log::debug!("Detected {} communities", result.len());
    CommunityPartition::from_communities(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeAttrs;

    fn edge() -> EdgeAttrs {
        EdgeAttrs {
            count: 1,
            distance: 2.0,
        }
    }

    /// Two triangles joined by a single bridge edge.
    fn barbell() -> SocialGraph {
        let mut graph = SocialGraph::new();
        graph.add_edge("a1", "a2", edge());
        graph.add_edge("a2", "a3", edge());
        graph.add_edge("a1", "a3", edge());
        graph.add_edge("b1", "b2", edge());
        graph.add_edge("b2", "b3", edge());
        graph.add_edge("b1", "b3", edge());
        graph.add_edge("a3", "b1", edge());
        graph
    }

    #[test]
    fn finds_the_two_triangles() {
        let partition = detect_communities(&barbell());

        assert_eq!(partition.len(), 2);
        assert_eq!(
            partition.communities(),
            &[
                vec!["a1".to_string(), "a2".to_string(), "a3".to_string()],
                vec!["b1".to_string(), "b2".to_string(), "b3".to_string()],
            ]
        );
    }

    #[test]
    fn every_member_is_assigned() {
        let graph = barbell();
        let partition = detect_communities(&graph);

        for member in graph.members() {
            assert!(partition.community_of(member).is_some());
        }
    }

    #[test]
    fn edgeless_graph_yields_singletons() {
        let mut graph = SocialGraph::new();
        graph.add_edge("a", "b", edge());
        graph.remove_member("b");

        let partition = detect_communities(&graph);
        assert_eq!(partition.len(), 1);
        assert_eq!(partition.community_of("a"), Some(0));
    }

    #[test]
    fn empty_graph_yields_empty_partition() {
        assert!(detect_communities(&SocialGraph::new()).is_empty());
    }

    #[test]
    fn detection_is_deterministic() {
        let graph = barbell();
        let first = detect_communities(&graph);
        let second = detect_communities(&graph);
        assert_eq!(first.communities(), second.communities());
    }
}
