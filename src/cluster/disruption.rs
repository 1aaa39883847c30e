//! Cross-community connectivity scoring

use std::collections::BTreeMap;

use crate::cluster::detection;
use crate::graph::SocialGraph;

/// Herds smaller than this carry no meaningful community structure.
const MIN_MEMBERS_FOR_DETECTION: usize = 3;

/// Fraction of each member's neighbors that sit in a different community.
///
/// Members whose social circle crosses community boundaries hold the herd
/// together; removing one disrupts more than its own community. Herds of
/// fewer than three members score 0 across the board, as do isolated
/// members and members the detection left unassigned.
pub fn disruption_scores(graph: &SocialGraph) -> BTreeMap<String, f64> {
    let mut scores: BTreeMap<String, f64> = graph
        .members()
        .map(|member| (member.to_string(), 0.0))
        .collect();

    if graph.member_count() < MIN_MEMBERS_FOR_DETECTION {
        return scores;
    }

    // One detection pass covers the whole herd; the partition is a pure
    // function of the graph.
    let partition = detection::detect_communities(graph);

    for member in graph.members() {
        let own = match partition.community_of(member) {
            Some(community) => community,
            None => continue,
        };
        let degree = graph.degree(member);
        if degree == 0 {
            continue;
        }

        let cross = graph
            .neighbors(member)
            .filter(|(neighbor, _)| partition.community_of(neighbor) != Some(own))
            .count();
        scores.insert(member.to_string(), cross as f64 / degree as f64);
    }

    scores
}
