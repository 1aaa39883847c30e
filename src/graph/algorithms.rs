//! Unweighted traversal algorithms on the relationship graph

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};

use crate::graph::SocialGraph;

/// Graph diameter as a tagged value. A disconnected graph has no finite
/// diameter, and a float infinity does not serialize uniformly across
/// consumers, so the unbounded case gets its own variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diameter {
    Finite(usize),
    Unbounded,
}

/// Hop-count distances from `source` to every reachable member,
/// including `source` itself at distance 0.
///
/// Edge distances are deliberately not used as weights here. Structural
/// measures in this crate work on topology alone.
pub fn bfs_hop_counts(graph: &SocialGraph, source: &str) -> BTreeMap<String, usize> {
    let mut dist = BTreeMap::new();
    if !graph.contains(source) {
        return dist;
    }

    dist.insert(source.to_string(), 0);
    let mut queue = VecDeque::new();
    queue.push_back(source.to_string());

    while let Some(current) = queue.pop_front() {
        let hops = dist[&current];
        for (neighbor, _) in graph.neighbors(&current) {
            if !dist.contains_key(neighbor) {
                dist.insert(neighbor.to_string(), hops + 1);
                queue.push_back(neighbor.to_string());
            }
        }
    }

    dist
}

/// Whether every member is reachable from every other member.
/// Vacuously true for the empty graph.
pub fn is_connected(graph: &SocialGraph) -> bool {
    let start = match graph.members().next() {
        Some(member) => member,
        None => return true,
    };
    bfs_hop_counts(graph, start).len() == graph.member_count()
}

/// Diameter of the graph in hops. `Unbounded` when the graph is
/// disconnected or empty.
pub fn diameter(graph: &SocialGraph) -> Diameter {
    if graph.is_empty() {
        return Diameter::Unbounded;
    }

    let n = graph.member_count();
    let mut max_eccentricity = 0;
    for member in graph.members() {
        let dist = bfs_hop_counts(graph, member);
        if dist.len() != n {
            return Diameter::Unbounded;
        }
        let eccentricity = dist.values().copied().max().unwrap_or(0);
        max_eccentricity = max_eccentricity.max(eccentricity);
    }

    Diameter::Finite(max_eccentricity)
}
