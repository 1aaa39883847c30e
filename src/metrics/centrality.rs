//! Structural centrality measures
//!
//! All three measures run on hop counts. Every edge carries a `distance`
//! attribute, and it is deliberately not used as a path weight here:
//! centrality measures structural importance, a property of who is
//! connected to whom. Weighting paths by observed proximity would shift
//! every downstream risk score.

use std::collections::{BTreeMap, VecDeque};

use crate::graph::algorithms;
use crate::graph::SocialGraph;

/// Per-member centrality maps.
#[derive(Debug, Clone, Default)]
pub struct Centralities {
    pub betweenness: BTreeMap<String, f64>,
    pub degree: BTreeMap<String, f64>,
    pub closeness: BTreeMap<String, f64>,
}

/// Compute betweenness, degree and closeness centrality for every member.
/// All maps are empty on an empty graph.
pub fn compute_centralities(graph: &SocialGraph) -> Centralities {
    if graph.is_empty() {
        return Centralities::default();
    }

    Centralities {
        betweenness: betweenness_centrality(graph),
        degree: degree_centrality(graph),
        closeness: closeness_centrality(graph),
    }
}

/// Normalized shortest-path betweenness via Brandes' accumulation.
pub fn betweenness_centrality(graph: &SocialGraph) -> BTreeMap<String, f64> {
    let members: Vec<&str> = graph.members().collect();
    let n = members.len();
    let index: BTreeMap<&str, usize> = members
        .iter()
        .enumerate()
        .map(|(position, &id)| (id, position))
        .collect();

    let mut centrality = vec![0.0_f64; n];

    for &source in &members {
        let s = index[source];

        // Forward pass: BFS recording shortest-path counts and
        // predecessors.
        let mut stack: Vec<usize> = Vec::with_capacity(n);
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut sigma = vec![0.0_f64; n];
        let mut dist = vec![-1_i64; n];
        sigma[s] = 1.0;
        dist[s] = 0;

        let mut queue = VecDeque::new();
        queue.push_back(s);
        while let Some(v) = queue.pop_front() {
            stack.push(v);
            for (neighbor, _) in graph.neighbors(members[v]) {
                let w = index[neighbor];
                if dist[w] < 0 {
                    dist[w] = dist[v] + 1;
                    queue.push_back(w);
                }
                if dist[w] == dist[v] + 1 {
                    sigma[w] += sigma[v];
                    predecessors[w].push(v);
                }
            }
        }

        // Backward pass: dependency accumulation.
        let mut delta = vec![0.0_f64; n];
        while let Some(w) = stack.pop() {
            for &v in &predecessors[w] {
                delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
            }
            if w != s {
                centrality[w] += delta[w];
            }
        }
    }

    // The undirected accumulation visits every pair twice; the
    // normalization factor folds the halving in. Graphs of one or two
    // members have no intermediate nodes and need no rescale.
    let scale = if n > 2 {
        1.0 / ((n - 1) as f64 * (n - 2) as f64)
    } else {
        1.0
    };

    members
        .iter()
        .enumerate()
        .map(|(position, &id)| (id.to_string(), centrality[position] * scale))
        .collect()
}

/// Degree centrality: neighbor count over the maximum possible degree.
/// A lone member counts as fully connected.
pub fn degree_centrality(graph: &SocialGraph) -> BTreeMap<String, f64> {
    let n = graph.member_count();
    if n <= 1 {
        return graph.members().map(|id| (id.to_string(), 1.0)).collect();
    }

    let scale = 1.0 / (n - 1) as f64;
    graph
        .members()
        .map(|id| (id.to_string(), graph.degree(id) as f64 * scale))
        .collect()
}

/// Closeness centrality with the component-size correction, so members of
/// small disconnected fragments are not overvalued. Isolated members
/// score 0.
pub fn closeness_centrality(graph: &SocialGraph) -> BTreeMap<String, f64> {
    let n = graph.member_count();

    graph
        .members()
        .map(|id| {
            let dist = algorithms::bfs_hop_counts(graph, id);
            let reachable = dist.len();
            let total_distance: usize = dist.values().sum();

            let value = if total_distance > 0 && n > 1 {
                let component_fraction = (reachable - 1) as f64 / (n - 1) as f64;
                (reachable - 1) as f64 / total_distance as f64 * component_fraction
            } else {
                0.0
            };
            (id.to_string(), value)
        })
        .collect()
}
