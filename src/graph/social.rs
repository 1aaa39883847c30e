//! Adjacency-map graph representation

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attributes carried by every relationship edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeAttrs {
    /// Number of observed interactions between the two members
    pub count: u32,

    /// Derived edge length, inversely proportional to the interaction count
    pub distance: f64,
}

/// Undirected simple graph of herd members keyed by member id.
///
/// Stored as a symmetric adjacency map. Serializes transparently as
/// `{member: {neighbor: {count, distance}}}`, which is also the accepted
/// re-entry format for simulations on a previously saved graph. Iteration
/// follows sorted member-id order, so every traversal is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SocialGraph {
    adjacency: BTreeMap<String, BTreeMap<String, EdgeAttrs>>,
}

impl SocialGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of members in the graph.
    pub fn member_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|neighbors| neighbors.len()).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Whether a member is part of the graph.
    pub fn contains(&self, member_id: &str) -> bool {
        self.adjacency.contains_key(member_id)
    }

    /// Member ids in sorted order.
    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Neighbors of a member with their edge attributes. Empty if the
    /// member is absent.
    pub fn neighbors<'a>(
        &'a self,
        member_id: &str,
    ) -> impl Iterator<Item = (&'a str, &'a EdgeAttrs)> {
        self.adjacency
            .get(member_id)
            .into_iter()
            .flatten()
            .map(|(id, attrs)| (id.as_str(), attrs))
    }

    /// Degree of a member. Zero if the member is absent.
    pub fn degree(&self, member_id: &str) -> usize {
        self.adjacency.get(member_id).map_or(0, |neighbors| neighbors.len())
    }

    /// Edge attributes between two members, if they are connected.
    pub fn edge(&self, a: &str, b: &str) -> Option<&EdgeAttrs> {
        self.adjacency.get(a).and_then(|neighbors| neighbors.get(b))
    }

    /// Insert an undirected edge, overwriting any existing attributes.
    /// Self-loops are ignored.
    pub fn add_edge(&mut self, a: &str, b: &str, attrs: EdgeAttrs) {
        if a == b {
            return;
        }
        self.adjacency
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string(), attrs);
        self.adjacency
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string(), attrs);
    }

    /// Remove a member and all incident edges, returning the removed
    /// member's degree. `None` if the member is absent.
    ///
    /// Neighbors left without edges stay in the graph as isolated members.
    pub fn remove_member(&mut self, member_id: &str) -> Option<usize> {
        let neighbors = self.adjacency.remove(member_id)?;
        for neighbor in neighbors.keys() {
            if let Some(edges) = self.adjacency.get_mut(neighbor) {
                edges.remove(member_id);
            }
        }
        Some(neighbors.len())
    }

    /// Undirected edges, each reported once with endpoints in sorted order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &EdgeAttrs)> {
        self.adjacency.iter().flat_map(|(a, neighbors)| {
            neighbors
                .iter()
                .filter(move |(b, _)| a.as_str() < b.as_str())
                .map(move |(b, attrs)| (a.as_str(), b.as_str(), attrs))
        })
    }
}
