//! Canonical adjacency representation.

use herdcats_types::{Network, StationId};
use std::collections::{BTreeMap, BTreeSet};

/// Immutable graph as a sorted map from node to sorted neighbor set.
///
/// Two graphs built from the same edges are equal and hash the same,
/// whatever order the edges were supplied in. Neighbor iteration is in
/// ascending node order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdjacencyGraph<N: Ord> {
    adjacency: BTreeMap<N, BTreeSet<N>>,
}

impl<N: Ord + Copy> AdjacencyGraph<N> {
    /// Build an undirected graph. Each edge is stored in both directions.
    pub fn from_edges(edges: impl IntoIterator<Item = (N, N)>) -> Self {
        let mut adjacency: BTreeMap<N, BTreeSet<N>> = BTreeMap::new();
        for (a, b) in edges {
            adjacency.entry(a).or_default().insert(b);
            adjacency.entry(b).or_default().insert(a);
        }
        Self { adjacency }
    }

    /// Build a graph from a node -> neighbors mapping, taken as given.
    ///
    /// Edges are not mirrored, so a one-sided entry stays one-way.
    pub fn from_adjacency<I, M>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (N, M)>,
        M: IntoIterator<Item = N>,
    {
        let mut map: BTreeMap<N, BTreeSet<N>> = BTreeMap::new();
        for (node, neighbors) in adjacency {
            map.entry(node).or_default().extend(neighbors);
        }
        Self { adjacency: map }
    }

    /// Neighbors of `node`, or `None` if it has no adjacency entry.
    pub fn neighbors(&self, node: N) -> Option<&BTreeSet<N>> {
        self.adjacency.get(&node)
    }

    /// Check if `node` has an adjacency entry.
    pub fn contains(&self, node: N) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Nodes with an adjacency entry, ascending.
    pub fn nodes(&self) -> impl Iterator<Item = N> + '_ {
        self.adjacency.keys().copied()
    }

    /// Number of nodes with an adjacency entry.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Check if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl From<&Network> for AdjacencyGraph<StationId> {
    /// Snapshot the topology. Closed stations are kept.
    fn from(network: &Network) -> Self {
        Self::from_adjacency(
            network
                .adjacency()
                .map(|(id, neighbors)| (id, neighbors.iter().copied())),
        )
    }
}
