//! Memoized shortest-path queries.

use crate::{shortest_path, AdjacencyGraph};
use std::collections::HashMap;
use std::hash::Hash;
use tracing::trace;

type Endpoints<N> = (N, N);

/// A query session over one graph.
///
/// The graph cannot change for the lifetime of the session, so results
/// are cached by `(start, end)` alone. Unreachable results are cached too.
#[derive(Debug, Clone)]
pub struct PathFinder<N: Ord> {
    graph: AdjacencyGraph<N>,
    cache: HashMap<Endpoints<N>, Option<Vec<N>>>,
}

impl<N: Ord + Copy + Hash + std::fmt::Debug> PathFinder<N> {
    /// Start a session over `graph`.
    pub fn new(graph: AdjacencyGraph<N>) -> Self {
        Self {
            graph,
            cache: HashMap::new(),
        }
    }

    /// The graph this session answers for.
    pub fn graph(&self) -> &AdjacencyGraph<N> {
        &self.graph
    }

    /// Shortest path from `start` to `end`, computed at most once per pair.
    pub fn find(&mut self, start: N, end: N) -> Option<Vec<N>> {
        let graph = &self.graph;
        self.cache
            .entry((start, end))
            .or_insert_with(|| {
                trace!(?start, ?end, "Path cache miss");
                shortest_path(graph, start, end)
            })
            .clone()
    }

    /// Number of cached queries.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    /// Drop every cached result.
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

/// A cache shared across graphs, keyed by graph content then endpoints.
///
/// Graphs with the same edges share entries no matter how they were built.
#[derive(Debug, Clone)]
pub struct PathCache<N: Ord> {
    graphs: HashMap<AdjacencyGraph<N>, HashMap<Endpoints<N>, Option<Vec<N>>>>,
}

impl<N: Ord + Copy + Hash + std::fmt::Debug> Default for PathCache<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Ord + Copy + Hash + std::fmt::Debug> PathCache<N> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            graphs: HashMap::new(),
        }
    }

    /// Shortest path from `start` to `end` in `graph`.
    pub fn find(&mut self, graph: &AdjacencyGraph<N>, start: N, end: N) -> Option<Vec<N>> {
        if let Some(found) = self
            .graphs
            .get(graph)
            .and_then(|entries| entries.get(&(start, end)))
        {
            return found.clone();
        }

        trace!(?start, ?end, graphs = self.graphs.len(), "Path cache miss");
        let found = shortest_path(graph, start, end);
        self.graphs
            .entry(graph.clone())
            .or_default()
            .insert((start, end), found.clone());
        found
    }

    /// Number of distinct graphs seen.
    pub fn graph_count(&self) -> usize {
        self.graphs.len()
    }

    /// Number of cached queries across all graphs.
    pub fn cached(&self) -> usize {
        self.graphs.values().map(HashMap::len).sum()
    }

    /// Drop every cached result.
    pub fn clear(&mut self) {
        self.graphs.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herdcats_test_helpers::{five_node_edges, four_station_network, sid};

    #[test]
    fn test_session_caches_each_query_once() {
        let mut finder = PathFinder::new(AdjacencyGraph::from_edges(five_node_edges()));

        assert_eq!(finder.find(1, 3), Some(vec![1, 2, 3]));
        assert_eq!(finder.find(1, 3), Some(vec![1, 2, 3]));
        assert_eq!(finder.cached(), 1);

        assert_eq!(finder.find(3, 1), Some(vec![3, 2, 1]));
        assert_eq!(finder.cached(), 2);
    }

    #[test]
    fn test_unreachable_is_cached() {
        let mut finder = PathFinder::new(AdjacencyGraph::from_edges([(1, 2), (3, 4)]));

        assert_eq!(finder.find(1, 4), None);
        assert_eq!(finder.find(1, 4), None);
        assert_eq!(finder.cached(), 1);

        finder.clear();
        assert_eq!(finder.cached(), 0);
    }

    #[test]
    fn test_session_over_network_snapshot() {
        let network = four_station_network();
        let mut finder = PathFinder::new(AdjacencyGraph::from(&network));

        assert_eq!(finder.find(sid(3), sid(2)), Some(vec![sid(3), sid(1), sid(2)]));
        assert_eq!(finder.graph().len(), network.len());
    }

    #[test]
    fn test_shared_cache_treats_equal_graphs_as_one() {
        let mut cache = PathCache::new();
        let a = AdjacencyGraph::from_edges(five_node_edges());
        let mut shuffled = five_node_edges();
        shuffled.rotate_left(2);
        let b = AdjacencyGraph::from_edges(shuffled);

        assert_eq!(cache.find(&a, 1, 3), Some(vec![1, 2, 3]));
        assert_eq!(cache.find(&b, 1, 3), Some(vec![1, 2, 3]));
        assert_eq!(cache.graph_count(), 1);
        assert_eq!(cache.cached(), 1);
    }

    #[test]
    fn test_shared_cache_separates_different_graphs() {
        let mut cache = PathCache::new();
        let a = AdjacencyGraph::from_edges(five_node_edges());
        let b = AdjacencyGraph::from_edges([(1, 3)]);

        assert_eq!(cache.find(&a, 1, 3), Some(vec![1, 2, 3]));
        assert_eq!(cache.find(&b, 1, 3), Some(vec![1, 3]));
        assert_eq!(cache.graph_count(), 2);

        cache.clear();
        assert_eq!(cache.cached(), 0);
    }
}
