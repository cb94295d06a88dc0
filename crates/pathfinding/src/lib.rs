//! Shortest-path search over static graphs.
//!
//! Not used by the random walk itself; this is a graph-analysis utility
//! over a snapshot of the network's topology.
//!
//! - [`AdjacencyGraph`]: canonical immutable adjacency, equal and hashed by content
//! - [`shortest_path`]: exhaustive depth-first backtracking search
//! - [`PathFinder`]: a query session over one graph, cached by `(start, end)`
//! - [`PathCache`]: a cache serving many graphs, keyed by graph content
//!
//! # Example
//!
//! ```
//! use herdcats_pathfinding::{AdjacencyGraph, PathFinder};
//!
//! let graph = AdjacencyGraph::from_edges([(1, 2), (2, 3), (2, 4), (4, 5), (3, 5)]);
//! let mut finder = PathFinder::new(graph);
//!
//! assert_eq!(finder.find(1, 3), Some(vec![1, 2, 3]));
//! ```

mod cache;
mod graph;
mod search;

pub use cache::{PathCache, PathFinder};
pub use graph::AdjacencyGraph;
pub use search::shortest_path;
