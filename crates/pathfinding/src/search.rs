//! Depth-first backtracking search.

use crate::AdjacencyGraph;

/// Find the shortest path from `start` to `end`, both included.
///
/// Every simple path is explored in ascending neighbor order and the first
/// one found at the minimum length wins. A branch is cut as soon as it can
/// no longer be strictly shorter than the best path so far; since only a
/// strictly shorter path ever replaces the best, cutting never changes the
/// result.
///
/// Returns `[start]` when `start == end`, and `None` when `end` cannot be
/// reached or `start` is not in the graph.
pub fn shortest_path<N: Ord + Copy>(graph: &AdjacencyGraph<N>, start: N, end: N) -> Option<Vec<N>> {
    if start == end {
        return Some(vec![start]);
    }
    if !graph.contains(start) {
        return None;
    }

    let mut path = vec![start];
    let mut best = None;
    extend(graph, end, &mut path, &mut best);
    best
}

fn extend<N: Ord + Copy>(
    graph: &AdjacencyGraph<N>,
    end: N,
    path: &mut Vec<N>,
    best: &mut Option<Vec<N>>,
) {
    let Some(neighbors) = path.last().and_then(|current| graph.neighbors(*current)) else {
        return;
    };

    for &next in neighbors {
        if matches!(best.as_ref(), Some(found) if path.len() + 1 >= found.len()) {
            return;
        }
        if path.contains(&next) {
            continue;
        }

        path.push(next);
        if next == end {
            *best = Some(path.clone());
        } else {
            extend(graph, end, path, best);
        }
        path.pop();
    }
}
