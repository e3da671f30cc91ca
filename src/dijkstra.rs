//! Cost-transformed single-source search.
//!
//! Every edge stores `cost = -ln(probability)`, so path cost is additive and
//! minimizing it maximizes the product of transmission probabilities along
//! the path. One Dijkstra routine serves both the point-to-point path query
//! and the all-vertices transfection rate; it works entirely out of local
//! buffers and leaves the store's scalar registers alone.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::backend::{GraphBackend, NO_VERTEX};

struct QueueEntry {
    cost: f64,
    vertex: usize,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    // Reversed so the max-heap pops the cheapest tentative cost first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

pub struct ShortestPaths {
    /// Final tentative cost per vertex; `f64::INFINITY` marks unreachable.
    pub costs: Vec<f64>,
    /// Predecessor per vertex; [`NO_VERTEX`] marks "none".
    pub predecessors: Vec<usize>,
}

fn search(
    backend: &dyn GraphBackend,
    source: usize,
    stop_at: Option<usize>,
) -> ShortestPaths {
    let n = backend.node_count();
    let mut costs = vec![f64::INFINITY; n];
    let mut predecessors = vec![NO_VERTEX; n];
    let mut queue = BinaryHeap::new();
    costs[source] = 0.0;
    queue.push(QueueEntry {
        cost: 0.0,
        vertex: source,
    });
    while let Some(QueueEntry { cost, vertex }) = queue.pop() {
        if cost > costs[vertex] {
            continue;
        }
        if stop_at == Some(vertex) {
            break;
        }
        for neighbor in backend.neighbors(vertex) {
            let candidate = cost + backend.weight(vertex, neighbor);
            if candidate < costs[neighbor] {
                costs[neighbor] = candidate;
                predecessors[neighbor] = vertex;
                queue.push(QueueEntry {
                    cost: candidate,
                    vertex: neighbor,
                });
            }
        }
    }
    ShortestPaths {
        costs,
        predecessors,
    }
}

/// Run the single-source search to every vertex, with no early termination.
pub fn shortest_paths(backend: &dyn GraphBackend, source: usize) -> ShortestPaths {
    search(backend, source, None)
}

/// The transmission path from `source` to `destination` with the highest
/// probability.
///
/// Returns the vertex sequence from source to destination inclusive. The
/// degenerate `source == destination` query and an unreachable destination
/// both come back empty. `source` must be a live vertex id in
/// `[1, node_count())`.
pub fn max_probability_path(
    backend: &dyn GraphBackend,
    source: usize,
    destination: usize,
) -> Vec<usize> {
    if source == destination {
        return Vec::new();
    }
    let paths = search(backend, source, Some(destination));
    if paths.costs[destination].is_infinite() {
        return Vec::new();
    }
    let mut path = Vec::new();
    let mut vertex = destination;
    while vertex != NO_VERTEX {
        path.push(vertex);
        vertex = paths.predecessors[vertex];
    }
    path.reverse();
    path
}

/// Whether a vertex with the given best-case infection probability meets the
/// threshold, at 2-decimal precision.
///
/// Both sides are rounded to integer percent before comparing, so values
/// that differ only by floating-point noise land on the same side.
pub fn will_catch(probability: f64, threshold: f64) -> bool {
    (probability * 100.0).round() as i64 >= (threshold * 100.0).round() as i64
}

/// Fraction of vertices whose best-case infection probability from `source`
/// meets `threshold`.
///
/// Runs the full single-source search, converts each final cost back to a
/// probability via `exp(-cost)`, and counts matches over the `n - 1` real
/// vertices. The source itself counts (its probability is 1). `source` must
/// be a live vertex id in `[1, node_count())`.
pub fn transfection_rate(backend: &dyn GraphBackend, source: usize, threshold: f64) -> f64 {
    let n = backend.node_count();
    let paths = shortest_paths(backend, source);
    let mut caught = 0usize;
    for vertex in 1..n {
        if will_catch((-paths.costs[vertex]).exp(), threshold) {
            caught += 1;
        }
    }
    caught as f64 / (n - 1) as f64
}

#[cfg(test)]
mod tests {
    use super::will_catch;

    #[test]
    fn test_will_catch_two_decimal_precision() {
        assert!(will_catch(0.502, 0.500));
        assert!(!will_catch(0.35, 0.5));
        // 0.1999999... rounds to the same percent as 0.20
        assert!(will_catch(0.5f64 * 0.4f64, 0.20));
        assert!(!will_catch(0.5f64 * 0.4f64, 0.21));
    }

    #[test]
    fn test_will_catch_unreachable_probability() {
        assert!(!will_catch(0.0, 0.01));
        assert!(will_catch(0.0, 0.0));
    }
}
