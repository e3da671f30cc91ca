//! Structural metrics: degree, clustering coefficient, and vertex
//! classification over either backend.
//!
//! Functions here return explicit results; the facade lowers errors to the
//! sentinel protocol at the boundary.

use crate::{backend::GraphBackend, errors::SpreadGraphError};

fn ensure_vertex(backend: &dyn GraphBackend, vertex: usize) -> Result<(), SpreadGraphError> {
    if vertex == 0 || vertex >= backend.node_count() {
        return Err(SpreadGraphError::vertex_out_of_range(format!(
            "vertex {vertex}"
        )));
    }
    Ok(())
}

/// Number of outgoing neighbors of `vertex`.
pub fn degree(backend: &dyn GraphBackend, vertex: usize) -> Result<usize, SpreadGraphError> {
    ensure_vertex(backend, vertex)?;
    Ok(backend.neighbors(vertex).len())
}

/// All vertices with exactly degree `target`, in ascending id order.
pub fn degree_nodes(backend: &dyn GraphBackend, target: usize) -> Vec<usize> {
    (1..backend.node_count())
        .filter(|&vertex| backend.neighbors(vertex).len() == target)
        .collect()
}

/// Clustering coefficient of `vertex`: the fraction of neighbor pairs that
/// are themselves directly connected.
///
/// Vertices with degree 0 or 1 have a coefficient of 0 by convention. Pairs
/// are counted in both directions and halved to undo the double count.
pub fn clustering_coefficient(
    backend: &dyn GraphBackend,
    vertex: usize,
) -> Result<f64, SpreadGraphError> {
    ensure_vertex(backend, vertex)?;
    let neighbors = backend.neighbors(vertex);
    let k = neighbors.len();
    if k <= 1 {
        return Ok(0.0);
    }
    let mut linked = 0usize;
    for &a in &neighbors {
        for &b in &neighbors {
            if a != b && backend.has_edge(a, b) {
                linked += 1;
            }
        }
    }
    let possible = k * (k - 1) / 2;
    Ok((linked as f64 / 2.0) / possible as f64)
}

/// All vertices whose clustering coefficient falls in `[low, high]`.
///
/// Comparison truncates to integer percent (`floor(cc * 100)`) on both
/// sides to neutralize floating-point noise. An invalid range (`low < 0`,
/// `high > 1`, or `high < low`) yields an empty result without error.
pub fn clustering_coefficient_nodes(
    backend: &dyn GraphBackend,
    low: f64,
    high: f64,
) -> Vec<usize> {
    if low < 0.0 || high < 0.0 || high > 1.0 || high < low {
        return Vec::new();
    }
    let low_pct = (low * 100.0).floor() as i64;
    let high_pct = (high * 100.0).floor() as i64;
    (1..backend.node_count())
        .filter(|&vertex| {
            let cc = clustering_coefficient(backend, vertex).unwrap_or(0.0);
            let pct = (cc * 100.0).floor() as i64;
            pct >= low_pct && pct <= high_pct
        })
        .collect()
}
