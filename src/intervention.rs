//! Intervention simulation: isolate selected vertices, then re-measure
//! diffusion on the mutated graph.
//!
//! Every intervention query follows the same transaction shape: read
//! structural state, strip the selected vertices' incident edges in both
//! directions, then rerun the single-source rate computation. Mutation is
//! permanent; callers wanting independent experiments rebuild the graph.

use ahash::AHashSet;

use crate::{
    algo,
    backend::GraphBackend,
    dijkstra,
    errors::SpreadGraphError,
};

/// Explicit result of an intervention-rate query. The facade lowers this to
/// the sentinel protocol (rate, 0.0, -1.0) at the boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InterventionOutcome {
    /// The recomputed transfection rate on the mutated graph.
    Rate(f64),
    /// The removal isolated the source itself; nothing can propagate.
    SourceIsolated,
    /// The removal selected no vertices; there is nothing to evaluate.
    NothingRemoved,
}

fn ensure_source(backend: &dyn GraphBackend, source: usize) -> Result<(), SpreadGraphError> {
    if source == 0 || source >= backend.node_count() {
        return Err(SpreadGraphError::vertex_out_of_range(format!(
            "source {source}"
        )));
    }
    Ok(())
}

fn ensure_threshold(threshold: f64) -> Result<(), SpreadGraphError> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(SpreadGraphError::invalid_threshold(format!(
            "threshold {threshold} outside [0, 1]"
        )));
    }
    Ok(())
}

fn ensure_band(low: f64, high: f64) -> Result<(), SpreadGraphError> {
    if !(0.0..=1.0).contains(&low) || !(0.0..=1.0).contains(&high) || high < low {
        return Err(SpreadGraphError::invalid_range(format!(
            "coefficient range [{low}, {high}]"
        )));
    }
    Ok(())
}

/// Strip every incident edge of each selected vertex, both directions.
/// Vertices stay in the vertex set; they are only isolated. Returns the
/// deduplicated selection in ascending order.
fn isolate_all(backend: &mut dyn GraphBackend, selected: Vec<usize>) -> Vec<usize> {
    let unique: AHashSet<usize> = selected.into_iter().collect();
    let mut removed: Vec<usize> = unique.into_iter().collect();
    removed.sort_unstable();
    for &vertex in &removed {
        for neighbor in backend.neighbors(vertex) {
            backend.remove_edge(vertex, neighbor);
            backend.remove_edge(neighbor, vertex);
        }
    }
    removed
}

/// Isolate every vertex with exactly degree `target`.
pub fn remove_nodes_by_degree(backend: &mut dyn GraphBackend, target: usize) -> Vec<usize> {
    let selected = algo::degree_nodes(backend, target);
    isolate_all(backend, selected)
}

/// Isolate every vertex whose clustering coefficient falls in `[low, high]`.
pub fn remove_nodes_by_clustering(
    backend: &mut dyn GraphBackend,
    low: f64,
    high: f64,
) -> Vec<usize> {
    let selected = algo::clustering_coefficient_nodes(backend, low, high);
    isolate_all(backend, selected)
}

/// Isolate the vaccinated vertices. Ids outside the valid vertex range are
/// ignored; duplicates collapse.
pub fn remove_vaccinated(backend: &mut dyn GraphBackend, vaccinated: &[usize]) -> Vec<usize> {
    let n = backend.node_count();
    let selected = vaccinated
        .iter()
        .copied()
        .filter(|&vertex| vertex >= 1 && vertex < n)
        .collect();
    isolate_all(backend, selected)
}

fn rate_after_removal(
    backend: &dyn GraphBackend,
    source: usize,
    threshold: f64,
    removed: &[usize],
) -> InterventionOutcome {
    if removed.binary_search(&source).is_ok() {
        return InterventionOutcome::SourceIsolated;
    }
    if removed.is_empty() {
        return InterventionOutcome::NothingRemoved;
    }
    InterventionOutcome::Rate(dijkstra::transfection_rate(backend, source, threshold))
}

/// Remove every vertex of degree `target`, then re-measure the transfection
/// rate from `source`.
pub fn transfection_rate_degree(
    backend: &mut dyn GraphBackend,
    source: usize,
    threshold: f64,
    target: usize,
) -> Result<InterventionOutcome, SpreadGraphError> {
    ensure_source(backend, source)?;
    ensure_threshold(threshold)?;
    let removed = remove_nodes_by_degree(backend, target);
    Ok(rate_after_removal(backend, source, threshold, &removed))
}

/// Remove every vertex with clustering coefficient in `[low, high]`, then
/// re-measure the transfection rate from `source`.
pub fn transfection_rate_clustering(
    backend: &mut dyn GraphBackend,
    source: usize,
    threshold: f64,
    low: f64,
    high: f64,
) -> Result<InterventionOutcome, SpreadGraphError> {
    ensure_source(backend, source)?;
    ensure_threshold(threshold)?;
    ensure_band(low, high)?;
    let removed = remove_nodes_by_clustering(backend, low, high);
    Ok(rate_after_removal(backend, source, threshold, &removed))
}

/// Remove the vaccinated vertices, then re-measure the transfection rate
/// from `source`.
///
/// An empty vaccination set, or one containing the source, is a domain
/// error rather than a removal outcome.
pub fn transfection_rate_vaccine(
    backend: &mut dyn GraphBackend,
    source: usize,
    threshold: f64,
    vaccinated: &[usize],
) -> Result<InterventionOutcome, SpreadGraphError> {
    ensure_source(backend, source)?;
    ensure_threshold(threshold)?;
    if vaccinated.is_empty() {
        return Err(SpreadGraphError::invalid_input("empty vaccination set"));
    }
    if vaccinated.contains(&source) {
        return Err(SpreadGraphError::invalid_input(format!(
            "source {source} is vaccinated"
        )));
    }
    let removed = remove_vaccinated(backend, vaccinated);
    Ok(rate_after_removal(backend, source, threshold, &removed))
}
