//! The owning facade over one graph store instance.
//!
//! `SpreadGraph` is the surface an external loader drives: it owns the
//! backend chosen through [`GraphConfig`], exposes the full store contract
//! per direction, and lowers the analysis layers' explicit results to the
//! sentinel protocol the callers expect (-1 for invalid or empty
//! interventions, 0 for a source the intervention isolated).
//!
//! All operations run to completion against the one shared graph; there is
//! no rollback. Removals are permanent, so independent experiments on the
//! same starting network rebuild the graph first.

use crate::{
    algo,
    backend::GraphBackend,
    config::GraphConfig,
    dijkstra,
    errors::SpreadGraphError,
    intervention::{self, InterventionOutcome},
    spanning::{self, SpanningEdge},
};

pub struct SpreadGraph {
    backend: Box<dyn GraphBackend>,
}

impl SpreadGraph {
    /// Create a graph with `n` vertex slots on the default (sparse) backend.
    ///
    /// Slot 0 is the reserved sentinel, so a network with vertices `1..=N`
    /// is created with `n = N + 1`.
    pub fn new(n: usize) -> Self {
        Self::with_config(GraphConfig::default(), n)
    }

    pub fn with_config(config: GraphConfig, n: usize) -> Self {
        Self {
            backend: config.build_backend(n),
        }
    }

    pub fn node_count(&self) -> usize {
        self.backend.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.backend.edge_count()
    }

    /// Read the per-vertex scalar register. `vertex` must be in
    /// `[0, node_count())`.
    pub fn value(&self, vertex: usize) -> f64 {
        self.backend.value(vertex)
    }

    /// Write the per-vertex scalar register. `vertex` must be in
    /// `[0, node_count())`.
    pub fn set_value(&mut self, vertex: usize, value: f64) {
        self.backend.set_value(vertex, value);
    }

    /// Insert or overwrite the directed arc `from -> to` with a
    /// `-ln(probability)` cost. Symmetry is the caller's discipline: the
    /// loader inserts each contact once per direction.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: f64) {
        self.backend.add_edge(from, to, weight);
    }

    pub fn weight(&self, from: usize, to: usize) -> f64 {
        self.backend.weight(from, to)
    }

    pub fn remove_edge(&mut self, from: usize, to: usize) {
        self.backend.remove_edge(from, to);
    }

    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.backend.has_edge(from, to)
    }

    /// Neighbor ids of `vertex` in ascending order, recomputed per call.
    pub fn neighbors(&self, vertex: usize) -> Vec<usize> {
        self.backend.neighbors(vertex)
    }

    /// The transmission path from `source` to `destination` with the
    /// highest probability; empty when `source == destination` or the
    /// destination is unreachable. `source` must be a live vertex.
    pub fn longest_transmission_path(&self, source: usize, destination: usize) -> Vec<usize> {
        dijkstra::max_probability_path(self.backend.as_ref(), source, destination)
    }

    /// Fraction of vertices whose best-case infection probability from
    /// `source` meets `threshold`. `source` must be a live vertex.
    pub fn transfection_rate(&self, source: usize, threshold: f64) -> f64 {
        dijkstra::transfection_rate(self.backend.as_ref(), source, threshold)
    }

    /// Parent vector of the priority-growth maximum spanning tree rooted at
    /// vertex 1; unreached vertices keep parent 0.
    pub fn max_spanning_tree_prim(&self) -> Vec<usize> {
        spanning::max_spanning_tree_prim(self.backend.as_ref())
    }

    /// Accepted edges of the union-find maximum spanning forest, in
    /// acceptance (ascending cost) order.
    pub fn max_spanning_tree_kruskal(&self) -> Vec<SpanningEdge> {
        spanning::max_spanning_tree_kruskal(self.backend.as_ref())
    }

    /// Degree of `vertex`, or -1 when the id is outside the valid range.
    pub fn degree(&self, vertex: usize) -> i64 {
        match algo::degree(self.backend.as_ref(), vertex) {
            Ok(degree) => degree as i64,
            Err(_) => -1,
        }
    }

    /// All vertices with exactly degree `target`.
    pub fn degree_nodes(&self, target: usize) -> Vec<usize> {
        algo::degree_nodes(self.backend.as_ref(), target)
    }

    /// Clustering coefficient of `vertex`; 0.0 for degree <= 1 and for ids
    /// outside the valid range.
    pub fn clustering_coefficient(&self, vertex: usize) -> f64 {
        algo::clustering_coefficient(self.backend.as_ref(), vertex).unwrap_or(0.0)
    }

    /// All vertices with clustering coefficient in `[low, high]` at
    /// 2-decimal precision; empty on an invalid range.
    pub fn clustering_coefficient_nodes(&self, low: f64, high: f64) -> Vec<usize> {
        algo::clustering_coefficient_nodes(self.backend.as_ref(), low, high)
    }

    /// Isolate every vertex of degree `target`; returns the removed ids in
    /// ascending order.
    pub fn remove_nodes_by_degree(&mut self, target: usize) -> Vec<usize> {
        intervention::remove_nodes_by_degree(self.backend.as_mut(), target)
    }

    /// Isolate every vertex with clustering coefficient in `[low, high]`;
    /// returns the removed ids in ascending order.
    pub fn remove_nodes_by_clustering(&mut self, low: f64, high: f64) -> Vec<usize> {
        intervention::remove_nodes_by_clustering(self.backend.as_mut(), low, high)
    }

    /// Isolate the vaccinated vertices; out-of-range ids are ignored and
    /// duplicates collapse. Returns the removed ids in ascending order.
    pub fn remove_vaccinated(&mut self, vaccinated: &[usize]) -> Vec<usize> {
        intervention::remove_vaccinated(self.backend.as_mut(), vaccinated)
    }

    /// Remove every vertex of degree `target`, then re-measure the rate
    /// from `source`. Sentinels: -1 for an invalid domain or an empty
    /// removal, 0 when the removal isolated the source.
    pub fn transfection_rate_degree(
        &mut self,
        source: usize,
        threshold: f64,
        target: usize,
    ) -> f64 {
        Self::lower(intervention::transfection_rate_degree(
            self.backend.as_mut(),
            source,
            threshold,
            target,
        ))
    }

    /// Remove every vertex with clustering coefficient in `[low, high]`,
    /// then re-measure the rate from `source`. Same sentinel protocol as
    /// [`SpreadGraph::transfection_rate_degree`].
    pub fn transfection_rate_clustering(
        &mut self,
        source: usize,
        threshold: f64,
        low: f64,
        high: f64,
    ) -> f64 {
        Self::lower(intervention::transfection_rate_clustering(
            self.backend.as_mut(),
            source,
            threshold,
            low,
            high,
        ))
    }

    /// Remove the vaccinated vertices, then re-measure the rate from
    /// `source`. An empty set or a vaccinated source is a domain error
    /// (-1). Same sentinel protocol as
    /// [`SpreadGraph::transfection_rate_degree`].
    pub fn transfection_rate_vaccine(
        &mut self,
        source: usize,
        threshold: f64,
        vaccinated: &[usize],
    ) -> f64 {
        Self::lower(intervention::transfection_rate_vaccine(
            self.backend.as_mut(),
            source,
            threshold,
            vaccinated,
        ))
    }

    fn lower(outcome: Result<InterventionOutcome, SpreadGraphError>) -> f64 {
        match outcome {
            Ok(InterventionOutcome::Rate(rate)) => rate,
            Ok(InterventionOutcome::SourceIsolated) => 0.0,
            Ok(InterventionOutcome::NothingRemoved) | Err(_) => -1.0,
        }
    }
}
