//! Configuration for backend selection.
//!
//! This module provides the structures needed for selecting between the
//! sparse adjacency store and the dense matrix store at runtime.

use crate::backend::{AdjacencyBackend, GraphBackend, MatrixBackend};

/// Backend selection enum for choosing between storage representations.
///
/// # Default Behavior
///
/// The default backend is [`BackendKind::Adjacency`]: contact networks are
/// usually sparse, and the adjacency store enumerates neighbors in O(degree).
///
/// # Examples
///
/// ```rust
/// use spreadgraph::{BackendKind, GraphConfig};
///
/// // Explicit selection
/// let cfg = GraphConfig::new(BackendKind::Matrix);
///
/// // Using convenience constructors
/// let sparse_cfg = GraphConfig::adjacency();
/// let dense_cfg = GraphConfig::matrix();
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendKind {
    /// Sparse per-vertex ordered adjacency maps.
    ///
    /// **Use when:** edges are few relative to `n * n`, which is the common
    /// case for real contact data.
    #[default]
    Adjacency,

    /// Dense n*n weight matrix.
    ///
    /// **Use when:** the network is dense and O(1) edge mutation matters
    /// more than the O(n) neighbor scan.
    Matrix,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GraphConfig {
    pub backend: BackendKind,
}

impl GraphConfig {
    pub fn new(backend: BackendKind) -> Self {
        Self { backend }
    }

    pub fn adjacency() -> Self {
        Self::new(BackendKind::Adjacency)
    }

    pub fn matrix() -> Self {
        Self::new(BackendKind::Matrix)
    }

    /// Build a backend with `n` vertex slots (slot 0 reserved).
    pub fn build_backend(&self, n: usize) -> Box<dyn GraphBackend> {
        match self.backend {
            BackendKind::Adjacency => Box::new(AdjacencyBackend::new(n)),
            BackendKind::Matrix => Box::new(MatrixBackend::new(n)),
        }
    }
}
