//! Error types for the algorithms in this crate.
//!
//! Only hard failures live here. Soft failures, such as a start vertex that is not
//! part of the graph, are reported through empty or `None` results instead.

use thiserror::Error;

use crate::graph::GraphKind;

/// The error type for graph algorithms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Dijkstra's algorithm examined an edge with a negative weight.
    #[error("negative edge weight {weight} on ({from} -> {to}) is not supported by Dijkstra's algorithm")]
    NegativeWeight {
        from: String,
        to: String,
        weight: String,
    },

    /// Bellman-Ford could still relax an edge after |V|-1 passes.
    #[error("graph contains a negative weight cycle involving edge ({from} -> {to})")]
    NegativeCycle { from: String, to: String },

    /// An algorithm restricted to one kind of graph was called on the other kind.
    #[error("{operation} requires a {expected} graph but the graph is {found}")]
    ModeMismatch {
        operation: &'static str,
        expected: GraphKind,
        found: GraphKind,
    },
}

/// A specialized Result type for graph algorithms.
pub type Result<T> = std::result::Result<T, GraphError>;
