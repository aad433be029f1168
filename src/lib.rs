//! An adjacency-list graph together with a collection of classical graph algorithms.
//!
//! The central data structure is [Graph](graph::Graph), which is either directed or
//! undirected and stores a numeric weight with every edge. All algorithms take the
//! graph by reference and never modify it.
//!
//! ```rust
//! use adjgraph::graph::*;
//! use adjgraph::traversal::*;
//! use adjgraph::shortest_paths::*;
//! use adjgraph::components::*;
//!
//! fn main() {
//!     let mut graph:Graph<&str, i64> = Graph::undirected();
//!     graph.add_weighted_edge(&"A", &"B", 5);
//!     graph.add_weighted_edge(&"A", &"C", 2);
//!     graph.add_weighted_edge(&"B", &"C", 1);
//!     graph.add_weighted_edge(&"E", &"F", 1);
//!
//!     assert_eq!(bfs(&graph, &"A"), vec!["A", "B", "C"]);
//!     assert_eq!(connected_components(&graph).unwrap().len(), 2);
//!
//!     let paths = dijkstra(&graph, &"A").unwrap().unwrap();
//!     assert_eq!(paths.distance(&"B"), Some(3));
//!     assert_eq!(paths.path_to(&"B"), vec!["A", "C", "B"]);
//! }
//! ```
//!
//! Absent start vertices are not errors: traversals return an empty sequence and the
//! shortest-path algorithms return `Ok(None)`. Hard failures, such as negative weights
//! in Dijkstra's algorithm, are reported as [GraphError](error::GraphError).
//!
//! The crate logs through [tracing](https://docs.rs/tracing) but never installs a
//! subscriber itself.
#![allow(non_snake_case)]

pub mod coloring;
pub mod components;
pub mod cycles;
pub mod error;
pub mod graph;
pub mod homomorphism;
pub mod shortest_paths;
pub mod traversal;

#[cfg(test)]
mod testutil;

pub use error::{GraphError, Result};
pub use graph::{Graph, GraphKind, Vertex, VertexMap, VertexSet, Weight};
