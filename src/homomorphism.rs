//! Graph homomorphisms.
//!
//! A map $\phi$ from the vertices of $G$ to the vertices of $H$ is a homomorphism if
//! every edge $uv$ of $G$ is mapped onto an edge $\phi(u)\phi(v)$ of $H$. Weights are
//! ignored, and so is whether $\phi$ is injective.
//!
//! ```rust
//! use adjgraph::graph::*;
//! use adjgraph::homomorphism::*;
//! use std::collections::HashMap;
//!
//! fn main() {
//!     // Every bipartite graph maps onto a single edge
//!     let C4:Graph<u32, i32> = Graph::cycle(GraphKind::Undirected, 4);
//!     let mut K2:Graph<&str, i32> = Graph::undirected();
//!     K2.add_edge(&"black", &"white");
//!
//!     let mapping:HashMap<u32, &str> =
//!         [(0, "black"), (1, "white"), (2, "black"), (3, "white")].into_iter().collect();
//!     assert!(is_homomorphism(&C4, &K2, &mapping));
//!
//!     let mapping:HashMap<u32, &str> =
//!         [(0, "black"), (1, "black"), (2, "black"), (3, "white")].into_iter().collect();
//!     assert_eq!(check_homomorphism(&C4, &K2, &mapping),
//!                Err(HomomorphismViolation::MissingEdge("black", "black")));
//! }
//! ```

use std::collections::HashMap;
use std::fmt;
use std::fmt::{Debug, Display};
use std::hash::BuildHasher;

use tracing::debug;

use crate::graph::*;

/// The first reason found why a mapping is not a homomorphism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomomorphismViolation<V, U> {
    /// A vertex of the source graph has no image.
    UnmappedVertex(V),
    /// A neighbour of a source vertex has no image.
    UnmappedNeighbour(V),
    /// The image of a source edge is missing from the target graph.
    MissingEdge(U, U),
}

impl<V, U> Display for HomomorphismViolation<V, U> where V: Debug, U: Debug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HomomorphismViolation::UnmappedVertex(v) => write!(f, "vertex {:?} not found in mapping", v),
            HomomorphismViolation::UnmappedNeighbour(v) => write!(f, "neighbour {:?} not found in mapping", v),
            HomomorphismViolation::MissingEdge(u, v) => write!(f, "edge ({:?}, {:?}) not found in target graph", u, v),
        }
    }
}

/// Checks whether `mapping` is a homomorphism from `source` to `target`.
///
/// Source vertices are checked in insertion order, and for each vertex its
/// neighbours in insertion order. The first problem found is returned.
pub fn check_homomorphism<V, U, W1, W2, S>(source:&Graph<V, W1>, target:&Graph<U, W2>,
                                           mapping:&HashMap<V, U, S>) -> Result<(), HomomorphismViolation<V, U>>
    where V: Vertex, U: Vertex, W1: Weight, W2: Weight, S: BuildHasher
{
    let res = find_violation(source, target, mapping);
    match res {
        None => Ok(()),
        Some(violation) => {
            debug!(%violation, "mapping is not a homomorphism");
            Err(violation)
        }
    }
}

/// Returns whether `mapping` is a homomorphism from `source` to `target`. See
/// [check_homomorphism] for the reason if it is not.
pub fn is_homomorphism<V, U, W1, W2, S>(source:&Graph<V, W1>, target:&Graph<U, W2>,
                                        mapping:&HashMap<V, U, S>) -> bool
    where V: Vertex, U: Vertex, W1: Weight, W2: Weight, S: BuildHasher
{
    check_homomorphism(source, target, mapping).is_ok()
}

fn find_violation<V, U, W1, W2, S>(source:&Graph<V, W1>, target:&Graph<U, W2>,
                                   mapping:&HashMap<V, U, S>) -> Option<HomomorphismViolation<V, U>>
    where V: Vertex, U: Vertex, W1: Weight, W2: Weight, S: BuildHasher
{
    for u in source.vertices() {
        let Some(image_u) = mapping.get(u) else {
            return Some(HomomorphismViolation::UnmappedVertex(u.clone()))
        };

        for (v, _) in source.neighbours(u) {
            let Some(image_v) = mapping.get(v) else {
                return Some(HomomorphismViolation::UnmappedNeighbour(v.clone()))
            };
            if !target.adjacent(image_u, image_v) {
                return Some(HomomorphismViolation::MissingEdge(image_u.clone(), image_v.clone()))
            }
        }
    }

    None
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
