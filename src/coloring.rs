//! Greedy (first-fit) vertex colouring.
//!
//! Colours are the integers $0, 1, 2, \ldots$. The vertices are processed in insertion
//! order and each one receives the smallest colour not used by its already coloured
//! neighbours. The number of colours used depends on the insertion order and can be far
//! from optimal.
//!
//! ```rust
//! use adjgraph::graph::*;
//! use adjgraph::coloring::*;
//!
//! fn main() {
//!     let graph:Graph<u32, i32> = Graph::cycle(GraphKind::Undirected, 5);
//!     let colors = greedy_coloring(&graph);
//!     assert!(is_proper_coloring(&graph, &colors));
//!     assert_eq!(num_colors(&colors), 3);
//! }
//! ```

use std::collections::HashMap;
use std::hash::BuildHasher;

use fxhash::FxHashSet;
use itertools::Itertools;

use crate::graph::*;

/// Colours `graph` greedily. In directed graphs both in- and out-neighbours are taken
/// into account, so adjacent vertices always receive different colours. A self-loop
/// is ignored.
pub fn greedy_coloring<V, W>(graph:&Graph<V, W>) -> VertexMap<V, usize> where V: Vertex, W: Weight {
    let n = graph.num_vertices();
    let mut colors:Vec<Option<usize>> = vec![None; n];

    let mut in_adj:Vec<Vec<usize>> = vec![Vec::new(); if graph.is_directed() { n } else { 0 }];
    if graph.is_directed() {
        for (u, v, _) in graph.arcs() {
            in_adj[v].push(u);
        }
    }

    for u in 0..n {
        let mut used:FxHashSet<usize> = graph.adj_at(u).iter()
            .filter_map(|&(v, _)| colors[v])
            .collect();
        if let Some(N) = in_adj.get(u) {
            used.extend(N.iter().filter_map(|&v| colors[v]));
        }

        let mut c = 0;
        while used.contains(&c) {
            c += 1;
        }
        colors[u] = Some(c);
    }

    colors.into_iter().enumerate()
        .filter_map(|(u, c)| c.map(|c| (graph.vertex_at(u).clone(), c)))
        .collect()
}

/// Checks that every vertex of `graph` has a colour and that no edge, apart from
/// self-loops, joins two vertices of the same colour.
pub fn is_proper_coloring<V, W, S>(graph:&Graph<V, W>, coloring:&HashMap<V, usize, S>) -> bool
    where V: Vertex, W: Weight, S: BuildHasher
{
    if !graph.vertices().all(|u| coloring.contains_key(u)) {
        return false
    }

    graph.edges().iter()
        .filter(|(u, v, _)| u != v)
        .all(|(u, v, _)| coloring.get(u) != coloring.get(v))
}

/// Returns the number of distinct colours used.
pub fn num_colors<V, S>(coloring:&HashMap<V, usize, S>) -> usize where S: BuildHasher {
    coloring.values().unique().count()
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
