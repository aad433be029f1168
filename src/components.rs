//! Connected components.
//!
//! Components are returned in the order in which their first vertex was inserted into
//! the graph.

use std::collections::VecDeque;

use tracing::trace;
use union_find_rs::prelude::*;

use crate::error::Result;
use crate::graph::*;

/// Computes the connected components of an undirected graph by running a breadth-first
/// search from every vertex not yet assigned to a component. Isolated vertices form
/// their own component.
///
/// Fails with [crate::error::GraphError::ModeMismatch] on directed graphs, see
/// [weakly_connected_components] for those.
pub fn connected_components<V, W>(graph:&Graph<V, W>) -> Result<Vec<VertexSet<V>>>
    where V: Vertex, W: Weight
{
    graph.require_kind(GraphKind::Undirected, "connected_components")?;

    let n = graph.num_vertices();
    let mut visited = vec![false; n];
    let mut res = Vec::new();

    for root in 0..n {
        if visited[root] {
            continue;
        }

        let mut comp = VertexSet::default();
        let mut queue = VecDeque::from([root]);
        visited[root] = true;
        while let Some(u) = queue.pop_front() {
            comp.insert(graph.vertex_at(u).clone());
            for &(v, _) in graph.adj_at(u) {
                if !visited[v] {
                    visited[v] = true;
                    queue.push_back(v);
                }
            }
        }

        trace!(root = ?graph.vertex_at(root), size = comp.len(), "found component");
        res.push(comp);
    }

    Ok(res)
}

/// Computes the components of `graph` when edge directions are ignored. For
/// undirected graphs this coincides with [connected_components].
#[allow(unused_must_use)]
pub fn weakly_connected_components<V, W>(graph:&Graph<V, W>) -> Vec<VertexSet<V>>
    where V: Vertex, W: Weight
{
    let mut dsets:DisjointSets<usize> = DisjointSets::new();

    for u in 0..graph.num_vertices() {
        // This returns a Result<()> but the potential 'error' (adding
        // an element that already exists) will not happen.
        dsets.make_set(u);
    }

    for (u, v, _) in graph.arcs() {
        // Uniting two elements of the same set trips an assertion
        // inside DisjointSets, so only distinct roots are joined.
        if let (Ok(ru), Ok(rv)) = (dsets.find_set(&u), dsets.find_set(&v)) {
            if ru != rv {
                dsets.union(&ru, &rv);
            }
        }
    }

    // Members are indices, so the smallest one is the earliest inserted vertex
    let mut comps:Vec<Vec<usize>> = Vec::new();
    for comp in dsets {
        let mut members:Vec<usize> = comp.iter().copied().collect();
        members.sort_unstable();
        comps.push(members);
    }
    comps.sort_unstable_by_key(|members| members[0]);

    comps.into_iter()
        .map(|members| members.into_iter().map(|i| graph.vertex_at(i).clone()).collect())
        .collect()
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
