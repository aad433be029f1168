//! Breadth-first and depth-first traversals.
//!
//! Every traversal starts at a given vertex and returns the vertices reachable from
//! it, each exactly once, in the order in which they were visited. A start vertex
//! that is not part of the graph yields an empty sequence.
//!
//! [dfs] and [dfs_recursive] both produce valid depth-first orders but they are not
//! guaranteed to agree: the iterative version decides whether a vertex is visited when
//! it is popped from the stack, not when it is pushed.

use std::collections::VecDeque;

use tracing::debug;

use crate::graph::*;

/// Breadth-first search from `start`. Neighbours are enqueued in insertion order
/// and marked as visited when they are enqueued.
pub fn bfs<V, W>(graph:&Graph<V, W>, start:&V) -> Vec<V> where V: Vertex, W: Weight {
    let Some(s) = graph.index_of(start) else {
        debug!(?start, "bfs: start vertex not in graph");
        return Vec::new()
    };

    let mut visited = vec![false; graph.num_vertices()];
    let mut queue = VecDeque::new();
    let mut order = Vec::new();

    visited[s] = true;
    queue.push_back(s);
    while let Some(u) = queue.pop_front() {
        order.push(graph.vertex_at(u).clone());
        for &(v, _) in graph.adj_at(u) {
            if !visited[v] {
                visited[v] = true;
                queue.push_back(v);
            }
        }
    }

    order
}

/// Iterative depth-first search from `start`.
///
/// Neighbours are pushed in reverse so that they are popped in insertion order. A
/// vertex might be pushed several times before it is popped for the first time; the
/// later copies are skipped.
pub fn dfs<V, W>(graph:&Graph<V, W>, start:&V) -> Vec<V> where V: Vertex, W: Weight {
    let Some(s) = graph.index_of(start) else {
        debug!(?start, "dfs: start vertex not in graph");
        return Vec::new()
    };

    let mut visited = vec![false; graph.num_vertices()];
    let mut stack = vec![s];
    let mut order = Vec::new();

    while let Some(u) = stack.pop() {
        if visited[u] {
            continue;
        }
        visited[u] = true;
        order.push(graph.vertex_at(u).clone());

        for &(v, _) in graph.adj_at(u).iter().rev() {
            if !visited[v] {
                stack.push(v);
            }
        }
    }

    order
}

/// Shared state of a recursive depth-first search.
struct DfsState<'a, V, W> {
    graph: &'a Graph<V, W>,
    visited: Vec<bool>,
    order: Vec<usize>,
}

impl<'a, V, W> DfsState<'a, V, W> where V: Vertex, W: Weight {
    fn new(graph:&'a Graph<V, W>) -> Self {
        DfsState { graph, visited: vec![false; graph.num_vertices()], order: Vec::new() }
    }

    fn visit(&mut self, u:usize) {
        self.visited[u] = true;
        self.order.push(u);
        for &(v, _) in self.graph.adj_at(u) {
            if !self.visited[v] {
                self.visit(v);
            }
        }
    }
}

/// Recursive depth-first search from `start`. The recursion depth is bounded by the
/// length of the longest path explored, so prefer [dfs] on very large graphs.
pub fn dfs_recursive<V, W>(graph:&Graph<V, W>, start:&V) -> Vec<V> where V: Vertex, W: Weight {
    let Some(s) = graph.index_of(start) else {
        debug!(?start, "dfs_recursive: start vertex not in graph");
        return Vec::new()
    };

    let mut state = DfsState::new(graph);
    state.visit(s);

    state.order.into_iter()
        .map(|u| graph.vertex_at(u).clone())
        .collect()
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
