//! Cycle detection.
//!
//! Directed and undirected graphs need different notions of a cycle: in an undirected
//! graph every edge can be traversed back to where it came from, which must not count
//! as a cycle. [has_cycle_directed] and [has_cycle_undirected] only accept their kind of
//! graph; [has_cycle] picks the right one.
//!
//! Both searches keep an explicit stack, so deep graphs do not overflow the call stack.

use crate::error::Result;
use crate::graph::*;

/// Returns whether `graph` contains a cycle, using the test appropriate for its kind.
pub fn has_cycle<V, W>(graph:&Graph<V, W>) -> bool where V: Vertex, W: Weight {
    match graph.kind() {
        GraphKind::Directed => directed_cycle(graph),
        GraphKind::Undirected => undirected_cycle(graph),
    }
}

/// Returns whether the directed `graph` contains a directed cycle. Self-loops count
/// as cycles.
pub fn has_cycle_directed<V, W>(graph:&Graph<V, W>) -> Result<bool> where V: Vertex, W: Weight {
    graph.require_kind(GraphKind::Directed, "has_cycle_directed")?;
    Ok(directed_cycle(graph))
}

/// Returns whether the undirected `graph` contains a cycle. Self-loops count as cycles.
pub fn has_cycle_undirected<V, W>(graph:&Graph<V, W>) -> Result<bool> where V: Vertex, W: Weight {
    graph.require_kind(GraphKind::Undirected, "has_cycle_undirected")?;
    Ok(undirected_cycle(graph))
}

/// Depth-first search which keeps track of the vertices on the current path. Reaching
/// one of them again means we found a back edge.
fn directed_cycle<V, W>(graph:&Graph<V, W>) -> bool where V: Vertex, W: Weight {
    let n = graph.num_vertices();
    let mut visited = vec![false; n];
    let mut on_stack = vec![false; n];

    for root in 0..n {
        if visited[root] {
            continue;
        }

        // Entries are (vertex, position of the next neighbour to explore)
        let mut stack = vec![(root, 0)];
        visited[root] = true;
        on_stack[root] = true;

        while let Some(top) = stack.last_mut() {
            let (u, pos) = *top;
            match graph.adj_at(u).get(pos) {
                Some(&(v, _)) => {
                    top.1 += 1;
                    if on_stack[v] {
                        return true
                    }
                    if !visited[v] {
                        visited[v] = true;
                        on_stack[v] = true;
                        stack.push((v, 0));
                    }
                }
                None => {
                    on_stack[u] = false;
                    stack.pop();
                }
            }
        }
    }

    false
}

/// Depth-first search which remembers the parent of every vertex. An edge to a visited
/// vertex other than the parent closes a cycle.
fn undirected_cycle<V, W>(graph:&Graph<V, W>) -> bool where V: Vertex, W: Weight {
    let n = graph.num_vertices();
    let mut visited = vec![false; n];

    for root in 0..n {
        if visited[root] {
            continue;
        }

        // Entries are (vertex, parent, position of the next neighbour to explore)
        let mut stack:Vec<(usize, Option<usize>, usize)> = vec![(root, None, 0)];
        visited[root] = true;

        while let Some(top) = stack.last_mut() {
            let (u, parent, pos) = *top;
            match graph.adj_at(u).get(pos) {
                Some(&(v, _)) => {
                    top.2 += 1;
                    if !visited[v] {
                        visited[v] = true;
                        stack.push((v, Some(u), 0));
                    } else if parent != Some(v) {
                        return true
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }
    }

    false
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
