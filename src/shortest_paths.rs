//! Single-source shortest paths.
//!
//! [dijkstra] runs in $O((|V|+|E|) \log |V|)$ using a binary heap and rejects negative
//! edge weights as soon as it encounters one. [bellman_ford] runs in $O(|V| \cdot |E|)$,
//! accepts negative weights and fails if a negative cycle is reachable from the source.
//!
//! Both return `Ok(None)` if the source vertex is not part of the graph. A path whose
//! length does not fit into the weight type is ignored, as if its last edge were missing.
//!
//! On undirected graphs [bellman_ford] relaxes every edge in both directions, so its
//! results differ from a relaxation that visits each undirected edge once: a single
//! negative edge is already a negative cycle.
//!
//! ```rust
//! use adjgraph::graph::*;
//! use adjgraph::shortest_paths::*;
//!
//! fn main() {
//!     let mut graph:Graph<&str, i64> = Graph::directed();
//!     graph.add_weighted_edge(&"W", &"X", 1);
//!     graph.add_weighted_edge(&"X", &"Y", 3);
//!     graph.add_weighted_edge(&"X", &"Z", 10);
//!     graph.add_weighted_edge(&"Y", &"Z", 4);
//!
//!     let paths = dijkstra(&graph, &"W").unwrap().unwrap();
//!     assert_eq!(paths.distance(&"Z"), Some(8));
//!     assert_eq!(paths.path_to(&"Z"), vec!["W", "X", "Y", "Z"]);
//!
//!     assert!(dijkstra(&graph, &"nope").unwrap().is_none());
//! }
//! ```
//!
//! Negative cycles are reported through the first edge found that can still be
//! relaxed. Vertices affected by the cycle are not marked in any way.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::BuildHasher;

use tracing::{debug, trace};

use crate::error::{GraphError, Result};
use crate::graph::*;

/// Distances and shortest-path predecessors from a single source.
///
/// A distance of `None` means that the vertex is unreachable, and so is its
/// predecessor. The source itself has distance zero and no predecessor.
#[derive(Debug, Clone)]
pub struct ShortestPaths<V, W> {
    pub source: V,
    pub distances: VertexMap<V, Option<W>>,
    pub predecessors: VertexMap<V, Option<V>>,
}

impl<V, W> ShortestPaths<V, W> where V: Vertex, W: Weight {
    fn from_indices(graph:&Graph<V, W>, s:usize, dist:Vec<Option<W>>, pred:Vec<Option<usize>>) -> Self {
        let distances = dist.into_iter().enumerate()
            .map(|(i, d)| (graph.vertex_at(i).clone(), d))
            .collect();
        let predecessors = pred.into_iter().enumerate()
            .map(|(i, p)| (graph.vertex_at(i).clone(), p.map(|j| graph.vertex_at(j).clone())))
            .collect();

        ShortestPaths { source: graph.vertex_at(s).clone(), distances, predecessors }
    }

    /// Distance from the source to `v`, or `None` if `v` is unreachable or unknown.
    pub fn distance(&self, v:&V) -> Option<W> {
        self.distances.get(v).copied().flatten()
    }

    pub fn predecessor(&self, v:&V) -> Option<&V> {
        self.predecessors.get(v)?.as_ref()
    }

    pub fn is_reachable(&self, v:&V) -> bool {
        self.distance(v).is_some()
    }

    /// The shortest path from the source to `end`, see [shortest_path].
    pub fn path_to(&self, end:&V) -> Vec<V> {
        shortest_path(&self.predecessors, &self.source, end)
    }
}

/// Reconstructs the path from `start` to `end` by following `predecessors` backwards
/// from `end`. Returns an empty path if the walk reaches a vertex without an entry in
/// `predecessors` or runs out of predecessors before arriving at `start`.
pub fn shortest_path<V, S>(predecessors:&HashMap<V, Option<V>, S>, start:&V, end:&V) -> Vec<V>
    where V: Vertex, S: BuildHasher
{
    let mut path = Vec::new();
    let mut current = Some(end);
    while let Some(u) = current {
        let Some(p) = predecessors.get(u) else {
            break;
        };
        // A well-formed predecessor map cannot produce a longer path
        if path.len() >= predecessors.len() {
            return Vec::new()
        }
        path.push(u.clone());
        if u == start {
            break;
        }
        current = p.as_ref();
    }

    if path.last() != Some(start) {
        return Vec::new()
    }
    path.reverse();
    path
}

/// Priority queue entry. The ordering is reversed so that [BinaryHeap] pops the
/// smallest distance first; ties go to the smaller vertex index.
#[derive(Debug, Clone, Copy)]
struct State<W> {
    dist: W,
    vertex: usize,
}

impl<W: Weight> Ord for State<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.dist.partial_cmp(&self.dist)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl<W: Weight> PartialOrd for State<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> PartialEq for State<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for State<W> {}

/// Returns the relaxed distance of `v` if the arc `(u, v)` of weight `w` improves it.
/// A sum that overflows `W` never does.
fn relax<W: Weight>(dist:&[Option<W>], u:usize, v:usize, w:W) -> Option<W> {
    let du = dist[u]?;
    let candidate = du.checked_add(w)?;
    match dist[v] {
        Some(dv) if !(candidate < dv) => None,
        _ => Some(candidate)
    }
}

/// Dijkstra's algorithm from `start`.
///
/// Fails with [GraphError::NegativeWeight] when an edge with negative weight is
/// examined. Edges that are never examined, for example because they are not
/// reachable from `start`, are not checked.
pub fn dijkstra<V, W>(graph:&Graph<V, W>, start:&V) -> Result<Option<ShortestPaths<V, W>>>
    where V: Vertex, W: Weight
{
    let Some(s) = graph.index_of(start) else {
        debug!(?start, "dijkstra: start vertex not in graph");
        return Ok(None)
    };

    let n = graph.num_vertices();
    let mut dist:Vec<Option<W>> = vec![None; n];
    let mut pred:Vec<Option<usize>> = vec![None; n];
    let mut queue = BinaryHeap::new();

    dist[s] = Some(W::zero());
    queue.push(State { dist: W::zero(), vertex: s });

    while let Some(State { dist: d, vertex: u }) = queue.pop() {
        // Stale entry, a shorter path to u has been found since it was pushed
        if matches!(dist[u], Some(best) if d > best) {
            continue;
        }

        for &(v, w) in graph.adj_at(u) {
            if w.is_negative() {
                let (from, to) = (graph.vertex_at(u), graph.vertex_at(v));
                debug!(?from, ?to, ?w, "dijkstra: negative edge weight");
                return Err(GraphError::NegativeWeight {
                    from: format!("{:?}", from),
                    to: format!("{:?}", to),
                    weight: format!("{:?}", w),
                })
            }

            // Distances beyond the range of W are treated as unreachable
            let Some(candidate) = d.checked_add(w) else {
                trace!(from = ?graph.vertex_at(u), to = ?graph.vertex_at(v), "dijkstra: distance overflow");
                continue;
            };
            if matches!(dist[v], Some(best) if !(candidate < best)) {
                continue;
            }
            dist[v] = Some(candidate);
            pred[v] = Some(u);
            queue.push(State { dist: candidate, vertex: v });
        }
    }

    Ok(Some(ShortestPaths::from_indices(graph, s, dist, pred)))
}

/// Bellman-Ford from `start`.
///
/// Performs at most $|V|-1$ relaxation passes over all arcs and stops early once a
/// pass changes nothing. Undirected edges are relaxed in both directions, hence a
/// single negative undirected edge already forms a negative cycle. Results on
/// undirected graphs therefore differ from relaxing each edge only once. Fails with
/// [GraphError::NegativeCycle] if an arc can still be relaxed afterwards.
pub fn bellman_ford<V, W>(graph:&Graph<V, W>, start:&V) -> Result<Option<ShortestPaths<V, W>>>
    where V: Vertex, W: Weight
{
    let Some(s) = graph.index_of(start) else {
        debug!(?start, "bellman_ford: start vertex not in graph");
        return Ok(None)
    };

    let n = graph.num_vertices();
    let arcs = graph.arcs();
    let mut dist:Vec<Option<W>> = vec![None; n];
    let mut pred:Vec<Option<usize>> = vec![None; n];
    dist[s] = Some(W::zero());

    for pass in 1..n {
        let mut changed = false;
        for &(u, v, w) in &arcs {
            if let Some(d) = relax(&dist, u, v, w) {
                dist[v] = Some(d);
                pred[v] = Some(u);
                changed = true;
            }
        }
        if !changed {
            trace!(pass, "bellman_ford: converged early");
            break;
        }
    }

    for &(u, v, w) in &arcs {
        if relax(&dist, u, v, w).is_some() {
            let (from, to) = (graph.vertex_at(u), graph.vertex_at(v));
            debug!(?from, ?to, "bellman_ford: negative cycle");
            return Err(GraphError::NegativeCycle {
                from: format!("{:?}", from),
                to: format!("{:?}", to),
            })
        }
    }

    Ok(Some(ShortestPaths::from_indices(graph, s, dist, pred)))
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####

#[cfg(test)]
mod test {
    use super::*;
    use crate::testutil::*;
    use itertools::Itertools;

    #[test]
    fn dijkstra_directed() {
        let G = sample_directed();
        let P = dijkstra(&G, &"W").unwrap().unwrap();

        assert_eq!(P.distance(&"W"), Some(0));
        assert_eq!(P.distance(&"X"), Some(1));
        assert_eq!(P.distance(&"Y"), Some(4));
        assert_eq!(P.distance(&"Z"), Some(8));
        assert_eq!(P.predecessor(&"W"), None);
        assert_eq!(P.predecessor(&"Z"), Some(&"Y"));
        assert_eq!(P.path_to(&"Z"), vec!["W", "X", "Y", "Z"]);
        assert_eq!(P.path_to(&"W"), vec!["W"]);

        // W has no incoming arcs
        let P = dijkstra(&G, &"X").unwrap().unwrap();
        assert_eq!(P.distance(&"W"), None);
        assert!(!P.is_reachable(&"W"));
        assert!(P.path_to(&"W").is_empty());
    }

    #[test]
    fn dijkstra_undirected() {
        let G = sample_undirected();
        let P = dijkstra(&G, &"A").unwrap().unwrap();

        assert_eq!(P.distance(&"A"), Some(0));
        assert_eq!(P.distance(&"B"), Some(3));
        assert_eq!(P.distance(&"C"), Some(2));
        assert_eq!(P.distance(&"D"), Some(6));
        assert_eq!(P.distance(&"E"), None);
        assert_eq!(P.distance(&"G"), None);
        assert_eq!(P.distances.len(), 7);
        assert_eq!(P.predecessors[&"E"], None);
        assert_eq!(P.path_to(&"D"), vec!["A", "C", "B", "D"]);
        assert!(P.path_to(&"F").is_empty());
    }

    #[test]
    fn absent_start() {
        let G = sample_directed();
        assert!(dijkstra(&G, &"Q").unwrap().is_none());
        assert!(bellman_ford(&G, &"Q").unwrap().is_none());
    }

    #[test]
    fn dijkstra_rejects_negative_weight() {
        let mut G:Graph<&str, i64> = Graph::directed();
        G.add_weighted_edge(&"A", &"B", 1);
        G.add_weighted_edge(&"B", &"C", -1);

        let err = dijkstra(&G, &"A").unwrap_err();
        assert_eq!(err, GraphError::NegativeWeight {
            from: "\"B\"".to_string(),
            to: "\"C\"".to_string(),
            weight: "-1".to_string(),
        });
        assert!(err.to_string().contains("negative edge weight"));

        // The negative edge is never examined from C
        let P = dijkstra(&G, &"C").unwrap().unwrap();
        assert_eq!(P.distance(&"A"), None);
    }

    #[test]
    fn bellman_ford_negative_cycle() {
        let mut G:Graph<&str, i64> = Graph::directed();
        G.add_weighted_edge(&"A", &"B", 1);
        G.add_weighted_edge(&"B", &"C", 2);
        G.add_weighted_edge(&"C", &"A", -4);
        G.add_weighted_edge(&"C", &"D", 1);

        let err = bellman_ford(&G, &"A").unwrap_err();
        assert!(matches!(err, GraphError::NegativeCycle { .. }));
        assert_eq!(err, GraphError::NegativeCycle { from: "\"A\"".to_string(), to: "\"B\"".to_string() });
        assert!(err.to_string().contains("negative weight cycle"));

        // The cycle is not reachable from D
        let P = bellman_ford(&G, &"D").unwrap().unwrap();
        assert_eq!(P.distance(&"D"), Some(0));
        assert_eq!(P.distance(&"A"), None);
    }

    #[test]
    fn bellman_ford_negative_weights() {
        let mut G:Graph<&str, i64> = Graph::directed();
        G.add_weighted_edge(&"A", &"B", 4);
        G.add_weighted_edge(&"A", &"C", 2);
        G.add_weighted_edge(&"C", &"B", -3);
        G.add_weighted_edge(&"B", &"D", 1);

        let P = bellman_ford(&G, &"A").unwrap().unwrap();
        assert_eq!(P.distance(&"B"), Some(-1));
        assert_eq!(P.distance(&"D"), Some(0));
        assert_eq!(P.path_to(&"D"), vec!["A", "C", "B", "D"]);
    }

    #[test]
    fn bellman_ford_undirected() {
        let G = sample_undirected();
        let P = bellman_ford(&G, &"D").unwrap().unwrap();
        assert_eq!(P.distance(&"A"), Some(6));
        assert_eq!(P.path_to(&"A"), vec!["D", "B", "C", "A"]);

        let mut H:Graph<u32, i32> = Graph::undirected();
        H.add_weighted_edge(&0, &1, 2);
        H.add_weighted_edge(&1, &2, -1);
        assert!(matches!(bellman_ford(&H, &0), Err(GraphError::NegativeCycle { .. })));
    }

    #[test]
    fn single_vertex() {
        let mut G:Graph<u32, f64> = Graph::directed();
        G.add_vertex(&0);
        assert_eq!(bellman_ford(&G, &0).unwrap().unwrap().distance(&0), Some(0.0));
        assert_eq!(dijkstra(&G, &0).unwrap().unwrap().distance(&0), Some(0.0));
    }

    #[test]
    fn float_weights() {
        let mut G:Graph<u32, f64> = Graph::undirected();
        G.add_weighted_edge(&0, &1, 0.5);
        G.add_weighted_edge(&1, &2, 0.25);
        G.add_weighted_edge(&0, &2, 1.0);
        let P = dijkstra(&G, &0).unwrap().unwrap();
        assert_eq!(P.distance(&2), Some(0.75));
        assert_eq!(P.path_to(&2), vec![0, 1, 2]);
    }

    #[test]
    fn overflowing_distances() {
        let mut G:Graph<u32, i64> = Graph::directed();
        G.add_weighted_edge(&0, &1, i64::MAX);
        G.add_weighted_edge(&1, &2, 1);

        let D = dijkstra(&G, &0).unwrap().unwrap();
        assert_eq!(D.distance(&1), Some(i64::MAX));
        assert_eq!(D.distance(&2), None);
        assert!(D.path_to(&2).is_empty());

        let B = bellman_ford(&G, &0).unwrap().unwrap();
        assert_eq!(B.distances, D.distances);

        // A shorter detour keeps 2 reachable
        G.add_weighted_edge(&0, &2, 5);
        let D = dijkstra(&G, &0).unwrap().unwrap();
        assert_eq!(D.distance(&2), Some(5));
        assert_eq!(bellman_ford(&G, &0).unwrap().unwrap().distance(&2), Some(5));

        let mut H:Graph<u32, i8> = Graph::undirected();
        H.add_weighted_edge(&0, &1, 100);
        H.add_weighted_edge(&1, &2, 100);
        assert_eq!(dijkstra(&H, &0).unwrap().unwrap().distance(&2), None);
        assert_eq!(bellman_ford(&H, &0).unwrap().unwrap().distance(&2), None);
    }

    #[test]
    fn malformed_predecessors() {
        let mut pred:VertexMap<&str, Option<&str>> = VertexMap::default();
        pred.insert("a", Some("b"));
        pred.insert("b", Some("a"));
        pred.insert("c", Some("x"));

        assert!(shortest_path(&pred, &"s", &"a").is_empty());
        assert!(shortest_path(&pred, &"s", &"c").is_empty());
        assert!(shortest_path(&pred, &"s", &"q").is_empty());
        assert_eq!(shortest_path(&pred, &"b", &"a"), vec!["b", "a"]);
    }

    #[test]
    fn dijkstra_agrees_with_bellman_ford() {
        for seed in 0..20 {
            let kind = if seed % 2 == 0 { GraphKind::Directed } else { GraphKind::Undirected };
            let G = random_graph(seed, 25, 60, kind, 0..20);
            for s in 0..25 {
                let D = dijkstra(&G, &s).unwrap().unwrap();
                let B = bellman_ford(&G, &s).unwrap().unwrap();
                assert_eq!(D.distances, B.distances, "seed {seed}, source {s}");
            }
        }
    }

    #[test]
    fn paths_match_distances() {
        for seed in 0..10 {
            let G = random_graph(seed, 25, 60, GraphKind::Directed, 1..20);
            let P = dijkstra(&G, &0).unwrap().unwrap();
            for v in G.vertices() {
                let path = P.path_to(v);
                match P.distance(v) {
                    None => assert!(path.is_empty()),
                    Some(d) => {
                        assert_eq!(path.first(), Some(&0));
                        assert_eq!(path.last(), Some(v));
                        let length:i64 = path.iter().tuple_windows()
                            .map(|(a, b)| G.weight(a, b).unwrap())
                            .sum();
                        assert_eq!(length, d);
                    }
                }
            }
        }
    }
}
