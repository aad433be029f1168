use std::ops::Range;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::graph::*;

/// Two weighted components A-B-C-D and E-F plus the isolated vertex G.
pub fn sample_undirected() -> Graph<&'static str, i64> {
    let mut G = Graph::undirected();
    G.add_vertex(&"A");
    G.add_vertex(&"B");
    G.add_weighted_edge(&"A", &"B", 5);
    G.add_weighted_edge(&"A", &"C", 2);
    G.add_weighted_edge(&"B", &"C", 1);
    G.add_weighted_edge(&"B", &"D", 3);
    G.add_weighted_edge(&"C", &"D", 7);
    G.add_weighted_edge(&"E", &"F", 1);
    G.add_vertex(&"G");
    G
}

/// The cycle X -> Y -> Z -> X with the shortcut X -> Z and the entry arc W -> X.
pub fn sample_directed() -> Graph<&'static str, i64> {
    let mut G = Graph::directed();
    G.add_weighted_edge(&"X", &"Y", 3);
    G.add_weighted_edge(&"Y", &"Z", 4);
    G.add_weighted_edge(&"X", &"Z", 10);
    G.add_weighted_edge(&"Z", &"X", 2);
    G.add_weighted_edge(&"W", &"X", 1);
    G
}

/// A graph on the vertices `0..n` with (up to) `m` random edges without self-loops.
/// Weights are drawn from `weights`.
pub fn random_graph(seed:u64, n:u32, m:usize, kind:GraphKind, weights:Range<i64>) -> Graph<u32, i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut G = Graph::with_capacity(kind, n as usize);
    G.add_vertices((0..n).collect::<Vec<_>>().iter());

    for _ in 0..m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v {
            continue;
        }
        let w = rng.gen_range(weights.clone());
        G.add_weighted_edge(&u, &v, w);
    }

    G
}
