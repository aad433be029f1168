//!
//! An adjacency-list graph which can either be directed or undirected. Vertices can be
//! of any hashable type and every edge carries a numeric weight. Both the vertices and
//! the neighbourhood of every vertex remember the order in which they were inserted;
//! all algorithms in this crate iterate in that order, so their results are reproducible.
//!
//! ```rust
//! use adjgraph::graph::*;
//!
//! fn main() {
//!     let mut graph:Graph<&str, i64> = Graph::undirected();
//!     graph.add_weighted_edge(&"A", &"B", 5);
//!     graph.add_weighted_edge(&"A", &"C", 2);
//!     graph.add_vertex(&"G");
//!
//!     assert_eq!(graph.num_vertices(), 4);
//!     assert_eq!(graph.num_edges(), 2);
//!     assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![&"A", &"B", &"C", &"G"]);
//!     assert_eq!(graph.neighbours(&"A").collect::<Vec<_>>(), vec![(&"B", 5), (&"C", 2)]);
//!     assert_eq!(graph.neighbours(&"B").collect::<Vec<_>>(), vec![(&"A", 5)]);
//! }
//! ```
//!
//! ## Duplicate edges
//!
//! Adding an edge between two vertices which are already adjacent does nothing, the
//! weight of the first insertion is kept. There is no way to change the weight of an
//! existing edge and no way to remove vertices or edges.
//!
//! ```rust
//! use adjgraph::graph::*;
//!
//! fn main() {
//!     let mut graph:Graph<u32, i32> = Graph::directed();
//!     assert!(graph.add_weighted_edge(&0, &1, 7));
//!     assert!(!graph.add_weighted_edge(&0, &1, 3));
//!     assert_eq!(graph.weight(&0, &1), Some(7));
//!
//!     // Arcs are one-directional, so this is a new edge.
//!     assert!(graph.add_weighted_edge(&1, &0, 3));
//!     assert_eq!(graph.num_edges(), 2);
//! }
//! ```
//!
//! A self-loop $(v,v)$ is stored once in either mode.

use std::fmt;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::Add;

use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;
use tracing::debug;

use crate::error::{GraphError, Result};

pub type VertexSet<V> = FxHashSet<V>;
pub type VertexMap<V, T> = FxHashMap<V, T>;

/// Anything that can identify a vertex.
pub trait Vertex: Hash + Eq + Clone + Debug {}

impl<T> Vertex for T where T: Hash + Eq + Clone + Debug {}

/// Numeric edge weights. Negative values are allowed, although not every
/// algorithm accepts them.
pub trait Weight: Copy + PartialOrd + Add<Output=Self> + Debug + Display {
    fn zero() -> Self;
    fn one() -> Self;

    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }

    /// Sum of two weights, `None` if it does not fit into `Self`.
    fn checked_add(self, other:Self) -> Option<Self>;
}

macro_rules! impl_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn zero() -> Self { 0 }
                fn one() -> Self { 1 }
                fn checked_add(self, other:Self) -> Option<Self> { <$t>::checked_add(self, other) }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn zero() -> Self { 0.0 }
                fn one() -> Self { 1.0 }
                fn checked_add(self, other:Self) -> Option<Self> { Some(self + other) }
            }
        )*
    };
}

impl_weight!(i8, i16, i32, i64, i128, isize);
impl_float_weight!(f32, f64);

/// Whether edges are one-directional arcs or symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphKind {
    Directed,
    Undirected
}

impl Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphKind::Directed => write!(f, "directed"),
            GraphKind::Undirected => write!(f, "undirected"),
        }
    }
}

/// A vertex alongside its neighbours, which are stored as positions in `Graph::nodes`.
#[derive(Debug, Clone)]
struct Node<V, W> {
    v: V,
    adj: Vec<(usize, W)>
}

impl<V, W> Node<V, W> {
    fn new(v:V) -> Self {
        Node{ v, adj: Vec::new() }
    }
}

/// Adjacency-list graph with weighted edges.
///
/// Vertices are kept in a vector in insertion order and `indices` maps every vertex to
/// its position, so lookups take $O(1)$ and iteration is deterministic. Checking
/// whether an edge exists takes $O(\deg(u))$.
#[derive(Debug, Clone)]
pub struct Graph<V, W = i64> {
    kind: GraphKind,
    indices: FxHashMap<V, usize>,
    nodes: Vec<Node<V, W>>,
    m: usize
}

impl<V, W> Graph<V, W> where V: Vertex, W: Weight {
    pub fn new(kind:GraphKind) -> Self {
        Graph {
            kind,
            indices: FxHashMap::default(),
            nodes: Vec::new(),
            m: 0
        }
    }

    pub fn directed() -> Self {
        Graph::new(GraphKind::Directed)
    }

    pub fn undirected() -> Self {
        Graph::new(GraphKind::Undirected)
    }

    pub fn with_capacity(kind:GraphKind, n_guess:usize) -> Self {
        Graph {
            kind,
            indices: FxHashMap::with_capacity_and_hasher(n_guess, Default::default()),
            nodes: Vec::with_capacity(n_guess),
            m: 0
        }
    }

    /*
        Basic properties and queries
    */
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind == GraphKind::Directed
    }

    pub fn num_vertices(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges. An undirected edge counts once.
    pub fn num_edges(&self) -> usize {
        self.m
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, u:&V) -> bool {
        self.indices.contains_key(u)
    }

    /// Returns whether `v` appears in the neighbour list of `u`.
    pub fn adjacent(&self, u:&V, v:&V) -> bool {
        self.weight(u, v).is_some()
    }

    /// Returns the weight of the edge from `u` to `v`, if it exists.
    pub fn weight(&self, u:&V, v:&V) -> Option<W> {
        let iu = self.index_of(u)?;
        let iv = self.index_of(v)?;
        self.nodes[iu].adj.iter()
            .find(|(x, _)| *x == iv)
            .map(|(_, w)| *w)
    }

    /// Returns the length of the neighbour list of `u`, or zero if `u` is
    /// not in the graph.
    pub fn degree(&self, u:&V) -> usize {
        match self.index_of(u) {
            Some(i) => self.nodes[i].adj.len(),
            None => 0
        }
    }

    /*
        Iteration and access
    */
    pub fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item=&'a V> + 'a> {
        Box::new(self.nodes.iter().map(|node| &node.v))
    }

    /// Iterates over the neighbours of `u` together with the edge weights,
    /// in insertion order. Unknown vertices have no neighbours.
    pub fn neighbours<'a>(&'a self, u:&V) -> Box<dyn Iterator<Item=(&'a V, W)> + 'a> {
        match self.index_of(u) {
            Some(i) => Box::new(self.nodes[i].adj.iter().map(move |&(j, w)| (&self.nodes[j].v, w))),
            None => Box::new(std::iter::empty())
        }
    }

    /// Returns all edges as `(u, v, weight)` triples. In undirected graphs every edge
    /// is listed once, in the orientation in which it is first encountered.
    pub fn edges(&self) -> Vec<(V, V, W)> {
        self.edge_indices().into_iter()
            .map(|(iu, iv, w)| (self.nodes[iu].v.clone(), self.nodes[iv].v.clone(), w))
            .collect()
    }

    /*
        Editing
    */
    /// Adds `u` to the graph. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, u:&V) -> bool {
        if self.contains(u) {
            false
        } else {
            self.insert_vertex(u);
            true
        }
    }

    pub fn add_vertices<'a, I>(&mut self, vertices:I) where I: IntoIterator<Item=&'a V>, V: 'a {
        for u in vertices {
            self.add_vertex(u);
        }
    }

    /// Adds an edge of weight one. See [Graph::add_weighted_edge].
    pub fn add_edge(&mut self, u:&V, v:&V) -> bool {
        self.add_weighted_edge(u, v, W::one())
    }

    /// Adds an edge from `u` to `v` (and from `v` to `u` if the graph is undirected),
    /// adding missing endpoints first. Returns `false` and leaves the weight untouched
    /// if `v` already is a neighbour of `u`.
    pub fn add_weighted_edge(&mut self, u:&V, v:&V, weight:W) -> bool {
        let iu = self.index_or_insert(u);
        let iv = self.index_or_insert(v);

        if self.nodes[iu].adj.iter().any(|(x, _)| *x == iv) {
            return false
        }
        self.nodes[iu].adj.push((iv, weight));

        if self.kind == GraphKind::Undirected && iu != iv
            && !self.nodes[iv].adj.iter().any(|(x, _)| *x == iu) {
            self.nodes[iv].adj.push((iu, weight));
        }
        self.m += 1;
        true
    }

    pub fn add_edges<I>(&mut self, edges:I) where I: IntoIterator<Item=(V, V, W)> {
        for (u, v, w) in edges {
            self.add_weighted_edge(&u, &v, w);
        }
    }

    /*
        Index-based access for the algorithms in this crate
    */
    /// Fails with [GraphError::ModeMismatch] unless the graph is of the `expected` kind.
    pub(crate) fn require_kind(&self, expected:GraphKind, operation:&'static str) -> Result<()> {
        if self.kind == expected {
            return Ok(())
        }
        debug!(operation, %expected, found = %self.kind, "graph kind mismatch");
        Err(GraphError::ModeMismatch { operation, expected, found: self.kind })
    }

    pub(crate) fn index_of(&self, u:&V) -> Option<usize> {
        self.indices.get(u).copied()
    }

    pub(crate) fn vertex_at(&self, i:usize) -> &V {
        &self.nodes[i].v
    }

    pub(crate) fn adj_at(&self, i:usize) -> &[(usize, W)] {
        &self.nodes[i].adj
    }

    /// Every stored neighbour entry as an arc. Undirected edges appear in both directions.
    pub(crate) fn arcs(&self) -> Vec<(usize, usize, W)> {
        self.nodes.iter().enumerate()
            .flat_map(|(iu, node)| node.adj.iter().map(move |&(iv, w)| (iu, iv, w)))
            .collect()
    }

    pub(crate) fn edge_indices(&self) -> Vec<(usize, usize, W)> {
        if self.is_directed() {
            return self.arcs()
        }

        let mut seen:FxHashSet<(usize, usize)> = FxHashSet::default();
        let mut res = Vec::with_capacity(self.m);
        for (iu, iv, w) in self.arcs() {
            if !seen.contains(&(iv, iu)) {
                res.push((iu, iv, w));
                seen.insert((iu, iv));
            }
        }
        res
    }

    fn insert_vertex(&mut self, u:&V) -> usize {
        let i = self.nodes.len();
        self.nodes.push(Node::new(u.clone()));
        self.indices.insert(u.clone(), i);
        i
    }

    fn index_or_insert(&mut self, u:&V) -> usize {
        match self.index_of(u) {
            Some(i) => i,
            None => self.insert_vertex(u)
        }
    }
}

impl<W> Graph<u32, W> where W: Weight {
    /// Generates a path on `n` vertices with unit weights.
    pub fn path(kind:GraphKind, n:u32) -> Self {
        let mut res = Graph::with_capacity(kind, n as usize);
        res.add_vertices((0..n).collect_vec().iter());
        for v in 1..n {
            res.add_edge(&(v-1), &v);
        }

        res
    }

    /// Generates a cycle on `n` vertices with unit weights. For `n = 1` this is a
    /// single self-loop.
    pub fn cycle(kind:GraphKind, n:u32) -> Self {
        let mut res = Graph::with_capacity(kind, n as usize);
        for u in 0..n {
            let v = (u+1) % n;
            res.add_edge(&u, &v);
        }

        res
    }

    /// Generates a complete graph on `n` vertices with unit weights. In the directed
    /// case every pair is connected in both directions.
    pub fn clique(kind:GraphKind, n:u32) -> Self {
        let mut res = Graph::with_capacity(kind, n as usize);
        res.add_vertices((0..n).collect_vec().iter());
        for (u, v) in (0..n).tuple_combinations() {
            res.add_edge(&u, &v);
            res.add_edge(&v, &u);
        }

        res
    }
}

impl<V, W> Display for Graph<V, W> where V: Vertex + Display, W: Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            GraphKind::Directed => writeln!(f, "Directed Graph:")?,
            GraphKind::Undirected => writeln!(f, "Undirected Graph:")?,
        }
        if self.is_empty() {
            return write!(f, " (empty)")
        }

        for node in &self.nodes {
            if node.adj.is_empty() {
                writeln!(f, "  {}: (no outgoing edges)", node.v)?;
            } else {
                let N = node.adj.iter()
                    .map(|&(j, w)| format!("{}({})", self.nodes[j].v, w))
                    .join(", ");
                writeln!(f, "  {}: {}", node.v, N)?;
            }
        }
        Ok(())
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
