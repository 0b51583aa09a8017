//! Zero-divisor graphs built from relations on `Z_n`.
//!
//! Two graphs are built from two relations:
//!
//! - the *zero-divisor graph* Γ(Z_n), from [`zero_divisor_pairs`](crate::annihilator::zero_divisor_pairs)
//! - the *exact zero-divisor graph*, from [`exact_pairs`](crate::closure::exact_pairs)
//!
//! In both, the zero element is never a vertex and loops are kept apart from edges.
use crate::annihilator::{ElementSet, Relation};

use std::collections::BTreeSet;

/// An undirected edge `{u, v}` stored as `(min, max)`, with `u != v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge(pub u64, pub u64);

impl Edge {
    /// The edge between `x` and `y`, or `None` when `x == y`.
    pub fn new(x: u64, y: u64) -> Option<Self> {
        match x.cmp(&y) {
            core::cmp::Ordering::Less => Some(Edge(x, y)),
            core::cmp::Ordering::Greater => Some(Edge(y, x)),
            core::cmp::Ordering::Equal => None,
        }
    }
}

/// A simple undirected graph on nonzero ring elements, plus a set of looped vertices.
///
/// Loops never appear in `edges`, so the serialized `edges` field differs from the Python
/// catalog's stored edge lists, which included `(x, x)`. Use [`Graph::loop_edges`] and
/// [`Graph::stored_edge_count`] to recover that form.
///
/// # Invariants
///
/// - `0` is not a vertex
/// - every endpoint of an edge and every element of `self_loops` is in `vertices`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    pub vertices: ElementSet,
    pub edges: BTreeSet<Edge>,
    pub self_loops: ElementSet,
}

impl Graph {
    pub fn empty() -> Self {
        Graph::default()
    }

    /// Build a graph from an edge list; looped pairs `(x, x)` go to `self_loops`.
    pub fn from_pairs<I: IntoIterator<Item = (u64, u64)>>(pairs: I) -> Self {
        let mut g = Graph::empty();
        for (x, y) in pairs {
            g.insert(x, y);
        }
        g
    }

    fn insert(&mut self, x: u64, y: u64) {
        self.vertices.insert(x);
        self.vertices.insert(y);
        match Edge::new(x, y) {
            Some(e) => {
                self.edges.insert(e);
            }
            None => {
                self.self_loops.insert(x);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of non-loop edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of edges when each loop is also counted as an edge `(x, x)`.
    pub fn stored_edge_count(&self) -> usize {
        self.edges.len() + self.self_loops.len()
    }

    /// Vertices which are an endpoint of at least one non-loop edge.
    pub fn connected_vertices(&self) -> ElementSet {
        self.edges.iter().flat_map(|e| [e.0, e.1]).collect()
    }

    /// Loops as `(x, x)` pairs.
    pub fn loop_edges(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.self_loops.iter().map(|&x| (x, x))
    }
}

/// The zero-divisor graph: every nonzero `(x, y)` in the relation is an edge or a loop.
pub fn zero_divisor_graph(pairs: &Relation) -> Graph {
    let g = Graph::from_pairs(pairs.iter().filter(|&(x, y)| x != 0 && y != 0));
    tracing::debug!(
        n = pairs.ring.modulus(),
        vertices = g.vertices.len(),
        edges = g.edges.len(),
        self_loops = g.self_loops.len(),
        "built zero-divisor graph"
    );
    g
}

/// The exact zero-divisor graph.
///
/// Loops are taken as-is, but an edge `{x, y}` is only added when both `(x, y)` and `(y, x)` are
/// exact pairs. One-directional pairs add neither edges nor vertices.
pub fn exact_zero_divisor_graph(exact: &Relation) -> Graph {
    let mut g = Graph::empty();
    for (x, y) in exact.iter() {
        if x == 0 || y == 0 {
            continue;
        }
        if x == y || exact.contains(y, x) {
            g.insert(x, y);
        }
    }
    tracing::debug!(
        n = exact.ring.modulus(),
        vertices = g.vertices.len(),
        edges = g.edges.len(),
        self_loops = g.self_loops.len(),
        "built exact zero-divisor graph"
    );
    g
}
