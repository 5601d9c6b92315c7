//! Graph interfaces, the read-only snapshot, traversals and analytical utilities.
//!
//! Everything in this module consumes a graph through the [`Graph`] trait:
//! - `basic`: the immutable adjacency-list snapshot
//! - `traversal`: depth-first and breadth-first walks with visitor hooks
//! - `algorithms`: cycle detection, connectivity, shortest paths, spanning forests and flows
//!
//! Vertices are plain integers in `0..vertex_count`. Every utility owns a
//! snapshot of its graph and caches what it computes, so a utility built over
//! a graph that later changes must be discarded and rebuilt.

use core::fmt::Debug;

use num_traits::Num;
use serde::{Deserialize, Serialize};

pub mod algorithms;
pub mod basic;
pub mod edge;
pub mod traversal;

pub use basic::AdjacencyListGraph;
pub use edge::{BasicEdge, BasicWeightedEdge};
pub use traversal::{TraversalStrategy, Visitor};

/// Whether a graph treats its connections as directed or undirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphKind {
    /// Each edge points from `either()` to `other(either())`.
    Directed,
    /// Each connection appears in both endpoints' adjacency lists.
    Undirected,
}

/// A connection between two vertices, seen from one of its endpoints.
///
/// In the adjacency list of vertex `v`, every edge reports `either() == v`
/// and its far endpoint is `other(v)`.
pub trait Edge: Clone + Debug {
    /// Returns one endpoint (the tail for directed edges).
    fn either(&self) -> usize;

    /// Returns the endpoint opposite to `vertex`.
    fn other(&self, vertex: usize) -> usize;

    /// Returns the same connection with its endpoints swapped.
    #[must_use]
    fn reversed(&self) -> Self;
}

/// Edge weights: comparable, additive and with a zero.
///
/// Blanket-implemented for every primitive numeric type.
pub trait Weight: Copy + PartialOrd + Debug + Num {}

impl<T> Weight for T where T: Copy + PartialOrd + Debug + Num {}

/// An edge carrying a [`Weight`].
pub trait WeightedEdge: Edge {
    /// The weight type.
    type Weight: Weight;

    /// Returns the weight of this edge.
    fn weight(&self) -> Self::Weight;

    /// Returns the reversed edge carrying `weight`.
    #[must_use]
    fn reversed_with(&self, weight: Self::Weight) -> Self;
}

/// A read-only graph over vertices `0..vertex_count`.
///
/// `adjacencies` must be O(1); every complexity bound in this crate assumes it.
pub trait Graph: Clone {
    /// The edge type stored in adjacency lists.
    type Edge: Edge;

    /// Directed or undirected.
    fn kind(&self) -> GraphKind;

    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of edges, counting an undirected connection once.
    fn edge_count(&self) -> usize;

    /// The ordered adjacency list of `vertex`.
    fn adjacencies(&self, vertex: usize) -> &[Self::Edge];

    /// The graph with every edge reversed. Undirected graphs return themselves.
    #[must_use]
    fn reversed(&self) -> Self;

    /// Returns `true` for directed graphs.
    fn is_directed(&self) -> bool {
        self.kind() == GraphKind::Directed
    }

    /// Every edge exactly once.
    ///
    /// Directed graphs yield all adjacencies. Undirected graphs yield each
    /// connection from its lower endpoint, and each self-loop once.
    fn edges(&self) -> Vec<Self::Edge> {
        let mut out = Vec::with_capacity(self.edge_count());
        for v in 0..self.vertex_count() {
            let mut self_loops = 0usize;
            for edge in self.adjacencies(v) {
                let w = edge.other(v);
                if self.is_directed() || w > v {
                    out.push(edge.clone());
                } else if w == v {
                    // An undirected self-loop is stored twice in its own list.
                    if self_loops % 2 == 0 {
                        out.push(edge.clone());
                    }
                    self_loops += 1;
                }
            }
        }
        out
    }
}

/// Panics unless `vertex` is a valid index of `graph`.
#[inline]
#[track_caller]
pub(crate) fn assert_vertex<G: Graph>(graph: &G, vertex: usize) {
    assert!(
        vertex < graph.vertex_count(),
        "vertex {vertex} out of bounds for n={}",
        graph.vertex_count()
    );
}
