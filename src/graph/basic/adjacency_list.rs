//! An immutable adjacency-list graph snapshot.
//!
//! The adjacency lists live behind an `Arc`, so cloning a snapshot to hand it
//! to a utility is O(1) and every clone observes the same edges forever.

use std::sync::Arc;

use crate::graph::{Edge, Graph, GraphKind};

/// A read-only adjacency-list graph.
///
/// For undirected graphs each connection `u-v` is stored as the edge in `u`'s
/// list and its reverse in `v`'s list; a self-loop is stored twice in its own list.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `from_edges` | \(O(n + m)\) | Appends each edge to its endpoint lists |
/// | `adjacencies` | \(O(1)\) | Returns a slice |
/// | `clone` | \(O(1)\) | Shares the adjacency storage |
/// | `reversed` | \(O(n + m)\) | Directed only; undirected graphs clone |
#[derive(Debug, Clone)]
pub struct AdjacencyListGraph<E> {
    kind: GraphKind,
    adjacency: Arc<[Vec<E>]>,
    edge_count: usize,
}

impl<E: Edge> AdjacencyListGraph<E> {
    /// Builds a graph with `vertex_count` vertices from an edge list.
    ///
    /// # Panics
    /// Panics if any edge references an out-of-bounds vertex.
    pub fn from_edges<I>(kind: GraphKind, vertex_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let mut adjacency: Vec<Vec<E>> = (0..vertex_count).map(|_| Vec::new()).collect();
        let mut edge_count = 0usize;
        for edge in edges {
            let u = edge.either();
            let v = edge.other(u);
            assert!(
                u < vertex_count && v < vertex_count,
                "edge {u}->{v} out of bounds for n={vertex_count}"
            );
            if kind == GraphKind::Undirected {
                adjacency[v].push(edge.reversed());
            }
            adjacency[u].push(edge);
            edge_count += 1;
        }

        Self {
            kind,
            adjacency: adjacency.into(),
            edge_count,
        }
    }

    /// Out-degree of `vertex` (degree for undirected graphs).
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    pub fn degree(&self, vertex: usize) -> usize {
        self.adjacencies(vertex).len()
    }
}

impl<E: Edge> Graph for AdjacencyListGraph<E> {
    type Edge = E;

    #[inline]
    fn kind(&self) -> GraphKind {
        self.kind
    }

    #[inline]
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    fn adjacencies(&self, vertex: usize) -> &[E] {
        assert!(
            vertex < self.adjacency.len(),
            "vertex {vertex} out of bounds"
        );
        &self.adjacency[vertex]
    }

    fn reversed(&self) -> Self {
        if self.kind == GraphKind::Undirected {
            return self.clone();
        }
        let n = self.adjacency.len();
        let mut adjacency: Vec<Vec<E>> = (0..n).map(|_| Vec::new()).collect();
        for (u, list) in self.adjacency.iter().enumerate() {
            for edge in list {
                adjacency[edge.other(u)].push(edge.reversed());
            }
        }
        Self {
            kind: self.kind,
            adjacency: adjacency.into(),
            edge_count: self.edge_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::BasicEdge;

    fn targets(graph: &AdjacencyListGraph<BasicEdge>, v: usize) -> Vec<usize> {
        graph.adjacencies(v).iter().map(|e| e.other(v)).collect()
    }

    #[test]
    fn directed_construction() {
        let graph = AdjacencyListGraph::from_edges(
            GraphKind::Directed,
            3,
            [BasicEdge::new(0, 1), BasicEdge::new(0, 2), BasicEdge::new(1, 2)],
        );

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(targets(&graph, 0), vec![1, 2]);
        assert_eq!(targets(&graph, 1), vec![2]);
        assert!(targets(&graph, 2).is_empty());
    }

    #[test]
    fn undirected_edges_are_reciprocal() {
        let graph = AdjacencyListGraph::from_edges(
            GraphKind::Undirected,
            3,
            [BasicEdge::new(0, 1), BasicEdge::new(1, 2)],
        );

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(targets(&graph, 1), vec![0, 2]);
        for v in 0..3 {
            for e in graph.adjacencies(v) {
                assert_eq!(e.either(), v);
            }
        }
    }

    #[test]
    fn undirected_self_loop_is_stored_twice() {
        let graph =
            AdjacencyListGraph::from_edges(GraphKind::Undirected, 1, [BasicEdge::new(0, 0)]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree(0), 2);
    }

    #[test]
    fn reversing_twice_restores_directed_graph() {
        let graph = AdjacencyListGraph::from_edges(
            GraphKind::Directed,
            4,
            [
                BasicEdge::new(0, 1),
                BasicEdge::new(1, 2),
                BasicEdge::new(2, 0),
                BasicEdge::new(3, 3),
            ],
        );

        let reversed = graph.reversed();
        assert_eq!(reversed.edge_count(), graph.edge_count());
        assert_eq!(targets(&reversed, 0), vec![2]);
        assert_eq!(targets(&reversed, 3), vec![3]);

        let back = reversed.reversed();
        for v in 0..4 {
            let mut a = targets(&graph, v);
            let mut b = targets(&back, v);
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn reversing_undirected_is_identity() {
        let graph = AdjacencyListGraph::from_edges(
            GraphKind::Undirected,
            3,
            [BasicEdge::new(0, 1), BasicEdge::new(1, 2)],
        );
        let reversed = graph.reversed();
        for v in 0..3 {
            assert_eq!(targets(&graph, v), targets(&reversed, v));
        }
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn rejects_out_of_bounds_edge() {
        let _ = AdjacencyListGraph::from_edges(GraphKind::Directed, 2, [BasicEdge::new(0, 2)]);
    }
}
