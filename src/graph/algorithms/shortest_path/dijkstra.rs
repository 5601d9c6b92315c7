//! Dijkstra's algorithm for graphs with non-negative edge weights.

use std::cell::OnceCell;
use std::sync::Arc;

use num_traits::Zero;
use tracing::{debug, warn};

use super::{PathTree, ShortestPathSearch, WeightOf};
use crate::collections::IndexedMinHeap;
use crate::error::{GraphError, Result};
use crate::graph::{assert_vertex, Edge, Graph, WeightedEdge};

/// Shortest paths from one source over non-negative weights.
///
/// The search runs on the first query. If it relaxes an edge with a negative
/// weight it stops, and every query on this instance returns
/// [`GraphError::NegativeWeightedEdge`] from then on.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | first query | \(O(m \log n)\) | Indexed binary heap with decrease-key |
/// | `weight_to` | \(O(1)\) | |
/// | `path_to` | \(O(\text{path length})\) first time | Memoized per destination |
#[derive(Debug)]
pub struct Dijkstra<G>
where
    G: Graph,
    G::Edge: WeightedEdge,
{
    graph: G,
    source: usize,
    tree: OnceCell<Result<PathTree<G::Edge>>>,
}

impl<G> Dijkstra<G>
where
    G: Graph,
    G::Edge: WeightedEdge,
{
    /// Creates the search. Nothing is computed until the first query.
    ///
    /// # Panics
    /// Panics if `source` is out of bounds.
    pub fn new(graph: G, source: usize) -> Self {
        assert_vertex(&graph, source);
        Self {
            graph,
            source,
            tree: OnceCell::new(),
        }
    }

    fn tree(&self) -> Result<&PathTree<G::Edge>> {
        self.tree.get_or_init(|| self.build()).as_ref().map_err(|e| *e)
    }

    fn build(&self) -> Result<PathTree<G::Edge>> {
        let n = self.graph.vertex_count();
        let mut tree = PathTree::new(n, self.source);
        let mut pq = IndexedMinHeap::with_capacity(n);
        pq.push(self.source, <WeightOf<G> as Zero>::zero());

        while let Some((v, _)) = pq.pop() {
            for edge in self.graph.adjacencies(v) {
                if edge.weight() < <WeightOf<G> as Zero>::zero() {
                    let err = GraphError::NegativeWeightedEdge {
                        from: v,
                        to: edge.other(v),
                    };
                    warn!(%err, "dijkstra aborted");
                    return Err(err);
                }
                if tree.relax(edge) {
                    let w = edge.other(v);
                    if let Some(d) = tree.distance(w) {
                        pq.push_or_decrease(w, d);
                    }
                }
            }
        }

        debug!(
            source = self.source,
            vertices = n,
            reached = tree.distances().iter().flatten().count(),
            "dijkstra finished"
        );
        Ok(tree)
    }

    /// Distances from the source, indexed by vertex (`None` if unreachable).
    ///
    /// # Errors
    /// Returns [`GraphError::NegativeWeightedEdge`] if the search met a negative weight.
    pub fn distances(&self) -> Result<&[Option<WeightOf<G>>]> {
        Ok(self.tree()?.distances())
    }
}

impl<G> ShortestPathSearch for Dijkstra<G>
where
    G: Graph,
    G::Edge: WeightedEdge,
{
    type Edge = G::Edge;

    fn source(&self) -> usize {
        self.source
    }

    fn weight_to(&self, vertex: usize) -> Result<Option<WeightOf<G>>> {
        assert_vertex(&self.graph, vertex);
        Ok(self.tree()?.distance(vertex))
    }

    fn path_to(&self, vertex: usize) -> Result<Arc<[G::Edge]>> {
        assert_vertex(&self.graph, vertex);
        Ok(self.tree()?.path(vertex))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::algorithms::shortest_path::path_vertices;
    use crate::graph::{AdjacencyListGraph, BasicWeightedEdge, GraphKind};

    fn tiny_ewd() -> AdjacencyListGraph<BasicWeightedEdge<f64>> {
        let edges = [
            (4, 5, 0.35), (5, 4, 0.35), (4, 7, 0.37), (5, 7, 0.28), (7, 5, 0.28),
            (5, 1, 0.32), (0, 4, 0.38), (0, 2, 0.26), (7, 3, 0.39), (1, 3, 0.29),
            (2, 7, 0.34), (6, 2, 0.40), (3, 6, 0.52), (6, 0, 0.58), (6, 4, 0.93),
        ];
        AdjacencyListGraph::from_edges(
            GraphKind::Directed,
            8,
            edges.iter().map(|&(u, v, w)| BasicWeightedEdge::new(u, v, w)),
        )
    }

    #[test]
    fn tiny_weighted_digraph_distances() {
        let sp = Dijkstra::new(tiny_ewd(), 0);
        let expected = [0.0, 1.05, 0.26, 0.99, 0.38, 0.73, 1.51, 0.60];
        for (v, &d) in expected.iter().enumerate() {
            let got = sp.weight_to(v).unwrap().unwrap();
            assert!((got - d).abs() < 1e-9, "vertex {v}: {got} != {d}");
        }
        let path = sp.path_to(6).unwrap();
        assert_eq!(path_vertices(0, &path), vec![0, 2, 7, 3, 6]);
    }

    #[test]
    fn unreachable_vertex_has_no_path() {
        let g = AdjacencyListGraph::from_edges(
            GraphKind::Directed,
            3,
            [BasicWeightedEdge::new(1, 0, 1)],
        );
        let sp = Dijkstra::new(g, 0);
        assert_eq!(sp.weight_to(0), Ok(Some(0)));
        assert_eq!(sp.weight_to(1), Ok(None));
        assert_eq!(sp.has_path_to(2), Ok(false));
        assert!(sp.path_to(2).unwrap().is_empty());
    }

    #[test]
    fn negative_edge_fails_every_query() {
        let g = AdjacencyListGraph::from_edges(
            GraphKind::Directed,
            3,
            [BasicWeightedEdge::new(0, 1, 1), BasicWeightedEdge::new(1, 2, -4)],
        );
        let sp = Dijkstra::new(g, 0);
        let expected = Err(GraphError::NegativeWeightedEdge { from: 1, to: 2 });
        assert_eq!(sp.weight_to(2), expected);
        assert_eq!(sp.weight_to(0), expected);
        assert_eq!(sp.has_path_to(1), Err(GraphError::NegativeWeightedEdge { from: 1, to: 2 }));
        assert!(sp.path_to(1).is_err());
        assert!(sp.distances().is_err());
    }

    #[test]
    fn unreached_negative_edge_is_ignored() {
        let g = AdjacencyListGraph::from_edges(
            GraphKind::Directed,
            3,
            [BasicWeightedEdge::new(0, 1, 1), BasicWeightedEdge::new(2, 1, -4)],
        );
        let sp = Dijkstra::new(g, 0);
        assert_eq!(sp.weight_to(1), Ok(Some(1)));
    }

    #[test]
    fn undirected_graph_paths() {
        let g = AdjacencyListGraph::from_edges(
            GraphKind::Undirected,
            4,
            [
                BasicWeightedEdge::new(0, 1, 4),
                BasicWeightedEdge::new(1, 2, 1),
                BasicWeightedEdge::new(2, 3, 1),
                BasicWeightedEdge::new(0, 3, 1),
                BasicWeightedEdge::new(3, 3, 0),
            ],
        );
        let sp = Dijkstra::new(g, 0);
        assert_eq!(sp.weight_to(1), Ok(Some(3)));
        assert_eq!(path_vertices(0, &sp.path_to(1).unwrap()), vec![0, 3, 2, 1]);
    }
}
