//! Shortest paths in a directed acyclic graph.

use std::cell::OnceCell;
use std::sync::Arc;

use tracing::debug;

use super::{PathTree, ShortestPathSearch, WeightOf};
use crate::error::Result;
use crate::graph::{assert_vertex, Graph, WeightedEdge};

/// Shortest paths from one source, relaxing each vertex's edges once in
/// topological order.
///
/// Negative weights are fine. Built by
/// [`CycleDetector::shortest_paths`](crate::graph::algorithms::CycleDetector::shortest_paths),
/// which supplies the order.
#[derive(Debug)]
pub struct AcyclicShortestPaths<G>
where
    G: Graph,
    G::Edge: WeightedEdge,
{
    graph: G,
    source: usize,
    order: Vec<usize>,
    tree: OnceCell<PathTree<G::Edge>>,
}

impl<G> AcyclicShortestPaths<G>
where
    G: Graph,
    G::Edge: WeightedEdge,
{
    pub(crate) fn new(graph: G, source: usize, order: Vec<usize>) -> Self {
        assert_vertex(&graph, source);
        Self {
            graph,
            source,
            order,
            tree: OnceCell::new(),
        }
    }

    fn tree(&self) -> &PathTree<G::Edge> {
        self.tree.get_or_init(|| {
            let mut tree = PathTree::new(self.graph.vertex_count(), self.source);
            for &v in &self.order {
                if tree.distance(v).is_none() {
                    continue;
                }
                for edge in self.graph.adjacencies(v) {
                    tree.relax(edge);
                }
            }
            debug!(
                source = self.source,
                vertices = self.graph.vertex_count(),
                "acyclic shortest paths finished"
            );
            tree
        })
    }

    /// Distances from the source, indexed by vertex.
    pub fn distances(&self) -> &[Option<WeightOf<G>>] {
        self.tree().distances()
    }
}

impl<G> ShortestPathSearch for AcyclicShortestPaths<G>
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
        Ok(self.tree().distance(vertex))
    }

    fn path_to(&self, vertex: usize) -> Result<Arc<[G::Edge]>> {
        assert_vertex(&self.graph, vertex);
        Ok(self.tree().path(vertex))
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::algorithms::shortest_path::{path_vertices, ShortestPathSearch};
    use crate::graph::algorithms::CycleDetector;
    use crate::graph::{AdjacencyListGraph, BasicWeightedEdge, GraphKind};

    fn digraph(n: usize, edges: &[(usize, usize, f64)]) -> AdjacencyListGraph<BasicWeightedEdge<f64>> {
        AdjacencyListGraph::from_edges(
            GraphKind::Directed,
            n,
            edges.iter().map(|&(u, v, w)| BasicWeightedEdge::new(u, v, w)),
        )
    }

    #[test]
    fn tiny_weighted_dag() {
        let g = digraph(
            8,
            &[
                (5, 4, 0.35), (4, 7, 0.37), (5, 7, 0.28), (5, 1, 0.32), (4, 0, 0.38),
                (0, 2, 0.26), (3, 7, 0.39), (1, 3, 0.29), (7, 2, 0.34), (6, 2, 0.40),
                (3, 6, 0.52), (6, 0, 0.58), (6, 4, 0.93),
            ],
        );
        let sp = CycleDetector::new(g).shortest_paths(5).unwrap();
        let expected = [0.73, 0.32, 0.62, 0.61, 0.35, 0.0, 1.13, 0.28];
        for (v, &d) in expected.iter().enumerate() {
            let got = sp.weight_to(v).unwrap().unwrap();
            assert!((got - d).abs() < 1e-9, "vertex {v}: {got} != {d}");
        }
        assert_eq!(path_vertices(5, &sp.path_to(6).unwrap()), vec![5, 1, 3, 6]);
    }

    #[test]
    fn negative_weights_and_unreachable_vertices() {
        let g = digraph(4, &[(0, 1, 5.0), (0, 2, 1.0), (2, 1, -3.0), (3, 0, 1.0)]);
        let sp = CycleDetector::new(g).shortest_paths(0).unwrap();
        assert_eq!(sp.weight_to(1), Ok(Some(-2.0)));
        assert_eq!(sp.weight_to(3), Ok(None));
        assert_eq!(sp.has_path_to(3), Ok(false));
        assert_eq!(sp.distances()[0], Some(0.0));
    }

    #[test]
    fn unavailable_on_cyclic_or_undirected_graphs() {
        let cyclic = digraph(2, &[(0, 1, 1.0), (1, 0, 1.0)]);
        assert!(CycleDetector::new(cyclic).shortest_paths(0).is_none());

        let undirected = AdjacencyListGraph::from_edges(
            GraphKind::Undirected,
            2,
            [BasicWeightedEdge::new(0, 1, 1.0)],
        );
        assert!(CycleDetector::new(undirected).shortest_paths(0).is_none());
    }
}
