//! Queue-based Bellman-Ford with negative-cycle detection.

use std::cell::OnceCell;
use std::collections::VecDeque;
use std::sync::Arc;

use tracing::{debug, trace};

use super::{PathTree, ShortestPathSearch, WeightOf};
use crate::error::Result;
use crate::graph::algorithms::CycleDetector;
use crate::graph::{assert_vertex, AdjacencyListGraph, Edge, Graph, GraphKind, WeightedEdge};

#[derive(Debug)]
enum Outcome<E: WeightedEdge> {
    Paths(PathTree<E>),
    NegativeCycle(Vec<usize>),
}

/// Shortest paths from one source over arbitrary weights.
///
/// Vertices whose distance improved wait in a FIFO worklist. Every
/// `probe_interval` examined edges, the current predecessor edges are loaded
/// into a directed graph and searched for a cycle; any such cycle has negative
/// total weight, and finding one ends the computation. From then on every
/// vertex, the source included, reports no distance and an empty path, and
/// the cycle is available from [`negative_cycle`](Self::negative_cycle).
#[derive(Debug)]
pub struct BellmanFord<G>
where
    G: Graph,
    G::Edge: WeightedEdge,
{
    graph: G,
    source: usize,
    probe_interval: usize,
    outcome: OnceCell<Outcome<G::Edge>>,
}

impl<G> BellmanFord<G>
where
    G: Graph,
    G::Edge: WeightedEdge,
{
    /// Creates the search, probing for negative cycles every `vertex_count` edges.
    ///
    /// # Panics
    /// Panics if `source` is out of bounds.
    pub fn new(graph: G, source: usize) -> Self {
        let interval = graph.vertex_count();
        Self::with_probe_interval(graph, source, interval)
    }

    /// Creates the search with an explicit probe cadence (clamped to at least 1).
    ///
    /// # Panics
    /// Panics if `source` is out of bounds.
    pub fn with_probe_interval(graph: G, source: usize, interval: usize) -> Self {
        assert_vertex(&graph, source);
        Self {
            graph,
            source,
            probe_interval: interval.max(1),
            outcome: OnceCell::new(),
        }
    }

    fn outcome(&self) -> &Outcome<G::Edge> {
        self.outcome.get_or_init(|| self.build())
    }

    fn build(&self) -> Outcome<G::Edge> {
        let n = self.graph.vertex_count();
        let mut tree = PathTree::new(n, self.source);
        let mut queue = VecDeque::from([self.source]);
        let mut queued = vec![false; n];
        queued[self.source] = true;
        let mut examined = 0usize;

        while let Some(v) = queue.pop_front() {
            queued[v] = false;
            for edge in self.graph.adjacencies(v) {
                if tree.relax(edge) {
                    let w = edge.other(v);
                    if !queued[w] {
                        queued[w] = true;
                        queue.push_back(w);
                    }
                }
                examined += 1;
                if examined % self.probe_interval == 0 {
                    let cycle = predecessor_cycle(&tree, n);
                    trace!(examined, found = !cycle.is_empty(), "negative-cycle probe");
                    if !cycle.is_empty() {
                        debug!(
                            source = self.source,
                            examined,
                            cycle_len = cycle.len(),
                            "bellman-ford stopped at a negative cycle"
                        );
                        return Outcome::NegativeCycle(cycle);
                    }
                }
            }
        }

        debug!(source = self.source, vertices = n, examined, "bellman-ford finished");
        Outcome::Paths(tree)
    }

    fn tree(&self) -> Option<&PathTree<G::Edge>> {
        match self.outcome() {
            Outcome::Paths(tree) => Some(tree),
            Outcome::NegativeCycle(_) => None,
        }
    }

    /// Vertices of a negative cycle reachable from the source, or an empty slice.
    pub fn negative_cycle(&self) -> &[usize] {
        match self.outcome() {
            Outcome::Paths(_) => &[],
            Outcome::NegativeCycle(cycle) => cycle,
        }
    }

    /// Returns `true` if a negative cycle is reachable from the source.
    pub fn has_negative_cycle(&self) -> bool {
        !self.negative_cycle().is_empty()
    }

    /// Distances from the source, indexed by vertex; `None` after a negative cycle.
    pub fn distances(&self) -> Option<&[Option<WeightOf<G>>]> {
        self.tree().map(PathTree::distances)
    }
}

/// A cycle among the current predecessor edges, if they form one.
fn predecessor_cycle<E: WeightedEdge>(tree: &PathTree<E>, vertex_count: usize) -> Vec<usize> {
    let forest =
        AdjacencyListGraph::from_edges(GraphKind::Directed, vertex_count, tree.predecessors().cloned());
    CycleDetector::new(forest).cycle().to_vec()
}

impl<G> ShortestPathSearch for BellmanFord<G>
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
        Ok(self.tree().and_then(|tree| tree.distance(vertex)))
    }

    fn path_to(&self, vertex: usize) -> Result<Arc<[G::Edge]>> {
        assert_vertex(&self.graph, vertex);
        Ok(match self.tree() {
            Some(tree) => tree.path(vertex),
            None => Vec::new().into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::algorithms::shortest_path::{path_vertices, Dijkstra};
    use crate::graph::BasicWeightedEdge;

    fn digraph(n: usize, edges: &[(usize, usize, f64)]) -> AdjacencyListGraph<BasicWeightedEdge<f64>> {
        AdjacencyListGraph::from_edges(
            GraphKind::Directed,
            n,
            edges.iter().map(|&(u, v, w)| BasicWeightedEdge::new(u, v, w)),
        )
    }

    const NEGATIVE_EDGES: [(usize, usize, f64); 15] = [
        (4, 5, 0.35), (5, 4, 0.35), (4, 7, 0.37), (5, 7, 0.28), (7, 5, 0.28),
        (5, 1, 0.32), (0, 4, 0.38), (0, 2, 0.26), (7, 3, 0.39), (1, 3, 0.29),
        (2, 7, 0.34), (6, 2, -1.20), (3, 6, 0.52), (6, 0, -1.40), (6, 4, -1.25),
    ];

    #[test]
    fn negative_edges_without_cycle() {
        let sp = BellmanFord::new(digraph(8, &NEGATIVE_EDGES), 0);
        assert!(!sp.has_negative_cycle());
        let expected = [0.0, 0.93, 0.26, 0.99, 0.26, 0.61, 1.51, 0.60];
        let distances = sp.distances().unwrap();
        for (v, &d) in expected.iter().enumerate() {
            let got = distances[v].unwrap();
            assert!((got - d).abs() < 1e-9, "vertex {v}: {got} != {d}");
        }
        let path = sp.path_to(1).unwrap();
        assert_eq!(path_vertices(0, &path), vec![0, 2, 7, 3, 6, 4, 5, 1]);
    }

    #[test]
    fn detects_negative_cycle() {
        let mut edges = NEGATIVE_EDGES.to_vec();
        edges[1] = (5, 4, -0.66);
        let g = digraph(8, &edges);

        for interval in [1, 3, 8, 64] {
            let sp = BellmanFord::with_probe_interval(g.clone(), 0, interval);
            let cycle = sp.negative_cycle();
            assert!(!cycle.is_empty(), "interval {interval}");

            let mut total = 0.0;
            for (i, &v) in cycle.iter().enumerate() {
                let w = cycle[(i + 1) % cycle.len()];
                let weight = g
                    .adjacencies(v)
                    .iter()
                    .filter(|e| e.v == w)
                    .map(|e| e.weight)
                    .fold(f64::INFINITY, f64::min);
                assert!(weight.is_finite(), "missing edge {v}->{w}");
                total += weight;
            }
            assert!(total < 0.0);

            assert_eq!(sp.weight_to(3), Ok(None));
            assert_eq!(sp.weight_to(0), Ok(None));
            assert!(!sp.has_path_to(0).unwrap());
            assert!(sp.path_to(3).unwrap().is_empty());
            assert!(sp.distances().is_none());
        }
    }

    #[test]
    fn unreachable_negative_cycle_is_not_reported() {
        let g = digraph(4, &[(0, 1, 1.0), (2, 3, -1.0), (3, 2, -1.0)]);
        let sp = BellmanFord::new(g, 0);
        assert!(!sp.has_negative_cycle());
        assert_eq!(sp.weight_to(1), Ok(Some(1.0)));
        assert_eq!(sp.weight_to(2), Ok(None));
    }

    #[test]
    fn negative_undirected_edge_is_a_cycle() {
        let g = AdjacencyListGraph::from_edges(
            GraphKind::Undirected,
            3,
            [BasicWeightedEdge::new(0, 1, 2), BasicWeightedEdge::new(1, 2, -1)],
        );
        let sp = BellmanFord::new(g, 0);
        let mut cycle = sp.negative_cycle().to_vec();
        cycle.sort_unstable();
        assert_eq!(cycle, vec![1, 2]);
    }

    #[test]
    fn agrees_with_dijkstra_on_non_negative_weights() {
        let edges: Vec<_> = NEGATIVE_EDGES
            .iter()
            .map(|&(u, v, w)| (u, v, f64::abs(w)))
            .collect();
        let g = digraph(8, &edges);
        for source in 0..8 {
            let bf = BellmanFord::new(g.clone(), source);
            let dj = Dijkstra::new(g.clone(), source);
            for v in 0..8 {
                let a = bf.weight_to(v).unwrap();
                let b = dj.weight_to(v).unwrap();
                match (a, b) {
                    (Some(a), Some(b)) => assert!((a - b).abs() < 1e-9),
                    (a, b) => assert_eq!(a, b),
                }
            }
        }
    }

    #[test]
    fn single_vertex_graph() {
        let sp = BellmanFord::new(digraph(1, &[]), 0);
        assert_eq!(sp.weight_to(0), Ok(Some(0.0)));
        assert!(sp.path_to(0).unwrap().is_empty());
    }
}
