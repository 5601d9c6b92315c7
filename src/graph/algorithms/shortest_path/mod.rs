//! Single-source shortest paths.
//!
//! Three engines with distinct validity domains:
//! - [`Dijkstra`]: non-negative weights, indexed priority queue
//! - [`BellmanFord`]: any weights, FIFO worklist, negative-cycle detection
//! - [`AcyclicShortestPaths`]: directed acyclic graphs, one pass in topological order
//!   (built by [`CycleDetector::shortest_paths`](crate::graph::algorithms::CycleDetector::shortest_paths))
//!
//! All three answer through [`ShortestPathSearch`]. Paths are reconstructed by
//! following predecessor edges back to the source and are memoized per destination.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::{Edge, Graph, WeightedEdge};

pub mod acyclic;
pub mod bellman_ford;
pub mod dijkstra;

pub use acyclic::AcyclicShortestPaths;
pub use bellman_ford::BellmanFord;
pub use dijkstra::Dijkstra;

/// Weight type of a graph's edges.
pub type WeightOf<G> = <<G as Graph>::Edge as WeightedEdge>::Weight;

/// Query surface shared by the shortest-path engines.
///
/// Dijkstra reports a negative edge as an error on every query; Bellman-Ford
/// answers `None`/empty after finding a negative cycle and exposes the cycle
/// itself through [`BellmanFord::negative_cycle`].
pub trait ShortestPathSearch {
    /// Edge type of the searched graph.
    type Edge: WeightedEdge;

    /// The source vertex.
    fn source(&self) -> usize;

    /// Total weight of a shortest path to `vertex`; `None` if unreachable.
    ///
    /// # Errors
    /// Returns the engine's cached domain failure, if any.
    fn weight_to(&self, vertex: usize) -> Result<Option<<Self::Edge as WeightedEdge>::Weight>>;

    /// Returns `true` if `vertex` is reachable from the source.
    ///
    /// # Errors
    /// Returns the engine's cached domain failure, if any.
    fn has_path_to(&self, vertex: usize) -> Result<bool> {
        Ok(self.weight_to(vertex)?.is_some())
    }

    /// Edges of a shortest path from the source to `vertex`, source first.
    ///
    /// Empty when `vertex` is the source or unreachable.
    ///
    /// # Errors
    /// Returns the engine's cached domain failure, if any.
    fn path_to(&self, vertex: usize) -> Result<Arc<[Self::Edge]>>;
}

/// Which general-purpose engine [`shortest_paths`] builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortestPathAlgorithm {
    /// Non-negative weights only.
    #[default]
    Dijkstra,
    /// Negative weights allowed; detects negative cycles.
    BellmanFord,
}

/// Builds the engine selected by `algorithm` behind the common query surface.
///
/// # Panics
/// Panics if `source` is out of bounds.
pub fn shortest_paths<G>(
    graph: G,
    source: usize,
    algorithm: ShortestPathAlgorithm,
) -> Box<dyn ShortestPathSearch<Edge = G::Edge>>
where
    G: Graph + 'static,
    G::Edge: WeightedEdge + 'static,
{
    match algorithm {
        ShortestPathAlgorithm::Dijkstra => Box::new(Dijkstra::new(graph, source)),
        ShortestPathAlgorithm::BellmanFord => Box::new(BellmanFord::new(graph, source)),
    }
}

/// Distances and predecessor edges from one source.
#[derive(Debug)]
pub(crate) struct PathTree<E: WeightedEdge> {
    source: usize,
    dist_to: Vec<Option<E::Weight>>,
    edge_to: Vec<Option<E>>,
    paths: RefCell<HashMap<usize, Arc<[E]>>>,
}

impl<E: WeightedEdge> PathTree<E> {
    pub(crate) fn new(vertex_count: usize, source: usize) -> Self {
        let mut dist_to = vec![None; vertex_count];
        dist_to[source] = Some(E::Weight::zero());
        Self {
            source,
            dist_to,
            edge_to: vec![None; vertex_count],
            paths: RefCell::new(HashMap::new()),
        }
    }

    /// Relaxes `edge`; returns `true` if it improved the distance to its head.
    pub(crate) fn relax(&mut self, edge: &E) -> bool {
        let v = edge.either();
        let w = edge.other(v);
        let Some(dv) = self.dist_to[v] else {
            return false;
        };
        let candidate = dv + edge.weight();
        let improves = match self.dist_to[w] {
            None => true,
            Some(dw) => candidate < dw,
        };
        if improves {
            self.dist_to[w] = Some(candidate);
            self.edge_to[w] = Some(edge.clone());
        }
        improves
    }

    pub(crate) fn distance(&self, vertex: usize) -> Option<E::Weight> {
        self.dist_to[vertex]
    }

    pub(crate) fn distances(&self) -> &[Option<E::Weight>] {
        &self.dist_to
    }

    pub(crate) fn predecessors(&self) -> impl Iterator<Item = &E> {
        self.edge_to.iter().flatten()
    }

    pub(crate) fn path(&self, vertex: usize) -> Arc<[E]> {
        self.paths
            .borrow_mut()
            .entry(vertex)
            .or_insert_with(|| {
                if self.dist_to[vertex].is_none() {
                    return Vec::new().into();
                }
                let mut path = Vec::new();
                let mut x = vertex;
                while x != self.source {
                    let Some(edge) = &self.edge_to[x] else { break };
                    x = edge.either();
                    path.push(edge.clone());
                }
                path.reverse();
                path.into()
            })
            .clone()
    }
}

/// Vertex sequence of an edge path starting at `source`.
pub fn path_vertices<E: Edge>(source: usize, path: &[E]) -> Vec<usize> {
    let mut vertices = Vec::with_capacity(path.len() + 1);
    vertices.push(source);
    let mut at = source;
    for edge in path {
        at = edge.other(at);
        vertices.push(at);
    }
    vertices
}
