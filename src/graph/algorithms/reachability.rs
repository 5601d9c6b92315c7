//! Single- and multi-source reachability, and pairwise transitive closure.

use std::cell::{OnceCell, RefCell};
use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::connectivity::ConnectedComponents;
use crate::graph::traversal::{TraversalStrategy, Visitor};
use crate::graph::{assert_vertex, Graph};

struct Silent;

impl<E> Visitor<E> for Silent {}

fn reached_from<G: Graph>(graph: &G, sources: &[usize], strategy: TraversalStrategy) -> Vec<bool> {
    let mut discovered = vec![false; graph.vertex_count()];
    let _ = strategy.walk_from(graph, sources, &mut discovered, &mut Silent);
    discovered
}

/// The set of vertices reachable from one or more sources.
///
/// One walk on the first query; every later query is O(1).
#[derive(Debug)]
pub struct Reachability<G: Graph> {
    graph: G,
    sources: Vec<usize>,
    strategy: TraversalStrategy,
    visited: OnceCell<Vec<bool>>,
}

impl<G: Graph> Reachability<G> {
    /// Vertices reachable from `source`.
    ///
    /// # Panics
    /// Panics if `source` is out of bounds.
    pub fn new(graph: G, source: usize, strategy: TraversalStrategy) -> Self {
        Self::from_sources(graph, &[source], strategy)
    }

    /// Vertices reachable from any vertex of `sources`.
    ///
    /// # Panics
    /// Panics if `sources` is empty or holds an out-of-bounds vertex.
    pub fn from_sources(graph: G, sources: &[usize], strategy: TraversalStrategy) -> Self {
        assert!(!sources.is_empty(), "reachability needs at least one source");
        for &s in sources {
            assert_vertex(&graph, s);
        }
        Self {
            graph,
            sources: sources.to_vec(),
            strategy,
            visited: OnceCell::new(),
        }
    }

    /// Reachability flags indexed by vertex.
    pub fn visited(&self) -> &[bool] {
        self.visited.get_or_init(|| {
            let visited = reached_from(&self.graph, &self.sources, self.strategy);
            debug!(
                sources = self.sources.len(),
                strategy = ?self.strategy,
                reached = visited.iter().filter(|&&r| r).count(),
                "reachability computed"
            );
            visited
        })
    }

    /// Returns `true` if `vertex` is reachable from a source.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    pub fn is_reachable(&self, vertex: usize) -> bool {
        assert_vertex(&self.graph, vertex);
        self.visited()[vertex]
    }

    /// Number of reachable vertices, sources included.
    pub fn count(&self) -> usize {
        self.visited().iter().filter(|&&r| r).count()
    }
}

/// Pairwise reachability.
///
/// Undirected graphs answer from connected-component ids. Directed graphs
/// walk once per distinct source queried and keep that source's reached set
/// for later destinations.
#[derive(Debug)]
pub struct TransitiveClosure<G: Graph> {
    closure: Closure<G>,
}

#[derive(Debug)]
enum Closure<G: Graph> {
    Components(ConnectedComponents<G>),
    PerSource {
        graph: G,
        reached: RefCell<HashMap<usize, Arc<[bool]>>>,
    },
}

impl<G: Graph> TransitiveClosure<G> {
    /// Creates the closure. Nothing is computed until the first query.
    pub fn new(graph: G) -> Self {
        let closure = if graph.is_directed() {
            Closure::PerSource {
                graph,
                reached: RefCell::new(HashMap::new()),
            }
        } else {
            Closure::Components(ConnectedComponents::new(graph))
        };
        Self { closure }
    }

    /// Returns `true` if there is a path from `from` to `to`. A vertex always reaches itself.
    ///
    /// # Panics
    /// Panics if either vertex is out of bounds.
    pub fn is_reachable(&self, from: usize, to: usize) -> bool {
        match &self.closure {
            Closure::Components(cc) => cc.connected(from, to),
            Closure::PerSource { graph, .. } => {
                assert_vertex(graph, to);
                self.reachable_from(from)[to]
            }
        }
    }

    /// Reached flags for `source`, indexed by vertex.
    ///
    /// # Panics
    /// Panics if `source` is out of bounds.
    pub fn reachable_from(&self, source: usize) -> Arc<[bool]> {
        match &self.closure {
            Closure::Components(cc) => {
                let id = cc.id(source);
                let n = cc.graph().vertex_count();
                (0..n).map(|v| cc.id(v) == id).collect()
            }
            Closure::PerSource { graph, reached } => {
                assert_vertex(graph, source);
                reached
                    .borrow_mut()
                    .entry(source)
                    .or_insert_with(|| {
                        debug!(source, "closure row computed");
                        reached_from(graph, &[source], TraversalStrategy::DepthFirst).into()
                    })
                    .clone()
            }
        }
    }
}
