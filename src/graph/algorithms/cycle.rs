//! Cycle detection and topological ordering in one depth-first pass.
//!
//! A back edge is an edge to a vertex that is still on the recursion stack.
//! In undirected graphs the immediate depth-first parent is excluded, so a
//! connection is never read back along itself and parallel edges do not form
//! a cycle. A visited vertex that has already finished is a descendant whose
//! connections were checked from its own side. The first back edge found ends
//! the search; the cycle is read off the predecessor edges.

use core::ops::ControlFlow;
use std::cell::OnceCell;

use tracing::debug;

use crate::graph::algorithms::shortest_path::AcyclicShortestPaths;
use crate::graph::traversal::{dfs_from, Visitor};
use crate::graph::{Edge, Graph, WeightedEdge};

/// Finds a cycle and, for directed acyclic graphs, a topological order.
///
/// Both results come from a single cached computation that runs on the first query.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | first query | \(O(n + m)\) | One depth-first pass, stops at the first cycle |
/// | later queries | \(O(1)\) | Served from the cache |
#[derive(Debug)]
pub struct CycleDetector<G: Graph> {
    graph: G,
    analysis: OnceCell<CycleAnalysis>,
}

#[derive(Debug)]
struct CycleAnalysis {
    cycle: Vec<usize>,
    topological_order: Option<Vec<usize>>,
}

struct CycleSearch<'g, G: Graph> {
    graph: &'g G,
    on_stack: Vec<bool>,
    edge_to: Vec<Option<G::Edge>>,
    postorder: Vec<usize>,
    cycle: Vec<usize>,
}

impl<'g, G: Graph> CycleSearch<'g, G> {
    fn new(graph: &'g G) -> Self {
        let n = graph.vertex_count();
        Self {
            graph,
            on_stack: vec![false; n],
            edge_to: vec![None; n],
            postorder: Vec::with_capacity(n),
            cycle: Vec::new(),
        }
    }

    fn is_back_edge(&self, v: usize, w: usize) -> bool {
        if !self.on_stack[w] {
            return false;
        }
        self.graph.is_directed() || self.edge_to[v].as_ref().map(Edge::either) != Some(w)
    }

    /// Vertices `w, ..., v` along the tree path closed by the back edge `v -> w`.
    ///
    /// `w` is on the recursion stack, so it is an ancestor of `v` (or `v` itself).
    fn trace_cycle(&self, v: usize, w: usize) -> Vec<usize> {
        let mut cycle = vec![v];
        let mut x = v;
        while x != w {
            let Some(edge) = self.edge_to[x].as_ref() else {
                break;
            };
            x = edge.either();
            cycle.push(x);
        }
        debug_assert_eq!(x, w, "back edge target is not an ancestor");
        cycle.reverse();
        cycle
    }
}

impl<G: Graph> Visitor<G::Edge> for CycleSearch<'_, G> {
    fn pre_visit(&mut self, vertex: usize) {
        self.on_stack[vertex] = true;
    }

    fn adjacency(&mut self, edge: &G::Edge) -> ControlFlow<()> {
        let v = edge.either();
        let w = edge.other(v);
        if self.is_back_edge(v, w) {
            self.cycle = self.trace_cycle(v, w);
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }

    fn tree_edge(&mut self, edge: &G::Edge) {
        let w = edge.other(edge.either());
        self.edge_to[w] = Some(edge.clone());
    }

    fn post_visit(&mut self, vertex: usize) {
        self.on_stack[vertex] = false;
        self.postorder.push(vertex);
    }
}

impl<G: Graph> CycleDetector<G> {
    /// Creates a detector over `graph`. Nothing is computed until the first query.
    pub fn new(graph: G) -> Self {
        Self {
            graph,
            analysis: OnceCell::new(),
        }
    }

    /// The graph snapshot this detector analyses.
    pub fn graph(&self) -> &G {
        &self.graph
    }

    fn analysis(&self) -> &CycleAnalysis {
        self.analysis.get_or_init(|| self.build())
    }

    fn build(&self) -> CycleAnalysis {
        let n = self.graph.vertex_count();
        let mut search = CycleSearch::new(&self.graph);
        let mut discovered = vec![false; n];
        for v in 0..n {
            if dfs_from(&self.graph, v, &mut discovered, &mut search).is_break() {
                break;
            }
        }

        let topological_order = (self.graph.is_directed() && search.cycle.is_empty()).then(|| {
            let mut order = search.postorder;
            order.reverse();
            order
        });

        debug!(
            vertices = n,
            edges = self.graph.edge_count(),
            cycle_len = search.cycle.len(),
            "cycle detection finished"
        );

        CycleAnalysis {
            cycle: search.cycle,
            topological_order,
        }
    }

    /// Vertices of a cycle in traversal order, or an empty slice if the graph is acyclic.
    ///
    /// For a returned `[v0, v1, ..., vk]` the edges `v0 -> v1 -> ... -> vk -> v0` exist.
    pub fn cycle(&self) -> &[usize] {
        &self.analysis().cycle
    }

    /// Returns `true` if the graph contains a cycle.
    pub fn has_cycle(&self) -> bool {
        !self.cycle().is_empty()
    }

    /// Reverse post-order of a directed acyclic graph.
    ///
    /// `None` for undirected graphs and for graphs with a cycle.
    pub fn topological_sort(&self) -> Option<&[usize]> {
        self.analysis().topological_order.as_deref()
    }
}

impl<G> CycleDetector<G>
where
    G: Graph,
    G::Edge: WeightedEdge,
{
    /// Builds the shortest-path engine restricted to directed acyclic graphs.
    ///
    /// Returns `None` when no topological order exists.
    ///
    /// # Panics
    /// Panics if `source` is out of bounds.
    pub fn shortest_paths(&self, source: usize) -> Option<AcyclicShortestPaths<G>> {
        let order = self.topological_sort()?.to_vec();
        Some(AcyclicShortestPaths::new(self.graph.clone(), source, order))
    }
}
