//! Two-coloring by depth-first search.

use core::ops::ControlFlow;
use std::cell::OnceCell;

use tracing::debug;

use crate::graph::traversal::{dfs_all, Visitor};
use crate::graph::{assert_vertex, Edge, Graph};

#[derive(Debug)]
struct Coloring {
    colors: Vec<Option<bool>>,
    bipartite: bool,
}

struct Colorer<'g, G> {
    graph: &'g G,
    coloring: Coloring,
}

impl<G: Graph> Visitor<G::Edge> for Colorer<'_, G> {
    fn pre_visit(&mut self, vertex: usize) {
        // A fresh root; tree-edge targets are colored before they are visited.
        if self.coloring.colors[vertex].is_none() && !self.graph.adjacencies(vertex).is_empty() {
            self.coloring.colors[vertex] = Some(false);
        }
    }

    fn adjacency(&mut self, edge: &G::Edge) -> ControlFlow<()> {
        let v = edge.either();
        let w = edge.other(v);
        if self.coloring.colors[w].is_some() && self.coloring.colors[w] == self.coloring.colors[v] {
            self.coloring.bipartite = false;
        }
        ControlFlow::Continue(())
    }

    fn tree_edge(&mut self, edge: &G::Edge) {
        let v = edge.either();
        let w = edge.other(v);
        self.coloring.colors[w] = self.coloring.colors[v].map(|c| !c);
    }
}

/// Two-coloring of a graph.
///
/// Every vertex discovered along a tree edge takes the color opposite its
/// parent. An edge between two visited vertices of the same color makes the
/// graph non-bipartite; coloring still runs to completion. Vertices without
/// edges stay uncolored.
///
/// Coloring follows adjacency lists, which for a directed graph hold only
/// out-edges. Every depth-first root starts with the same color and a vertex
/// without out-edges is never a colored root, so on directed input the answer
/// depends on edge orientation. Use an undirected view to test the underlying
/// graph.
#[derive(Debug)]
pub struct Bipartite<G: Graph> {
    graph: G,
    coloring: OnceCell<Coloring>,
}

impl<G: Graph> Bipartite<G> {
    /// Creates the colorer. Nothing is computed until the first query.
    pub fn new(graph: G) -> Self {
        Self {
            graph,
            coloring: OnceCell::new(),
        }
    }

    fn coloring(&self) -> &Coloring {
        self.coloring.get_or_init(|| {
            let mut colorer = Colorer {
                graph: &self.graph,
                coloring: Coloring {
                    colors: vec![None; self.graph.vertex_count()],
                    bipartite: true,
                },
            };
            let _ = dfs_all(&self.graph, &mut colorer);
            debug!(
                vertices = self.graph.vertex_count(),
                bipartite = colorer.coloring.bipartite,
                "two-coloring finished"
            );
            colorer.coloring
        })
    }

    /// Returns `true` if no edge joins two vertices of the same color.
    pub fn is_bipartite(&self) -> bool {
        self.coloring().bipartite
    }

    /// Color of `vertex`, or `None` if it has no edges.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    pub fn color(&self, vertex: usize) -> Option<bool> {
        assert_vertex(&self.graph, vertex);
        self.coloring().colors[vertex]
    }
}
