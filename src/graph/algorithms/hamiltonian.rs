//! Exhaustive Hamiltonian path enumeration.
//!
//! Backtracking from every start vertex; exponential in the worst case and
//! meant for small graphs.

use std::cell::OnceCell;

use tracing::debug;

use crate::graph::{Edge, Graph};

/// Every Hamiltonian path of a graph, as edge sequences.
///
/// A path is recorded once it holds `vertex_count - 1` edges, so a
/// single-vertex graph has exactly one (empty) path and an empty graph has
/// none. Undirected graphs report each path once per direction.
#[derive(Debug)]
pub struct HamiltonianPaths<G: Graph> {
    graph: G,
    paths: OnceCell<Vec<Vec<G::Edge>>>,
}

struct Search<'g, G: Graph> {
    graph: &'g G,
    visited: Vec<bool>,
    path: Vec<G::Edge>,
    found: Vec<Vec<G::Edge>>,
}

impl<G: Graph> Search<'_, G> {
    fn extend(&mut self, v: usize) {
        if self.path.len() + 1 == self.graph.vertex_count() {
            self.found.push(self.path.clone());
            return;
        }
        for edge in self.graph.adjacencies(v) {
            let w = edge.other(v);
            if self.visited[w] {
                continue;
            }
            self.visited[w] = true;
            self.path.push(edge.clone());
            self.extend(w);
            self.path.pop();
            self.visited[w] = false;
        }
    }
}

impl<G: Graph> HamiltonianPaths<G> {
    /// Creates the enumerator. Nothing is computed until the first query.
    pub fn new(graph: G) -> Self {
        Self {
            graph,
            paths: OnceCell::new(),
        }
    }

    /// All Hamiltonian paths, grouped by start vertex in ascending order.
    pub fn paths(&self) -> &[Vec<G::Edge>] {
        self.paths.get_or_init(|| {
            let n = self.graph.vertex_count();
            let mut search = Search {
                graph: &self.graph,
                visited: vec![false; n],
                path: Vec::with_capacity(n),
                found: Vec::new(),
            };
            for start in 0..n {
                search.visited[start] = true;
                search.extend(start);
                search.visited[start] = false;
            }
            debug!(vertices = n, paths = search.found.len(), "hamiltonian paths enumerated");
            search.found
        })
    }

    /// Returns `true` if at least one Hamiltonian path exists.
    pub fn has_path(&self) -> bool {
        !self.paths().is_empty()
    }

    /// Number of Hamiltonian paths found.
    pub fn count(&self) -> usize {
        self.paths().len()
    }
}
