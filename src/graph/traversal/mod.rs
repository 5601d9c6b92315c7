//! The traversal kernel: depth-first and breadth-first walks.
//!
//! Each walk comes in three flavors:
//! - vertex callbacks (`*_vertices`), once per newly discovered vertex
//! - discovering-edge callbacks (`*_tree_edges`), once per edge that reaches a new vertex
//! - a full [`Visitor`] with pre-visit, per-adjacency and post-visit hooks
//!
//! Whole-graph walkers (`*_all*`) restart at every undiscovered vertex in
//! ascending order. A full walk is \(O(n + m)\).

use core::ops::ControlFlow;

use serde::{Deserialize, Serialize};

use crate::graph::Graph;

pub mod bfs;
pub mod dfs;
mod visitor;

pub use bfs::{
    bfs, bfs_all, bfs_all_tree_edges, bfs_all_vertices, bfs_from, bfs_from_sources,
    bfs_tree_edges, bfs_vertices,
};
pub use dfs::{
    dfs, dfs_all, dfs_all_tree_edges, dfs_all_vertices, dfs_from, dfs_postorder,
    dfs_tree_edges, dfs_vertices,
};
pub use visitor::Visitor;

/// Which walk a utility uses when either would do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalStrategy {
    /// Depth-first search.
    #[default]
    DepthFirst,
    /// Breadth-first search.
    BreadthFirst,
}

impl TraversalStrategy {
    /// Walks from every vertex of `sources` with this strategy, sharing `discovered`.
    ///
    /// # Panics
    /// Panics if a source is out of bounds.
    pub fn walk_from<G, V>(
        self,
        graph: &G,
        sources: &[usize],
        discovered: &mut [bool],
        visitor: &mut V,
    ) -> ControlFlow<()>
    where
        G: Graph,
        V: Visitor<G::Edge> + ?Sized,
    {
        match self {
            Self::DepthFirst => {
                for &s in sources {
                    dfs_from(graph, s, discovered, visitor)?;
                }
                ControlFlow::Continue(())
            }
            Self::BreadthFirst => bfs_from_sources(graph, sources, discovered, visitor),
        }
    }
}
