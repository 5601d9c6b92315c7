//! Visitor hooks shared by the depth-first and breadth-first walks.

use core::ops::ControlFlow;

/// Callbacks fired by a traversal.
///
/// Every hook has a no-op default, so a visitor implements only what it needs.
/// Returning [`ControlFlow::Break`] from [`Visitor::adjacency`] stops the walk
/// immediately; the walk functions then return `Break` to their caller.
pub trait Visitor<E> {
    /// Fires once when `vertex` starts being processed.
    fn pre_visit(&mut self, _vertex: usize) {}

    /// Fires for every adjacency of the vertex being processed, including
    /// self-loops, parallel edges and edges to already discovered vertices.
    ///
    /// Called before the far endpoint is discovered through this edge.
    fn adjacency(&mut self, _edge: &E) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Fires once per edge whose far endpoint is discovered for the first time.
    fn tree_edge(&mut self, _edge: &E) {}

    /// Fires once when every adjacency of `vertex` has been processed.
    fn post_visit(&mut self, _vertex: usize) {}
}

/// Adapts a closure into a visitor that sees each discovered vertex once.
pub(crate) struct OnVertex<F>(pub(crate) F);

impl<E, F: FnMut(usize)> Visitor<E> for OnVertex<F> {
    fn pre_visit(&mut self, vertex: usize) {
        (self.0)(vertex);
    }
}

/// Adapts a closure into a visitor that sees each discovering edge once.
pub(crate) struct OnTreeEdge<F>(pub(crate) F);

impl<E, F: FnMut(&E)> Visitor<E> for OnTreeEdge<F> {
    fn tree_edge(&mut self, edge: &E) {
        (self.0)(edge);
    }
}

/// Records vertices in the order they finish.
#[derive(Debug, Default)]
pub(crate) struct PostOrder {
    pub(crate) order: Vec<usize>,
}

impl<E> Visitor<E> for PostOrder {
    fn post_visit(&mut self, vertex: usize) {
        self.order.push(vertex);
    }
}
