//! Breadth-first walks.

use core::ops::ControlFlow;
use std::collections::VecDeque;

use super::visitor::{OnTreeEdge, OnVertex, Visitor};
use crate::graph::{assert_vertex, Edge, Graph};

/// Breadth-first walk from every vertex of `sources` at once.
///
/// Sources are discovered up front, in the given order; sources already
/// marked in `discovered` are skipped. `pre_visit` fires when a vertex leaves
/// the queue and `post_visit` once its adjacencies are exhausted. The visitor's
/// `adjacency` result is checked after each adjacency, so a `Break` stops the
/// walk before any further edge is examined.
///
/// # Panics
/// Panics if a source is out of bounds or `discovered` is not `vertex_count` long.
pub fn bfs_from_sources<G, V>(
    graph: &G,
    sources: &[usize],
    discovered: &mut [bool],
    visitor: &mut V,
) -> ControlFlow<()>
where
    G: Graph,
    V: Visitor<G::Edge> + ?Sized,
{
    assert_eq!(
        discovered.len(),
        graph.vertex_count(),
        "discovered set must cover every vertex"
    );

    let mut queue = VecDeque::with_capacity(sources.len());
    for &s in sources {
        assert_vertex(graph, s);
        if !discovered[s] {
            discovered[s] = true;
            queue.push_back(s);
        }
    }

    while let Some(v) = queue.pop_front() {
        visitor.pre_visit(v);
        for edge in graph.adjacencies(v) {
            visitor.adjacency(edge)?;
            let w = edge.other(v);
            if !discovered[w] {
                discovered[w] = true;
                queue.push_back(w);
                visitor.tree_edge(edge);
            }
        }
        visitor.post_visit(v);
    }

    ControlFlow::Continue(())
}

/// Breadth-first walk from `source`, sharing `discovered` with the caller.
///
/// # Panics
/// Panics if `source` is out of bounds or `discovered` is not `vertex_count` long.
pub fn bfs_from<G, V>(
    graph: &G,
    source: usize,
    discovered: &mut [bool],
    visitor: &mut V,
) -> ControlFlow<()>
where
    G: Graph,
    V: Visitor<G::Edge> + ?Sized,
{
    bfs_from_sources(graph, &[source], discovered, visitor)
}

/// Breadth-first walk over the vertices reachable from `source`.
///
/// # Panics
/// Panics if `source` is out of bounds.
pub fn bfs<G, V>(graph: &G, source: usize, visitor: &mut V) -> ControlFlow<()>
where
    G: Graph,
    V: Visitor<G::Edge> + ?Sized,
{
    let mut discovered = vec![false; graph.vertex_count()];
    bfs_from(graph, source, &mut discovered, visitor)
}

/// Breadth-first walk over the whole graph, restarting at each undiscovered
/// vertex in ascending order.
pub fn bfs_all<G, V>(graph: &G, visitor: &mut V) -> ControlFlow<()>
where
    G: Graph,
    V: Visitor<G::Edge> + ?Sized,
{
    let mut discovered = vec![false; graph.vertex_count()];
    for v in 0..graph.vertex_count() {
        if !discovered[v] {
            bfs_from(graph, v, &mut discovered, visitor)?;
        }
    }
    ControlFlow::Continue(())
}

/// Calls `f` once per vertex reachable from `source`, nearest first.
///
/// # Panics
/// Panics if `source` is out of bounds.
pub fn bfs_vertices<G, F>(graph: &G, source: usize, f: F)
where
    G: Graph,
    F: FnMut(usize),
{
    let _ = bfs(graph, source, &mut OnVertex(f));
}

/// Calls `f` once per edge that discovers a new vertex from `source`.
///
/// # Panics
/// Panics if `source` is out of bounds.
pub fn bfs_tree_edges<G, F>(graph: &G, source: usize, f: F)
where
    G: Graph,
    F: FnMut(&G::Edge),
{
    let _ = bfs(graph, source, &mut OnTreeEdge(f));
}

/// Calls `f` once per vertex of the graph, in whole-graph breadth-first order.
pub fn bfs_all_vertices<G, F>(graph: &G, f: F)
where
    G: Graph,
    F: FnMut(usize),
{
    let _ = bfs_all(graph, &mut OnVertex(f));
}

/// Calls `f` once per discovering edge of the whole-graph breadth-first walk.
pub fn bfs_all_tree_edges<G, F>(graph: &G, f: F)
where
    G: Graph,
    F: FnMut(&G::Edge),
{
    let _ = bfs_all(graph, &mut OnTreeEdge(f));
}
