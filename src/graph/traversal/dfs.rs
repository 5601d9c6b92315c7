//! Depth-first walks.
//!
//! The walk keeps an explicit stack of `(vertex, next adjacency index)` frames,
//! so hooks fire in exactly the order a recursive search would fire them
//! without bounding the search depth by the thread's stack size.

use core::ops::ControlFlow;

use super::visitor::{OnTreeEdge, OnVertex, PostOrder, Visitor};
use crate::graph::{assert_vertex, Edge, Graph};

/// Depth-first walk from `source`, sharing `discovered` with the caller.
///
/// Vertices already marked in `discovered` are treated as visited, which lets
/// callers chain several walks over one graph. Returns `Break` as soon as the
/// visitor breaks.
///
/// # Panics
/// Panics if `source` is out of bounds or `discovered` is not `vertex_count` long.
pub fn dfs_from<G, V>(
    graph: &G,
    source: usize,
    discovered: &mut [bool],
    visitor: &mut V,
) -> ControlFlow<()>
where
    G: Graph,
    V: Visitor<G::Edge> + ?Sized,
{
    assert_vertex(graph, source);
    assert_eq!(
        discovered.len(),
        graph.vertex_count(),
        "discovered set must cover every vertex"
    );
    if discovered[source] {
        return ControlFlow::Continue(());
    }

    discovered[source] = true;
    visitor.pre_visit(source);
    let mut stack = vec![(source, 0usize)];

    while let Some(frame) = stack.last_mut() {
        let v = frame.0;
        let adjacencies = graph.adjacencies(v);
        if let Some(edge) = adjacencies.get(frame.1) {
            frame.1 += 1;
            visitor.adjacency(edge)?;
            let w = edge.other(v);
            if !discovered[w] {
                discovered[w] = true;
                visitor.tree_edge(edge);
                visitor.pre_visit(w);
                stack.push((w, 0));
            }
        } else {
            stack.pop();
            visitor.post_visit(v);
        }
    }

    ControlFlow::Continue(())
}

/// Depth-first walk over the vertices reachable from `source`.
///
/// # Panics
/// Panics if `source` is out of bounds.
pub fn dfs<G, V>(graph: &G, source: usize, visitor: &mut V) -> ControlFlow<()>
where
    G: Graph,
    V: Visitor<G::Edge> + ?Sized,
{
    let mut discovered = vec![false; graph.vertex_count()];
    dfs_from(graph, source, &mut discovered, visitor)
}

/// Depth-first walk over the whole graph.
///
/// Starts at vertex 0, then restarts at each still-undiscovered vertex in
/// ascending order, so disconnected vertices are always covered.
pub fn dfs_all<G, V>(graph: &G, visitor: &mut V) -> ControlFlow<()>
where
    G: Graph,
    V: Visitor<G::Edge> + ?Sized,
{
    let mut discovered = vec![false; graph.vertex_count()];
    for v in 0..graph.vertex_count() {
        dfs_from(graph, v, &mut discovered, visitor)?;
    }
    ControlFlow::Continue(())
}

/// Calls `f` once per vertex reachable from `source`, in discovery order.
///
/// # Panics
/// Panics if `source` is out of bounds.
pub fn dfs_vertices<G, F>(graph: &G, source: usize, f: F)
where
    G: Graph,
    F: FnMut(usize),
{
    let _ = dfs(graph, source, &mut OnVertex(f));
}

/// Calls `f` once per edge that discovers a new vertex from `source`.
///
/// Parallel edges and self-loops never reach `f`.
///
/// # Panics
/// Panics if `source` is out of bounds.
pub fn dfs_tree_edges<G, F>(graph: &G, source: usize, f: F)
where
    G: Graph,
    F: FnMut(&G::Edge),
{
    let _ = dfs(graph, source, &mut OnTreeEdge(f));
}

/// Calls `f` once per vertex of the graph, in whole-graph discovery order.
pub fn dfs_all_vertices<G, F>(graph: &G, f: F)
where
    G: Graph,
    F: FnMut(usize),
{
    let _ = dfs_all(graph, &mut OnVertex(f));
}

/// Calls `f` once per discovering edge of the whole-graph walk.
pub fn dfs_all_tree_edges<G, F>(graph: &G, f: F)
where
    G: Graph,
    F: FnMut(&G::Edge),
{
    let _ = dfs_all(graph, &mut OnTreeEdge(f));
}

/// Vertices of the whole graph in the order their depth-first search finishes.
pub fn dfs_postorder<G: Graph>(graph: &G) -> Vec<usize> {
    let mut post = PostOrder {
        order: Vec::with_capacity(graph.vertex_count()),
    };
    let _ = dfs_all(graph, &mut post);
    post.order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AdjacencyListGraph, BasicEdge, GraphKind};

    fn directed(n: usize, edges: &[(usize, usize)]) -> AdjacencyListGraph<BasicEdge> {
        AdjacencyListGraph::from_edges(
            GraphKind::Directed,
            n,
            edges.iter().map(|&(u, v)| BasicEdge::new(u, v)),
        )
    }

    #[derive(Default)]
    struct Trace {
        events: Vec<String>,
    }

    impl Visitor<BasicEdge> for Trace {
        fn pre_visit(&mut self, vertex: usize) {
            self.events.push(format!("pre {vertex}"));
        }
        fn adjacency(&mut self, edge: &BasicEdge) -> ControlFlow<()> {
            self.events.push(format!("adj {}->{}", edge.u, edge.v));
            ControlFlow::Continue(())
        }
        fn post_visit(&mut self, vertex: usize) {
            self.events.push(format!("post {vertex}"));
        }
    }

    #[test]
    fn dfs_visits_in_recursive_order() {
        // 0 -> 1,2 ; 1 -> 3 ; 2 -> 3
        let graph = directed(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        let mut order = Vec::new();
        dfs_vertices(&graph, 0, |v| order.push(v));
        assert_eq!(order, vec![0, 1, 3, 2]);
    }

    #[test]
    fn full_visitor_sees_every_adjacency() {
        let graph = directed(2, &[(0, 1), (0, 1), (1, 1)]);
        let mut trace = Trace::default();
        let _ = dfs(&graph, 0, &mut trace);
        assert_eq!(
            trace.events,
            vec![
                "pre 0", "adj 0->1", "pre 1", "adj 1->1", "post 1", "adj 0->1", "post 0"
            ]
        );
    }

    #[test]
    fn tree_edges_skip_parallels_and_self_loops() {
        let graph = directed(3, &[(0, 1), (0, 1), (1, 1), (1, 2), (2, 0)]);
        let mut edges = Vec::new();
        dfs_tree_edges(&graph, 0, |e: &BasicEdge| edges.push((e.u, e.v)));
        assert_eq!(edges, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn whole_graph_walk_covers_disconnected_vertices() {
        let graph = directed(5, &[(3, 4), (1, 0)]);
        let mut order = Vec::new();
        dfs_all_vertices(&graph, |v| order.push(v));
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn postorder_finishes_descendants_first() {
        let graph = directed(3, &[(0, 1), (1, 2)]);
        assert_eq!(dfs_postorder(&graph), vec![2, 1, 0]);
    }

    #[test]
    fn break_stops_the_walk() {
        struct StopAfter(usize);
        impl Visitor<BasicEdge> for StopAfter {
            fn adjacency(&mut self, _edge: &BasicEdge) -> ControlFlow<()> {
                if self.0 == 0 {
                    return ControlFlow::Break(());
                }
                self.0 -= 1;
                ControlFlow::Continue(())
            }
        }
        let graph = directed(4, &[(0, 1), (1, 2), (2, 3)]);
        assert!(dfs_all(&graph, &mut StopAfter(1)).is_break());
    }

    #[test]
    fn deep_chain_does_not_overflow() {
        let n = 200_000;
        let edges: Vec<(usize, usize)> = (0..n - 1).map(|v| (v, v + 1)).collect();
        let graph = directed(n, &edges);
        let mut count = 0usize;
        dfs_vertices(&graph, 0, |_| count += 1);
        assert_eq!(count, n);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn rejects_out_of_range_source() {
        let graph = directed(2, &[]);
        dfs_vertices(&graph, 5, |_| {});
    }
}
