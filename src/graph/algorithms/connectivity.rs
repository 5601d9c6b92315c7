//! Connected components and strongly connected components.
//!
//! Both analyzers assign every vertex a component id in `0..count`, numbering
//! components in the order their roots are discovered. Member lists are
//! assembled per id on demand and cached.

use std::cell::{OnceCell, RefCell};
use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::graph::traversal::{dfs_from, dfs_postorder, Visitor};
use crate::graph::{assert_vertex, Graph};

/// A partition of the vertices into numbered components.
#[derive(Debug)]
struct Partition {
    ids: Vec<usize>,
    sizes: Vec<usize>,
}

impl Partition {
    /// Runs one depth-first pass per root in `roots`, labelling everything
    /// each pass reaches with a fresh id.
    fn label<G: Graph>(graph: &G, roots: impl IntoIterator<Item = usize>) -> Self {
        struct Label<'a> {
            ids: &'a mut [usize],
            id: usize,
            size: usize,
        }

        impl<E> Visitor<E> for Label<'_> {
            fn pre_visit(&mut self, vertex: usize) {
                self.ids[vertex] = self.id;
                self.size += 1;
            }
        }

        let n = graph.vertex_count();
        let mut ids = vec![usize::MAX; n];
        let mut sizes = Vec::new();
        let mut discovered = vec![false; n];
        for root in roots {
            if discovered[root] {
                continue;
            }
            let mut label = Label {
                ids: &mut ids,
                id: sizes.len(),
                size: 0,
            };
            let _ = dfs_from(graph, root, &mut discovered, &mut label);
            sizes.push(label.size);
        }
        Self { ids, sizes }
    }

    fn count(&self) -> usize {
        self.sizes.len()
    }

    fn members(&self, id: usize) -> Vec<usize> {
        let mut members = Vec::with_capacity(self.sizes[id]);
        members.extend((0..self.ids.len()).filter(|&v| self.ids[v] == id));
        members
    }
}

/// Shared query surface and per-id member cache.
#[derive(Debug, Default)]
struct Components {
    partition: OnceCell<Partition>,
    members: RefCell<HashMap<usize, Arc<[usize]>>>,
}

impl Components {
    fn component(&self, partition: &Partition, id: usize) -> Arc<[usize]> {
        assert!(id < partition.count(), "component {id} out of bounds");
        self.members
            .borrow_mut()
            .entry(id)
            .or_insert_with(|| partition.members(id).into())
            .clone()
    }
}

/// Connected components of a graph, as given by its adjacency lists.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | first query | \(O(n + m)\) | One whole-graph depth-first pass |
/// | `id`, `connected`, `count` | \(O(1)\) | |
/// | `component` | \(O(n)\) first time per id | Cached afterwards |
#[derive(Debug)]
pub struct ConnectedComponents<G: Graph> {
    graph: G,
    inner: Components,
}

impl<G: Graph> ConnectedComponents<G> {
    /// Creates the analyzer. Nothing is computed until the first query.
    pub fn new(graph: G) -> Self {
        Self {
            graph,
            inner: Components::default(),
        }
    }

    /// The graph snapshot this analyzer works on.
    pub fn graph(&self) -> &G {
        &self.graph
    }

    fn partition(&self) -> &Partition {
        self.inner.partition.get_or_init(|| {
            let partition = Partition::label(&self.graph, 0..self.graph.vertex_count());
            debug!(
                vertices = self.graph.vertex_count(),
                components = partition.count(),
                "connected components labelled"
            );
            partition
        })
    }

    /// Number of components.
    pub fn count(&self) -> usize {
        self.partition().count()
    }

    /// Component id of `vertex`.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    pub fn id(&self, vertex: usize) -> usize {
        assert_vertex(&self.graph, vertex);
        self.partition().ids[vertex]
    }

    /// Returns `true` if `v` and `w` are in the same component.
    ///
    /// # Panics
    /// Panics if either vertex is out of bounds.
    pub fn connected(&self, v: usize, w: usize) -> bool {
        self.id(v) == self.id(w)
    }

    /// Number of vertices in component `id`.
    ///
    /// # Panics
    /// Panics if `id >= count()`.
    pub fn size(&self, id: usize) -> usize {
        self.partition().sizes[id]
    }

    /// Vertices of component `id` in ascending order.
    ///
    /// # Panics
    /// Panics if `id >= count()`.
    pub fn component(&self, id: usize) -> Arc<[usize]> {
        self.inner.component(self.partition(), id)
    }

    /// Every component, indexed by id.
    pub fn components(&self) -> Vec<Arc<[usize]>> {
        (0..self.count()).map(|id| self.component(id)).collect()
    }
}

/// Strongly connected components.
///
/// Directed graphs use Kosaraju–Sharir: a depth-first pass over the reversed
/// graph yields a reverse post-order, and a second pass over the original
/// graph, taking roots in that order, labels one component per root.
/// Undirected graphs reduce to connected components.
#[derive(Debug)]
pub struct StronglyConnectedComponents<G: Graph> {
    graph: G,
    inner: Components,
}

impl<G: Graph> StronglyConnectedComponents<G> {
    /// Creates the analyzer. Nothing is computed until the first query.
    pub fn new(graph: G) -> Self {
        Self {
            graph,
            inner: Components::default(),
        }
    }

    /// The graph snapshot this analyzer works on.
    pub fn graph(&self) -> &G {
        &self.graph
    }

    fn partition(&self) -> &Partition {
        self.inner.partition.get_or_init(|| {
            let n = self.graph.vertex_count();
            let partition = if self.graph.is_directed() {
                let mut order = dfs_postorder(&self.graph.reversed());
                order.reverse();
                Partition::label(&self.graph, order)
            } else {
                Partition::label(&self.graph, 0..n)
            };
            debug!(
                vertices = n,
                components = partition.count(),
                "strongly connected components labelled"
            );
            partition
        })
    }

    /// Number of strongly connected components.
    pub fn count(&self) -> usize {
        self.partition().count()
    }

    /// Component id of `vertex`.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    pub fn id(&self, vertex: usize) -> usize {
        assert_vertex(&self.graph, vertex);
        self.partition().ids[vertex]
    }

    /// Returns `true` if `v` and `w` are mutually reachable.
    ///
    /// # Panics
    /// Panics if either vertex is out of bounds.
    pub fn strongly_connected(&self, v: usize, w: usize) -> bool {
        self.id(v) == self.id(w)
    }

    /// Number of vertices in component `id`.
    ///
    /// # Panics
    /// Panics if `id >= count()`.
    pub fn size(&self, id: usize) -> usize {
        self.partition().sizes[id]
    }

    /// Vertices of component `id` in ascending order.
    ///
    /// # Panics
    /// Panics if `id >= count()`.
    pub fn component(&self, id: usize) -> Arc<[usize]> {
        self.inner.component(self.partition(), id)
    }

    /// Every component, indexed by id.
    pub fn components(&self) -> Vec<Arc<[usize]>> {
        (0..self.count()).map(|id| self.component(id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AdjacencyListGraph, BasicEdge, GraphKind};

    fn graph(kind: GraphKind, n: usize, edges: &[(usize, usize)]) -> AdjacencyListGraph<BasicEdge> {
        AdjacencyListGraph::from_edges(kind, n, edges.iter().map(|&(u, v)| BasicEdge::new(u, v)))
    }

    #[test]
    fn connected_components_of_forest() {
        let g = graph(GraphKind::Undirected, 6, &[(0, 1), (1, 2), (3, 4)]);
        let cc = ConnectedComponents::new(g);
        assert_eq!(cc.count(), 3);
        assert!(cc.connected(0, 2));
        assert!(!cc.connected(2, 3));
        assert!(cc.connected(5, 5));
        assert_eq!(cc.id(0), 0);
        assert_eq!(cc.id(3), 1);
        assert_eq!(cc.id(5), 2);
        assert_eq!(&*cc.component(0), &[0, 1, 2]);
        assert_eq!(cc.size(1), 2);
        assert_eq!(cc.components().len(), 3);
    }

    #[test]
    fn component_lists_are_cached() {
        let g = graph(GraphKind::Undirected, 3, &[(0, 2)]);
        let cc = ConnectedComponents::new(g);
        let first = cc.component(0);
        let second = cc.component(0);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn scc_kosaraju() {
        // Two SCCs: {0,1,2} cycle and {3} alone.
        let g = graph(GraphKind::Directed, 4, &[(0, 1), (1, 2), (2, 0), (2, 3)]);
        let scc = StronglyConnectedComponents::new(g);
        assert_eq!(scc.count(), 2);
        assert!(scc.strongly_connected(0, 1));
        assert!(scc.strongly_connected(1, 2));
        assert!(!scc.strongly_connected(2, 3));
        assert!(scc.strongly_connected(3, 3));
    }

    #[test]
    fn scc_tiny_digraph() {
        // The classic 13-vertex example with five strong components.
        let edges = [
            (4, 2), (2, 3), (3, 2), (6, 0), (0, 1), (2, 0), (11, 12), (12, 9),
            (9, 10), (9, 11), (7, 9), (10, 12), (11, 4), (4, 3), (3, 5), (6, 8),
            (8, 6), (5, 4), (0, 5), (6, 4), (6, 9), (7, 6),
        ];
        let scc = StronglyConnectedComponents::new(graph(GraphKind::Directed, 13, &edges));
        assert_eq!(scc.count(), 5);

        let mut groups: Vec<Vec<usize>> = scc.components().iter().map(|c| c.to_vec()).collect();
        groups.sort();
        assert_eq!(
            groups,
            vec![vec![0, 2, 3, 4, 5], vec![1], vec![6, 8], vec![7], vec![9, 10, 11, 12]]
        );
    }

    #[test]
    fn scc_of_undirected_matches_components() {
        let g = graph(GraphKind::Undirected, 5, &[(0, 1), (3, 4)]);
        let scc = StronglyConnectedComponents::new(g.clone());
        let cc = ConnectedComponents::new(g);
        assert_eq!(scc.count(), cc.count());
        for v in 0..5 {
            assert_eq!(scc.id(v), cc.id(v));
        }
    }

    #[test]
    fn empty_graph_has_no_components() {
        let g = graph(GraphKind::Directed, 0, &[]);
        assert_eq!(ConnectedComponents::new(g.clone()).count(), 0);
        assert_eq!(StronglyConnectedComponents::new(g).count(), 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn id_rejects_out_of_range_vertex() {
        let g = graph(GraphKind::Undirected, 2, &[]);
        let _ = ConnectedComponents::new(g).id(2);
    }
}
