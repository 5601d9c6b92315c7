//! Minimum spanning forests of undirected weighted graphs.
//!
//! One tree per connected component, indexed by the component's id in
//! [`ConnectedComponents`]. Each tree is grown from the smallest vertex of its
//! component. Self-loops never enter a tree and among parallel edges the
//! cheapest wins.

use std::cell::OnceCell;
use std::sync::Arc;

use num_traits::Zero;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::connectivity::ConnectedComponents;
use crate::collections::{DisjointSet, IndexedMinHeap, MinHeap};
use crate::graph::algorithms::shortest_path::WeightOf;
use crate::graph::{Edge, Graph, WeightedEdge};

/// Which algorithm builds the forest. All three yield the same total weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanningForestAlgorithm {
    /// Prim with a heap of candidate edges; stale entries are skipped on pop.
    PrimLazy,
    /// Prim with an indexed heap holding the best crossing edge per vertex.
    #[default]
    PrimEager,
    /// Kruskal over each component's edges with a disjoint-set forest.
    Kruskal,
}

#[derive(Debug)]
struct Forest<E: WeightedEdge> {
    trees: Vec<Arc<[E]>>,
    weights: Vec<Option<E::Weight>>,
}

/// A minimum spanning forest.
///
/// ### Performance Characteristics
/// | Algorithm | Complexity | Notes |
/// |-----------|------------|-------|
/// | `PrimLazy` | \(O(m \log m)\) | Heap may hold every edge |
/// | `PrimEager` | \(O(m \log n)\) | Heap holds at most one entry per vertex |
/// | `Kruskal` | \(O(m \log m)\) | Stops each component at `size - 1` edges |
#[derive(Debug)]
pub struct SpanningForest<G>
where
    G: Graph,
    G::Edge: WeightedEdge,
{
    components: ConnectedComponents<G>,
    algorithm: SpanningForestAlgorithm,
    forest: OnceCell<Forest<G::Edge>>,
}

impl<G> SpanningForest<G>
where
    G: Graph,
    G::Edge: WeightedEdge,
{
    /// Creates the builder, or `None` for a directed graph.
    pub fn new(graph: G, algorithm: SpanningForestAlgorithm) -> Option<Self> {
        if graph.is_directed() {
            return None;
        }
        Some(Self {
            components: ConnectedComponents::new(graph),
            algorithm,
            forest: OnceCell::new(),
        })
    }

    /// The graph snapshot.
    pub fn graph(&self) -> &G {
        self.components.graph()
    }

    /// The algorithm this forest is built with.
    pub fn algorithm(&self) -> SpanningForestAlgorithm {
        self.algorithm
    }

    fn forest(&self) -> &Forest<G::Edge> {
        self.forest.get_or_init(|| {
            let trees: Vec<Arc<[G::Edge]>> = match self.algorithm {
                SpanningForestAlgorithm::PrimLazy => self.prim_lazy(),
                SpanningForestAlgorithm::PrimEager => self.prim_eager(),
                SpanningForestAlgorithm::Kruskal => self.kruskal(),
            }
            .into_iter()
            .map(Arc::from)
            .collect();
            let weights: Vec<_> = trees.iter().map(|t| sum_weights(t)).collect();
            debug!(
                algorithm = ?self.algorithm,
                vertices = self.graph().vertex_count(),
                trees = trees.len(),
                total = ?weights.iter().flatten().copied().reduce(|a, b| a + b),
                "spanning forest built"
            );
            Forest { trees, weights }
        })
    }

    fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.components.count()).map(|id| self.components.component(id)[0])
    }

    fn prim_lazy(&self) -> Vec<Vec<G::Edge>> {
        let graph = self.graph();
        let mut marked = vec![false; graph.vertex_count()];
        let mut pq = MinHeap::new();
        let visit = |v: usize, marked: &mut [bool], pq: &mut MinHeap<WeightOf<G>, G::Edge>| {
            marked[v] = true;
            for edge in graph.adjacencies(v) {
                if !marked[edge.other(v)] {
                    pq.push(edge.weight(), edge.clone());
                }
            }
        };

        self.roots()
            .map(|root| {
                let mut tree = Vec::new();
                visit(root, &mut marked, &mut pq);
                while let Some((_, edge)) = pq.pop() {
                    let v = edge.either();
                    let w = edge.other(v);
                    if marked[v] && marked[w] {
                        continue;
                    }
                    let next = if marked[v] { w } else { v };
                    tree.push(edge);
                    visit(next, &mut marked, &mut pq);
                }
                tree
            })
            .collect()
    }

    fn prim_eager(&self) -> Vec<Vec<G::Edge>> {
        let graph = self.graph();
        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut edge_to: Vec<Option<G::Edge>> = vec![None; n];
        let mut pq = IndexedMinHeap::with_capacity(n);

        self.roots()
            .map(|root| {
                let mut tree = Vec::new();
                pq.push(root, <WeightOf<G> as Zero>::zero());
                while let Some((v, _)) = pq.pop() {
                    marked[v] = true;
                    if let Some(edge) = edge_to[v].take() {
                        tree.push(edge);
                    }
                    for edge in graph.adjacencies(v) {
                        let w = edge.other(v);
                        if marked[w] {
                            continue;
                        }
                        let weight = edge.weight();
                        if pq.key_of(w).map_or(true, |best| weight < best) {
                            edge_to[w] = Some(edge.clone());
                            pq.push_or_decrease(w, weight);
                        }
                    }
                }
                tree
            })
            .collect()
    }

    fn kruskal(&self) -> Vec<Vec<G::Edge>> {
        let graph = self.graph();
        let mut sets = DisjointSet::new(graph.vertex_count());

        (0..self.components.count())
            .map(|id| {
                let members = self.components.component(id);
                let mut pq = MinHeap::new();
                for &v in members.iter() {
                    for edge in graph.adjacencies(v) {
                        if edge.other(v) > v {
                            pq.push(edge.weight(), edge.clone());
                        }
                    }
                }

                let mut tree = Vec::with_capacity(members.len() - 1);
                while tree.len() + 1 < members.len() {
                    let Some((_, edge)) = pq.pop() else { break };
                    let v = edge.either();
                    if sets.union(v, edge.other(v)) {
                        tree.push(edge);
                    }
                }
                tree
            })
            .collect()
    }

    /// Number of trees, equal to the number of connected components.
    pub fn tree_count(&self) -> usize {
        self.forest().trees.len()
    }

    /// Edges of tree `id`, in the order they were added.
    ///
    /// # Panics
    /// Panics if `id >= tree_count()`.
    pub fn tree(&self, id: usize) -> Arc<[G::Edge]> {
        self.forest().trees[id].clone()
    }

    /// Every tree, indexed by component id.
    pub fn trees(&self) -> &[Arc<[G::Edge]>] {
        &self.forest().trees
    }

    /// Total weight of tree `id`; `None` when the tree has no edges.
    ///
    /// # Panics
    /// Panics if `id >= tree_count()`.
    pub fn weight(&self, id: usize) -> Option<WeightOf<G>> {
        self.forest().weights[id]
    }

    /// Total weight of the whole forest; `None` when it has no edges.
    pub fn total_weight(&self) -> Option<WeightOf<G>> {
        self.forest()
            .weights
            .iter()
            .flatten()
            .copied()
            .reduce(|a, b| a + b)
    }

    /// Number of edges across all trees.
    pub fn edge_count(&self) -> usize {
        self.forest().trees.iter().map(|t| t.len()).sum()
    }
}

fn sum_weights<E: WeightedEdge>(edges: &[E]) -> Option<E::Weight> {
    edges.iter().map(WeightedEdge::weight).reduce(|a, b| a + b)
}
