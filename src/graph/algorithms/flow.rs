//! Maximum flow and minimum cut by Edmonds-Karp.
//!
//! Edge weights are capacities. Each adjacency of the graph becomes one
//! [`FlowEdge`] referenced from both of its endpoints, so an undirected
//! connection carries two opposite records of the same capacity.

use std::cell::OnceCell;
use std::collections::VecDeque;

use tracing::{debug, trace, warn};

use crate::error::{GraphError, Result};
use crate::graph::{assert_vertex, Edge, Graph, Weight, WeightedEdge};

/// A capacity record in a flow network, oriented `from -> to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowEdge<W> {
    from: usize,
    to: usize,
    capacity: W,
    flow: W,
}

impl<W: Weight> FlowEdge<W> {
    fn new(from: usize, to: usize, capacity: W) -> Self {
        Self {
            from,
            to,
            capacity,
            flow: W::zero(),
        }
    }

    /// Tail vertex.
    pub fn from(&self) -> usize {
        self.from
    }

    /// Head vertex.
    pub fn to(&self) -> usize {
        self.to
    }

    /// The endpoint opposite `vertex`.
    ///
    /// # Panics
    /// Panics if `vertex` is not an endpoint.
    pub fn other(&self, vertex: usize) -> usize {
        if vertex == self.from {
            self.to
        } else if vertex == self.to {
            self.from
        } else {
            panic!("vertex {vertex} is not an endpoint of {}->{}", self.from, self.to);
        }
    }

    /// Capacity of the record.
    pub fn capacity(&self) -> W {
        self.capacity
    }

    /// Flow currently pushed along the record.
    pub fn flow(&self) -> W {
        self.flow
    }

    /// Capacity left when moving toward `vertex`: unused capacity toward the
    /// head, cancellable flow toward the tail.
    ///
    /// # Panics
    /// Panics if `vertex` is not an endpoint.
    pub fn residual_capacity_to(&self, vertex: usize) -> W {
        if vertex == self.to {
            self.capacity - self.flow
        } else if vertex == self.from {
            self.flow
        } else {
            panic!("vertex {vertex} is not an endpoint of {}->{}", self.from, self.to);
        }
    }

    fn add_residual_flow_to(&mut self, vertex: usize, delta: W) {
        if vertex == self.to {
            self.flow = self.flow + delta;
        } else {
            self.flow = self.flow - delta;
        }
    }
}

#[derive(Debug)]
struct FlowState<W> {
    edges: Vec<FlowEdge<W>>,
    max_flow: Option<W>,
    in_cut: Vec<bool>,
}

/// A flow network with a distinguished source and sink.
///
/// Every adjacency of the source graph becomes one [`FlowEdge`] record. A
/// directed edge is one record; an undirected connection is listed at both
/// endpoints and so becomes two opposite records of equal capacity. Each
/// record is incident to its two endpoints, a self-loop to its vertex once.
///
/// Max-flow, the final flow on every record and the min cut are computed
/// together on the first query.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `new` | \(O(n + m)\) | Builds the capacity records |
/// | first query | \(O(n m^2)\) | Shortest augmenting paths by breadth-first search |
/// | `in_min_cut` | \(O(1)\) | |
#[derive(Debug)]
pub struct FlowNetwork<W: Weight> {
    source: usize,
    sink: usize,
    edges: Vec<FlowEdge<W>>,
    incident: Vec<Vec<usize>>,
    state: OnceCell<FlowState<W>>,
}

impl<W: Weight> FlowNetwork<W> {
    /// Builds the network from a graph whose edge weights are capacities.
    ///
    /// # Errors
    /// Returns [`GraphError::NegativeWeightedEdge`] for the first edge with a
    /// negative capacity.
    ///
    /// # Panics
    /// Panics if `source` or `sink` is out of bounds.
    pub fn new<G>(graph: &G, source: usize, sink: usize) -> Result<Self>
    where
        G: Graph,
        G::Edge: WeightedEdge<Weight = W>,
    {
        assert_vertex(graph, source);
        assert_vertex(graph, sink);

        let n = graph.vertex_count();
        let mut edges = Vec::new();
        let mut incident = vec![Vec::new(); n];
        for v in 0..n {
            for edge in graph.adjacencies(v) {
                let w = edge.other(v);
                let capacity = edge.weight();
                if capacity < W::zero() {
                    let err = GraphError::NegativeWeightedEdge { from: v, to: w };
                    warn!(%err, "flow network rejected");
                    return Err(err);
                }
                let index = edges.len();
                edges.push(FlowEdge::new(v, w, capacity));
                incident[v].push(index);
                if w != v {
                    incident[w].push(index);
                }
            }
        }

        Ok(Self {
            source,
            sink,
            edges,
            incident,
            state: OnceCell::new(),
        })
    }

    /// The source vertex.
    pub fn source(&self) -> usize {
        self.source
    }

    /// The sink vertex.
    pub fn sink(&self) -> usize {
        self.sink
    }

    fn vertex_count(&self) -> usize {
        self.incident.len()
    }

    fn check_vertex(&self, vertex: usize) {
        let n = self.vertex_count();
        assert!(vertex < n, "vertex {vertex} out of bounds for n={n}");
    }

    fn state(&self) -> &FlowState<W> {
        self.state.get_or_init(|| self.solve())
    }

    fn solve(&self) -> FlowState<W> {
        let mut edges = self.edges.clone();
        let mut value = W::zero();
        let mut augmentations = 0usize;

        let in_cut = loop {
            let (marked, edge_to) = self.residual_search(&edges);
            if self.source == self.sink || !marked[self.sink] {
                break marked;
            }

            let mut bottleneck: Option<W> = None;
            let mut v = self.sink;
            while v != self.source {
                let Some(index) = edge_to[v] else { break };
                let residual = edges[index].residual_capacity_to(v);
                bottleneck = Some(match bottleneck {
                    Some(b) if b < residual => b,
                    _ => residual,
                });
                v = edges[index].other(v);
            }
            let Some(bottleneck) = bottleneck else { break marked };

            let mut v = self.sink;
            while v != self.source {
                let Some(index) = edge_to[v] else { break };
                edges[index].add_residual_flow_to(v, bottleneck);
                v = edges[index].other(v);
            }
            value = value + bottleneck;
            augmentations += 1;
            trace!(?bottleneck, "augmenting path");
        };

        let max_flow = (self.source != self.sink).then_some(value);
        debug!(
            source = self.source,
            sink = self.sink,
            records = edges.len(),
            augmentations,
            max_flow = ?max_flow,
            "max flow computed"
        );
        FlowState {
            edges,
            max_flow,
            in_cut,
        }
    }

    /// Breadth-first search from the source over records with residual capacity.
    fn residual_search(&self, edges: &[FlowEdge<W>]) -> (Vec<bool>, Vec<Option<usize>>) {
        let n = self.vertex_count();
        let mut marked = vec![false; n];
        let mut edge_to = vec![None; n];
        let mut queue = VecDeque::from([self.source]);
        marked[self.source] = true;

        while let Some(v) = queue.pop_front() {
            for &index in &self.incident[v] {
                let w = edges[index].other(v);
                if !marked[w] && edges[index].residual_capacity_to(w) > W::zero() {
                    marked[w] = true;
                    edge_to[w] = Some(index);
                    queue.push_back(w);
                }
            }
        }
        (marked, edge_to)
    }

    /// Value of a maximum flow; `None` when source and sink coincide.
    pub fn max_flow(&self) -> Option<W> {
        self.state().max_flow
    }

    /// Returns `true` if `vertex` is on the source side of the minimum cut.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    pub fn in_min_cut(&self, vertex: usize) -> bool {
        self.check_vertex(vertex);
        self.state().in_cut[vertex]
    }

    /// Records leading from the source side of the minimum cut to the sink side.
    pub fn min_cut(&self) -> Vec<FlowEdge<W>> {
        let state = self.state();
        state
            .edges
            .iter()
            .filter(|e| state.in_cut[e.from] && !state.in_cut[e.to])
            .copied()
            .collect()
    }

    /// Records incident to `vertex`, carrying the maximum flow.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    pub fn flowed_adjacencies(&self, vertex: usize) -> Vec<FlowEdge<W>> {
        self.check_vertex(vertex);
        let state = self.state();
        self.incident[vertex].iter().map(|&i| state.edges[i]).collect()
    }

    /// Every record, carrying the maximum flow.
    pub fn flow_edges(&self) -> &[FlowEdge<W>] {
        &self.state().edges
    }
}
