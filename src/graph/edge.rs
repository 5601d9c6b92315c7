//! Concrete edge types.

use serde::{Deserialize, Serialize};

use super::{Edge, Weight, WeightedEdge};

/// An unweighted edge between `u` and `v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BasicEdge {
    /// Tail (or first endpoint).
    pub u: usize,
    /// Head (or second endpoint).
    pub v: usize,
}

impl BasicEdge {
    /// Creates the edge `u -> v`.
    pub const fn new(u: usize, v: usize) -> Self {
        Self { u, v }
    }
}

impl Edge for BasicEdge {
    #[inline]
    fn either(&self) -> usize {
        self.u
    }

    #[inline]
    fn other(&self, vertex: usize) -> usize {
        other_endpoint(self.u, self.v, vertex)
    }

    fn reversed(&self) -> Self {
        Self::new(self.v, self.u)
    }
}

/// A weighted edge between `u` and `v`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasicWeightedEdge<W> {
    /// Tail (or first endpoint).
    pub u: usize,
    /// Head (or second endpoint).
    pub v: usize,
    /// Weight, cost or capacity depending on the algorithm.
    pub weight: W,
}

impl<W> BasicWeightedEdge<W> {
    /// Creates the edge `u -> v` with `weight`.
    pub const fn new(u: usize, v: usize, weight: W) -> Self {
        Self { u, v, weight }
    }
}

impl<W: Weight> Edge for BasicWeightedEdge<W> {
    #[inline]
    fn either(&self) -> usize {
        self.u
    }

    #[inline]
    fn other(&self, vertex: usize) -> usize {
        other_endpoint(self.u, self.v, vertex)
    }

    fn reversed(&self) -> Self {
        Self::new(self.v, self.u, self.weight)
    }
}

impl<W: Weight> WeightedEdge for BasicWeightedEdge<W> {
    type Weight = W;

    #[inline]
    fn weight(&self) -> W {
        self.weight
    }

    fn reversed_with(&self, weight: W) -> Self {
        Self::new(self.v, self.u, weight)
    }
}

#[inline]
#[track_caller]
fn other_endpoint(u: usize, v: usize, vertex: usize) -> usize {
    if vertex == u {
        v
    } else {
        assert!(vertex == v, "vertex {vertex} is not an endpoint of {u}-{v}");
        u
    }
}
