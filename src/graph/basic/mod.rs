//! Basic graph representations.
//!
//! The algorithms only consume the [`Graph`](crate::graph::Graph) trait; this
//! module provides the one concrete, immutable snapshot they are exercised with.

pub mod adjacency_list;

pub use adjacency_list::AdjacencyListGraph;
