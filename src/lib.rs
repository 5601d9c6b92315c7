//! # `trellis` - Graph Algorithms over Read-Only Snapshots
//!
//! Classical graph algorithms over integer-indexed vertices `0..vertex_count`
//! and an abstract edge capability.
//!
//! ## Architecture
//!
//! The crate is layered, leaves first:
//!
//! 1. **Interfaces** ([`graph::Graph`], [`graph::Edge`], [`graph::WeightedEdge`]):
//!    what the algorithms consume. [`graph::AdjacencyListGraph`] is an immutable,
//!    `Arc`-shared snapshot implementing them.
//! 2. **Traversal kernel** ([`graph::traversal`]): depth-first and breadth-first
//!    walks driving a [`graph::Visitor`], with early termination through
//!    [`core::ops::ControlFlow`].
//! 3. **Utilities** ([`graph::algorithms`]): cycle detection and topological
//!    order, connectivity, reachability, shortest paths, minimum spanning
//!    forests, max-flow/min-cut, two-coloring and Hamiltonian paths.
//!
//! ### Utility lifecycle
//!
//! A utility owns a graph snapshot plus its construction parameters. It
//! computes its result on the first query and caches it for its lifetime;
//! per-destination answers (paths, component member lists) are memoized on
//! demand. Utilities are single-threaded: the caches use `Cell`-family
//! interior mutability, so an instance is `!Sync`.
//!
//! ### Failures
//!
//! - Out-of-range vertices and other caller errors panic at the call boundary.
//! - Domain failures ([`GraphError`]) are found once, cached, and returned
//!   identically by every later query.
//! - Absent results (no path, no topological order) are `None` or empty.
//!
//! ## Example
//!
//! ```rust
//! use trellis::graph::algorithms::{CycleDetector, Dijkstra, ShortestPathSearch};
//! use trellis::graph::{AdjacencyListGraph, BasicWeightedEdge, GraphKind};
//!
//! let graph = AdjacencyListGraph::from_edges(
//!     GraphKind::Directed,
//!     3,
//!     [
//!         BasicWeightedEdge::new(0, 1, 4),
//!         BasicWeightedEdge::new(1, 2, 1),
//!         BasicWeightedEdge::new(0, 2, 7),
//!     ],
//! );
//!
//! let detector = CycleDetector::new(graph.clone());
//! assert_eq!(detector.topological_sort(), Some(&[0, 1, 2][..]));
//!
//! let dijkstra = Dijkstra::new(graph, 0);
//! assert_eq!(dijkstra.weight_to(2), Ok(Some(5)));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::algorithms::{
    Bipartite, ConnectedComponents, CycleDetector, FlowNetwork, HamiltonianPaths, Reachability,
    SpanningForest, SpanningForestAlgorithm, StronglyConnectedComponents, TransitiveClosure,
};
pub use graph::{AdjacencyListGraph, BasicEdge, BasicWeightedEdge, Edge, Graph, GraphKind, WeightedEdge};
