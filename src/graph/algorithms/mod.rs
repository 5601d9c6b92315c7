//! Analytical utilities built on the traversal kernel.
//!
//! Every utility owns a snapshot of the graph plus its construction
//! parameters, computes its result on the first query and serves every later
//! query from that cached result.

pub mod bipartite;
pub mod connectivity;
pub mod cycle;
pub mod flow;
pub mod hamiltonian;
pub mod reachability;
pub mod shortest_path;
pub mod spanning_forest;

pub use bipartite::Bipartite;
pub use connectivity::{ConnectedComponents, StronglyConnectedComponents};
pub use cycle::CycleDetector;
pub use flow::{FlowEdge, FlowNetwork};
pub use hamiltonian::HamiltonianPaths;
pub use reachability::{Reachability, TransitiveClosure};
pub use shortest_path::{
    path_vertices, shortest_paths, AcyclicShortestPaths, BellmanFord, Dijkstra,
    ShortestPathAlgorithm, ShortestPathSearch,
};
pub use spanning_forest::{SpanningForest, SpanningForestAlgorithm};
