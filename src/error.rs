//! Error types for graph computations.
//!
//! Only recoverable domain failures live here. Caller errors such as an
//! out-of-range vertex are contract violations and panic at the call boundary.

use thiserror::Error;

/// Domain failures reported by graph utilities.
///
/// A utility discovers these at most once; the value is then cached and
/// returned unchanged by every later query on the same instance.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphError {
    /// An edge with a negative weight was found where weights must be non-negative.
    #[error("edge {from}->{to} has a negative weight")]
    NegativeWeightedEdge {
        /// Tail vertex of the offending edge.
        from: usize,
        /// Head vertex of the offending edge.
        to: usize,
    },
}

/// Convenience result type for graph computations.
pub type Result<T> = core::result::Result<T, GraphError>;
