//! Priority queues and union-find used by the graph algorithms.

pub mod binary_heap;
pub mod disjoint_set;
pub mod indexed_heap;

pub use binary_heap::MinHeap;
pub use disjoint_set::DisjointSet;
pub use indexed_heap::IndexedMinHeap;
