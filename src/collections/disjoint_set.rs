//! Union-find over the elements `0..len`, used by Kruskal's algorithm.
//!
//! # Performance
//!
//! - Parent links are `Cell<usize>`, so `find` compresses paths through `&self`.
//! - Path compression plus union by rank gives amortized near-constant operations.

use core::cmp::Ordering;
use std::cell::Cell;

/// A disjoint-set forest.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    /// Parent link of each element; a root links to itself.
    parent: Vec<Cell<usize>>,
    /// Upper bound on each root's tree height.
    rank: Vec<u8>,
    sets: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).map(Cell::new).collect(),
            rank: vec![0; len],
            sets: len,
        }
    }

    /// Representative of the set holding `element`.
    ///
    /// Every element on the walked path is relinked straight to the root.
    ///
    /// # Panics
    /// Panics if `element` is out of bounds.
    pub fn find(&self, element: usize) -> usize {
        let mut root = element;
        while self.parent[root].get() != root {
            root = self.parent[root].get();
        }

        let mut at = element;
        while at != root {
            at = self.parent[at].replace(root);
        }
        root
    }

    /// Merges the sets holding `a` and `b`.
    ///
    /// Returns `false` if they already shared a set.
    ///
    /// # Panics
    /// Panics if either element is out of bounds.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }

        match self.rank[ra].cmp(&self.rank[rb]) {
            Ordering::Less => self.parent[ra].set(rb),
            Ordering::Greater => self.parent[rb].set(ra),
            Ordering::Equal => {
                self.parent[rb].set(ra);
                self.rank[ra] += 1;
            }
        }
        self.sets -= 1;
        true
    }

    /// Returns `true` if `a` and `b` share a set.
    pub fn connected(&self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
