//! `MinHeap`: a priority queue implemented with a binary heap.
//!
//! Keys only need `PartialOrd`, so floating-point weights work directly.
//! Incomparable keys (NaN) never sift past each other.

use core::fmt;

/// A min-ordered priority queue of `(key, item)` pairs.
///
/// The top element is always one with the smallest key. Ties are popped in
/// no particular order.
pub struct MinHeap<K, T> {
    data: Vec<(K, T)>,
}

impl<K: PartialOrd, T> MinHeap<K, T> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty heap with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Pushes `item` with priority `key`.
    pub fn push(&mut self, key: K, item: T) {
        self.data.push((key, item));
        self.sift_up(self.data.len() - 1);
    }

    /// Pops an entry with the smallest key.
    pub fn pop(&mut self) -> Option<(K, T)> {
        if self.data.is_empty() {
            return None;
        }
        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let entry = self.data.pop()?;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(entry)
    }

    /// Returns an entry with the smallest key without removing it.
    pub fn peek(&self) -> Option<(&K, &T)> {
        self.data.first().map(|(k, t)| (k, t))
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.less(node, parent) {
                self.data.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.less(right, left) {
                smaller = right;
            }

            if self.less(smaller, node) {
                self.data.swap(node, smaller);
                node = smaller;
            } else {
                break;
            }
        }
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.data[a].0 < self.data[b].0
    }
}

impl<K: PartialOrd, T> Default for MinHeap<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialOrd, T> Extend<(K, T)> for MinHeap<K, T> {
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        for (key, item) in iter {
            self.push(key, item);
        }
    }
}

impl<K, T> fmt::Debug for MinHeap<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("len", &self.data.len())
            .finish()
    }
}
