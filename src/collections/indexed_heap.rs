//! `IndexedMinHeap`: a min-priority queue keyed by small integer indices.
//!
//! Every index in `0..capacity` holds at most one key. Besides `push`/`pop`,
//! the queue supports lowering the key of an index that is already queued,
//! which is what Dijkstra's relaxation and eager Prim rely on.
//!
//! Memory layout:
//! - `heap`: heap position -> index
//! - `position`: index -> heap position (or `None` if not queued)
//! - `keys`: index -> current key

use core::cmp::Ordering;
use core::fmt;

/// An indexed binary min-heap over indices `0..capacity`.
///
/// ### Performance Characteristics
/// | Operation | Complexity |
/// |-----------|------------|
/// | `contains` | \(O(1)\) |
/// | `push` | \(O(\log n)\) |
/// | `decrease_key` | \(O(\log n)\) |
/// | `pop` | \(O(\log n)\) |
pub struct IndexedMinHeap<K> {
    heap: Vec<usize>,
    position: Vec<Option<usize>>,
    keys: Vec<Option<K>>,
}

impl<K: PartialOrd + Copy> IndexedMinHeap<K> {
    /// Creates an empty queue accepting indices `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            position: vec![None; capacity],
            keys: (0..capacity).map(|_| None).collect(),
        }
    }

    /// Number of queued indices.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns `true` if `index` is queued.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn contains(&self, index: usize) -> bool {
        self.position[index].is_some()
    }

    /// Current key of `index`, if queued.
    pub fn key_of(&self, index: usize) -> Option<K> {
        self.position[index].and(self.keys[index])
    }

    /// Queues `index` with `key`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds or already queued.
    pub fn push(&mut self, index: usize, key: K) {
        assert!(!self.contains(index), "index {index} is already queued");
        let pos = self.heap.len();
        self.heap.push(index);
        self.position[index] = Some(pos);
        self.keys[index] = Some(key);
        self.sift_up(pos);
    }

    /// Lowers the key of a queued `index` to `key`.
    ///
    /// # Panics
    /// Panics if `index` is not queued or `key` is greater than its current key.
    pub fn decrease_key(&mut self, index: usize, key: K) {
        let pos = self.position[index].unwrap_or_else(|| panic!("index {index} is not queued"));
        assert!(
            self.keys[index].map_or(true, |old| key.partial_cmp(&old) != Some(Ordering::Greater)),
            "decrease_key would increase the key of {index}"
        );
        self.keys[index] = Some(key);
        self.sift_up(pos);
    }

    /// Queues `index` with `key`, or lowers its key if it is already queued.
    pub fn push_or_decrease(&mut self, index: usize, key: K) {
        if self.contains(index) {
            self.decrease_key(index, key);
        } else {
            self.push(index, key);
        }
    }

    /// Removes and returns an index with the smallest key.
    pub fn pop(&mut self) -> Option<(usize, K)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let index = self.heap.pop()?;
        self.position[index] = None;
        let key = self.keys[index].take()?;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((index, key))
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.less(pos, parent) {
                self.swap(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.less(right, left) {
                smaller = right;
            }
            if self.less(smaller, pos) {
                self.swap(pos, smaller);
                pos = smaller;
            } else {
                break;
            }
        }
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.keys[self.heap[a]] < self.keys[self.heap[b]]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a]] = Some(a);
        self.position[self.heap[b]] = Some(b);
    }
}

impl<K> fmt::Debug for IndexedMinHeap<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedMinHeap")
            .field("len", &self.heap.len())
            .field("capacity", &self.position.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_smallest_first() {
        let mut pq = IndexedMinHeap::with_capacity(5);
        pq.push(3, 0.5);
        pq.push(0, 2.0);
        pq.push(4, 0.1);
        pq.push(1, 1.0);

        let order: Vec<usize> = std::iter::from_fn(|| pq.pop().map(|(i, _)| i)).collect();
        assert_eq!(order, vec![4, 3, 1, 0]);
    }

    #[test]
    fn decrease_key_reorders() {
        let mut pq = IndexedMinHeap::with_capacity(3);
        pq.push(0, 10);
        pq.push(1, 20);
        pq.push(2, 30);
        pq.decrease_key(2, 5);
        assert_eq!(pq.key_of(2), Some(5));
        assert_eq!(pq.pop(), Some((2, 5)));
        pq.push_or_decrease(1, 1);
        pq.push_or_decrease(2, 7);
        assert_eq!(pq.pop(), Some((1, 1)));
        assert_eq!(pq.pop(), Some((2, 7)));
        assert_eq!(pq.pop(), Some((0, 10)));
        assert!(pq.is_empty());
    }

    #[test]
    fn popped_index_can_be_queued_again() {
        let mut pq = IndexedMinHeap::with_capacity(2);
        pq.push(1, 3);
        assert_eq!(pq.pop(), Some((1, 3)));
        assert!(!pq.contains(1));
        pq.push(1, 4);
        assert_eq!(pq.len(), 1);
    }

    #[test]
    #[should_panic(expected = "already queued")]
    fn double_push_panics() {
        let mut pq = IndexedMinHeap::with_capacity(2);
        pq.push(0, 1);
        pq.push(0, 2);
    }
}
