//! Array-backed binary heap with selectable ordering
//!
//! This module implements the classic implicit binary heap: a complete
//! binary tree stored level by level in a vector, where the element at
//! index `i` has children at `2i + 1` and `2i + 2`.
//!
//! # Heap Invariant
//! For every index `i > 0`, the parent at `(i - 1) / 2` is not ordered
//! after the child under the heap's [`HeapOrder`]. `validate` checks this.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::algorithm::traits::{AlgorithmError, AlgorithmResult};

/// Heap ordering strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapOrder {
    Min,
    Max,
}

impl HeapOrder {
    /// Whether `a` belongs above `b` in the heap
    #[inline]
    fn precedes<T: Ord>(self, a: &T, b: &T) -> bool {
        match self {
            HeapOrder::Min => a < b,
            HeapOrder::Max => a > b,
        }
    }
}

/// Binary heap over any totally ordered element type
#[derive(Debug, Clone)]
pub struct Heap<T: Ord> {
    items: Vec<T>,
    order: HeapOrder,
}

impl<T: Ord> Heap<T> {
    pub fn new(order: HeapOrder) -> Self {
        Self { items: Vec::new(), order }
    }

    /// Heap whose top is the smallest element
    pub fn min() -> Self {
        Self::new(HeapOrder::Min)
    }

    /// Heap whose top is the largest element
    pub fn max() -> Self {
        Self::new(HeapOrder::Max)
    }

    pub fn order(&self) -> HeapOrder {
        self.order
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes and returns the top element
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let top = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Some(top)
    }

    /// Drains the heap in priority order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.items.len());
        while let Some(item) = self.pop() {
            out.push(item);
        }
        out
    }

    /// Verifies the heap invariant over the whole array
    pub fn validate(&self) -> AlgorithmResult<()> {
        for i in 1..self.items.len() {
            let parent = (i - 1) / 2;
            if self.order.precedes(&self.items[i], &self.items[parent]) {
                return Err(AlgorithmError::InvalidArgument(format!(
                    "heap order violated between index {} and its parent {}",
                    i, parent
                )));
            }
        }
        Ok(())
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.order.precedes(&self.items[i], &self.items[parent]) {
                self.items.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.items.len();
        loop {
            let left = 2 * i + 1;
            if left >= n {
                break;
            }
            let right = left + 1;
            let mut best = left;
            if right < n && self.order.precedes(&self.items[right], &self.items[left]) {
                best = right;
            }
            if self.order.precedes(&self.items[best], &self.items[i]) {
                self.items.swap(i, best);
                i = best;
            } else {
                break;
            }
        }
    }
}

impl<T: Ord> Extend<T> for Heap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

/// The `k` largest elements in decreasing order, O(n log k)
pub fn k_largest<T: Ord + Clone>(nums: &[T], k: usize) -> Vec<T> {
    select_k(nums, k, HeapOrder::Min)
}

/// The `k` smallest elements in increasing order, O(n log k)
pub fn k_smallest<T: Ord + Clone>(nums: &[T], k: usize) -> Vec<T> {
    select_k(nums, k, HeapOrder::Max)
}

/// Keeps a bounded heap whose top is the weakest retained element
fn select_k<T: Ord + Clone>(nums: &[T], k: usize, keep: HeapOrder) -> Vec<T> {
    if k == 0 {
        return Vec::new();
    }
    let mut heap = Heap::new(keep);
    for value in nums {
        if heap.len() < k {
            heap.push(value.clone());
        } else if heap.peek().is_some_and(|top| keep.precedes(top, value)) {
            heap.pop();
            heap.push(value.clone());
        }
    }
    let mut selected = heap.into_sorted_vec();
    selected.reverse();
    selected
}

/// Running median over a stream of integers using two heaps
///
/// `low` is a max-heap holding the smaller half, `high` a min-heap holding
/// the larger half; `low` may hold at most one extra element.
#[derive(Debug, Clone, Default)]
pub struct MedianFinder {
    low: BinaryHeap<i64>,
    high: BinaryHeap<Reverse<i64>>,
}

impl MedianFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.low.len() + self.high.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn add_num(&mut self, num: i64) {
        self.low.push(num);

        if let (Some(&low_top), Some(&Reverse(high_top))) = (self.low.peek(), self.high.peek()) {
            if low_top > high_top {
                if let Some(moved) = self.low.pop() {
                    self.high.push(Reverse(moved));
                }
            }
        }

        match self.low.len().cmp(&(self.high.len() + 1)) {
            Ordering::Greater => {
                if let Some(moved) = self.low.pop() {
                    self.high.push(Reverse(moved));
                }
            }
            _ if self.high.len() > self.low.len() => {
                if let Some(Reverse(moved)) = self.high.pop() {
                    self.low.push(moved);
                }
            }
            _ => {}
        }
    }

    /// Median of everything added so far, `None` for an empty stream
    pub fn find_median(&self) -> Option<f64> {
        let low_top = *self.low.peek()?;
        if self.low.len() > self.high.len() {
            return Some(low_top as f64);
        }
        let Reverse(high_top) = *self.high.peek()?;
        Some((low_top as f64 + high_top as f64) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_min_heap_operations() {
        let mut heap = Heap::min();
        heap.extend([5, 3, 8, 1, 2]);

        assert_eq!(heap.peek(), Some(&1));
        assert_eq!(heap.len(), 5);
        assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 5, 8]);
    }

    #[test]
    fn test_max_heap_operations() {
        let mut heap = Heap::max();
        heap.extend([5, 3, 8, 1, 2]);

        assert_eq!(heap.peek(), Some(&8));
        let popped: Vec<_> = std::iter::from_fn(|| heap.pop()).collect();
        assert_eq!(popped, vec![8, 5, 3, 2, 1]);
    }

    #[test]
    fn test_edge_cases() {
        let mut heap: Heap<i32> = Heap::min();
        assert_eq!(heap.pop(), None);
        assert_eq!(heap.peek(), None);
        assert!(heap.validate().is_ok());
    }

    #[test]
    fn test_k_selection() {
        let data = [7, 2, 9, 4, 3, 8, 1];
        assert_eq!(k_largest(&data, 3), vec![9, 8, 7]);
        assert_eq!(k_smallest(&data, 3), vec![1, 2, 3]);
        assert!(k_largest(&data, 0).is_empty());
        assert_eq!(k_smallest(&data, 20).len(), data.len());
    }

    #[test]
    fn test_running_median() {
        let mut finder = MedianFinder::new();
        assert_eq!(finder.find_median(), None);

        let expected = [5.0, 10.0, 5.0, 4.0, 5.0];
        for (num, want) in [5, 15, 1, 3, 8].into_iter().zip(expected) {
            finder.add_num(num);
            assert_relative_eq!(finder.find_median().unwrap(), want);
        }
    }

    proptest! {
        #[test]
        fn test_heap_property_invariant(values in prop::collection::vec(-1000i32..1000, 0..200)) {
            let mut heap = Heap::min();
            heap.extend(values.iter().copied());
            prop_assert!(heap.validate().is_ok());

            let drained = heap.into_sorted_vec();
            let mut expected = values.clone();
            expected.sort();
            prop_assert_eq!(drained, expected);
        }
    }
}
