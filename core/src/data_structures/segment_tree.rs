//! Iterative segment tree for range sums
//!
//! Leaves occupy `tree[n..2n]` and node `i` stores `tree[2i] + tree[2i + 1]`.
//! Queries use half-open ranges `[left, right)`.

use crate::algorithm::traits::{AlgorithmError, AlgorithmResult};

#[derive(Debug, Clone)]
pub struct SegmentTree {
    n: usize,
    tree: Vec<i64>,
}

impl SegmentTree {
    pub fn new(data: &[i64]) -> Self {
        let n = data.len();
        let mut tree = vec![0; 2 * n];
        tree[n..].copy_from_slice(data);
        for i in (1..n).rev() {
            tree[i] = tree[2 * i] + tree[2 * i + 1];
        }
        Self { n, tree }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Sets element `index` to `value`
    pub fn update(&mut self, index: usize, value: i64) -> AlgorithmResult<()> {
        if index >= self.n {
            return Err(AlgorithmError::invalid_argument(format!(
                "index {} out of range for {} elements",
                index, self.n
            )));
        }
        let mut i = index + self.n;
        self.tree[i] = value;
        while i > 1 {
            i /= 2;
            self.tree[i] = self.tree[2 * i] + self.tree[2 * i + 1];
        }
        Ok(())
    }

    /// Sum over `[left, right)`
    pub fn query(&self, left: usize, right: usize) -> AlgorithmResult<i64> {
        if left > right || right > self.n {
            return Err(AlgorithmError::invalid_argument(format!(
                "range [{}, {}) invalid for {} elements",
                left, right, self.n
            )));
        }
        let mut sum = 0;
        let mut l = left + self.n;
        let mut r = right + self.n;
        while l < r {
            if l & 1 == 1 {
                sum += self.tree[l];
                l += 1;
            }
            if r & 1 == 1 {
                r -= 1;
                sum += self.tree[r];
            }
            l /= 2;
            r /= 2;
        }
        Ok(sum)
    }
}
