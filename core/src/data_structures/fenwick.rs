//! Fenwick tree (binary indexed tree) over 1-based positions

use crate::algorithm::traits::{AlgorithmError, AlgorithmResult};

#[derive(Debug, Clone)]
pub struct FenwickTree {
    bit: Vec<i64>,
}

impl FenwickTree {
    /// Tree over positions `1..=size`, all zero
    pub fn new(size: usize) -> Self {
        Self {
            bit: vec![0; size + 1],
        }
    }

    /// Tree whose position `i + 1` holds `values[i]`
    pub fn from_slice(values: &[i64]) -> Self {
        let mut tree = Self::new(values.len());
        for (i, &value) in values.iter().enumerate() {
            // in-range by construction
            let _ = tree.update(i + 1, value);
        }
        tree
    }

    pub fn len(&self) -> usize {
        self.bit.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_index(&self, index: usize) -> AlgorithmResult<()> {
        if index == 0 || index > self.len() {
            return Err(AlgorithmError::invalid_argument(format!(
                "position {} outside 1..={}",
                index,
                self.len()
            )));
        }
        Ok(())
    }

    /// Adds `delta` at 1-based `index`
    pub fn update(&mut self, index: usize, delta: i64) -> AlgorithmResult<()> {
        self.check_index(index)?;
        let mut i = index;
        while i < self.bit.len() {
            self.bit[i] += delta;
            i += i & i.wrapping_neg();
        }
        Ok(())
    }

    /// Sum of positions `1..=index`; `prefix_sum(0)` is zero
    pub fn prefix_sum(&self, index: usize) -> AlgorithmResult<i64> {
        if index > self.len() {
            return Err(AlgorithmError::invalid_argument(format!(
                "position {} outside 0..={}",
                index,
                self.len()
            )));
        }
        let mut sum = 0;
        let mut i = index;
        while i > 0 {
            sum += self.bit[i];
            i -= i & i.wrapping_neg();
        }
        Ok(sum)
    }

    /// Sum of positions `left..=right`
    pub fn range_sum(&self, left: usize, right: usize) -> AlgorithmResult<i64> {
        self.check_index(left)?;
        if right < left {
            return Err(AlgorithmError::invalid_argument(format!(
                "range {}..={} is reversed",
                left, right
            )));
        }
        Ok(self.prefix_sum(right)? - self.prefix_sum(left - 1)?)
    }
}
