//! Mo's algorithm for offline range-sum queries
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::debug;

use crate::algorithm::traits::{
    parse_parameter, AlgorithmError, AlgorithmParameter, AlgorithmResult, Parameterized,
};

/// Answers inclusive `(left, right)` sum queries by sweeping a window
/// across queries sorted into square-root blocks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoSolver {
    /// `None` picks `ceil(sqrt(n))`
    block_size: Option<usize>,
}

impl MoSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_block_size(block_size: usize) -> AlgorithmResult<Self> {
        if block_size == 0 {
            return Err(AlgorithmError::invalid_parameter("block_size", "must be at least 1"));
        }
        Ok(Self { block_size: Some(block_size) })
    }

    pub fn block_size(&self) -> Option<usize> {
        self.block_size
    }

    fn effective_block_size(&self, n: usize) -> usize {
        self.block_size
            .unwrap_or_else(|| (n as f64).sqrt().ceil() as usize)
            .max(1)
    }

    /// Sums for every query, in query order
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a query with `left > right` or
    /// `right >= arr.len()`.
    pub fn solve(&self, arr: &[i64], queries: &[(usize, usize)]) -> AlgorithmResult<Vec<i64>> {
        if let Some(&(l, r)) = queries.iter().find(|&&(l, r)| l > r || r >= arr.len()) {
            return Err(AlgorithmError::invalid_argument(format!(
                "query ({}, {}) outside array of length {}",
                l,
                r,
                arr.len()
            )));
        }

        let block = self.effective_block_size(arr.len());
        let mut order: Vec<usize> = (0..queries.len()).collect();
        order.sort_by_key(|&i| (queries[i].0 / block, queries[i].1, i));
        debug!("mo: {} queries over {} elements, block size {}", queries.len(), arr.len(), block);

        let mut answers = vec![0; queries.len()];
        // current window is arr[cur_l..cur_r], half-open
        let (mut cur_l, mut cur_r, mut sum) = (0usize, 0usize, 0i64);
        for i in order {
            let (l, r) = queries[i];
            while cur_r <= r {
                sum += arr[cur_r];
                cur_r += 1;
            }
            while cur_l > l {
                cur_l -= 1;
                sum += arr[cur_l];
            }
            while cur_r > r + 1 {
                cur_r -= 1;
                sum -= arr[cur_r];
            }
            while cur_l < l {
                sum -= arr[cur_l];
                cur_l += 1;
            }
            answers[i] = sum;
        }
        Ok(answers)
    }
}

impl Parameterized for MoSolver {
    fn parameters(&self) -> Vec<AlgorithmParameter> {
        let mut param = AlgorithmParameter::integer("block_size", 0, Some(1.0));
        param.value = self
            .block_size
            .map_or_else(|| "auto".to_owned(), |b| b.to_string());
        vec![param]
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> AlgorithmResult<()> {
        match name {
            "block_size" => {
                self.block_size = if value.trim().eq_ignore_ascii_case("auto") {
                    None
                } else {
                    Some(parse_parameter(name, value, 1usize)?)
                };
                debug!("mo block size set to {:?}", self.block_size);
                Ok(())
            }
            _ => Err(AlgorithmError::invalid_parameter(name, "unknown parameter")),
        }
    }
}
