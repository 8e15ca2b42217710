//! Array techniques: maximum subarray, rotation, two pointers and prefix
//! sums
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::algorithm::traits::{AlgorithmError, AlgorithmResult};

/// Maximum sum of a non-empty contiguous subarray (Kadane)
pub fn max_subarray(nums: &[i64]) -> AlgorithmResult<i64> {
    let (&first, rest) = nums.split_first().ok_or(AlgorithmError::EmptyInput("nums"))?;
    let (mut best, mut current) = (first, first);
    for &x in rest {
        current = x.max(current + x);
        best = best.max(current);
    }
    Ok(best)
}

/// Best subarray containing both `arr[mid]` and `arr[mid + 1]` within
/// `arr[low..=high]`, as `(left, right, sum)`
pub fn max_crossing_subarray(arr: &[i64], low: usize, mid: usize, high: usize) -> AlgorithmResult<(usize, usize, i64)> {
    if !(low <= mid && mid < high && high < arr.len()) {
        return Err(AlgorithmError::invalid_argument(format!(
            "need low <= mid < high < {}, got {}, {}, {}",
            arr.len(),
            low,
            mid,
            high
        )));
    }

    let (mut left_sum, mut left) = (arr[mid], mid);
    let mut sum = 0;
    for i in (low..=mid).rev() {
        sum += arr[i];
        if sum > left_sum {
            left_sum = sum;
            left = i;
        }
    }

    let (mut right_sum, mut right) = (arr[mid + 1], mid + 1);
    sum = 0;
    for (j, &x) in arr.iter().enumerate().take(high + 1).skip(mid + 1) {
        sum += x;
        if sum > right_sum {
            right_sum = sum;
            right = j;
        }
    }
    Ok((left, right, left_sum + right_sum))
}

/// Maximum subarray by divide and conquer, as `(left, right, sum)`
pub fn max_subarray_divide_conquer(arr: &[i64]) -> AlgorithmResult<(usize, usize, i64)> {
    fn solve(arr: &[i64], low: usize, high: usize) -> AlgorithmResult<(usize, usize, i64)> {
        if low == high {
            return Ok((low, high, arr[low]));
        }
        let mid = low + (high - low) / 2;
        let left = solve(arr, low, mid)?;
        let right = solve(arr, mid + 1, high)?;
        let cross = max_crossing_subarray(arr, low, mid, high)?;
        Ok([left, right, cross]
            .into_iter()
            .fold(left, |best, candidate| if candidate.2 > best.2 { candidate } else { best }))
    }

    if arr.is_empty() {
        return Err(AlgorithmError::EmptyInput("arr"));
    }
    solve(arr, 0, arr.len() - 1)
}

/// Rotates right by `k` places
pub fn rotate_array<T: Clone>(arr: &[T], k: usize) -> Vec<T> {
    if arr.is_empty() {
        return Vec::new();
    }
    let mut out = arr.to_vec();
    out.rotate_right(k % arr.len());
    out
}

/// First index pair `(i, j)`, `i < j`, with `nums[i] + nums[j] == target`,
/// found in one pass with a hash map
pub fn two_sum(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::new();
    for (j, &x) in nums.iter().enumerate() {
        if let Some(&i) = seen.get(&(target - x)) {
            return Some((i, j));
        }
        seen.entry(x).or_insert(j);
    }
    None
}

/// Two-pointer pair search over a sorted slice
pub fn two_sum_sorted(arr: &[i64], target: i64) -> Option<(usize, usize)> {
    if arr.is_empty() {
        return None;
    }
    let (mut left, mut right) = (0, arr.len() - 1);
    while left < right {
        match (arr[left] + arr[right]).cmp(&target) {
            Ordering::Equal => return Some((left, right)),
            Ordering::Less => left += 1,
            Ordering::Greater => right -= 1,
        }
    }
    None
}

/// Inclusive bounds of the first-ending contiguous run summing to
/// `target`; handles negative values through prefix sums
pub fn subarray_with_sum(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    // prefix sum -> number of leading elements giving it, earliest kept
    let mut first_prefix: HashMap<i64, usize> = HashMap::from([(0, 0)]);
    let mut sum = 0;
    for (i, &x) in nums.iter().enumerate() {
        sum += x;
        if let Some(&start) = first_prefix.get(&(sum - target)) {
            return Some((start, i));
        }
        first_prefix.entry(sum).or_insert(i + 1);
    }
    None
}
