//! Binary search and its variants, including binary search on the answer
//!
//! All searches expect their input sorted in non-decreasing order and run
//! in O(log n) probes. The parametric searches bisect the feasible answer
//! range `[max(item), sum(items)]` with a greedy O(n) feasibility check.

use std::cmp::Ordering;

use crate::algorithm::traits::{AlgorithmError, AlgorithmResult};

/// Index of some element equal to `target`
pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let (mut lo, mut hi) = (0, arr.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match arr[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    None
}

/// Index of the first element equal to `target`
pub fn find_first<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let idx = arr.partition_point(|x| x < target);
    (idx < arr.len() && arr[idx] == *target).then_some(idx)
}

/// Index of the last element equal to `target`
pub fn find_last<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let idx = arr.partition_point(|x| x <= target);
    (idx > 0 && arr[idx - 1] == *target).then(|| idx - 1)
}

/// Searches a matrix whose rows are sorted and where each row starts after
/// the previous one ends, treating it as one flattened sorted array
pub fn search_matrix<T: Ord>(matrix: &[Vec<T>], target: &T) -> bool {
    let cols = match matrix.first() {
        Some(row) if !row.is_empty() => row.len(),
        _ => return false,
    };
    let (mut lo, mut hi) = (0, matrix.len() * cols);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let Some(value) = matrix[mid / cols].get(mid % cols) else {
            return false;
        };
        match value.cmp(target) {
            Ordering::Equal => return true,
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    false
}

/// Number of contiguous groups needed so that no group exceeds `limit`;
/// `None` if a single item already exceeds it
fn groups_needed(items: &[u64], limit: u64) -> Option<u64> {
    let mut groups = 1;
    let mut current = 0;
    for &item in items {
        if item > limit {
            return None;
        }
        if current + item <= limit {
            current += item;
        } else {
            groups += 1;
            current = item;
        }
    }
    Some(groups)
}

/// Smallest `limit` for which the items split into at most `parts`
/// contiguous groups
fn minimize_max_load(items: &[u64], parts: u64, what: &'static str) -> AlgorithmResult<u64> {
    if items.is_empty() {
        return Err(AlgorithmError::EmptyInput(what));
    }
    if parts == 0 {
        return Err(AlgorithmError::invalid_argument(
            "at least one group is required",
        ));
    }
    let mut lo = items.iter().copied().max().unwrap_or(0);
    let mut hi: u64 = items.iter().sum();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if groups_needed(items, mid).is_some_and(|groups| groups <= parts) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    Ok(lo)
}

/// Minimum possible maximum of pages read by any student when books are
/// handed out contiguously
pub fn min_max_pages(pages: &[u64], students: u64) -> AlgorithmResult<u64> {
    minimize_max_load(pages, students, "pages")
}

/// Least ship capacity that moves all packages, in order, within `days`
pub fn ship_capacity(weights: &[u64], days: u64) -> AlgorithmResult<u64> {
    minimize_max_load(weights, days, "weights")
}
