//! Comparison and distribution sorts
//!
//! Every routine returns a new sorted vector and leaves its input untouched.
//!
//! # Complexity Analysis
//! - Bubble, selection, insertion: O(n²) time, O(n) space for the copy
//! - Merge sort: O(n log n) time, O(n) auxiliary space, stable
//! - Quick sort: O(n log n) expected, O(n²) worst case
//! - Counting sort: O(n + k), radix sort: O(d·(n + 10)), bucket sort: O(n + k)
//!   on uniformly distributed input
//!
//! Merge and quick sort run without recursion: merge sort merges runs of
//! doubling width, quick sort keeps pending ranges on an explicit stack.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::debug;

use crate::algorithm::traits::{
    parse_parameter, AlgorithmError, AlgorithmParameter, AlgorithmResult, Parameterized,
};

pub fn bubble_sort<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
    let mut a = arr.to_vec();
    let n = a.len();
    for i in 0..n {
        let mut swapped = false;
        for j in 0..n.saturating_sub(i + 1) {
            if a[j] > a[j + 1] {
                a.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    a
}

pub fn selection_sort<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
    let mut a = arr.to_vec();
    for i in 0..a.len() {
        let mut min_idx = i;
        for j in i + 1..a.len() {
            if a[j] < a[min_idx] {
                min_idx = j;
            }
        }
        a.swap(i, min_idx);
    }
    a
}

pub fn insertion_sort<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
    let mut a = arr.to_vec();
    insertion_sort_in_place(&mut a, |x, y| x > y);
    a
}

/// Shifts each element left past every element `greater` than it
fn insertion_sort_in_place<T>(a: &mut [T], greater: impl Fn(&T, &T) -> bool) {
    for i in 1..a.len() {
        let mut j = i;
        while j > 0 && greater(&a[j - 1], &a[j]) {
            a.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Bottom-up merge sort; equal elements keep their relative order
pub fn merge_sort<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
    let n = arr.len();
    let mut src = arr.to_vec();
    let mut dst = Vec::with_capacity(n);
    let mut width = 1;
    while width < n {
        dst.clear();
        let mut start = 0;
        while start < n {
            let mid = (start + width).min(n);
            let end = (start + 2 * width).min(n);
            merge_into(&src[start..mid], &src[mid..end], &mut dst);
            start = end;
        }
        std::mem::swap(&mut src, &mut dst);
        width *= 2;
    }
    src
}

fn merge_into<T: Ord + Clone>(left: &[T], right: &[T], out: &mut Vec<T>) {
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            out.push(left[i].clone());
            i += 1;
        } else {
            out.push(right[j].clone());
            j += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
}

/// Quick sort with a middle-element pivot and three-way partitioning
pub fn quick_sort<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
    let mut a = arr.to_vec();
    let mut ranges = vec![(0, a.len())];
    while let Some((lo, hi)) = ranges.pop() {
        if hi - lo <= 1 {
            continue;
        }
        let pivot = a[lo + (hi - lo) / 2].clone();
        // a[lo..lt] < pivot, a[lt..i] == pivot, a[gt..hi] > pivot
        let (mut lt, mut i, mut gt) = (lo, lo, hi);
        while i < gt {
            if a[i] < pivot {
                a.swap(lt, i);
                lt += 1;
                i += 1;
            } else if a[i] > pivot {
                gt -= 1;
                a.swap(i, gt);
            } else {
                i += 1;
            }
        }
        ranges.push((lo, lt));
        ranges.push((gt, hi));
    }
    a
}

/// Counting sort for values in `0..=k`
pub fn counting_sort(arr: &[usize], k: usize) -> AlgorithmResult<Vec<usize>> {
    let mut count = vec![0usize; k + 1];
    for &x in arr {
        let slot = count.get_mut(x).ok_or_else(|| {
            AlgorithmError::invalid_argument(format!("value {} exceeds bound {}", x, k))
        })?;
        *slot += 1;
    }
    let mut sorted = Vec::with_capacity(arr.len());
    for (value, &freq) in count.iter().enumerate() {
        sorted.extend(std::iter::repeat(value).take(freq));
    }
    Ok(sorted)
}

/// Least-significant-digit radix sort in base 10
pub fn radix_sort(arr: &[u64]) -> Vec<u64> {
    let mut res = arr.to_vec();
    let max_val = res.iter().copied().max().unwrap_or(0);
    let mut exp: u64 = 1;
    while max_val / exp > 0 {
        res = counting_sort_by_digit(&res, exp);
        match exp.checked_mul(10) {
            Some(next) => exp = next,
            None => break,
        }
    }
    res
}

/// Stable distribution on the decimal digit selected by `exp`
fn counting_sort_by_digit(a: &[u64], exp: u64) -> Vec<u64> {
    let digit = |num: u64| ((num / exp) % 10) as usize;
    let mut count = [0usize; 10];
    for &num in a {
        count[digit(num)] += 1;
    }
    for i in 1..10 {
        count[i] += count[i - 1];
    }
    let mut output = vec![0; a.len()];
    for &num in a.iter().rev() {
        let d = digit(num);
        count[d] -= 1;
        output[count[d]] = num;
    }
    output
}

/// Bucket sort for values in `[0, 1)`; values at or above 1 land in the
/// last bucket
pub fn bucket_sort(arr: &[f64], bucket_count: usize) -> AlgorithmResult<Vec<f64>> {
    if bucket_count == 0 {
        return Err(AlgorithmError::invalid_parameter(
            "bucket_count",
            "must be at least 1",
        ));
    }
    let mut buckets: Vec<Vec<f64>> = vec![Vec::new(); bucket_count];
    for &x in arr {
        if x.is_nan() || x < 0.0 {
            return Err(AlgorithmError::invalid_argument(format!(
                "bucket sort expects non-negative numbers, got {}",
                x
            )));
        }
        let idx = ((x * bucket_count as f64) as usize).min(bucket_count - 1);
        buckets[idx].push(x);
    }

    let mut sorted = Vec::with_capacity(arr.len());
    for mut bucket in buckets {
        insertion_sort_in_place(&mut bucket, |a, b| a > b);
        sorted.extend(bucket);
    }
    Ok(sorted)
}

/// Bucket sort with a configurable bucket count
#[derive(Debug, Clone, PartialEq)]
pub struct BucketSorter {
    bucket_count: usize,
}

impl Default for BucketSorter {
    fn default() -> Self {
        Self { bucket_count: 10 }
    }
}

impl BucketSorter {
    pub fn new(bucket_count: usize) -> AlgorithmResult<Self> {
        if bucket_count == 0 {
            return Err(AlgorithmError::invalid_parameter(
                "bucket_count",
                "must be at least 1",
            ));
        }
        Ok(Self { bucket_count })
    }

    pub fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    pub fn sort(&self, arr: &[f64]) -> AlgorithmResult<Vec<f64>> {
        bucket_sort(arr, self.bucket_count)
    }
}

impl Parameterized for BucketSorter {
    fn parameters(&self) -> Vec<AlgorithmParameter> {
        vec![AlgorithmParameter::integer(
            "bucket_count",
            self.bucket_count,
            Some(1.0),
        )]
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> AlgorithmResult<()> {
        match name {
            "bucket_count" => {
                self.bucket_count = parse_parameter(name, value, 1usize)?;
                debug!("bucket sorter now uses {} buckets", self.bucket_count);
                Ok(())
            }
            _ => Err(AlgorithmError::invalid_parameter(
                name,
                "unknown parameter",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    type Sorter = fn(&[i32]) -> Vec<i32>;

    fn comparison_sorts() -> [(&'static str, Sorter); 5] {
        [
            ("bubble", bubble_sort::<i32>),
            ("selection", selection_sort::<i32>),
            ("insertion", insertion_sort::<i32>),
            ("merge", merge_sort::<i32>),
            ("quick", quick_sort::<i32>),
        ]
    }

    #[test]
    fn test_comparison_sorts_on_known_inputs() {
        let cases: [(&[i32], &[i32]); 5] = [
            (&[5, 1, 4, 2, 8], &[1, 2, 4, 5, 8]),
            (&[64, 25, 12, 22, 11], &[11, 12, 22, 25, 64]),
            (&[38, 27, 43, 3, 9, 82, 10], &[3, 9, 10, 27, 38, 43, 82]),
            (&[3, 6, 8, 10, 1, 2, 1], &[1, 1, 2, 3, 6, 8, 10]),
            (&[], &[]),
        ];
        for (name, sort) in comparison_sorts() {
            for (input, expected) in cases {
                assert_eq!(sort(input), expected, "{} sort on {:?}", name, input);
            }
        }
    }

    #[test]
    fn test_merge_sort_is_stable() {
        #[derive(Debug, Clone, PartialEq, Eq)]
        struct Keyed(u8, char);
        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Keyed {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let input = [Keyed(2, 'a'), Keyed(1, 'b'), Keyed(2, 'c'), Keyed(1, 'd')];
        let labels: Vec<char> = merge_sort(&input).iter().map(|k| k.1).collect();
        assert_eq!(labels, vec!['b', 'd', 'a', 'c']);
    }

    #[test]
    fn test_counting_sort() {
        assert_eq!(counting_sort(&[1, 4, 1, 2, 7, 5, 2], 7), Ok(vec![1, 1, 2, 2, 4, 5, 7]));
        assert!(counting_sort(&[3, 9], 5).is_err());
    }

    #[test]
    fn test_radix_sort() {
        assert_eq!(
            radix_sort(&[170, 45, 75, 90, 802, 24, 2, 66]),
            vec![2, 24, 45, 66, 75, 90, 170, 802]
        );
        assert_eq!(radix_sort(&[0, 0]), vec![0, 0]);
        assert_eq!(radix_sort(&[u64::MAX, 1]), vec![1, u64::MAX]);
    }

    #[test]
    fn test_bucket_sort() {
        let data = [0.897, 0.565, 0.656, 0.1234, 0.665, 0.3434];
        let sorted = bucket_sort(&data, 10).unwrap();
        let expected = [0.1234, 0.3434, 0.565, 0.656, 0.665, 0.897];
        for (got, want) in sorted.iter().zip(expected) {
            assert_relative_eq!(*got, want);
        }
        assert!(bucket_sort(&data, 0).is_err());
        assert!(bucket_sort(&[-0.5], 4).is_err());
        assert_eq!(bucket_sort(&[1.5, 0.2], 4).unwrap(), vec![0.2, 1.5]);
    }

    #[test]
    fn test_bucket_sorter_parameters() {
        let mut sorter = BucketSorter::default();
        assert_eq!(sorter.get_parameter("bucket_count"), Some("10".to_owned()));

        sorter.set_parameter("bucket_count", "3").unwrap();
        assert_eq!(sorter.bucket_count(), 3);
        assert!(sorter.set_parameter("bucket_count", "0").is_err());
        assert!(sorter.set_parameter("buckets", "3").is_err());
        assert_eq!(sorter.sort(&[0.9, 0.1]).unwrap(), vec![0.1, 0.9]);
    }

    proptest! {
        #[test]
        fn test_sorts_produce_ordered_permutation(values in prop::collection::vec(-500i32..500, 0..120)) {
            let mut expected = values.clone();
            expected.sort();
            for (name, sort) in comparison_sorts() {
                let once = sort(&values);
                prop_assert_eq!(&once, &expected, "{} sort", name);
                prop_assert_eq!(sort(&once), once, "{} sort is not idempotent", name);
            }
        }

        #[test]
        fn test_radix_matches_std(values in prop::collection::vec(0u64..1_000_000, 0..100)) {
            let mut expected = values.clone();
            expected.sort_unstable();
            prop_assert_eq!(radix_sort(&values), expected);
        }
    }
}
