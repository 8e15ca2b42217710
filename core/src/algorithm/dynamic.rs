//! Dynamic programming
//!
//! Bottom-up tabulations filled in dependency order. String routines work
//! on characters, so lengths and distances count Unicode scalar values.
//!
//! # Algorithmic Complexity
//! - `lcs`, `edit_distance`: O(m·n) time and space
//! - `min_cut_palindrome`: O(n²)
//! - `knapsack_01`: O(n·W) time, O(W) space
//! - `min_coins`: O(amount·coins)
//! - `assignment_min_cost`: O(2ⁿ·n)
//! - `word_break`: O(n·L) where L is the longest dictionary word
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::cmp::Ordering;

use log::debug;

use crate::algorithm::traits::{AlgorithmError, AlgorithmResult};
use crate::data_structures::trie::Trie;

/// Largest problem size accepted by [`assignment_min_cost`]
pub const MAX_ASSIGNMENT_SIZE: usize = 20;

/// n-th Fibonacci number; fails once the value no longer fits in `u128`
pub fn fib(n: u32) -> AlgorithmResult<u128> {
    if n == 0 {
        return Ok(0);
    }
    let (mut prev, mut curr) = (0u128, 1u128);
    for _ in 1..n {
        let next = prev.checked_add(curr).ok_or_else(|| {
            AlgorithmError::ResourceExhausted(format!("fib({}) overflows u128", n))
        })?;
        prev = curr;
        curr = next;
    }
    Ok(curr)
}

fn lcs_table(a: &[char], b: &[char]) -> Vec<Vec<usize>> {
    let mut dp = vec![vec![0; b.len() + 1]; a.len() + 1];
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }
    dp
}

/// Length of the longest common subsequence
pub fn lcs(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    lcs_table(&a, &b)[a.len()][b.len()]
}

/// One longest common subsequence, recovered by walking the table back
pub fn lcs_sequence(a: &str, b: &str) -> String {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let dp = lcs_table(&a, &b);

    let mut out = Vec::with_capacity(dp[a.len()][b.len()]);
    let (mut i, mut j) = (a.len(), b.len());
    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            out.push(a[i - 1]);
            i -= 1;
            j -= 1;
        } else if dp[i - 1][j] >= dp[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    out.iter().rev().collect()
}

/// Levenshtein distance with unit insert, delete and replace costs
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    // Rolling row: prev[j] = distance(a[..i-1], b[..j])
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let replace = prev[j - 1] + usize::from(a[i - 1] != b[j - 1]);
            curr[j] = replace.min(prev[j] + 1).min(curr[j - 1] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Fewest cuts splitting `s` into palindromes; 0 for the empty string
pub fn min_cut_palindrome(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();
    if n == 0 {
        return 0;
    }

    let mut is_pal = vec![vec![false; n]; n];
    for i in (0..n).rev() {
        for j in i..n {
            is_pal[i][j] = chars[i] == chars[j] && (j - i < 2 || is_pal[i + 1][j - 1]);
        }
    }

    // cuts[end] = fewest cuts for chars[..end], end >= 1
    let mut cuts = vec![0usize; n + 1];
    for end in 1..=n {
        cuts[end] = (0..end)
            .filter(|&start| is_pal[start][end - 1])
            .map(|start| if start == 0 { 0 } else { cuts[start] + 1 })
            .min()
            .unwrap_or(end - 1);
    }
    cuts[n]
}

fn check_lengths(values: usize, weights: usize) -> AlgorithmResult<()> {
    if values != weights {
        return Err(AlgorithmError::invalid_argument(format!(
            "{} values but {} weights",
            values, weights
        )));
    }
    Ok(())
}

/// Best total value within `capacity`, each item used at most once
pub fn knapsack_01(values: &[u64], weights: &[usize], capacity: usize) -> AlgorithmResult<u64> {
    check_lengths(values.len(), weights.len())?;
    let mut best = vec![0u64; capacity + 1];
    for (&value, &weight) in values.iter().zip(weights) {
        // Descending so each item is counted once
        for cap in (weight..=capacity).rev() {
            best[cap] = best[cap].max(best[cap - weight] + value);
        }
    }
    Ok(best[capacity])
}

/// Best total value when items may be split, greedy by value density
pub fn knapsack_fractional(values: &[f64], weights: &[f64], capacity: f64) -> AlgorithmResult<f64> {
    check_lengths(values.len(), weights.len())?;
    if let Some(w) = weights.iter().find(|w| !(**w > 0.0)) {
        return Err(AlgorithmError::invalid_argument(format!(
            "item weight {} is not positive",
            w
        )));
    }
    if capacity.is_nan() || capacity < 0.0 {
        return Err(AlgorithmError::invalid_parameter("capacity", "must be non-negative"));
    }

    let mut items: Vec<(f64, f64)> = values.iter().copied().zip(weights.iter().copied()).collect();
    items.sort_by(|a, b| (b.0 / b.1).partial_cmp(&(a.0 / a.1)).unwrap_or(Ordering::Equal));

    let mut remaining = capacity;
    let mut total = 0.0;
    for (value, weight) in items {
        if remaining <= 0.0 {
            break;
        }
        let take = weight.min(remaining);
        total += take * (value / weight);
        remaining -= take;
    }
    Ok(total)
}

/// Fewest coins summing to `amount`, or `None` when it cannot be made
pub fn min_coins(coins: &[usize], amount: usize) -> Option<usize> {
    let mut best: Vec<Option<usize>> = vec![None; amount + 1];
    best[0] = Some(0);
    for total in 1..=amount {
        best[total] = coins
            .iter()
            .filter(|&&c| c > 0 && c <= total)
            .filter_map(|&c| best[total - c])
            .min()
            .map(|count| count + 1);
    }
    best[amount]
}

/// Cheapest top-left to bottom-right path moving only right or down
pub fn min_path_sum(grid: &[Vec<i64>]) -> AlgorithmResult<i64> {
    let cols = grid.first().map_or(0, Vec::len);
    if cols == 0 {
        return Err(AlgorithmError::EmptyInput("grid"));
    }
    if grid.iter().any(|row| row.len() != cols) {
        return Err(AlgorithmError::invalid_argument("grid rows differ in length"));
    }

    let mut row_best = vec![0i64; cols];
    for (i, row) in grid.iter().enumerate() {
        for (j, &cell) in row.iter().enumerate() {
            row_best[j] = cell
                + match (i, j) {
                    (0, 0) => 0,
                    (0, _) => row_best[j - 1],
                    (_, 0) => row_best[j],
                    _ => row_best[j].min(row_best[j - 1]),
                };
        }
    }
    Ok(row_best[cols - 1])
}

/// Minimum cost of giving each of n people a distinct task, with
/// `cost[person][task]`
///
/// State is the set of tasks taken; the next person is its popcount.
pub fn assignment_min_cost(cost: &[Vec<i64>]) -> AlgorithmResult<i64> {
    let n = cost.len();
    if n > MAX_ASSIGNMENT_SIZE {
        return Err(AlgorithmError::ResourceExhausted(format!(
            "{} people exceeds the bitmask limit of {}",
            n, MAX_ASSIGNMENT_SIZE
        )));
    }
    if cost.iter().any(|row| row.len() != n) {
        return Err(AlgorithmError::invalid_argument("cost matrix is not square"));
    }

    let full = (1usize << n) - 1;
    let mut best: Vec<Option<i64>> = vec![None; full + 1];
    best[0] = Some(0);
    for mask in 0..full {
        let Some(so_far) = best[mask] else { continue };
        let person = mask.count_ones() as usize;
        for task in (0..n).filter(|&t| mask & (1 << t) == 0) {
            let next = mask | (1 << task);
            let candidate = so_far + cost[person][task];
            if best[next].map_or(true, |b| candidate < b) {
                best[next] = Some(candidate);
            }
        }
    }
    debug!("assignment over {} people explored {} masks", n, full + 1);
    Ok(best[full].unwrap_or(0))
}

/// Whether `s` splits into a sequence of dictionary words
///
/// From every reachable offset the dictionary trie is walked forward, so
/// each offset costs at most the longest word length.
pub fn word_break<S: AsRef<str>>(s: &str, dictionary: &[S]) -> bool {
    let trie: Trie = dictionary.iter().map(|word| word.as_ref()).collect();
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();

    let mut reachable = vec![false; n + 1];
    reachable[0] = true;
    for start in 0..n {
        if !reachable[start] {
            continue;
        }
        let mut cursor = trie.root();
        for (end, &ch) in chars.iter().enumerate().skip(start) {
            match trie.step(cursor, ch) {
                Some(next) => cursor = next,
                None => break,
            }
            if trie.is_terminal(cursor) {
                reachable[end + 1] = true;
            }
        }
    }
    reachable[n]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_fib() {
        assert_eq!(fib(0), Ok(0));
        assert_eq!(fib(1), Ok(1));
        assert_eq!(fib(10), Ok(55));
        assert_eq!(fib(90), Ok(2_880_067_194_370_816_120));
        assert!(fib(186).is_ok());
        assert!(matches!(fib(187), Err(AlgorithmError::ResourceExhausted(_))));
    }

    #[test]
    fn test_lcs() {
        assert_eq!(lcs("AGGTAB", "GXTXAYB"), 4);
        assert_eq!(lcs_sequence("AGGTAB", "GXTXAYB"), "GTAB");
        assert_eq!(lcs("", "abc"), 0);
        assert_eq!(lcs_sequence("abc", "def"), "");
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("flaw", "flaw"), 0);
        assert_eq!(edit_distance("intention", "execution"), 5);
    }

    #[test]
    fn test_min_cut_palindrome() {
        assert_eq!(min_cut_palindrome("aab"), 1);
        assert_eq!(min_cut_palindrome("a"), 0);
        assert_eq!(min_cut_palindrome("ab"), 1);
        assert_eq!(min_cut_palindrome(""), 0);
        assert_eq!(min_cut_palindrome("racecar"), 0);
        assert_eq!(min_cut_palindrome("abcd"), 3);
    }

    #[test]
    fn test_knapsack() {
        assert_eq!(knapsack_01(&[60, 100, 120], &[10, 20, 30], 50), Ok(220));
        assert_eq!(knapsack_01(&[10], &[5], 4), Ok(0));
        assert!(knapsack_01(&[1, 2], &[1], 5).is_err());

        let fractional = knapsack_fractional(&[60.0, 100.0, 120.0], &[10.0, 20.0, 30.0], 50.0).unwrap();
        assert_relative_eq!(fractional, 240.0);
        assert!(knapsack_fractional(&[1.0], &[0.0], 5.0).is_err());
        assert!(knapsack_fractional(&[1.0], &[1.0], -1.0).is_err());
    }

    #[test]
    fn test_min_coins() {
        assert_eq!(min_coins(&[1, 3, 4], 6), Some(2));
        assert_eq!(min_coins(&[2], 3), None);
        assert_eq!(min_coins(&[5], 0), Some(0));
        assert_eq!(min_coins(&[], 1), None);
    }

    #[test]
    fn test_min_path_sum() {
        assert_eq!(min_path_sum(&[vec![1, 3, 1], vec![1, 5, 1], vec![4, 2, 1]]), Ok(7));
        assert_eq!(min_path_sum(&[vec![1, 2, 3]]), Ok(6));
        assert!(min_path_sum(&[]).is_err());
        assert!(min_path_sum(&[vec![1, 2], vec![3]]).is_err());
    }

    #[test]
    fn test_assignment() {
        let cost = vec![
            vec![9, 2, 7, 8],
            vec![6, 4, 3, 7],
            vec![5, 8, 1, 8],
            vec![7, 6, 9, 4],
        ];
        assert_eq!(assignment_min_cost(&cost), Ok(13));
        assert_eq!(assignment_min_cost(&[]), Ok(0));
        assert!(assignment_min_cost(&[vec![1, 2]]).is_err());
        let huge = vec![vec![0; 21]; 21];
        assert!(matches!(
            assignment_min_cost(&huge),
            Err(AlgorithmError::ResourceExhausted(_))
        ));
    }

    #[test]
    fn test_word_break() {
        assert!(word_break("leetcode", &["leet", "code"]));
        assert!(word_break("applepenapple", &["apple", "pen"]));
        assert!(!word_break("catsandog", &["cats", "dog", "sand", "and", "cat"]));
        assert!(word_break("", &["a"]));
    }

    proptest! {
        #[test]
        fn prop_edit_distance_bounds(a in "[ab]{0,12}", b in "[ab]{0,12}") {
            let d = edit_distance(&a, &b);
            prop_assert!(d <= a.len().max(b.len()));
            prop_assert!(d >= a.len().abs_diff(b.len()));
            prop_assert_eq!(d, edit_distance(&b, &a));
        }

        #[test]
        fn prop_lcs_sequence_is_common_subsequence(a in "[abc]{0,12}", b in "[abc]{0,12}") {
            let seq = lcs_sequence(&a, &b);
            prop_assert_eq!(seq.len(), lcs(&a, &b));
            let is_subsequence = |s: &str| {
                let mut it = s.chars();
                seq.chars().all(|c| it.any(|x| x == c))
            };
            prop_assert!(is_subsequence(&a));
            prop_assert!(is_subsequence(&b));
        }
    }
}
