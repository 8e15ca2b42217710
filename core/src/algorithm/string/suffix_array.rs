//! Suffix array by prefix doubling and LCP array by Kasai's algorithm
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use crate::algorithm::traits::{AlgorithmError, AlgorithmResult};

/// Start indices of all suffixes of `s` in lexicographic order
///
/// Ranks of length-`2k` prefixes are derived from pairs of length-`k`
/// ranks, so the sort runs O(log n) rounds of O(n log n).
pub fn build_suffix_array(s: &str) -> Vec<usize> {
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();
    let mut sa: Vec<usize> = (0..n).collect();
    let mut rank: Vec<usize> = chars.iter().map(|&c| c as usize).collect();
    let mut next_rank = vec![0; n];

    let mut k = 1;
    while n > 1 {
        // A suffix shorter than k + 1 has no second half and sorts first
        let key = |i: usize| (rank[i], rank.get(i + k).copied());
        sa.sort_by_key(|&i| key(i));

        next_rank[sa[0]] = 0;
        for w in 1..n {
            let bump = usize::from(key(sa[w - 1]) != key(sa[w]));
            next_rank[sa[w]] = next_rank[sa[w - 1]] + bump;
        }
        std::mem::swap(&mut rank, &mut next_rank);

        if rank[sa[n - 1]] == n - 1 || k >= n {
            break;
        }
        k *= 2;
    }
    sa
}

/// `lcp[i]` is the longest common prefix of suffixes `sa[i - 1]` and
/// `sa[i]`; `lcp[0]` is 0
pub fn build_lcp_array(s: &str, sa: &[usize]) -> AlgorithmResult<Vec<usize>> {
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();
    if sa.len() != n {
        return Err(AlgorithmError::invalid_argument(format!(
            "suffix array has {} entries for a string of {} characters",
            sa.len(),
            n
        )));
    }

    let mut rank = vec![None; n];
    for (position, &start) in sa.iter().enumerate() {
        match rank.get_mut(start) {
            Some(slot) if slot.is_none() => *slot = Some(position),
            _ => {
                return Err(AlgorithmError::invalid_argument(format!(
                    "suffix array entry {} is out of range or repeated",
                    start
                )))
            }
        }
    }

    let mut lcp = vec![0; n];
    let mut h = 0usize;
    for i in 0..n {
        match rank[i] {
            Some(r) if r > 0 => {
                let j = sa[r - 1];
                while i + h < n && j + h < n && chars[i + h] == chars[j + h] {
                    h += 1;
                }
                lcp[r] = h;
                h = h.saturating_sub(1);
            }
            _ => h = 0,
        }
    }
    Ok(lcp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_banana() {
        let sa = build_suffix_array("banana");
        assert_eq!(sa, vec![5, 3, 1, 0, 4, 2]);
        assert_eq!(build_lcp_array("banana", &sa), Ok(vec![0, 1, 3, 0, 0, 2]));
    }

    #[test]
    fn test_repeated_character() {
        let sa = build_suffix_array("aaaa");
        assert_eq!(sa, vec![3, 2, 1, 0]);
        assert_eq!(build_lcp_array("aaaa", &sa), Ok(vec![0, 1, 2, 3]));
    }

    #[test]
    fn test_trivial_inputs() {
        assert!(build_suffix_array("").is_empty());
        assert_eq!(build_suffix_array("x"), vec![0]);
        assert_eq!(build_lcp_array("", &[]), Ok(vec![]));
    }

    #[test]
    fn test_lcp_rejects_bad_suffix_array() {
        assert!(build_lcp_array("abc", &[0, 1]).is_err());
        assert!(build_lcp_array("abc", &[0, 0, 1]).is_err());
        assert!(build_lcp_array("abc", &[0, 1, 7]).is_err());
    }

    proptest! {
        #[test]
        fn prop_matches_naive_sort(s in "[abc]{0,30}") {
            let mut expected: Vec<usize> = (0..s.len()).collect();
            expected.sort_by_key(|&i| &s[i..]);
            prop_assert_eq!(build_suffix_array(&s), expected);
        }
    }
}
