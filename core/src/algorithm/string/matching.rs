//! Single-pattern string matching
//!
//! Every routine works on Unicode scalar values, so reported positions are
//! character indices rather than byte offsets.
//!
//! # Algorithmic Complexity
//! - KMP: O(n + m) using the longest-proper-prefix-suffix table
//! - Rabin-Karp: O(n + m) expected, O(n·m) with adversarial collisions
//! - Z-array: O(n)
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::debug;

use crate::algorithm::traits::{
    parse_parameter, AlgorithmError, AlgorithmParameter, AlgorithmResult, Parameterized,
};

/// Longest proper prefix of `pattern[..=i]` that is also its suffix, per `i`
pub fn compute_lps(pattern: &str) -> Vec<usize> {
    let pat: Vec<char> = pattern.chars().collect();
    lps_table(&pat)
}

fn lps_table(pat: &[char]) -> Vec<usize> {
    let mut lps = vec![0; pat.len()];
    let mut len = 0;
    let mut i = 1;
    while i < pat.len() {
        if pat[i] == pat[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len > 0 {
            len = lps[len - 1];
        } else {
            i += 1;
        }
    }
    lps
}

/// Start positions of every occurrence of `pattern`, overlaps included
pub fn kmp_search(text: &str, pattern: &str) -> AlgorithmResult<Vec<usize>> {
    let pat: Vec<char> = pattern.chars().collect();
    if pat.is_empty() {
        return Err(AlgorithmError::EmptyInput("pattern"));
    }
    let lps = lps_table(&pat);

    let mut found = Vec::new();
    let mut j = 0;
    for (i, ch) in text.chars().enumerate() {
        while j > 0 && ch != pat[j] {
            j = lps[j - 1];
        }
        if ch == pat[j] {
            j += 1;
            if j == pat.len() {
                found.push(i + 1 - j);
                j = lps[j - 1];
            }
        }
    }
    Ok(found)
}

/// Rolling-hash matcher; hash equality is always confirmed by comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RabinKarp {
    base: u64,
    modulus: u64,
}

impl Default for RabinKarp {
    fn default() -> Self {
        Self {
            base: 256,
            modulus: 101,
        }
    }
}

impl RabinKarp {
    pub fn new(base: u64, modulus: u64) -> AlgorithmResult<Self> {
        if base == 0 {
            return Err(AlgorithmError::invalid_parameter("base", "must be at least 1"));
        }
        if modulus < 2 {
            return Err(AlgorithmError::invalid_parameter("modulus", "must be at least 2"));
        }
        Ok(Self { base, modulus })
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    fn push(&self, hash: u64, ch: char) -> u64 {
        ((hash as u128 * self.base as u128 + ch as u128) % self.modulus as u128) as u64
    }

    fn remove(&self, hash: u64, ch: char, power: u64) -> u64 {
        let modulus = self.modulus as u128;
        let leading = ch as u128 * power as u128 % modulus;
        ((hash as u128 + modulus - leading) % modulus) as u64
    }

    /// Start positions of every occurrence of `pattern`
    pub fn search(&self, text: &str, pattern: &str) -> AlgorithmResult<Vec<usize>> {
        let txt: Vec<char> = text.chars().collect();
        let pat: Vec<char> = pattern.chars().collect();
        if pat.is_empty() {
            return Err(AlgorithmError::EmptyInput("pattern"));
        }
        let (n, m) = (txt.len(), pat.len());
        if m > n {
            return Ok(Vec::new());
        }

        // base^(m-1) mod modulus, weight of the leading character
        let power = (1..m).fold(1u64, |p, _| {
            (p as u128 * self.base as u128 % self.modulus as u128) as u64
        });
        let pattern_hash = pat.iter().fold(0, |h, &c| self.push(h, c));
        let mut window_hash = txt[..m].iter().fold(0, |h, &c| self.push(h, c));

        let mut found = Vec::new();
        let mut collisions = 0usize;
        for i in 0..=n - m {
            if window_hash == pattern_hash {
                if txt[i..i + m] == pat[..] {
                    found.push(i);
                } else {
                    collisions += 1;
                }
            }
            if i < n - m {
                window_hash = self.push(self.remove(window_hash, txt[i], power), txt[i + m]);
            }
        }
        if collisions > 0 {
            debug!("rabin-karp saw {} spurious hash hits", collisions);
        }
        Ok(found)
    }
}

impl Parameterized for RabinKarp {
    fn parameters(&self) -> Vec<AlgorithmParameter> {
        vec![
            AlgorithmParameter::integer("base", self.base, Some(1.0)),
            AlgorithmParameter::integer("modulus", self.modulus, Some(2.0)),
        ]
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> AlgorithmResult<()> {
        match name {
            "base" => {
                self.base = parse_parameter(name, value, 1u64)?;
                Ok(())
            }
            "modulus" => {
                self.modulus = parse_parameter(name, value, 2u64)?;
                Ok(())
            }
            _ => Err(AlgorithmError::invalid_parameter(name, "unknown parameter")),
        }
    }
}

/// Rabin-Karp with the default base 256 and modulus 101
pub fn rabin_karp_search(text: &str, pattern: &str) -> AlgorithmResult<Vec<usize>> {
    RabinKarp::default().search(text, pattern)
}

/// `z[i]` is the length of the longest common prefix of `s` and `s[i..]`;
/// `z[0]` is the full length
pub fn z_array(s: &str) -> Vec<usize> {
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();
    let mut z = vec![0; n];
    if n == 0 {
        return z;
    }
    z[0] = n;

    // [l, r) is the rightmost window known to match a prefix
    let (mut l, mut r) = (0, 0);
    for i in 1..n {
        if i < r {
            z[i] = (r - i).min(z[i - l]);
        }
        while i + z[i] < n && chars[z[i]] == chars[i + z[i]] {
            z[i] += 1;
        }
        if i + z[i] > r {
            l = i;
            r = i + z[i];
        }
    }
    z
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn naive_search(text: &str, pattern: &str) -> Vec<usize> {
        let txt: Vec<char> = text.chars().collect();
        let pat: Vec<char> = pattern.chars().collect();
        if pat.len() > txt.len() {
            return Vec::new();
        }
        (0..=txt.len() - pat.len())
            .filter(|&i| txt[i..i + pat.len()] == pat[..])
            .collect()
    }

    #[test]
    fn test_compute_lps() {
        assert_eq!(compute_lps("ABABCABAB"), vec![0, 0, 1, 2, 0, 1, 2, 3, 4]);
        assert_eq!(compute_lps("AAAA"), vec![0, 1, 2, 3]);
        assert!(compute_lps("").is_empty());
    }

    #[test]
    fn test_kmp_search() {
        assert_eq!(kmp_search("ABABDABACDABABCABAB", "ABABCABAB"), Ok(vec![10]));
        assert_eq!(kmp_search("aaaa", "aa"), Ok(vec![0, 1, 2]));
        assert_eq!(kmp_search("abc", "d"), Ok(vec![]));
        assert_eq!(kmp_search("abc", ""), Err(AlgorithmError::EmptyInput("pattern")));
    }

    #[test]
    fn test_rabin_karp() {
        assert_eq!(rabin_karp_search("hello hello", "lo h"), Ok(vec![3]));
        assert_eq!(rabin_karp_search("hello hello", "hello"), Ok(vec![0, 6]));
        assert_eq!(rabin_karp_search("ab", "abc"), Ok(vec![]));
        assert!(rabin_karp_search("ab", "").is_err());
    }

    #[test]
    fn test_rabin_karp_tiny_modulus_still_exact() {
        // modulus 2 makes nearly every window collide
        let matcher = RabinKarp::new(256, 2).unwrap();
        assert_eq!(matcher.search("abababab", "bab"), Ok(vec![1, 3, 5]));
    }

    #[test]
    fn test_rabin_karp_parameters() {
        let mut matcher = RabinKarp::default();
        assert_eq!(matcher.get_parameter("modulus"), Some("101".to_owned()));
        matcher.set_parameter("modulus", "1000003").unwrap();
        assert_eq!(matcher.modulus(), 1_000_003);
        assert!(matcher.set_parameter("modulus", "1").is_err());
        assert!(matcher.set_parameter("base", "0").is_err());
        assert!(matcher.set_parameter("window", "3").is_err());
        assert!(RabinKarp::new(256, 0).is_err());
    }

    #[test]
    fn test_positions_are_char_indices() {
        assert_eq!(kmp_search("çaçb", "b"), Ok(vec![3]));
        assert_eq!(rabin_karp_search("çaçb", "çb"), Ok(vec![2]));
    }

    #[test]
    fn test_rabin_karp_modulus_near_u64_max() {
        let rk = RabinKarp::new(256, u64::MAX - 58).unwrap();
        assert_eq!(rk.search("zzzzzzzzzzzzabcabc", "abc"), Ok(vec![12, 15]));
        assert_eq!(rk.search("ababab", "bab"), Ok(vec![1, 3]));
    }

    #[test]
    fn test_z_array() {
        assert_eq!(
            z_array("aabcaabxaaaz"),
            vec![12, 1, 0, 0, 3, 1, 0, 0, 2, 2, 1, 0]
        );
        assert_eq!(z_array("aaaa"), vec![4, 3, 2, 1]);
        assert!(z_array("").is_empty());
    }

    proptest! {
        #[test]
        fn prop_matchers_agree_with_naive(text in "[ab]{0,40}", pattern in "[ab]{1,4}") {
            let expected = naive_search(&text, &pattern);
            prop_assert_eq!(kmp_search(&text, &pattern).unwrap(), expected.clone());
            prop_assert_eq!(rabin_karp_search(&text, &pattern).unwrap(), expected);
        }
    }
}
