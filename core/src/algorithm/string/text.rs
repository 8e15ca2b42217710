//! Everyday string routines
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::HashMap;

/// Reverses by Unicode scalar value
pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

/// Two-pointer palindrome check over characters
pub fn is_palindrome(s: &str) -> bool {
    let mut forward = s.chars();
    let mut backward = s.chars().rev();
    let half = s.chars().count() / 2;
    (0..half).all(|_| forward.next() == backward.next())
}

/// Length of the longest substring without a repeated character
pub fn length_of_longest_substring(s: &str) -> usize {
    let mut last_seen: HashMap<char, usize> = HashMap::new();
    let mut start = 0;
    let mut best = 0;
    for (i, ch) in s.chars().enumerate() {
        if let Some(&prev) = last_seen.get(&ch) {
            if prev >= start {
                start = prev + 1;
            }
        }
        last_seen.insert(ch, i);
        best = best.max(i + 1 - start);
    }
    best
}

/// Groups words sharing the same multiset of characters
///
/// Groups appear in order of their first member; members keep input order.
pub fn group_anagrams<S: AsRef<str>>(words: &[S]) -> Vec<Vec<String>> {
    let mut slot_of: HashMap<Vec<char>, usize> = HashMap::new();
    let mut groups: Vec<Vec<String>> = Vec::new();
    for word in words {
        let word = word.as_ref();
        let mut key: Vec<char> = word.chars().collect();
        key.sort_unstable();
        let slot = *slot_of.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(word.to_owned());
    }
    groups
}
