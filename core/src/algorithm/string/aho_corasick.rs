//! Aho-Corasick multi-pattern matching
//!
//! Patterns are loaded into a trie whose nodes live in an arena. Failure
//! links, computed breadth-first, point each node at the longest proper
//! suffix of its path that is also a trie path; every node inherits the
//! outputs of its failure node so a single left-to-right scan reports all
//! patterns ending at each position.
//!
//! Construction is O(total pattern length · alphabet lookups) and search is
//! O(n + matches).
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::{BTreeMap, VecDeque};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{AlgorithmError, AlgorithmResult};

const ROOT: usize = 0;

#[derive(Debug, Clone, Default)]
struct AcNode {
    children: BTreeMap<char, usize>,
    fail: usize,
    /// Pattern indices ending here: own pattern first, then inherited ones
    outputs: Vec<usize>,
}

/// A pattern occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Index into the pattern list
    pub pattern: usize,
    /// Character index of the last matched character
    pub end: usize,
}

#[derive(Debug, Clone)]
pub struct AhoCorasick {
    nodes: Vec<AcNode>,
    patterns: Vec<String>,
}

impl AhoCorasick {
    /// Builds the automaton; empty patterns are rejected
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> AlgorithmResult<Self> {
        let mut nodes = vec![AcNode::default()];
        for (idx, pattern) in patterns.iter().enumerate() {
            let pattern = pattern.as_ref();
            if pattern.is_empty() {
                return Err(AlgorithmError::invalid_argument(format!(
                    "pattern {} is empty",
                    idx
                )));
            }
            let mut node = ROOT;
            for ch in pattern.chars() {
                node = match nodes[node].children.get(&ch) {
                    Some(&next) => next,
                    None => {
                        nodes.push(AcNode::default());
                        let next = nodes.len() - 1;
                        nodes[node].children.insert(ch, next);
                        next
                    }
                };
            }
            nodes[node].outputs.push(idx);
        }

        let mut queue: VecDeque<usize> = nodes[ROOT].children.values().copied().collect();
        while let Some(current) = queue.pop_front() {
            let edges: Vec<(char, usize)> = nodes[current]
                .children
                .iter()
                .map(|(&ch, &child)| (ch, child))
                .collect();
            for (ch, child) in edges {
                queue.push_back(child);
                let fail = Self::follow(&nodes, nodes[current].fail, current, ch);
                nodes[child].fail = fail;
                let inherited = nodes[fail].outputs.clone();
                nodes[child].outputs.extend(inherited);
            }
        }

        debug!(
            "aho-corasick built {} states for {} patterns",
            nodes.len(),
            patterns.len()
        );
        Ok(Self {
            nodes,
            patterns: patterns.iter().map(|p| p.as_ref().to_owned()).collect(),
        })
    }

    /// Failure target of the child of `parent` reached by `ch`
    fn follow(nodes: &[AcNode], mut state: usize, parent: usize, ch: char) -> usize {
        if parent == ROOT {
            return ROOT;
        }
        loop {
            if let Some(&next) = nodes[state].children.get(&ch) {
                return next;
            }
            if state == ROOT {
                return ROOT;
            }
            state = nodes[state].fail;
        }
    }

    /// Every pattern occurrence, ordered by end position
    pub fn search(&self, text: &str) -> Vec<Match> {
        let mut matches = Vec::new();
        let mut state = ROOT;
        for (end, ch) in text.chars().enumerate() {
            while state != ROOT && !self.nodes[state].children.contains_key(&ch) {
                state = self.nodes[state].fail;
            }
            state = self.nodes[state].children.get(&ch).copied().unwrap_or(ROOT);
            matches.extend(
                self.nodes[state]
                    .outputs
                    .iter()
                    .map(|&pattern| Match { pattern, end }),
            );
        }
        matches
    }

    pub fn pattern(&self, index: usize) -> Option<&str> {
        self.patterns.get(index).map(String::as_str)
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    pub fn state_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(ac: &AhoCorasick, matches: &[Match]) -> Vec<(String, usize)> {
        matches
            .iter()
            .map(|m| (ac.pattern(m.pattern).unwrap_or_default().to_owned(), m.end))
            .collect()
    }

    #[test]
    fn test_classic_patterns() {
        let ac = AhoCorasick::new(&["he", "she", "his", "hers"]).unwrap();
        let found = named(&ac, &ac.search("ahishers"));
        let expected: Vec<(String, usize)> = [("his", 3), ("she", 5), ("he", 5), ("hers", 7)]
            .iter()
            .map(|&(p, e)| (p.to_owned(), e))
            .collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_overlapping_and_nested_patterns() {
        let ac = AhoCorasick::new(&["a", "aa", "aaa"]).unwrap();
        let matches = ac.search("aaa");
        assert_eq!(matches.len(), 6);
        assert_eq!(matches.iter().filter(|m| m.end == 2).count(), 3);
    }

    #[test]
    fn test_agrees_with_single_pattern_scan() {
        let patterns = ["ab", "bab", "b"];
        let text = "abababbab";
        let ac = AhoCorasick::new(&patterns).unwrap();
        let found = ac.search(text);
        for (idx, pattern) in patterns.iter().enumerate() {
            let ends: Vec<usize> = found
                .iter()
                .filter(|m| m.pattern == idx)
                .map(|m| m.end)
                .collect();
            let expected: Vec<usize> = crate::algorithm::string::matching::kmp_search(text, pattern)
                .unwrap()
                .into_iter()
                .map(|start| start + pattern.len() - 1)
                .collect();
            assert_eq!(ends, expected, "pattern {}", pattern);
        }
    }

    #[test]
    fn test_no_match_and_empty_inputs() {
        let ac = AhoCorasick::new(&["xyz"]).unwrap();
        assert!(ac.search("abc").is_empty());
        assert!(ac.search("").is_empty());

        let none: [&str; 0] = [];
        assert!(AhoCorasick::new(&none).unwrap().search("abc").is_empty());
        assert!(AhoCorasick::new(&["ok", ""]).is_err());
    }
}
