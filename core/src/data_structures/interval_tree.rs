//! Interval tree keyed on interval start, augmented with the subtree max end
//!
//! Intervals are closed: `[low, high]`. The tree is an unbalanced BST stored
//! in an arena, so insertion and lookup walk it iteratively.

use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{AlgorithmError, AlgorithmResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub low: i64,
    pub high: i64,
}

impl Interval {
    pub fn new(low: i64, high: i64) -> AlgorithmResult<Self> {
        if low > high {
            return Err(AlgorithmError::invalid_argument(format!(
                "interval start {} exceeds end {}",
                low, high
            )));
        }
        Ok(Self { low, high })
    }

    #[inline]
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.low <= other.high && other.low <= self.high
    }
}

#[derive(Debug, Clone)]
struct IntervalNode {
    interval: Interval,
    max_high: i64,
    left: Option<usize>,
    right: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct IntervalTree {
    nodes: Vec<IntervalNode>,
    root: Option<usize>,
}

impl IntervalTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn insert(&mut self, interval: Interval) {
        let index = self.nodes.len();
        self.nodes.push(IntervalNode {
            interval,
            max_high: interval.high,
            left: None,
            right: None,
        });

        let mut current = match self.root {
            None => {
                self.root = Some(index);
                return;
            }
            Some(root) => root,
        };

        loop {
            let node = &mut self.nodes[current];
            node.max_high = node.max_high.max(interval.high);
            let slot = if interval.low < node.interval.low {
                &mut node.left
            } else {
                &mut node.right
            };
            match *slot {
                Some(next) => current = next,
                None => {
                    *slot = Some(index);
                    return;
                }
            }
        }
    }

    /// Some stored interval overlapping `query`, if any
    ///
    /// Descends left whenever the left subtree's max end reaches
    /// `query.low`; otherwise no interval on the left can overlap.
    pub fn search_overlap(&self, query: &Interval) -> Option<Interval> {
        let mut current = self.root;
        while let Some(index) = current {
            let node = &self.nodes[index];
            if node.interval.overlaps(query) {
                return Some(node.interval);
            }
            let left_reaches = node
                .left
                .is_some_and(|left| self.nodes[left].max_high >= query.low);
            current = if left_reaches { node.left } else { node.right };
        }
        None
    }

    /// Every stored interval overlapping `query`, ordered by start
    pub fn all_overlaps(&self, query: &Interval) -> Vec<Interval> {
        let mut found = Vec::new();
        let mut stack: Vec<usize> = self.root.into_iter().collect();
        while let Some(index) = stack.pop() {
            let node = &self.nodes[index];
            if node.max_high < query.low {
                continue;
            }
            if node.interval.overlaps(query) {
                found.push(node.interval);
            }
            stack.extend(node.left);
            // Right subtree starts at or after this node's start
            if node.interval.low <= query.high {
                stack.extend(node.right);
            }
        }
        found.sort_by_key(|interval| (interval.low, interval.high));
        found
    }
}

impl FromIterator<Interval> for IntervalTree {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        let mut tree = Self::new();
        for interval in iter {
            tree.insert(interval);
        }
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> IntervalTree {
        [(15, 20), (10, 30), (17, 19), (5, 20), (12, 15), (30, 40)]
            .into_iter()
            .map(|(low, high)| Interval::new(low, high).unwrap())
            .collect()
    }

    #[test]
    fn test_search_overlap() {
        let tree = sample_tree();
        assert_eq!(tree.len(), 6);

        let hit = tree.search_overlap(&Interval::new(14, 16).unwrap());
        assert_eq!(hit, Some(Interval { low: 15, high: 20 }));

        let hit = tree.search_overlap(&Interval::new(21, 23).unwrap());
        assert_eq!(hit, Some(Interval { low: 10, high: 30 }));

        assert_eq!(tree.search_overlap(&Interval::new(41, 50).unwrap()), None);
    }

    #[test]
    fn test_all_overlaps() {
        let tree = sample_tree();
        let hits = tree.all_overlaps(&Interval::new(18, 18).unwrap());
        let pairs: Vec<(i64, i64)> = hits.iter().map(|i| (i.low, i.high)).collect();
        assert_eq!(pairs, vec![(5, 20), (10, 30), (15, 20), (17, 19)]);

        assert!(IntervalTree::new()
            .all_overlaps(&Interval::new(0, 1).unwrap())
            .is_empty());
    }

    #[test]
    fn test_reversed_interval_rejected() {
        assert!(Interval::new(5, 1).is_err());
        assert!(Interval::new(3, 3).is_ok());
    }
}
