//! Red-black tree stored in an index arena
//!
//! Nodes live in a `Vec` and refer to each other by index, which lets the
//! tree keep parent links without shared ownership. Index 0 is the black
//! NIL sentinel used for every absent child and for the root's parent.
//!
//! # Coloring Rules
//! 1. The root is black
//! 2. A red node has no red child
//! 3. Every root-to-NIL path crosses the same number of black nodes
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{AlgorithmError, AlgorithmResult};

const NIL: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

#[derive(Debug, Clone)]
struct RbNode<K> {
    /// `None` only for the sentinel
    key: Option<K>,
    color: Color,
    left: usize,
    right: usize,
    parent: usize,
}

#[derive(Debug, Clone)]
pub struct RedBlackTree<K> {
    nodes: Vec<RbNode<K>>,
    root: usize,
}

impl<K: Ord> Default for RedBlackTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> RedBlackTree<K> {
    pub fn new() -> Self {
        let sentinel = RbNode {
            key: None,
            color: Color::Black,
            left: NIL,
            right: NIL,
            parent: NIL,
        };
        Self {
            nodes: vec![sentinel],
            root: NIL,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.root == NIL
    }

    /// Color of the root, `None` for an empty tree
    pub fn root_color(&self) -> Option<Color> {
        (self.root != NIL).then(|| self.nodes[self.root].color)
    }

    fn key(&self, node: usize) -> Option<&K> {
        self.nodes[node].key.as_ref()
    }

    fn is_red(&self, node: usize) -> bool {
        self.nodes[node].color == Color::Red
    }

    /// Inserts `key` as a red leaf and repairs the coloring
    pub fn insert(&mut self, key: K) {
        let mut parent = NIL;
        let mut current = self.root;
        let mut goes_left = false;
        while current != NIL {
            parent = current;
            goes_left = self.key(current).is_some_and(|existing| key < *existing);
            current = if goes_left {
                self.nodes[current].left
            } else {
                self.nodes[current].right
            };
        }

        let node = self.nodes.len();
        self.nodes.push(RbNode {
            key: Some(key),
            color: Color::Red,
            left: NIL,
            right: NIL,
            parent,
        });

        if parent == NIL {
            self.root = node;
        } else if goes_left {
            self.nodes[parent].left = node;
        } else {
            self.nodes[parent].right = node;
        }

        self.insert_fixup(node);
    }

    fn insert_fixup(&mut self, mut z: usize) {
        while self.is_red(self.nodes[z].parent) {
            let parent = self.nodes[z].parent;
            let grandparent = self.nodes[parent].parent;

            if parent == self.nodes[grandparent].left {
                let uncle = self.nodes[grandparent].right;
                if self.is_red(uncle) {
                    self.nodes[parent].color = Color::Black;
                    self.nodes[uncle].color = Color::Black;
                    self.nodes[grandparent].color = Color::Red;
                    z = grandparent;
                } else {
                    if z == self.nodes[parent].right {
                        z = parent;
                        self.rotate_left(z);
                    }
                    let parent = self.nodes[z].parent;
                    let grandparent = self.nodes[parent].parent;
                    self.nodes[parent].color = Color::Black;
                    self.nodes[grandparent].color = Color::Red;
                    self.rotate_right(grandparent);
                }
            } else {
                let uncle = self.nodes[grandparent].left;
                if self.is_red(uncle) {
                    self.nodes[parent].color = Color::Black;
                    self.nodes[uncle].color = Color::Black;
                    self.nodes[grandparent].color = Color::Red;
                    z = grandparent;
                } else {
                    if z == self.nodes[parent].left {
                        z = parent;
                        self.rotate_right(z);
                    }
                    let parent = self.nodes[z].parent;
                    let grandparent = self.nodes[parent].parent;
                    self.nodes[parent].color = Color::Black;
                    self.nodes[grandparent].color = Color::Red;
                    self.rotate_left(grandparent);
                }
            }
        }
        let root = self.root;
        self.nodes[root].color = Color::Black;
        // The sentinel may have been recolored through the loop; keep it black
        self.nodes[NIL].color = Color::Black;
    }

    fn rotate_left(&mut self, x: usize) {
        let y = self.nodes[x].right;
        let y_left = self.nodes[y].left;
        self.nodes[x].right = y_left;
        if y_left != NIL {
            self.nodes[y_left].parent = x;
        }
        let x_parent = self.nodes[x].parent;
        self.nodes[y].parent = x_parent;
        if x_parent == NIL {
            self.root = y;
        } else if x == self.nodes[x_parent].left {
            self.nodes[x_parent].left = y;
        } else {
            self.nodes[x_parent].right = y;
        }
        self.nodes[y].left = x;
        self.nodes[x].parent = y;
    }

    fn rotate_right(&mut self, x: usize) {
        let y = self.nodes[x].left;
        let y_right = self.nodes[y].right;
        self.nodes[x].left = y_right;
        if y_right != NIL {
            self.nodes[y_right].parent = x;
        }
        let x_parent = self.nodes[x].parent;
        self.nodes[y].parent = x_parent;
        if x_parent == NIL {
            self.root = y;
        } else if x == self.nodes[x_parent].right {
            self.nodes[x_parent].right = y;
        } else {
            self.nodes[x_parent].left = y;
        }
        self.nodes[y].right = x;
        self.nodes[x].parent = y;
    }

    pub fn contains(&self, key: &K) -> bool {
        let mut current = self.root;
        while let Some(existing) = self.key(current) {
            current = match key.cmp(existing) {
                Ordering::Equal => return true,
                Ordering::Less => self.nodes[current].left,
                Ordering::Greater => self.nodes[current].right,
            };
        }
        false
    }

    /// `(key, color)` pairs in ascending key order
    pub fn inorder(&self) -> Vec<(&K, Color)> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        let mut current = self.root;
        while current != NIL || !stack.is_empty() {
            while current != NIL {
                stack.push(current);
                current = self.nodes[current].left;
            }
            if let Some(node) = stack.pop() {
                if let Some(key) = self.key(node) {
                    out.push((key, self.nodes[node].color));
                }
                current = self.nodes[node].right;
            }
        }
        out
    }

    /// Checks the coloring rules and parent links, returning the black height
    pub fn validate(&self) -> AlgorithmResult<usize> {
        if self.root == NIL {
            return Ok(0);
        }
        if self.is_red(self.root) {
            return Err(AlgorithmError::InvalidGraph("root is red".to_owned()));
        }

        let mut black_height = None;
        let mut stack = vec![(self.root, 1usize)];
        while let Some((node, blacks)) = stack.pop() {
            for child in [self.nodes[node].left, self.nodes[node].right] {
                if child == NIL {
                    match black_height {
                        None => black_height = Some(blacks),
                        Some(expected) if expected != blacks => {
                            return Err(AlgorithmError::InvalidGraph(format!(
                                "black height mismatch: {} vs {}",
                                expected, blacks
                            )));
                        }
                        Some(_) => {}
                    }
                    continue;
                }
                if self.nodes[child].parent != node {
                    return Err(AlgorithmError::InvalidGraph(format!(
                        "node {} has a stale parent link",
                        child
                    )));
                }
                if self.is_red(node) && self.is_red(child) {
                    return Err(AlgorithmError::InvalidGraph(format!(
                        "red node {} has a red child {}",
                        node, child
                    )));
                }
                let child_blacks = blacks + usize::from(!self.is_red(child));
                stack.push((child, child_blacks));
            }
        }
        Ok(black_height.unwrap_or(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_insert_sequence_coloring() {
        let mut tree = RedBlackTree::new();
        for key in [10, 20, 30, 15, 25, 5, 1] {
            tree.insert(key);
            assert!(tree.validate().is_ok());
        }

        let colored: Vec<(i32, Color)> = tree.inorder().into_iter().map(|(k, c)| (*k, c)).collect();
        assert_eq!(
            colored,
            vec![
                (1, Color::Red),
                (5, Color::Black),
                (10, Color::Red),
                (15, Color::Black),
                (20, Color::Black),
                (25, Color::Red),
                (30, Color::Black),
            ]
        );
        assert_eq!(tree.root_color(), Some(Color::Black));
    }

    #[test]
    fn test_contains_and_len() {
        let mut tree = RedBlackTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.validate(), Ok(0));

        for key in ["pear", "apple", "fig"] {
            tree.insert(key);
        }
        assert_eq!(tree.len(), 3);
        assert!(tree.contains(&"fig"));
        assert!(!tree.contains(&"kiwi"));
    }

    #[test]
    fn test_ascending_inserts_rotate() {
        let mut tree = RedBlackTree::new();
        for key in 0..64 {
            tree.insert(key);
        }
        let black_height = tree.validate().unwrap();
        assert!(black_height >= 3);
        let keys: Vec<i32> = tree.inorder().into_iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, (0..64).collect::<Vec<_>>());
    }

    proptest! {
        #[test]
        fn test_rules_hold_for_random_inserts(keys in prop::collection::vec(0u16..300, 0..200)) {
            let mut tree = RedBlackTree::new();
            for key in keys {
                tree.insert(key);
                prop_assert!(tree.validate().is_ok());
            }
        }
    }
}
