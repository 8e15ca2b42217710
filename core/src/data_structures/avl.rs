//! AVL tree: a height-balanced binary search tree
//!
//! Insertion descends to the leaf position, then rebalances on the way back
//! up by recomputing heights and applying one of the four classical
//! rotation cases (left-left, right-right, left-right, right-left).
//!
//! # Invariants
//! - BST order: in-order traversal yields keys in non-decreasing order
//! - Balance factor `height(left) - height(right)` is in `{-1, 0, 1}`
//!
//! Recursion depth is bounded by the tree height, which is O(log n).
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::cmp::Ordering;

type Link<K> = Option<Box<AvlNode<K>>>;

#[derive(Debug, Clone)]
struct AvlNode<K> {
    key: K,
    height: usize,
    left: Link<K>,
    right: Link<K>,
}

impl<K> AvlNode<K> {
    fn leaf(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            height: 1,
            left: None,
            right: None,
        })
    }
}

#[inline]
fn height<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

#[inline]
fn update_height<K>(node: &mut AvlNode<K>) {
    node.height = 1 + height(&node.left).max(height(&node.right));
}

#[inline]
fn balance<K>(node: &AvlNode<K>) -> i64 {
    height(&node.left) as i64 - height(&node.right) as i64
}

fn rotate_right<K>(mut y: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    match y.left.take() {
        Some(mut x) => {
            y.left = x.right.take();
            update_height(&mut y);
            x.right = Some(y);
            update_height(&mut x);
            x
        }
        None => y,
    }
}

fn rotate_left<K>(mut x: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    match x.right.take() {
        Some(mut y) => {
            x.right = y.left.take();
            update_height(&mut x);
            y.left = Some(x);
            update_height(&mut y);
            y
        }
        None => x,
    }
}

fn insert_node<K: Ord>(link: Link<K>, key: K) -> Box<AvlNode<K>> {
    let mut node = match link {
        None => return AvlNode::leaf(key),
        Some(node) => node,
    };

    if key < node.key {
        node.left = Some(insert_node(node.left.take(), key));
    } else {
        node.right = Some(insert_node(node.right.take(), key));
    }

    update_height(&mut node);
    let factor = balance(&node);

    if factor > 1 {
        // Left-heavy: the new key landed in the left subtree
        let left_heavy_inside = node.left.as_ref().is_some_and(|l| balance(l) < 0);
        if left_heavy_inside {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }
    if factor < -1 {
        let right_heavy_inside = node.right.as_ref().is_some_and(|r| balance(r) > 0);
        if right_heavy_inside {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }
    node
}

/// Height-balanced ordered multiset
#[derive(Debug, Clone)]
pub struct AvlTree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<K: Ord> AvlTree<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree; an empty tree has height 0
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Inserts `key`; duplicates are kept in the right subtree
    pub fn insert(&mut self, key: K) {
        self.root = Some(insert_node(self.root.take(), key));
        self.len += 1;
    }

    pub fn contains(&self, key: &K) -> bool {
        let mut current = &self.root;
        while let Some(node) = current {
            match key.cmp(&node.key) {
                Ordering::Equal => return true,
                Ordering::Less => current = &node.left,
                Ordering::Greater => current = &node.right,
            }
        }
        false
    }

    /// Keys in ascending order
    pub fn inorder(&self) -> Vec<&K> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&AvlNode<K>> = Vec::new();
        let mut current = self.root.as_deref();
        while current.is_some() || !stack.is_empty() {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            if let Some(node) = stack.pop() {
                out.push(&node.key);
                current = node.right.as_deref();
            }
        }
        out
    }

    /// Balance factor of every node, in pre-order
    pub fn balance_factors(&self) -> Vec<i64> {
        let mut factors = Vec::with_capacity(self.len);
        let mut stack: Vec<&AvlNode<K>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            factors.push(balance(node));
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        factors
    }

    /// Whether every node satisfies the AVL balance condition
    pub fn is_balanced(&self) -> bool {
        self.balance_factors().iter().all(|f| (-1..=1).contains(f))
    }
}

impl<K: Ord> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        for key in iter {
            tree.insert(key);
        }
        tree
    }
}
