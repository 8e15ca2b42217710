//! Arena binary tree with iterative traversals and classic tree queries
//!
//! Trees are assembled bottom-up: [`BinaryTree::add_node`] takes the indices
//! of already added children, and the most recently added node becomes the
//! root. A node may be adopted by at most one parent, so the arena always
//! describes a forest and traversals never revisit a node.

use std::collections::{HashSet, VecDeque};

use crate::algorithm::traits::{AlgorithmError, AlgorithmResult};
use crate::data_structures::linked_list::DoublyLinkedList;

#[derive(Debug, Clone)]
struct TreeNode<T> {
    value: T,
    left: Option<usize>,
    right: Option<usize>,
    parent: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct BinaryTree<T> {
    nodes: Vec<TreeNode<T>>,
    root: Option<usize>,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }
}

impl<T> BinaryTree<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root(&self) -> Option<usize> {
        self.root
    }

    pub fn value(&self, node: usize) -> Option<&T> {
        self.nodes.get(node).map(|n| &n.value)
    }

    /// Adds a node over existing parentless children and makes it the root
    pub fn add_node(
        &mut self,
        value: T,
        left: Option<usize>,
        right: Option<usize>,
    ) -> AlgorithmResult<usize> {
        if left.is_some() && left == right {
            return Err(AlgorithmError::invalid_argument(
                "a node cannot be both children",
            ));
        }
        for child in left.into_iter().chain(right) {
            match self.nodes.get(child) {
                None => {
                    return Err(AlgorithmError::invalid_argument(format!(
                        "child {} does not exist",
                        child
                    )))
                }
                Some(node) if node.parent.is_some() => {
                    return Err(AlgorithmError::invalid_argument(format!(
                        "child {} already has a parent",
                        child
                    )))
                }
                Some(_) => {}
            }
        }

        let index = self.nodes.len();
        self.nodes.push(TreeNode {
            value,
            left,
            right,
            parent: None,
        });
        for child in left.into_iter().chain(right) {
            self.nodes[child].parent = Some(index);
        }
        self.root = Some(index);
        Ok(index)
    }

    pub fn preorder(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<usize> = self.root.into_iter().collect();
        while let Some(index) = stack.pop() {
            let node = &self.nodes[index];
            out.push(&node.value);
            stack.extend(node.right);
            stack.extend(node.left);
        }
        out
    }

    pub fn inorder(&self) -> Vec<&T> {
        self.inorder_indices()
            .into_iter()
            .map(|index| &self.nodes[index].value)
            .collect()
    }

    fn inorder_indices(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = Vec::new();
        let mut current = self.root;
        while current.is_some() || !stack.is_empty() {
            while let Some(index) = current {
                stack.push(index);
                current = self.nodes[index].left;
            }
            if let Some(index) = stack.pop() {
                out.push(index);
                current = self.nodes[index].right;
            }
        }
        out
    }

    pub fn postorder(&self) -> Vec<&T> {
        self.postorder_indices()
            .into_iter()
            .map(|index| &self.nodes[index].value)
            .collect()
    }

    /// Reverse of a root-right-left walk
    fn postorder_indices(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<usize> = self.root.into_iter().collect();
        while let Some(index) = stack.pop() {
            out.push(index);
            stack.extend(self.nodes[index].left);
            stack.extend(self.nodes[index].right);
        }
        out.reverse();
        out
    }

    pub fn level_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut queue: VecDeque<usize> = self.root.into_iter().collect();
        while let Some(index) = queue.pop_front() {
            let node = &self.nodes[index];
            out.push(&node.value);
            queue.extend(node.left);
            queue.extend(node.right);
        }
        out
    }

    /// Height in nodes; an empty tree has height 0
    pub fn height(&self) -> usize {
        self.subtree_heights().1
    }

    /// Whether the subtree heights of every node differ by at most one
    pub fn is_balanced(&self) -> bool {
        self.subtree_heights().0
    }

    fn subtree_heights(&self) -> (bool, usize) {
        let mut heights = vec![0usize; self.nodes.len()];
        let child_height = |heights: &[usize], child: Option<usize>| child.map_or(0, |c| heights[c]);
        for index in self.postorder_indices() {
            let node = &self.nodes[index];
            let left = child_height(&heights, node.left);
            let right = child_height(&heights, node.right);
            if left.abs_diff(right) > 1 {
                return (false, 0);
            }
            heights[index] = 1 + left.max(right);
        }
        (true, self.root.map_or(0, |root| heights[root]))
    }

    /// Deepest node having both `p` and `q` as descendants (a node is its
    /// own descendant); `None` if either is outside the root's tree
    pub fn lowest_common_ancestor(&self, p: usize, q: usize) -> AlgorithmResult<Option<usize>> {
        for node in [p, q] {
            if node >= self.nodes.len() {
                return Err(AlgorithmError::InvalidNode(node));
            }
        }
        let Some(root) = self.root else {
            return Ok(None);
        };

        let ancestors_of = |start: usize| {
            let mut chain = vec![start];
            let mut current = start;
            while let Some(parent) = self.nodes[current].parent {
                chain.push(parent);
                current = parent;
            }
            chain
        };

        let p_chain = ancestors_of(p);
        if p_chain.last() != Some(&root) {
            return Ok(None);
        }
        let p_set: HashSet<usize> = p_chain.into_iter().collect();
        let q_chain = ancestors_of(q);
        if q_chain.last() != Some(&root) {
            return Ok(None);
        }
        Ok(q_chain.into_iter().find(|node| p_set.contains(node)))
    }
}

impl<T: Clone> BinaryTree<T> {
    /// In-order values linked into a doubly linked list
    pub fn to_doubly_linked_list(&self) -> DoublyLinkedList<T> {
        self.inorder().into_iter().cloned().collect()
    }

    /// Height-balanced tree whose in-order traversal reproduces `list`
    ///
    /// The left half receives `n / 2` elements, then the root, then the rest.
    pub fn from_sorted_list(list: &DoublyLinkedList<T>) -> Self {
        let values: Vec<T> = list.iter().cloned().collect();
        let mut tree = Self::new();
        let root = tree.build_balanced(&values);
        tree.root = root;
        tree
    }

    fn build_balanced(&mut self, values: &[T]) -> Option<usize> {
        if values.is_empty() {
            return None;
        }
        let mid = values.len() / 2;
        let left = self.build_balanced(&values[..mid]);
        let right = self.build_balanced(&values[mid + 1..]);
        let index = self.nodes.len();
        self.nodes.push(TreeNode {
            value: values[mid].clone(),
            left,
            right,
            parent: None,
        });
        for child in left.into_iter().chain(right) {
            self.nodes[child].parent = Some(index);
        }
        Some(index)
    }
}
