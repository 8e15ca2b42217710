//! Union-Find (disjoint set) with path compression and union by rank
//!
//! This implementation achieves nearly constant amortized time complexity
//! O(α(n)) where α is the inverse Ackermann function.

use std::cmp::Ordering;

use crate::algorithm::traits::{AlgorithmError, AlgorithmResult, NodeId};

#[derive(Debug, Clone)]
pub struct UnionFind {
    /// Parent pointers for each element
    parent: Vec<NodeId>,
    /// Rank (upper bound on tree height) of each root
    rank: Vec<usize>,
    /// Number of disjoint sets
    num_components: usize,
}

impl UnionFind {
    /// Create a new Union-Find structure with `n` singleton sets
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            num_components: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Find the representative of `x`, compressing the path behind it
    pub fn find(&mut self, x: NodeId) -> AlgorithmResult<NodeId> {
        if x >= self.parent.len() {
            return Err(AlgorithmError::InvalidNode(x));
        }

        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        Ok(root)
    }

    /// Merge the sets containing `x` and `y`
    ///
    /// Returns `false` when both were already in the same set.
    pub fn union(&mut self, x: NodeId, y: NodeId) -> AlgorithmResult<bool> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;

        if root_x == root_y {
            return Ok(false);
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            Ordering::Less => self.parent[root_x] = root_y,
            Ordering::Greater => self.parent[root_y] = root_x,
            Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }

        self.num_components -= 1;
        Ok(true)
    }

    pub fn connected(&mut self, x: NodeId, y: NodeId) -> AlgorithmResult<bool> {
        Ok(self.find(x)? == self.find(y)?)
    }

    /// Number of disjoint sets
    pub fn component_count(&self) -> usize {
        self.num_components
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_union_and_connected() {
        let mut uf = UnionFind::new(5);
        assert!(!uf.connected(0, 1).unwrap());

        assert!(uf.union(0, 1).unwrap());
        assert!(uf.connected(0, 1).unwrap());

        uf.union(1, 2).unwrap();
        assert!(uf.connected(2, 0).unwrap());

        uf.union(3, 4).unwrap();
        assert!(uf.connected(3, 4).unwrap());
        assert!(!uf.connected(0, 4).unwrap());

        uf.union(2, 4).unwrap();
        assert!(uf.connected(0, 4).unwrap());
        assert_eq!(uf.component_count(), 1);
    }

    #[test]
    fn test_redundant_union() {
        let mut uf = UnionFind::new(3);
        assert!(uf.union(0, 1).unwrap());
        assert!(!uf.union(1, 0).unwrap());
        assert_eq!(uf.component_count(), 2);
    }

    #[test]
    fn test_out_of_range() {
        let mut uf = UnionFind::new(2);
        assert_eq!(uf.find(2), Err(AlgorithmError::InvalidNode(2)));
        assert!(uf.union(0, 9).is_err());
    }

    proptest! {
        #[test]
        fn test_connectivity_survives_further_unions(
            unions in prop::collection::vec((0usize..20, 0usize..20), 0..60)
        ) {
            let mut uf = UnionFind::new(20);
            uf.union(0, 1).unwrap();
            for (a, b) in unions {
                uf.union(a, b).unwrap();
                prop_assert!(uf.connected(0, 1).unwrap());
            }
        }
    }
}
