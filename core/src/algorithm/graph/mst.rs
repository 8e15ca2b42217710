//! Minimum Spanning Tree Algorithm Implementation
//!
//! This module implements Kruskal's algorithm over an edge list, backed by
//! the union-find structure, and the dense O(V²) variant of Prim's algorithm
//! over an adjacency matrix.
//!
//! # Theoretical Foundation
//!
//! - **Cut Property**: for any cut (S, V-S), the minimum-weight crossing edge
//!   is safe for the MST (Prim's algorithm foundation)
//! - **Cycle Property**: for any cycle, the maximum-weight edge is not in any
//!   MST (Kruskal's algorithm foundation)
//!
//! # Algorithmic Complexity
//!
//! - **Kruskal's Algorithm**: O(E log E) for the sort plus near-constant
//!   union-find operations
//! - **Prim's Algorithm**: O(V²), suited to dense matrices
//!
//! On a disconnected graph both produce a spanning forest.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::debug;

use crate::algorithm::traits::{AlgorithmError, AlgorithmResult, NodeId};
use crate::data_structures::graph::{Weight, WeightedEdge};
use crate::data_structures::union_find::UnionFind;

/// Kruskal's algorithm over undirected edges on nodes `0..node_count`
///
/// Edges are considered in ascending weight with ties kept in input order,
/// so the returned edges appear in the order they were accepted.
pub fn kruskal(node_count: usize, edges: &[(NodeId, NodeId, Weight)]) -> AlgorithmResult<Vec<WeightedEdge>> {
    let mut sorted: Vec<WeightedEdge> = edges.iter().copied().map(WeightedEdge::from).collect();
    sorted.sort_by_key(|edge| edge.weight);

    let mut uf = UnionFind::new(node_count);
    let mut tree = Vec::with_capacity(node_count.saturating_sub(1));
    for edge in sorted {
        if uf.union(edge.source, edge.target)? {
            tree.push(edge);
        }
    }

    debug!(
        "kruskal accepted {} edges, {} components remain",
        tree.len(),
        uf.component_count()
    );
    Ok(tree)
}

/// Prim's algorithm over a symmetric adjacency matrix where `None` marks a
/// missing edge; returns each node's parent in the tree rooted at node 0
pub fn prim(matrix: &[Vec<Option<Weight>>]) -> AlgorithmResult<Vec<Option<NodeId>>> {
    let n = matrix.len();
    if matrix.iter().any(|row| row.len() != n) {
        return Err(AlgorithmError::invalid_argument("adjacency matrix is not square"));
    }

    let mut key: Vec<Option<Weight>> = vec![None; n];
    let mut parent: Vec<Option<NodeId>> = vec![None; n];
    let mut in_tree = vec![false; n];
    if n > 0 {
        key[0] = Some(0);
    }

    for _ in 0..n {
        // Lightest frontier node; a node with no key starts a new tree
        let next = (0..n).filter(|&v| !in_tree[v]).min_by_key(|&v| match key[v] {
            Some(k) => (0, k),
            None => (1, 0),
        });
        let Some(u) = next else { break };
        in_tree[u] = true;

        for v in 0..n {
            if in_tree[v] {
                continue;
            }
            if let Some(w) = matrix[u][v] {
                if key[v].map_or(true, |k| w < k) {
                    key[v] = Some(w);
                    parent[v] = Some(u);
                }
            }
        }
    }
    Ok(parent)
}

/// Sum of the weights of a set of tree edges
pub fn total_weight(edges: &[WeightedEdge]) -> Weight {
    edges.iter().map(|edge| edge.weight).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kruskal() {
        let edges = [(0, 1, 4), (0, 2, 3), (1, 2, 1), (1, 3, 2), (2, 3, 4), (3, 4, 2)];
        let tree = kruskal(5, &edges).unwrap();
        let triples: Vec<_> = tree.iter().map(|e| (e.source, e.target, e.weight)).collect();
        assert_eq!(triples, vec![(1, 2, 1), (1, 3, 2), (3, 4, 2), (0, 2, 3)]);
        assert_eq!(total_weight(&tree), 8);
    }

    #[test]
    fn test_kruskal_forest_and_invalid_node() {
        let tree = kruskal(4, &[(0, 1, 1), (2, 3, 1)]).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(kruskal(2, &[(0, 5, 1)]), Err(AlgorithmError::InvalidNode(5)));
    }

    #[test]
    fn test_prim() {
        let w = |v: Weight| Some(v);
        let matrix = vec![
            vec![w(0), w(2), None, w(6), None],
            vec![w(2), w(0), w(3), w(8), w(5)],
            vec![None, w(3), w(0), None, w(7)],
            vec![w(6), w(8), None, w(0), w(9)],
            vec![None, w(5), w(7), w(9), w(0)],
        ];
        assert_eq!(
            prim(&matrix),
            Ok(vec![None, Some(0), Some(1), Some(0), Some(1)])
        );
    }

    #[test]
    fn test_prim_edge_cases() {
        assert_eq!(prim(&[]), Ok(vec![]));
        assert!(prim(&[vec![None, None]]).is_err());
        // two isolated nodes: the second starts its own tree
        assert_eq!(prim(&[vec![None, None], vec![None, None]]), Ok(vec![None, None]));
    }
}
