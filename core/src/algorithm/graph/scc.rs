//! Strongly Connected Components Algorithm Implementation
//!
//! This module implements Kosaraju's two-pass algorithm for finding strongly
//! connected components in directed graphs.
//!
//! # Theoretical Foundation
//!
//! A strongly connected component (SCC) is a maximal set of vertices such
//! that there is a directed path from each vertex to every other vertex in
//! the component. Kosaraju's algorithm relies on the fact that a graph and
//! its transpose have the same SCCs:
//!
//! 1. **Finish Order Pass**: a DFS over the graph records vertices by finish
//!    time
//! 2. **Transpose Pass**: a DFS over the transposed graph, taking roots in
//!    decreasing finish time, collects exactly one SCC per tree
//!
//! # Algorithmic Complexity
//!
//! - **Time Complexity**: O(V + E), two traversals plus the transpose
//! - **Space Complexity**: O(V + E) for the transposed adjacency lists
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::debug;

use crate::algorithm::graph::traversal::dfs_from;
use crate::algorithm::traits::NodeId;
use crate::data_structures::graph::Graph;

/// Strongly connected components in discovery order
///
/// Components come out in topological order of the condensation (a
/// component precedes every component it can reach). Within a component,
/// vertices appear in the preorder of the transpose pass.
pub fn kosaraju(graph: &Graph) -> Vec<Vec<NodeId>> {
    let n = graph.node_count();
    let mut visited = vec![false; n];
    let mut finish_order = Vec::with_capacity(n);
    for root in 0..n {
        dfs_from(graph, root, &mut visited, |_| {}, |node| finish_order.push(node));
    }

    let transposed = graph.transpose();
    visited.fill(false);
    let mut components = Vec::new();
    for &root in finish_order.iter().rev() {
        if visited[root] {
            continue;
        }
        let mut component = Vec::new();
        dfs_from(&transposed, root, &mut visited, |node| component.push(node), |_| {});
        components.push(component);
    }

    debug!("kosaraju found {} components over {} nodes", components.len(), n);
    components
}

/// Component index of every vertex, numbered as returned by [`kosaraju`]
pub fn component_ids(graph: &Graph) -> Vec<usize> {
    let mut ids = vec![0; graph.node_count()];
    for (id, component) in kosaraju(graph).iter().enumerate() {
        for &node in component {
            ids[node] = id;
        }
    }
    ids
}
