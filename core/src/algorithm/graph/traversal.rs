//! Depth-first and breadth-first traversal
//!
//! Both walks visit neighbours in adjacency-list order. The depth-first walk
//! keeps `(node, next neighbour index)` frames on an explicit stack, which
//! reproduces the visiting order of the textbook recursive version without
//! its recursion depth.

use std::collections::VecDeque;

use crate::algorithm::traits::{AlgorithmResult, NodeId};
use crate::data_structures::graph::Graph;

/// Nodes reachable from `start` in depth-first preorder
pub fn dfs(graph: &Graph, start: NodeId) -> AlgorithmResult<Vec<NodeId>> {
    graph.validate_node(start)?;
    let mut visited = vec![false; graph.node_count()];
    let mut order = Vec::new();
    dfs_from(graph, start, &mut visited, |node| order.push(node), |_| {});
    Ok(order)
}

/// Nodes reachable from `start` in breadth-first order
pub fn bfs(graph: &Graph, start: NodeId) -> AlgorithmResult<Vec<NodeId>> {
    graph.validate_node(start)?;
    let mut visited = vec![false; graph.node_count()];
    let mut queue = VecDeque::from([start]);
    let mut order = Vec::new();
    visited[start] = true;

    while let Some(node) = queue.pop_front() {
        order.push(node);
        for edge in graph.neighbors(node) {
            if !visited[edge.target] {
                visited[edge.target] = true;
                queue.push_back(edge.target);
            }
        }
    }
    Ok(order)
}

/// Iterative depth-first search shared by the graph algorithms
///
/// `on_enter` fires when a node is first discovered and `on_exit` once all
/// of its descendants are finished, exactly as in a recursive DFS.
pub(crate) fn dfs_from(
    graph: &Graph,
    start: NodeId,
    visited: &mut [bool],
    mut on_enter: impl FnMut(NodeId),
    mut on_exit: impl FnMut(NodeId),
) {
    if visited[start] {
        return;
    }
    visited[start] = true;
    on_enter(start);
    let mut stack = vec![(start, 0usize)];

    while let Some(frame) = stack.last_mut() {
        let (node, next) = *frame;
        match graph.neighbors(node).get(next) {
            Some(edge) => {
                frame.1 += 1;
                let target = edge.target;
                if !visited[target] {
                    visited[target] = true;
                    on_enter(target);
                    stack.push((target, 0));
                }
            }
            None => {
                stack.pop();
                on_exit(node);
            }
        }
    }
}
