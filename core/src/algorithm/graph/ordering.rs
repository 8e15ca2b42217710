//! Topological ordering and cycle detection
//!
//! Directed cycle detection uses the three-colour DFS: meeting a node that
//! is still on the current DFS path (grey) means a back edge, hence a cycle.

use log::debug;

use crate::algorithm::traits::{AlgorithmError, AlgorithmResult, NodeId};
use crate::data_structures::graph::Graph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    White,
    Grey,
    Black,
}

/// DFS from every node in index order; returns the finish order and the
/// first back edge encountered, if any
fn directed_dfs(graph: &Graph) -> (Vec<NodeId>, Option<(NodeId, NodeId)>) {
    let n = graph.node_count();
    let mut mark = vec![Mark::White; n];
    let mut finished = Vec::with_capacity(n);
    let mut back_edge = None;

    for root in 0..n {
        if mark[root] != Mark::White {
            continue;
        }
        mark[root] = Mark::Grey;
        let mut stack = vec![(root, 0usize)];
        while let Some(frame) = stack.last_mut() {
            let (node, next) = *frame;
            match graph.neighbors(node).get(next) {
                Some(edge) => {
                    frame.1 += 1;
                    match mark[edge.target] {
                        Mark::White => {
                            mark[edge.target] = Mark::Grey;
                            stack.push((edge.target, 0));
                        }
                        Mark::Grey => {
                            back_edge.get_or_insert((node, edge.target));
                        }
                        Mark::Black => {}
                    }
                }
                None => {
                    mark[node] = Mark::Black;
                    finished.push(node);
                    stack.pop();
                }
            }
        }
    }
    (finished, back_edge)
}

/// Topological order of a directed acyclic graph
///
/// Roots are explored in index order and the result is the reverse DFS
/// finish order. A cycle makes the order undefined and is reported as
/// [`AlgorithmError::InvalidGraph`].
pub fn topological_sort(graph: &Graph) -> AlgorithmResult<Vec<NodeId>> {
    if !graph.is_directed() {
        return Err(AlgorithmError::InvalidGraph(
            "topological order needs a directed graph".to_owned(),
        ));
    }
    let (mut order, back_edge) = directed_dfs(graph);
    if let Some((from, to)) = back_edge {
        debug!("topological sort found back edge {} -> {}", from, to);
        return Err(AlgorithmError::InvalidGraph(format!(
            "graph has a cycle through edge {} -> {}",
            from, to
        )));
    }
    order.reverse();
    Ok(order)
}

/// Whether a directed graph contains a cycle, self-loops included
pub fn has_cycle_directed(graph: &Graph) -> bool {
    directed_dfs(graph).1.is_some()
}

/// Whether an undirected graph contains a cycle
///
/// Each edge is stored as two arcs; the arc leading back to the DFS parent
/// is skipped once, so parallel edges still count as a cycle.
pub fn has_cycle_undirected(graph: &Graph) -> bool {
    let n = graph.node_count();
    let mut visited = vec![false; n];

    for root in 0..n {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        // (node, parent, next neighbour index, parent arc already skipped)
        let mut stack: Vec<(NodeId, Option<NodeId>, usize, bool)> = vec![(root, None, 0, false)];
        while let Some(frame) = stack.last_mut() {
            let (node, parent, next, skipped) = *frame;
            let Some(edge) = graph.neighbors(node).get(next) else {
                stack.pop();
                continue;
            };
            frame.2 += 1;
            if Some(edge.target) == parent && !skipped {
                frame.3 = true;
                continue;
            }
            if visited[edge.target] {
                return true;
            }
            visited[edge.target] = true;
            stack.push((edge.target, Some(node), 0, false));
        }
    }
    false
}
