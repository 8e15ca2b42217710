//! Single-source and all-pairs shortest paths
//!
//! # Algorithmic Complexity
//! - Dijkstra: O((V + E) log V) with a binary heap, non-negative weights only
//! - Bellman-Ford: O(V·E), tolerates negative weights and reports negative
//!   cycles reachable from the source
//! - Floyd-Warshall: O(V³) over an adjacency matrix, rows relaxed in
//!   parallel with rayon
//! - A*: O(E log V) in the worst case, guided by a caller-supplied heuristic
//!
//! Unreachable nodes have distance `None`.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::{debug, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{AlgorithmError, AlgorithmResult, NodeId};
use crate::data_structures::graph::{Graph, Weight};

/// Shortest distances from `source`; rejects negative edge weights
pub fn dijkstra(graph: &Graph, source: NodeId) -> AlgorithmResult<Vec<Option<Weight>>> {
    graph.validate_node(source)?;
    if let Some(edge) = graph.edges().find(|edge| edge.weight < 0) {
        return Err(AlgorithmError::InvalidGraph(format!(
            "negative weight {} on edge {} -> {}",
            edge.weight, edge.source, edge.target
        )));
    }

    let mut dist: Vec<Option<Weight>> = vec![None; graph.node_count()];
    let mut heap = BinaryHeap::new();
    dist[source] = Some(0);
    heap.push(Reverse((0, source)));

    while let Some(Reverse((d, node))) = heap.pop() {
        if dist[node].is_some_and(|best| d > best) {
            continue;
        }
        for edge in graph.neighbors(node) {
            let candidate = d + edge.weight;
            if dist[edge.target].map_or(true, |current| candidate < current) {
                dist[edge.target] = Some(candidate);
                heap.push(Reverse((candidate, edge.target)));
            }
        }
    }
    Ok(dist)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BellmanFordResult {
    pub distances: Vec<Option<Weight>>,
    /// A negative cycle is reachable from the source; distances are then
    /// not final
    pub has_negative_cycle: bool,
}

/// Bellman-Ford over an edge list with nodes `0..node_count`
pub fn bellman_ford(
    node_count: usize,
    edges: &[(NodeId, NodeId, Weight)],
    source: NodeId,
) -> AlgorithmResult<BellmanFordResult> {
    for node in std::iter::once(source).chain(edges.iter().flat_map(|&(u, v, _)| [u, v])) {
        if node >= node_count {
            return Err(AlgorithmError::InvalidNode(node));
        }
    }

    let mut distances: Vec<Option<Weight>> = vec![None; node_count];
    distances[source] = Some(0);

    let relax = |distances: &mut [Option<Weight>]| {
        let mut changed = false;
        for &(u, v, w) in edges {
            if let Some(du) = distances[u] {
                let candidate = du + w;
                if distances[v].map_or(true, |dv| candidate < dv) {
                    distances[v] = Some(candidate);
                    changed = true;
                }
            }
        }
        changed
    };

    for round in 1..node_count {
        if !relax(&mut distances) {
            trace!("bellman-ford converged after {} rounds", round);
            break;
        }
    }

    let has_negative_cycle = edges.iter().any(|&(u, v, w)| match (distances[u], distances[v]) {
        (Some(du), Some(dv)) => du + w < dv,
        (Some(_), None) => true,
        _ => false,
    });
    if has_negative_cycle {
        debug!("bellman-ford detected a negative cycle reachable from {}", source);
    }

    Ok(BellmanFordResult {
        distances,
        has_negative_cycle,
    })
}

/// All-pairs shortest paths; `None` entries are missing edges
pub fn floyd_warshall(matrix: &[Vec<Option<Weight>>]) -> AlgorithmResult<Vec<Vec<Option<Weight>>>> {
    let n = matrix.len();
    if let Some(row) = matrix.iter().find(|row| row.len() != n) {
        return Err(AlgorithmError::invalid_argument(format!(
            "matrix is not square: row of length {} in a {}-row matrix",
            row.len(),
            n
        )));
    }

    // Row k is unchanged during pass k, so the other rows relax in parallel
    let mut dist = matrix.to_vec();
    for k in 0..n {
        let via = dist[k].clone();
        dist.par_iter_mut().for_each(|row| {
            let Some(ik) = row[k] else { return };
            for (ij, kj) in row.iter_mut().zip(&via) {
                if let Some(kj) = kj {
                    let through = ik + kj;
                    if ij.map_or(true, |d| through < d) {
                        *ij = Some(through);
                    }
                }
            }
        });
    }
    Ok(dist)
}

/// Path found by [`a_star`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub nodes: Vec<NodeId>,
    pub cost: Weight,
}

/// A* search guided by `heuristic`, an estimate of the remaining cost to
/// `goal`; returns `None` when the goal is unreachable
///
/// With an admissible heuristic the returned path is optimal. Edge weights
/// must be non-negative.
pub fn a_star<H>(graph: &Graph, start: NodeId, goal: NodeId, heuristic: H) -> AlgorithmResult<Option<Path>>
where
    H: Fn(NodeId) -> Weight,
{
    graph.validate_node(start)?;
    graph.validate_node(goal)?;

    let n = graph.node_count();
    let mut g_score: Vec<Option<Weight>> = vec![None; n];
    let mut parent: Vec<Option<NodeId>> = vec![None; n];
    let mut closed = vec![false; n];
    let mut open = BinaryHeap::new();
    g_score[start] = Some(0);
    open.push(Reverse((heuristic(start), start)));

    while let Some(Reverse((_, node))) = open.pop() {
        if closed[node] {
            continue;
        }
        if node == goal {
            let mut nodes = vec![goal];
            let mut current = goal;
            while let Some(prev) = parent[current] {
                nodes.push(prev);
                current = prev;
            }
            nodes.reverse();
            let cost = g_score[goal].unwrap_or(0);
            debug!("a* reached {} from {} at cost {}", goal, start, cost);
            return Ok(Some(Path { nodes, cost }));
        }
        closed[node] = true;
        trace!("a* expanding {}", node);

        let Some(g) = g_score[node] else { continue };
        for edge in graph.neighbors(node) {
            let tentative = g + edge.weight;
            if g_score[edge.target].map_or(true, |current| tentative < current) {
                g_score[edge.target] = Some(tentative);
                parent[edge.target] = Some(node);
                closed[edge.target] = false;
                open.push(Reverse((tentative + heuristic(edge.target), edge.target)));
            }
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted(n: usize, edges: &[(NodeId, NodeId, Weight)]) -> Graph {
        Graph::from_edges(n, edges).unwrap()
    }

    #[test]
    fn test_dijkstra() {
        let graph = weighted(4, &[(0, 1, 2), (0, 2, 5), (1, 2, 1), (1, 3, 2), (2, 3, 3)]);
        assert_eq!(dijkstra(&graph, 0), Ok(vec![Some(0), Some(2), Some(3), Some(4)]));
    }

    #[test]
    fn test_dijkstra_unreachable_and_negative() {
        let graph = weighted(3, &[(0, 1, 1)]);
        assert_eq!(dijkstra(&graph, 0), Ok(vec![Some(0), Some(1), None]));

        let negative = weighted(2, &[(0, 1, -1)]);
        assert!(matches!(dijkstra(&negative, 0), Err(AlgorithmError::InvalidGraph(_))));
        assert_eq!(dijkstra(&graph, 5), Err(AlgorithmError::InvalidNode(5)));
    }

    #[test]
    fn test_bellman_ford() {
        let result = bellman_ford(4, &[(0, 1, 4), (0, 2, 5), (1, 2, -3), (2, 3, 2)], 0).unwrap();
        assert_eq!(result.distances, vec![Some(0), Some(4), Some(1), Some(3)]);
        assert!(!result.has_negative_cycle);
    }

    #[test]
    fn test_bellman_ford_negative_cycle() {
        let result = bellman_ford(3, &[(0, 1, 1), (1, 2, -1), (2, 0, -1)], 0).unwrap();
        assert!(result.has_negative_cycle);
        assert!(bellman_ford(2, &[(0, 3, 1)], 0).is_err());
    }

    #[test]
    fn test_floyd_warshall() {
        let m = |v: Weight| Some(v);
        let matrix = vec![
            vec![m(0), m(3), None, m(7)],
            vec![m(8), m(0), m(2), None],
            vec![m(5), None, m(0), m(1)],
            vec![m(2), None, None, m(0)],
        ];
        let expected = vec![
            vec![m(0), m(3), m(5), m(6)],
            vec![m(5), m(0), m(2), m(3)],
            vec![m(3), m(6), m(0), m(1)],
            vec![m(2), m(5), m(7), m(0)],
        ];
        assert_eq!(floyd_warshall(&matrix), Ok(expected));
        assert!(floyd_warshall(&[vec![Some(0), None]]).is_err());
    }

    #[test]
    fn test_a_star_zero_heuristic() {
        let graph = weighted(4, &[(0, 1, 1), (0, 2, 4), (1, 2, 2), (1, 3, 5), (2, 3, 1)]);
        let path = a_star(&graph, 0, 3, |_| 0).unwrap().unwrap();
        assert_eq!(path.nodes, vec![0, 1, 2, 3]);
        assert_eq!(path.cost, 4);
    }

    #[test]
    fn test_a_star_grid_heuristic() {
        // 3x3 grid, node = row * 3 + col, unit moves
        let mut graph = Graph::undirected(9);
        for r in 0..3 {
            for c in 0..3 {
                let node = r * 3 + c;
                if c + 1 < 3 {
                    graph.add_edge(node, node + 1, 1).unwrap();
                }
                if r + 1 < 3 {
                    graph.add_edge(node, node + 3, 1).unwrap();
                }
            }
        }
        let manhattan = |node: NodeId| ((2 - node / 3) + (2 - node % 3)) as Weight;
        let path = a_star(&graph, 0, 8, manhattan).unwrap().unwrap();
        assert_eq!(path.cost, 4);
        assert_eq!(path.nodes.len(), 5);
        assert_eq!(path.nodes.first(), Some(&0));
        assert_eq!(path.nodes.last(), Some(&8));
    }

    #[test]
    fn test_a_star_unreachable() {
        let graph = weighted(3, &[(0, 1, 1)]);
        assert_eq!(a_star(&graph, 0, 2, |_| 0), Ok(None));
        assert_eq!(
            a_star(&graph, 0, 0, |_| 0),
            Ok(Some(Path { nodes: vec![0], cost: 0 }))
        );
    }
}
