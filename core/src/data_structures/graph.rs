//! Adjacency-list graph shared by the traversal, shortest-path and
//! ordering algorithms
//!
//! Nodes are dense indices `0..n`. Undirected graphs store each edge as two
//! arcs so that every algorithm can walk `neighbors` uniformly.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{AlgorithmError, AlgorithmResult, NodeId};

/// Edge weight type used by path algorithms
pub type Weight = i64;

/// Outgoing arc stored in an adjacency list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub target: NodeId,
    pub weight: Weight,
}

/// Fully specified arc, as yielded by [`Graph::edges`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn new(source: NodeId, target: NodeId, weight: Weight) -> Self {
        Self { source, target, weight }
    }
}

impl From<(NodeId, NodeId, Weight)> for WeightedEdge {
    fn from((source, target, weight): (NodeId, NodeId, Weight)) -> Self {
        Self::new(source, target, weight)
    }
}

/// Adjacency-list graph over nodes `0..node_count`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
    directed: bool,
    edge_count: usize,
}

impl Graph {
    /// Creates a directed graph with `node_count` isolated nodes
    pub fn directed(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
            directed: true,
            edge_count: 0,
        }
    }

    /// Creates an undirected graph with `node_count` isolated nodes
    pub fn undirected(node_count: usize) -> Self {
        Self {
            directed: false,
            ..Self::directed(node_count)
        }
    }

    /// Builds a directed unit-weight graph from plain neighbour lists
    pub fn from_adjacency(lists: &[Vec<NodeId>]) -> AlgorithmResult<Self> {
        let mut graph = Self::directed(lists.len());
        for (source, targets) in lists.iter().enumerate() {
            for &target in targets {
                graph.add_edge(source, target, 1)?;
            }
        }
        Ok(graph)
    }

    /// Builds a directed graph from `(source, target, weight)` triples
    pub fn from_edges(node_count: usize, edges: &[(NodeId, NodeId, Weight)]) -> AlgorithmResult<Self> {
        let mut graph = Self::directed(node_count);
        for &(source, target, weight) in edges {
            graph.add_edge(source, target, weight)?;
        }
        Ok(graph)
    }

    /// Adds an edge; undirected graphs receive the mirrored arc as well
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, weight: Weight) -> AlgorithmResult<()> {
        self.validate_node(source)?;
        self.validate_node(target)?;
        self.adjacency[source].push(Edge { target, weight });
        if !self.directed && source != target {
            self.adjacency[target].push(Edge { target: source, weight });
        }
        self.edge_count += 1;
        Ok(())
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of logical edges (an undirected edge counts once)
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn validate_node(&self, node: NodeId) -> AlgorithmResult<()> {
        if node < self.adjacency.len() {
            Ok(())
        } else {
            Err(AlgorithmError::InvalidNode(node))
        }
    }

    /// Outgoing arcs of `node`, empty for unknown nodes
    pub fn neighbors(&self, node: NodeId) -> &[Edge] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates every stored arc in node order
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(source, list)| {
            list.iter()
                .map(move |edge| WeightedEdge::new(source, edge.target, edge.weight))
        })
    }

    /// Returns the graph with every arc reversed
    pub fn transpose(&self) -> Graph {
        let mut reversed = Graph {
            adjacency: vec![Vec::new(); self.node_count()],
            directed: self.directed,
            edge_count: self.edge_count,
        };
        for edge in self.edges() {
            reversed.adjacency[edge.target].push(Edge {
                target: edge.source,
                weight: edge.weight,
            });
        }
        reversed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directed_graph_construction() {
        let mut graph = Graph::directed(3);
        graph.add_edge(0, 1, 4).unwrap();
        graph.add_edge(1, 2, 2).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors(0), &[Edge { target: 1, weight: 4 }]);
        assert!(graph.neighbors(2).is_empty());
    }

    #[test]
    fn test_undirected_graph_mirrors_edges() {
        let mut graph = Graph::undirected(2);
        graph.add_edge(0, 1, 7).unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors(1), &[Edge { target: 0, weight: 7 }]);
        assert_eq!(graph.edges().count(), 2);
    }

    #[test]
    fn test_invalid_node_rejected() {
        let mut graph = Graph::directed(2);
        assert_eq!(graph.add_edge(0, 5, 1), Err(AlgorithmError::InvalidNode(5)));
        assert!(graph.neighbors(9).is_empty());
    }

    #[test]
    fn test_transpose() {
        let graph = Graph::from_adjacency(&[vec![1, 2], vec![2], vec![]]).unwrap();
        let reversed = graph.transpose();

        let targets: Vec<_> = reversed.neighbors(2).iter().map(|e| e.target).collect();
        assert_eq!(targets, vec![0, 1]);
        assert!(reversed.neighbors(0).is_empty());
    }
}
