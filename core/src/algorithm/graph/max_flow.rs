//! Maximum Flow Algorithm Implementation
//!
//! This module implements the two augmenting-path maximum flow algorithms
//! over a shared residual network representation:
//!
//! - **Edmonds-Karp**: breadth-first search finds a shortest augmenting path
//!   in the residual graph; its bottleneck is pushed until no path remains.
//!   O(V·E²).
//! - **Dinic**: a BFS level graph restricts the search to edges advancing
//!   exactly one level, and a blocking flow is pushed through it with a
//!   per-node edge iterator so exhausted edges are never rescanned within a
//!   phase. O(V²·E).
//!
//! # Residual Representation
//!
//! Every edge is stored next to a zero-capacity reverse twin. Pushing `f`
//! units adds `f` to the edge's flow and subtracts `f` from the twin's, so
//! residual capacity is always `capacity - flow` in either direction.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::VecDeque;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{
    AlgorithmError, AlgorithmParameter, AlgorithmResult, NodeId, ParameterType, Parameterized,
};

/// Flow capacity type
pub type Capacity = i64;

/// Maximum flow algorithm variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaxFlowAlgorithm {
    /// BFS shortest augmenting paths
    EdmondsKarp,
    /// Level graph plus blocking flow
    Dinic,
}

impl MaxFlowAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            MaxFlowAlgorithm::EdmondsKarp => "edmonds_karp",
            MaxFlowAlgorithm::Dinic => "dinic",
        }
    }
}

/// Flow edge representation with residual capacity tracking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub from: NodeId,
    pub to: NodeId,
    /// Original capacity; zero for reverse twins
    pub capacity: Capacity,
    /// Current flow; negative on a reverse twin carrying flow back
    pub flow: Capacity,
    /// Index of the reverse twin in the network's edge arena
    pub reverse: usize,
}

impl FlowEdge {
    #[inline]
    pub fn residual_capacity(&self) -> Capacity {
        self.capacity - self.flow
    }
}

/// Flow network representation with residual graph
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowNetwork {
    /// Edge indices leaving each node, twins included
    adjacency: Vec<Vec<usize>>,
    edges: Vec<FlowEdge>,
}

impl FlowNetwork {
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
            edges: Vec::new(),
        }
    }

    /// Network with one edge per positive entry of a capacity matrix
    pub fn from_matrix(capacity: &[Vec<Capacity>]) -> AlgorithmResult<Self> {
        let n = capacity.len();
        let mut network = Self::new(n);
        for (u, row) in capacity.iter().enumerate() {
            if row.len() != n {
                return Err(AlgorithmError::invalid_argument(format!(
                    "capacity matrix row {} has length {}, expected {}",
                    u,
                    row.len(),
                    n
                )));
            }
            for (v, &cap) in row.iter().enumerate() {
                if cap != 0 {
                    network.add_edge(u, v, cap)?;
                }
            }
        }
        Ok(network)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Adds `from -> to` with its reverse twin; returns the forward index
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, capacity: Capacity) -> AlgorithmResult<usize> {
        self.validate_node(from)?;
        self.validate_node(to)?;
        if capacity < 0 {
            return Err(AlgorithmError::invalid_parameter(
                "capacity",
                format!("edge {} -> {} has negative capacity {}", from, to, capacity),
            ));
        }

        let forward = self.edges.len();
        let backward = forward + 1;
        self.edges.push(FlowEdge {
            from,
            to,
            capacity,
            flow: 0,
            reverse: backward,
        });
        self.edges.push(FlowEdge {
            from: to,
            to: from,
            capacity: 0,
            flow: 0,
            reverse: forward,
        });
        self.adjacency[from].push(forward);
        self.adjacency[to].push(backward);
        Ok(forward)
    }

    pub fn validate_node(&self, node: NodeId) -> AlgorithmResult<()> {
        if node < self.adjacency.len() {
            Ok(())
        } else {
            Err(AlgorithmError::InvalidNode(node))
        }
    }

    pub fn edge(&self, index: usize) -> Option<&FlowEdge> {
        self.edges.get(index)
    }

    /// All edges, reverse twins at odd indices
    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    pub fn residual_capacity(&self, index: usize) -> Option<Capacity> {
        self.edges.get(index).map(FlowEdge::residual_capacity)
    }

    /// Clears all flow, keeping capacities
    pub fn reset_flow(&mut self) {
        for edge in &mut self.edges {
            edge.flow = 0;
        }
    }

    /// Net flow leaving `node`
    pub fn outflow(&self, node: NodeId) -> Capacity {
        self.adjacency
            .get(node)
            .map_or(0, |out| out.iter().map(|&e| self.edges[e].flow).sum())
    }

    fn augment(&mut self, index: usize, amount: Capacity) {
        let reverse = self.edges[index].reverse;
        self.edges[index].flow += amount;
        self.edges[reverse].flow -= amount;
    }

    /// Nodes reachable from `source` through edges with residual capacity
    pub fn residual_reachable(&self, source: NodeId) -> Vec<bool> {
        let mut seen = vec![false; self.node_count()];
        if source >= seen.len() {
            return seen;
        }
        seen[source] = true;
        let mut queue = VecDeque::from([source]);
        while let Some(u) = queue.pop_front() {
            for &e in &self.adjacency[u] {
                let edge = &self.edges[e];
                if edge.residual_capacity() > 0 && !seen[edge.to] {
                    seen[edge.to] = true;
                    queue.push_back(edge.to);
                }
            }
        }
        seen
    }

    fn check_terminals(&self, source: NodeId, sink: NodeId) -> AlgorithmResult<()> {
        self.validate_node(source)?;
        self.validate_node(sink)?;
        if source == sink {
            return Err(AlgorithmError::invalid_argument("source and sink must differ"));
        }
        Ok(())
    }
}

/// Counters gathered while solving
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowMetrics {
    /// Augmenting paths pushed
    pub augmentations: usize,
    /// BFS rounds (level graphs for Dinic)
    pub phases: usize,
}

fn edmonds_karp_on(
    network: &mut FlowNetwork,
    source: NodeId,
    sink: NodeId,
    metrics: &mut FlowMetrics,
) -> Capacity {
    let n = network.node_count();
    let mut total = 0;
    loop {
        metrics.phases += 1;
        // Edge used to reach each node
        let mut via: Vec<Option<usize>> = vec![None; n];
        let mut seen = vec![false; n];
        seen[source] = true;
        let mut queue = VecDeque::from([source]);
        while let Some(u) = queue.pop_front() {
            if seen[sink] {
                break;
            }
            for &e in &network.adjacency[u] {
                let edge = &network.edges[e];
                if edge.residual_capacity() > 0 && !seen[edge.to] {
                    seen[edge.to] = true;
                    via[edge.to] = Some(e);
                    queue.push_back(edge.to);
                }
            }
        }
        if !seen[sink] {
            break;
        }

        let mut path = Vec::new();
        let mut node = sink;
        while let Some(e) = via[node] {
            path.push(e);
            node = network.edges[e].from;
        }
        let bottleneck = path
            .iter()
            .map(|&e| network.edges[e].residual_capacity())
            .min()
            .unwrap_or(0);
        for &e in &path {
            network.augment(e, bottleneck);
        }
        trace!("edmonds-karp pushed {} along {} edges", bottleneck, path.len());
        total += bottleneck;
        metrics.augmentations += 1;
    }
    total
}

fn dinic_on(
    network: &mut FlowNetwork,
    source: NodeId,
    sink: NodeId,
    metrics: &mut FlowMetrics,
) -> Capacity {
    let n = network.node_count();
    let mut total = 0;
    let mut level: Vec<Option<usize>> = vec![None; n];
    let mut next_edge = vec![0usize; n];

    loop {
        level.fill(None);
        level[source] = Some(0);
        let mut queue = VecDeque::from([source]);
        while let Some(u) = queue.pop_front() {
            let next_level = level[u].map(|l| l + 1);
            for &e in &network.adjacency[u] {
                let edge = &network.edges[e];
                if edge.residual_capacity() > 0 && level[edge.to].is_none() {
                    level[edge.to] = next_level;
                    queue.push_back(edge.to);
                }
            }
        }
        if level[sink].is_none() {
            break;
        }
        metrics.phases += 1;
        next_edge.fill(0);

        let phase_flow = blocking_flow(network, source, sink, &mut level, &mut next_edge, metrics);
        debug!("dinic phase {} pushed {}", metrics.phases, phase_flow);
        total += phase_flow;
    }
    total
}

/// Pushes a blocking flow through the level graph with an explicit path stack
fn blocking_flow(
    network: &mut FlowNetwork,
    source: NodeId,
    sink: NodeId,
    level: &mut [Option<usize>],
    next_edge: &mut [usize],
    metrics: &mut FlowMetrics,
) -> Capacity {
    let mut pushed = 0;
    let mut path: Vec<usize> = Vec::new();
    let mut u = source;

    loop {
        if u == sink {
            let bottleneck = path
                .iter()
                .map(|&e| network.edges[e].residual_capacity())
                .min()
                .unwrap_or(0);
            for &e in &path {
                network.augment(e, bottleneck);
            }
            pushed += bottleneck;
            metrics.augmentations += 1;

            // Resume from the tail of the first edge this push saturated
            let saturated = path
                .iter()
                .position(|&e| network.edges[e].residual_capacity() == 0)
                .unwrap_or(0);
            path.truncate(saturated);
            u = path.last().map_or(source, |&e| network.edges[e].to);
            continue;
        }

        let mut advanced = false;
        while let Some(&e) = network.adjacency[u].get(next_edge[u]) {
            let edge = &network.edges[e];
            let admissible = matches!(
                (level[u], level[edge.to]),
                (Some(a), Some(b)) if b == a + 1
            );
            if admissible && edge.residual_capacity() > 0 {
                path.push(e);
                u = edge.to;
                advanced = true;
                break;
            }
            next_edge[u] += 1;
        }

        if !advanced {
            if u == source {
                break;
            }
            // Dead end for the rest of this phase
            level[u] = None;
            match path.pop() {
                Some(e) => {
                    u = network.edges[e].from;
                    next_edge[u] += 1;
                }
                None => break,
            }
        }
    }
    pushed
}

/// Edmonds-Karp over a capacity matrix; the matrix itself is left untouched
pub fn edmonds_karp(capacity: &[Vec<Capacity>], source: NodeId, sink: NodeId) -> AlgorithmResult<Capacity> {
    let mut network = FlowNetwork::from_matrix(capacity)?;
    network.check_terminals(source, sink)?;
    let flow = edmonds_karp_on(&mut network, source, sink, &mut FlowMetrics::default());
    debug!("edmonds-karp finished with flow {}", flow);
    Ok(flow)
}

/// Dinic's algorithm over an incrementally built network
#[derive(Debug, Clone)]
pub struct Dinic {
    network: FlowNetwork,
}

impl Dinic {
    pub fn new(node_count: usize) -> Self {
        Self {
            network: FlowNetwork::new(node_count),
        }
    }

    pub fn add_edge(&mut self, from: NodeId, to: NodeId, capacity: Capacity) -> AlgorithmResult<()> {
        self.network.add_edge(from, to, capacity).map(|_| ())
    }

    /// Maximum flow from `source` to `sink`
    ///
    /// Flow accumulates in the network, so a second call on the same
    /// terminals returns 0.
    pub fn max_flow(&mut self, source: NodeId, sink: NodeId) -> AlgorithmResult<Capacity> {
        self.network.check_terminals(source, sink)?;
        Ok(dinic_on(&mut self.network, source, sink, &mut FlowMetrics::default()))
    }

    /// Source side of a minimum cut, valid after [`Dinic::max_flow`]
    pub fn min_cut(&self, source: NodeId) -> AlgorithmResult<Vec<NodeId>> {
        self.network.validate_node(source)?;
        Ok(source_side(&self.network, source))
    }

    pub fn network(&self) -> &FlowNetwork {
        &self.network
    }
}

fn source_side(network: &FlowNetwork, source: NodeId) -> Vec<NodeId> {
    network
        .residual_reachable(source)
        .into_iter()
        .enumerate()
        .filter_map(|(node, reachable)| reachable.then_some(node))
        .collect()
}

/// Result of [`MaxFlowSolver::solve`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxFlowResult {
    pub max_flow: Capacity,
    /// Nodes on the source side of a minimum cut
    pub min_cut: Vec<NodeId>,
    pub algorithm: MaxFlowAlgorithm,
    pub metrics: FlowMetrics,
}

/// Maximum flow solver with a selectable algorithm
#[derive(Debug, Clone)]
pub struct MaxFlowSolver {
    algorithm: MaxFlowAlgorithm,
}

impl Default for MaxFlowSolver {
    fn default() -> Self {
        Self::new(MaxFlowAlgorithm::Dinic)
    }
}

impl MaxFlowSolver {
    pub fn new(algorithm: MaxFlowAlgorithm) -> Self {
        Self { algorithm }
    }

    pub fn algorithm(&self) -> MaxFlowAlgorithm {
        self.algorithm
    }

    /// Computes a maximum flow, leaving it recorded in `network`
    pub fn solve(&self, network: &mut FlowNetwork, source: NodeId, sink: NodeId) -> AlgorithmResult<MaxFlowResult> {
        network.check_terminals(source, sink)?;
        network.reset_flow();

        let mut metrics = FlowMetrics::default();
        let max_flow = match self.algorithm {
            MaxFlowAlgorithm::EdmondsKarp => edmonds_karp_on(network, source, sink, &mut metrics),
            MaxFlowAlgorithm::Dinic => dinic_on(network, source, sink, &mut metrics),
        };
        debug!(
            "{} solved {} -> {}: flow {} in {} augmentations",
            self.algorithm.name(),
            source,
            sink,
            max_flow,
            metrics.augmentations
        );

        Ok(MaxFlowResult {
            max_flow,
            min_cut: source_side(network, source),
            algorithm: self.algorithm,
            metrics,
        })
    }
}

impl Parameterized for MaxFlowSolver {
    fn parameters(&self) -> Vec<AlgorithmParameter> {
        vec![AlgorithmParameter {
            name: "algorithm".to_owned(),
            value: self.algorithm.name().to_owned(),
            value_type: ParameterType::String,
            constraints: None,
        }]
    }

    fn set_parameter(&mut self, name: &str, value: &str) -> AlgorithmResult<()> {
        match name {
            "algorithm" => {
                self.algorithm = match value.trim() {
                    "edmonds_karp" => MaxFlowAlgorithm::EdmondsKarp,
                    "dinic" => MaxFlowAlgorithm::Dinic,
                    other => {
                        return Err(AlgorithmError::invalid_parameter(
                            name,
                            format!("unknown algorithm '{}'", other),
                        ))
                    }
                };
                Ok(())
            }
            _ => Err(AlgorithmError::invalid_parameter(name, "unknown parameter")),
        }
    }
}
