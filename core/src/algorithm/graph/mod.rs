//! Graph algorithms: traversal, shortest paths, spanning trees, ordering,
//! strongly connected components and maximum flow
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod max_flow;
pub mod mst;
pub mod ordering;
pub mod scc;
pub mod shortest_path;
pub mod traversal;

pub use self::max_flow::{
    edmonds_karp, Capacity, Dinic, FlowEdge, FlowMetrics, FlowNetwork, MaxFlowAlgorithm,
    MaxFlowResult, MaxFlowSolver,
};
pub use self::mst::{kruskal, prim, total_weight};
pub use self::ordering::{has_cycle_directed, has_cycle_undirected, topological_sort};
pub use self::scc::{component_ids, kosaraju};
pub use self::shortest_path::{a_star, bellman_ford, dijkstra, floyd_warshall, BellmanFordResult, Path};
pub use self::traversal::{bfs, dfs};
