//! Codex: classic algorithms and data structures
//!
//! Sorting and searching, graph traversal and shortest paths, spanning
//! trees, strongly connected components, maximum flow, string matching,
//! dynamic programming, puzzles and a set of textbook data structures.
//! Fallible routines return [`AlgorithmResult`]; absence is `None`.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod algorithm;
pub mod config;
pub mod data_structures;

pub use algorithm::catalog::{AlgorithmCategory, AlgorithmDescriptor, Catalog};
pub use algorithm::traits::{AlgorithmError, AlgorithmResult, NodeId, Parameterized};
pub use config::{init_logging, CodexConfig, ConfigError};
pub use data_structures::graph::Graph;
