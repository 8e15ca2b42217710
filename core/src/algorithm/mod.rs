//! Codex algorithm families
//!
//! Every family reports malformed input through [`AlgorithmError`] and
//! expresses "not found" as `None`. Tunable algorithm objects implement
//! [`Parameterized`].
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod catalog;
pub mod dynamic;
pub mod graph;
pub mod paradigms;
pub mod puzzles;
pub mod searching;
pub mod sorting;
pub mod string;
pub mod traits;

pub use self::catalog::{AlgorithmCategory, AlgorithmDescriptor, Catalog};
pub use self::traits::*;
