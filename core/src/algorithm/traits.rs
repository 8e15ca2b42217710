//! Core algorithm trait definitions for the Codex library
//!
//! This module establishes the shared vocabulary of every algorithm family:
//! the error taxonomy, the result alias, complexity metadata and the
//! parameter contract implemented by configurable algorithm objects.
//!
//! # Key Design Principles
//! - Documented "not found" sentinels are expressed as `Option`
//! - Every other malformed input surfaces as an explicit [`AlgorithmError`]
//! - Parameters are exchanged as strings and validated on assignment
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Node identifier used across graph, flow and tree algorithms
pub type NodeId = usize;

/// Universal algorithm identifier for catalog lookup
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AlgorithmId(String);

impl AlgorithmId {
    pub fn new(name: &str) -> Self {
        Self(name.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Comprehensive error types for algorithm operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlgorithmError {
    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Invalid node: {0}")]
    InvalidNode(NodeId),

    #[error("Invalid graph state: {0}")]
    InvalidGraph(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Empty input: {0}")]
    EmptyInput(&'static str),

    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),
}

impl AlgorithmError {
    pub fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_owned(),
            reason: reason.into(),
        }
    }

    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }
}

/// Result alias used by every fallible routine in the crate
pub type AlgorithmResult<T> = Result<T, AlgorithmError>;

/// Algorithm complexity information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmComplexity {
    pub time: String,
    pub space: String,
}

impl AlgorithmComplexity {
    pub fn new(time: &str, space: &str) -> Self {
        Self {
            time: time.to_owned(),
            space: space.to_owned(),
        }
    }
}

/// Parameter type enumeration for type-safe parameter handling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterType {
    Integer,
    Float,
    String,
    Boolean,
}

/// Parameter constraints for validating algorithm parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterConstraints {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Algorithm parameter with strongly typed values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmParameter {
    pub name: String,
    pub value: String,
    pub value_type: ParameterType,
    pub constraints: Option<ParameterConstraints>,
}

impl AlgorithmParameter {
    pub fn integer(name: &str, value: impl Display, min: Option<f64>) -> Self {
        Self {
            name: name.to_owned(),
            value: value.to_string(),
            value_type: ParameterType::Integer,
            constraints: min.map(|min| ParameterConstraints { min: Some(min), max: None }),
        }
    }
}

/// Contract for algorithm objects exposing tunable parameters
///
/// Values travel as strings so that parameters can be set from
/// configuration files or user input without knowing their Rust type.
pub trait Parameterized {
    /// Returns supported parameters with their current values
    fn parameters(&self) -> Vec<AlgorithmParameter>;

    /// Sets algorithm parameter with type validation
    fn set_parameter(&mut self, name: &str, value: &str) -> AlgorithmResult<()>;

    /// Gets algorithm parameter value
    fn get_parameter(&self, name: &str) -> Option<String> {
        self.parameters()
            .into_iter()
            .find(|p| p.name == name)
            .map(|p| p.value)
    }
}

/// Parses a parameter value, rejecting anything below `min`
pub fn parse_parameter<T>(name: &str, value: &str, min: T) -> AlgorithmResult<T>
where
    T: FromStr + PartialOrd + Display,
{
    let parsed = value
        .trim()
        .parse::<T>()
        .map_err(|_| AlgorithmError::invalid_parameter(name, format!("cannot parse '{}'", value)))?;
    if parsed < min {
        return Err(AlgorithmError::invalid_parameter(
            name,
            format!("must be at least {}", min),
        ));
    }
    Ok(parsed)
}
