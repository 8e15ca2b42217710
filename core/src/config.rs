//! Library configuration and logging setup
//!
//! A [`CodexConfig`] is built explicitly (defaults, JSON text or a JSON
//! file) and passed to whatever needs it; nothing is held globally except
//! the logger installed by [`init_logging`].
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::{debug, LevelFilter};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::algorithm::paradigms::MoSolver;
use crate::algorithm::sorting::BucketSorter;
use crate::algorithm::string::RabinKarp;
use crate::algorithm::traits::AlgorithmError;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] AlgorithmError),
}

/// Rolling-hash parameters for Rabin-Karp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RabinKarpConfig {
    pub base: u64,
    pub modulus: u64,
}

impl Default for RabinKarpConfig {
    fn default() -> Self {
        Self { base: 256, modulus: 101 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketSortConfig {
    pub bucket_count: usize,
}

impl Default for BucketSortConfig {
    fn default() -> Self {
        Self { bucket_count: 10 }
    }
}

/// `block_size: None` means square root of the input length
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoConfig {
    pub block_size: Option<usize>,
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodexConfig {
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    pub rabin_karp: RabinKarpConfig,
    pub bucket_sort: BucketSortConfig,
    pub mo: MoConfig,
}

impl Default for CodexConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_owned(),
            rabin_karp: RabinKarpConfig::default(),
            bucket_sort: BucketSortConfig::default(),
            mo: MoConfig::default(),
        }
    }
}

impl CodexConfig {
    /// Parses and validates JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = Self::from_json_str(&fs::read_to_string(path)?)?;
        debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AlgorithmError> {
        self.level_filter()?;
        self.rabin_karp()?;
        self.bucket_sorter()?;
        self.mo_solver()?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, AlgorithmError> {
        LevelFilter::from_str(self.log_level.trim()).map_err(|_| {
            AlgorithmError::invalid_parameter(
                "log_level",
                format!("unknown level '{}'", self.log_level),
            )
        })
    }

    pub fn rabin_karp(&self) -> Result<RabinKarp, AlgorithmError> {
        RabinKarp::new(self.rabin_karp.base, self.rabin_karp.modulus)
    }

    pub fn bucket_sorter(&self) -> Result<BucketSorter, AlgorithmError> {
        BucketSorter::new(self.bucket_sort.bucket_count)
    }

    pub fn mo_solver(&self) -> Result<MoSolver, AlgorithmError> {
        match self.mo.block_size {
            Some(block_size) => MoSolver::with_block_size(block_size),
            None => Ok(MoSolver::new()),
        }
    }
}

/// Installs the global logger at the configured level
///
/// `RUST_LOG`, when set, overrides the configured level. Calling this
/// again after a logger exists has no effect.
pub fn init_logging(config: &CodexConfig) -> Result<(), ConfigError> {
    let level = config.level_filter()?;
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    if builder.try_init().is_ok() {
        debug!("logging initialised at {}", level);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::traits::Parameterized;

    #[test]
    fn test_defaults() {
        let config = CodexConfig::default();
        assert_eq!(config.rabin_karp, RabinKarpConfig { base: 256, modulus: 101 });
        assert_eq!(config.bucket_sort.bucket_count, 10);
        assert_eq!(config.mo.block_size, None);
        assert!(config.validate().is_ok());
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Warn);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = CodexConfig::from_json_str(r#"{"rabin_karp": {"modulus": 1000003}, "mo": {"block_size": 4}}"#).unwrap();
        assert_eq!(config.rabin_karp.base, 256);
        assert_eq!(config.rabin_karp.modulus, 1_000_003);
        assert_eq!(config.mo_solver().unwrap().block_size(), Some(4));
        assert_eq!(config.rabin_karp().unwrap().get_parameter("modulus").as_deref(), Some("1000003"));
    }

    #[test]
    fn test_invalid_values() {
        for json in [
            r#"{"rabin_karp": {"modulus": 1}}"#,
            r#"{"rabin_karp": {"base": 0}}"#,
            r#"{"bucket_sort": {"bucket_count": 0}}"#,
            r#"{"mo": {"block_size": 0}}"#,
            r#"{"log_level": "loud"}"#,
        ] {
            assert!(
                matches!(CodexConfig::from_json_str(json), Err(ConfigError::Invalid(_))),
                "{} should be rejected",
                json
            );
        }
        assert!(matches!(CodexConfig::from_json_str("{"), Err(ConfigError::Parse(_))));
        assert!(matches!(
            CodexConfig::from_path("/nonexistent/codex.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_json_round_trip_and_file_load() {
        let mut config = CodexConfig::default();
        config.log_level = "debug".to_owned();
        config.bucket_sort.bucket_count = 4;
        let json = config.to_json().unwrap();

        let path = std::env::temp_dir().join(format!("codex-config-{}.json", std::process::id()));
        fs::write(&path, &json).unwrap();
        let loaded = CodexConfig::from_path(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded.unwrap(), config);
    }

    #[test]
    fn test_init_logging_is_repeatable() {
        let config = CodexConfig::default();
        assert!(init_logging(&config).is_ok());
        assert!(init_logging(&config).is_ok());
        let bad = CodexConfig {
            log_level: "chatty".to_owned(),
            ..CodexConfig::default()
        };
        assert!(init_logging(&bad).is_err());
    }
}
