//! Error types for configuration loading and validation.

use std::path::PathBuf;

/// Errors from reading, parsing or validating a [`ScorerConfig`](crate::ScorerConfig).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config at {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid TOML for this schema.
    #[error("failed to parse config at {path:?}: {source}")]
    ParseFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// Inline TOML text is not valid for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A weight is negative or not finite.
    #[error("weight {name} must be a non-negative number, got {value}")]
    NegativeWeight { name: &'static str, value: f64 },
    /// Weights do not add up to 1.
    #[error("weights must sum to 1.0, got {0}")]
    WeightSum(f64),
    /// Level thresholds are not strictly descending inside [0, 100].
    #[error("level thresholds must satisfy 100 >= great > good > neutral > poor >= 0")]
    UnorderedLevels,
}
