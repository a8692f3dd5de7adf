//! Configuration for the annual auspiciousness scorer.
//!
//! Defaults reproduce the standard weighting. A TOML file may override any
//! section; missing sections and keys keep their defaults.

pub mod error;
pub mod scorer;

pub use error::ConfigError;
pub use scorer::{DeityLists, LevelThresholds, ScoreWeights, ScorerConfig};
