//! Error type for the convenience API.

use bazi_base::BaziError;
use bazi_config::ConfigError;

/// Errors from the string-in convenience functions.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BaziRsError {
    /// Input text is not a valid stem, branch, pillar, gender or term.
    #[error(transparent)]
    Parse(#[from] BaziError),
    /// Scorer configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// [`init`](crate::init) was called after the scorer was already set up.
    #[error("scorer already initialized")]
    AlreadyInitialized,
}
