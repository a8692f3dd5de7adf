//! Process-wide scorer used by [`score_year`](crate::score_year).

use std::path::Path;
use std::sync::OnceLock;

use bazi_analysis::AuspiciousnessScorer;
use bazi_config::ScorerConfig;

use crate::error::BaziRsError;

static SCORER: OnceLock<AuspiciousnessScorer> = OnceLock::new();

/// Install the scorer configuration. Must run before the first scoring call.
pub fn init(config: ScorerConfig) -> Result<(), BaziRsError> {
    SCORER
        .set(AuspiciousnessScorer::new(&config)?)
        .map_err(|_| BaziRsError::AlreadyInitialized)?;
    tracing::debug!("scorer initialized");
    Ok(())
}

/// Load a TOML configuration file and install it.
pub fn init_from_path(path: impl AsRef<Path>) -> Result<(), BaziRsError> {
    init(ScorerConfig::from_path(path)?)
}

/// True once a configuration has been installed (or the default taken).
pub fn is_initialized() -> bool {
    SCORER.get().is_some()
}

/// The shared scorer; the default configuration if [`init`] never ran.
pub fn scorer() -> &'static AuspiciousnessScorer {
    SCORER.get_or_init(AuspiciousnessScorer::default)
}
