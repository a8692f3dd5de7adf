//! Error types for parsing chart symbols from text.
//!
//! The analysis functions in this crate are total and never return these;
//! they only surface at the text boundary (`FromStr` / serde).

use crate::branch::Branch;
use crate::stem::Stem;

/// Errors from parsing stems, branches, pillars and related labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum BaziError {
    /// Text is not one of the ten heavenly stems.
    #[error("unknown heavenly stem: {0:?}")]
    UnknownStem(String),
    /// Text is not one of the twelve earthly branches.
    #[error("unknown earthly branch: {0:?}")]
    UnknownBranch(String),
    /// Pillar text is not exactly one stem followed by one branch.
    #[error("malformed pillar: {0:?}")]
    MalformedPillar(String),
    /// Stem and branch have different polarity, so they never pair.
    #[error("{stem}{branch} is not a sexagenary pillar (polarity mismatch)")]
    ParityMismatch { stem: Stem, branch: Branch },
    /// Text is not one of the 24 solar terms.
    #[error("unknown solar term: {0:?}")]
    UnknownSolarTerm(String),
    /// Text is not a recognised gender label.
    #[error("unknown gender: {0:?}")]
    UnknownGender(String),
    /// Text is not one of the ten gods.
    #[error("unknown ten god: {0:?}")]
    UnknownTenGod(String),
}
