//! Chart analysis on top of `bazi_base`.
//!
//! This crate provides:
//! - [`derive_attributes`]: every secondary attribute of a chart, with
//!   fallbacks when only birth data is known
//! - [`evaluate_life_aspects`]: the 22 life-aspect judgments
//! - [`AuspiciousnessScorer`]: weighted 0–100 score of a year against the day pillar

pub mod auspicious;
pub mod auspicious_types;
pub mod birth;
pub mod derived;
pub mod life_aspect;

pub use auspicious::{AuspiciousnessScorer, luck_adjustment};
pub use auspicious_types::{AnnualQuery, AuspiciousnessResult, Level, ScoreBreakdown};
pub use birth::{BirthContext, ChartInput, SolarDate};
pub use derived::{DerivedAttributes, PillarNaYin, derive_attributes, text_or_unknown};
pub use life_aspect::{
    ChartView, LifeAspectReport, LifeAspectRule, RULES, StemTenGods, evaluate_life_aspects,
};
