//! Convenience wrapper for BaZi chart analysis.
//!
//! Accepts pillars as Chinese text and returns serializable results, so
//! callers only need `use bazi_rs::*`. Annual scoring goes through a shared
//! scorer that can be configured once with [`init`] or [`init_from_path`].
//!
//! # Quick start
//!
//! ```rust,ignore
//! use bazi_rs::*;
//!
//! let birth = BirthContext::new(LunarDate::new(1990, 4, 16), Gender::Male);
//! let chart = analyze_chart(["庚午", "辛巳", "甲子", "丙寅"], birth, None).unwrap();
//! assert_eq!(chart.attributes.na_yin.day, "海中金");
//!
//! let year = score_year("甲子", "丁丑", &[], None).unwrap();
//! assert!((0.0..=100.0).contains(&year.score));
//! ```

pub mod convenience;
pub mod error;
pub mod global;

pub use convenience::{ChartAnalysis, analyze_chart, life_aspects, score_year};
pub use error::BaziRsError;
pub use global::{init, init_from_path, is_initialized, scorer};

// Re-export the analysis surface so callers don't need the member crates directly.
pub use bazi_analysis::{
    AnnualQuery, AuspiciousnessResult, AuspiciousnessScorer, BirthContext, ChartInput, ChartView,
    DerivedAttributes, Level, LifeAspectReport, PillarNaYin, ScoreBreakdown, SolarDate,
    StemTenGods, derive_attributes, evaluate_life_aspects, text_or_unknown,
};
pub use bazi_base::{
    BaziError, Branch, Commander, Constellation, Element, ElementTally, FourPillars, Gender,
    LifeGua, LunarDate, Mansion, Pillar, SolarTerm, SolarTermWindow, Stem, TenGod, UNKNOWN,
    VoidPair, Zodiac, na_yin_text, void_emptiness_text,
};
pub use bazi_config::{ConfigError, ScorerConfig};
