//! Types for the annual auspiciousness scorer.

use std::fmt::{Display, Formatter};

use bazi_base::{Branch, Pillar, Stem, TenGod};
use bazi_config::LevelThresholds;
use serde::{Serialize, Serializer};

/// Five ordered fortune grades, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    /// 大吉
    GreatFortune,
    /// 吉
    Fortune,
    /// 中平
    Neutral,
    /// 凶
    Misfortune,
    /// 大凶
    GreatMisfortune,
}

impl Level {
    pub const fn name(self) -> &'static str {
        match self {
            Self::GreatFortune => "大吉",
            Self::Fortune => "吉",
            Self::Neutral => "中平",
            Self::Misfortune => "凶",
            Self::GreatMisfortune => "大凶",
        }
    }

    /// Grade of `score` under `thresholds` (each bound inclusive).
    pub fn from_score(score: f64, thresholds: &LevelThresholds) -> Self {
        if score >= thresholds.great {
            Self::GreatFortune
        } else if score >= thresholds.good {
            Self::Fortune
        } else if score >= thresholds.neutral {
            Self::Neutral
        } else if score >= thresholds.poor {
            Self::Misfortune
        } else {
            Self::GreatMisfortune
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Inputs for scoring one year against a birth chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnualQuery {
    /// Day stem (日主) of the birth chart.
    pub day_stem: Stem,
    /// Day branch of the birth chart.
    pub day_branch: Branch,
    /// Pillar of the year being scored (流年).
    pub year_pillar: Pillar,
    /// Ten-god of the year stem; derived from the day stem when absent.
    pub ten_god: Option<TenGod>,
    /// Deity (神煞) names active in the year.
    pub deities: Vec<String>,
    /// Current luck pillar (大运), if known.
    pub luck_pillar: Option<Pillar>,
}

impl AnnualQuery {
    pub fn new(day_pillar: Pillar, year_pillar: Pillar) -> Self {
        Self {
            day_stem: day_pillar.stem(),
            day_branch: day_pillar.branch(),
            year_pillar,
            ten_god: None,
            deities: Vec::new(),
            luck_pillar: None,
        }
    }
}

/// Component scores, each in [0, 100] before weighting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub stem: f64,
    pub branch: f64,
    pub ten_god: f64,
    pub deity: f64,
    pub element: f64,
    /// Unweighted luck-cycle adjustment.
    pub luck_adjustment: f64,
}

/// Scored year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuspiciousnessResult {
    pub score: f64,
    pub level: Level,
    pub score_breakdown: ScoreBreakdown,
    pub analysis: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_boundaries() {
        let t = LevelThresholds::default();
        assert_eq!(Level::from_score(100.0, &t), Level::GreatFortune);
        assert_eq!(Level::from_score(80.0, &t), Level::GreatFortune);
        assert_eq!(Level::from_score(79.9, &t), Level::Fortune);
        assert_eq!(Level::from_score(65.0, &t), Level::Fortune);
        assert_eq!(Level::from_score(45.0, &t), Level::Neutral);
        assert_eq!(Level::from_score(30.0, &t), Level::Misfortune);
        assert_eq!(Level::from_score(29.9, &t), Level::GreatMisfortune);
        assert_eq!(Level::from_score(0.0, &t), Level::GreatMisfortune);
    }

    #[test]
    fn levels_are_ordered() {
        assert!(Level::GreatFortune < Level::Fortune);
        assert!(Level::Misfortune < Level::GreatMisfortune);
        assert_eq!(Level::Neutral.to_string(), "中平");
    }
}
