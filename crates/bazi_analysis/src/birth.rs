//! Birth data supplied alongside (or instead of) the four pillars.

use bazi_base::{Branch, FourPillars, Gender, LunarDate, Pillar, SolarTermWindow};
use serde::{Deserialize, Serialize};

/// Gregorian birth date, used only for the Western constellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolarDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl SolarDate {
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

/// Birth data; optional fields feed the fallback paths when pillars are missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthContext {
    pub lunar_date: LunarDate,
    #[serde(default)]
    pub solar_date: Option<SolarDate>,
    #[serde(default)]
    pub hour_branch: Option<Branch>,
    pub gender: Gender,
    /// Month branch computed upstream from the solar terms.
    #[serde(default)]
    pub month_branch: Option<Branch>,
    /// Year pillar computed upstream (changes at 立春, not lunar new year).
    #[serde(default)]
    pub year_pillar: Option<Pillar>,
}

impl BirthContext {
    pub fn new(lunar_date: LunarDate, gender: Gender) -> Self {
        Self {
            lunar_date,
            solar_date: None,
            hour_branch: None,
            gender,
            month_branch: None,
            year_pillar: None,
        }
    }
}

/// Everything known about a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartInput {
    #[serde(default)]
    pub pillars: Option<FourPillars>,
    pub birth: BirthContext,
    #[serde(default)]
    pub solar_term: Option<SolarTermWindow>,
}

impl ChartInput {
    pub fn new(pillars: Option<FourPillars>, birth: BirthContext) -> Self {
        Self {
            pillars,
            birth,
            solar_term: None,
        }
    }

    /// Year pillar from the chart, else from the birth context.
    pub fn year_pillar(&self) -> Option<Pillar> {
        self.pillars.map(|p| p.year).or(self.birth.year_pillar)
    }

    /// Month branch from the chart, else from the birth context.
    pub fn month_branch(&self) -> Option<Branch> {
        self.pillars
            .map(|p| p.month.branch())
            .or(self.birth.month_branch)
    }

    /// Hour branch from the chart, else from the birth context.
    pub fn hour_branch(&self) -> Option<Branch> {
        self.pillars
            .map(|p| p.hour.branch())
            .or(self.birth.hour_branch)
    }
}
