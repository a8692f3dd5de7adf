use bazi_analysis::{
    AnnualQuery, AuspiciousnessResult, BirthContext, ChartInput, ChartView, DerivedAttributes,
    LifeAspectReport, derive_attributes, evaluate_life_aspects,
};
use bazi_base::{FourPillars, Gender, Pillar, SolarTermWindow};
use serde::Serialize;

use crate::error::BaziRsError;
use crate::global::scorer;

/// Derived attributes and life-aspect judgments of one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartAnalysis {
    pub pillars: FourPillars,
    pub attributes: DerivedAttributes,
    pub life_aspects: LifeAspectReport,
}

/// Analyze a chart given as four pillar strings (year, month, day, hour).
pub fn analyze_chart(
    pillars: [&str; 4],
    birth: BirthContext,
    solar_term: Option<SolarTermWindow>,
) -> Result<ChartAnalysis, BaziRsError> {
    let [year, month, day, hour] = pillars;
    let pillars = FourPillars::parse(year, month, day, hour)?;
    let gender = birth.gender;
    let mut input = ChartInput::new(Some(pillars), birth);
    input.solar_term = solar_term;
    Ok(ChartAnalysis {
        pillars,
        attributes: derive_attributes(&input),
        life_aspects: evaluate_life_aspects(&ChartView::new(pillars, gender)),
    })
}

/// Life-aspect judgments for four pillar strings and a gender label (`男`, `female`, ...).
pub fn life_aspects(pillars: [&str; 4], gender: &str) -> Result<LifeAspectReport, BaziRsError> {
    let [year, month, day, hour] = pillars;
    let pillars = FourPillars::parse(year, month, day, hour)?;
    let gender: Gender = gender.parse()?;
    Ok(evaluate_life_aspects(&ChartView::new(pillars, gender)))
}

/// Score a year pillar against a day pillar with the shared scorer.
pub fn score_year(
    day_pillar: &str,
    year_pillar: &str,
    deities: &[&str],
    luck_pillar: Option<&str>,
) -> Result<AuspiciousnessResult, BaziRsError> {
    let day: Pillar = day_pillar.parse()?;
    let year: Pillar = year_pillar.parse()?;
    let mut query = AnnualQuery::new(day, year);
    query.deities = deities.iter().map(|d| d.to_string()).collect();
    query.luck_pillar = luck_pillar.map(str::parse).transpose()?;
    Ok(scorer().score(&query))
}
