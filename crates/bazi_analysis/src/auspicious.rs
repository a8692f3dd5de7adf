//! Annual auspiciousness scorer: how a year pillar (流年) sits with the day pillar.
//!
//! Five components each start at [`BASE_SCORE`] and move by fixed amounts,
//! clamped to [0, 100] after every step. The weighted sum plus an optional
//! luck-cycle adjustment gives the final score.

use std::collections::BTreeSet;

use bazi_base::{
    Branch, BranchRelation, ElementRelation, Pillar, Stem, TenGod, branch_relations,
    branches_clash, branches_harmonize, stems_combine, ten_god,
};
use bazi_config::{ConfigError, ScorerConfig};

use crate::auspicious_types::{AnnualQuery, AuspiciousnessResult, Level, ScoreBreakdown};

pub const BASE_SCORE: f64 = 50.0;

/// Ten-gods read as favourable, strongest first.
pub const AUSPICIOUS_TEN_GODS: [(TenGod, f64); 5] = [
    (TenGod::ZhengGuan, 20.0),
    (TenGod::ZhengYin, 18.0),
    (TenGod::ZhengCai, 15.0),
    (TenGod::ShiShen, 12.0),
    (TenGod::BiJian, OTHER_AUSPICIOUS),
];

/// Ten-gods read as unfavourable.
pub const INAUSPICIOUS_TEN_GODS: [(TenGod, f64); 5] = [
    (TenGod::QiSha, -20.0),
    (TenGod::PianYin, -15.0),
    (TenGod::ShangGuan, -12.0),
    (TenGod::JieCai, -15.0),
    (TenGod::PianCai, -10.0),
];

const OTHER_AUSPICIOUS: f64 = 10.0;
const DEITY_STEP: f64 = 5.0;

fn clamp_score(x: f64) -> f64 {
    x.clamp(0.0, 100.0)
}

/// Stem component and a short description, from the day stem's view.
pub fn stem_score(day: Stem, year: Stem) -> (f64, &'static str) {
    let (delta, text) = match day.element().relation_to(year.element()) {
        ElementRelation::Same => (10.0, "比和"),
        ElementRelation::GeneratedBy => (20.0, "流年生日主"),
        ElementRelation::Generates => (-5.0, "日主生流年，泄气"),
        ElementRelation::Controls => (15.0, "日主克流年，为财"),
        ElementRelation::ControlledBy => (-10.0, "流年克日主"),
    };
    (clamp_score(BASE_SCORE + delta), text)
}

const fn branch_delta(relation: BranchRelation) -> f64 {
    match relation {
        BranchRelation::LiuHe => 15.0,
        BranchRelation::Chong => -20.0,
        BranchRelation::Xing => -15.0,
        BranchRelation::Hai => -10.0,
        BranchRelation::FuYin => -5.0,
    }
}

/// Branch component and the relations that contributed.
pub fn branch_score(day: Branch, year: Branch) -> (f64, Vec<BranchRelation>) {
    let relations = branch_relations(day, year);
    let score = relations
        .iter()
        .fold(BASE_SCORE, |acc, &r| clamp_score(acc + branch_delta(r)));
    (score, relations)
}

/// Signed valence of a ten-god; 0 for one in neither table.
pub fn ten_god_valence(god: TenGod) -> f64 {
    AUSPICIOUS_TEN_GODS
        .iter()
        .chain(INAUSPICIOUS_TEN_GODS.iter())
        .find(|(g, _)| *g == god)
        .map_or(0.0, |&(_, v)| v)
}

/// Luck-cycle adjustment: +5 stem combination, +5 branch harmony, −10 branch clash.
pub fn luck_adjustment(luck: Pillar, year: Pillar) -> f64 {
    let mut adjustment = 0.0;
    if stems_combine(luck.stem(), year.stem()) {
        adjustment += 5.0;
    }
    if branches_harmonize(luck.branch(), year.branch()) {
        adjustment += 5.0;
    }
    if branches_clash(luck.branch(), year.branch()) {
        adjustment -= 10.0;
    }
    adjustment
}

/// Scorer bound to a configuration.
#[derive(Debug, Clone, Default)]
pub struct AuspiciousnessScorer {
    config: ScorerConfig,
}

impl AuspiciousnessScorer {
    /// Scorer for a validated copy of `config`.
    pub fn new(config: &ScorerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config: config.clone(),
        })
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Score `query`.
    pub fn score(&self, query: &AnnualQuery) -> AuspiciousnessResult {
        let year = query.year_pillar;
        let weights = &self.config.weights;
        let deities = &self.config.deities;

        let (stem, stem_text) = stem_score(query.day_stem, year.stem());
        let (branch, relations) = branch_score(query.day_branch, year.branch());

        let god = query
            .ten_god
            .unwrap_or_else(|| ten_god(query.day_stem, year.stem()));
        let ten_god_component = clamp_score(BASE_SCORE + ten_god_valence(god));

        let mut good_deities = Vec::new();
        let mut bad_deities = Vec::new();
        let mut deity = BASE_SCORE;
        let mut seen = BTreeSet::new();
        for name in &query.deities {
            // each distinct name counts once
            if !seen.insert(name.as_str()) {
                continue;
            }
            if deities.is_auspicious(name) {
                deity = clamp_score(deity + DEITY_STEP);
                good_deities.push(name.as_str());
            } else if deities.is_inauspicious(name) {
                deity = clamp_score(deity - DEITY_STEP);
                bad_deities.push(name.as_str());
            }
        }

        let year_feeds_day = year.stem().element().generates() == query.day_stem.element();
        let element = clamp_score(BASE_SCORE + if year_feeds_day { 10.0 } else { 0.0 });

        let luck = query.luck_pillar.map_or(0.0, |l| luck_adjustment(l, year));

        let weighted = [
            (stem, weights.stem),
            (branch, weights.branch),
            (ten_god_component, weights.ten_god),
            (deity, weights.deity),
            (element, weights.element),
        ];
        let sum = weighted
            .iter()
            .fold(0.0, |acc, &(component, weight)| clamp_score(acc + component * weight));
        let score = clamp_score(sum + luck);
        let level = Level::from_score(score, &self.config.levels);

        tracing::debug!(year = %year, score, level = level.name(), "scored year");

        let relation_text = if relations.is_empty() {
            "无刑冲合害".to_string()
        } else {
            relations
                .iter()
                .map(|r| r.name())
                .collect::<Vec<_>>()
                .join("、")
        };
        let deity_text = match (good_deities.is_empty(), bad_deities.is_empty()) {
            (true, true) => "无".to_string(),
            _ => format!("吉神{}，凶煞{}", join_or_none(&good_deities), join_or_none(&bad_deities)),
        };
        let mut lines = vec![
            format!("流年{year}，日主{}：{stem_text}", query.day_stem),
            format!("日支{}与流年{}：{relation_text}", query.day_branch, year.branch()),
            format!("流年十神：{god}"),
            format!("神煞：{deity_text}"),
        ];
        if let Some(l) = query.luck_pillar {
            lines.push(format!("大运{l}调整：{luck:+}"));
        }
        lines.push(format!("综合评分：{score:.1}（{level}）"));

        AuspiciousnessResult {
            score,
            level,
            score_breakdown: ScoreBreakdown {
                stem,
                branch,
                ten_god: ten_god_component,
                deity,
                element,
                luck_adjustment: luck,
            },
            analysis: lines.join("\n"),
        }
    }
}

fn join_or_none(names: &[&str]) -> String {
    if names.is_empty() {
        "无".to_string()
    } else {
        names.join("、")
    }
}
