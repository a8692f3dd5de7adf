//! Fetal origin (胎元) and fetal breath (胎息).
//!
//! 胎元: month stem advanced one, month branch advanced three.
//! 胎息: day stem and branch each replaced by their combining partner
//! (stem five-combination, branch six-harmony).

use crate::fallback::{NamedResolver, resolve_first};
use crate::pillar::Pillar;
use crate::relations::{branch_partner, stem_partner};

/// Month pillars whose fetal origin is recorded explicitly.
pub const FETAL_ORIGIN_OVERRIDES: [(Pillar, Pillar); 2] = [
    (Pillar::from_cycle_index(7), Pillar::from_cycle_index(58)),  // 辛未 → 壬戌
    (Pillar::from_cycle_index(58), Pillar::from_cycle_index(49)), // 壬戌 → 癸丑
];

/// Day pillars whose fetal breath is recorded explicitly.
pub const FETAL_BREATH_OVERRIDES: [(Pillar, Pillar); 4] = [
    (Pillar::from_cycle_index(30), Pillar::from_cycle_index(55)), // 甲午 → 己未
    (Pillar::from_cycle_index(42), Pillar::from_cycle_index(7)),  // 丙午 → 辛未
    (Pillar::from_cycle_index(31), Pillar::from_cycle_index(6)),  // 乙未 → 庚午
    (Pillar::from_cycle_index(43), Pillar::from_cycle_index(18)), // 丁未 → 壬午
];

fn lookup(table: &[(Pillar, Pillar)], key: Pillar) -> Option<Pillar> {
    table.iter().find(|(k, _)| *k == key).map(|&(_, v)| v)
}

/// 胎元 by formula: stem +1, branch +3 (polarity flips on both, so the pair stays valid).
pub const fn fetal_origin_formula(month: Pillar) -> Pillar {
    Pillar::aligned(month.stem().offset(1), month.branch().offset(3))
}

/// 胎息 by formula: combining partner of stem and branch.
pub fn fetal_breath_formula(day: Pillar) -> Pillar {
    Pillar::aligned(stem_partner(day.stem()), branch_partner(day.branch()))
}

const FETAL_ORIGIN_CHAIN: [NamedResolver<Pillar, Pillar>; 2] = [
    ("override", |p| lookup(&FETAL_ORIGIN_OVERRIDES, *p)),
    ("formula", |p| Some(fetal_origin_formula(*p))),
];

const FETAL_BREATH_CHAIN: [NamedResolver<Pillar, Pillar>; 2] = [
    ("override", |p| lookup(&FETAL_BREATH_OVERRIDES, *p)),
    ("formula", |p| Some(fetal_breath_formula(*p))),
];

/// Fetal origin of a month pillar.
pub fn fetal_origin(month: Pillar) -> Pillar {
    resolve_first(&month, &FETAL_ORIGIN_CHAIN).unwrap_or_else(|| fetal_origin_formula(month))
}

/// Fetal breath of a day pillar.
pub fn fetal_breath(day: Pillar) -> Pillar {
    resolve_first(&day, &FETAL_BREATH_CHAIN).unwrap_or_else(|| fetal_breath_formula(day))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> Pillar {
        s.parse().unwrap()
    }

    #[test]
    fn override_table_labels() {
        assert_eq!(FETAL_ORIGIN_OVERRIDES[0].0.to_string(), "辛未");
        assert_eq!(FETAL_ORIGIN_OVERRIDES[0].1.to_string(), "壬戌");
        assert_eq!(FETAL_ORIGIN_OVERRIDES[1].1.to_string(), "癸丑");
        assert_eq!(FETAL_BREATH_OVERRIDES[0].0.to_string(), "甲午");
        assert_eq!(FETAL_BREATH_OVERRIDES[0].1.to_string(), "己未");
        assert_eq!(FETAL_BREATH_OVERRIDES[3].0.to_string(), "丁未");
        assert_eq!(FETAL_BREATH_OVERRIDES[3].1.to_string(), "壬午");
    }

    #[test]
    fn literal_fetal_origins() {
        assert_eq!(fetal_origin(p("辛未")), p("壬戌"));
        assert_eq!(fetal_origin(p("壬戌")), p("癸丑"));
    }

    #[test]
    fn fetal_origin_formula_cases() {
        assert_eq!(fetal_origin(p("丙寅")), p("丁巳"));
        assert_eq!(fetal_origin(p("癸亥")), p("甲寅"));
    }

    #[test]
    fn fetal_breath_cases() {
        assert_eq!(fetal_breath(p("甲子")), p("己丑"));
        assert_eq!(fetal_breath(p("丙寅")), p("辛亥"));
        assert_eq!(fetal_breath(p("甲午")), p("己未"));
        assert_eq!(fetal_breath(p("癸酉")), p("戊辰"));
    }

    #[test]
    fn always_valid_pillars() {
        for x in Pillar::all() {
            let o = fetal_origin(x);
            let b = fetal_breath(x);
            assert!(Pillar::new(o.stem(), o.branch()).is_some());
            assert!(Pillar::new(b.stem(), b.branch()).is_some());
        }
    }
}
