//! Life gua (命卦).
//!
//! With year, month and day branches available, the gua is a trigram pair
//! built from branch numbers. Otherwise the single-trigram 八宅 formula over
//! the birth year and gender is used.

use std::fmt::{Display, Formatter};

use crate::branch::Branch;
use crate::calendar::Gender;
use crate::fallback::{NamedResolver, resolve_first};
use crate::palace::{MonthNumber, StandardNumber};

/// The eight trigrams in 先天 order (乾1 兑2 离3 震4 巽5 坎6 艮7 坤8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Trigram {
    Qian,
    Dui,
    Li,
    Zhen,
    Xun,
    Kan,
    Gen,
    Kun,
}

/// Trigrams by 先天 number minus one.
pub const XIANTIAN_TRIGRAMS: [Trigram; 8] = [
    Trigram::Qian,
    Trigram::Dui,
    Trigram::Li,
    Trigram::Zhen,
    Trigram::Xun,
    Trigram::Kan,
    Trigram::Gen,
    Trigram::Kun,
];

impl Trigram {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Qian => "乾",
            Self::Dui => "兑",
            Self::Li => "离",
            Self::Zhen => "震",
            Self::Xun => "巽",
            Self::Kan => "坎",
            Self::Gen => "艮",
            Self::Kun => "坤",
        }
    }

    /// Trigram for a 先天 number in 1..=8.
    pub const fn from_xiantian(number: u8) -> Option<Self> {
        if number >= 1 && number <= 8 {
            Some(XIANTIAN_TRIGRAMS[(number - 1) as usize])
        } else {
            None
        }
    }
}

impl Display for Trigram {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved life gua.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifeGua {
    /// Branch-number method: upper and lower trigram.
    Pair { upper: Trigram, lower: Trigram },
    /// Year/gender method: a single trigram.
    Single(Trigram),
}

impl Display for LifeGua {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pair { upper, lower } => write!(f, "{upper}{lower}"),
            Self::Single(t) => write!(f, "{t}"),
        }
    }
}

crate::text_serde::impl_text_serialize!(LifeGua);

/// Inputs for life-gua resolution; any part may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LifeGuaQuery {
    pub year_branch: Option<Branch>,
    pub month_branch: Option<Branch>,
    pub day_branch: Option<Branch>,
    pub hour_branch: Option<Branch>,
    pub year: Option<i32>,
    pub gender: Option<Gender>,
}

/// Reduce a sum to 1..=8 (remainder 0 counts as 8).
const fn mod8_1based(sum: u32) -> u8 {
    match (sum % 8) as u8 {
        0 => 8,
        r => r,
    }
}

/// Branch-number method. Month uses [`MonthNumber`]; the others [`StandardNumber`].
pub fn life_gua_from_branches(
    year: Branch,
    month: Branch,
    day: Branch,
    hour: Option<Branch>,
) -> LifeGua {
    let base = StandardNumber::of(year).get() as u32
        + MonthNumber::of(month).get() as u32
        + StandardNumber::of(day).get() as u32;
    let upper_n = mod8_1based(base);
    let lower_n = match hour {
        Some(h) => mod8_1based(base + StandardNumber::of(h).get() as u32),
        None => upper_n,
    };
    LifeGua::Pair {
        upper: XIANTIAN_TRIGRAMS[(upper_n - 1) as usize],
        lower: XIANTIAN_TRIGRAMS[(lower_n - 1) as usize],
    }
}

/// 八宅 remainder table, keyed 1..=9 (bucket 5 depends on gender).
const fn bazhai_trigram(bucket: u8, gender: Gender) -> Option<Trigram> {
    match bucket {
        1 => Some(Trigram::Kan),
        2 => Some(Trigram::Kun),
        3 => Some(Trigram::Zhen),
        4 => Some(Trigram::Xun),
        5 => match gender {
            Gender::Male => Some(Trigram::Kun),
            Gender::Female => Some(Trigram::Gen),
        },
        6 => Some(Trigram::Qian),
        7 => Some(Trigram::Dui),
        8 => Some(Trigram::Gen),
        9 => Some(Trigram::Li),
        _ => None,
    }
}

/// Years whose gua is fixed by the post-2000 correction rather than the formula.
pub const LIFE_GUA_OVERRIDES: [(i32, Gender, Trigram); 3] = [
    (2000, Gender::Male, Trigram::Li),
    (2000, Gender::Female, Trigram::Qian),
    (2001, Gender::Male, Trigram::Gen),
];

/// Year/gender method. `None` when the remainder lands on an unmapped bucket.
pub fn life_gua_from_year(year: i32, gender: Gender) -> Option<LifeGua> {
    if let Some(&(_, _, t)) = LIFE_GUA_OVERRIDES
        .iter()
        .find(|&&(y, g, _)| y == year && g == gender)
    {
        return Some(LifeGua::Single(t));
    }
    let yy = year.rem_euclid(100);
    let bucket = match gender {
        Gender::Male => (100 - yy) % 9,
        Gender::Female => (yy + 5) % 9,
    };
    bazhai_trigram(bucket as u8, gender).map(LifeGua::Single)
}

fn by_branches(q: &LifeGuaQuery) -> Option<LifeGua> {
    Some(life_gua_from_branches(
        q.year_branch?,
        q.month_branch?,
        q.day_branch?,
        q.hour_branch,
    ))
}

fn by_year_gender(q: &LifeGuaQuery) -> Option<LifeGua> {
    life_gua_from_year(q.year?, q.gender?)
}

/// Resolution order for [`life_gua`].
pub const LIFE_GUA_CHAIN: [NamedResolver<LifeGuaQuery, LifeGua>; 2] = [
    ("branches", by_branches),
    ("year_gender", by_year_gender),
];

/// Resolve the life gua; `None` renders as `未知`.
pub fn life_gua(query: &LifeGuaQuery) -> Option<LifeGua> {
    resolve_first(query, &LIFE_GUA_CHAIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_method_with_hour() {
        // 子=1, month 寅=1, 子=1 → upper 3 (离); +hour 子=1 → lower 4 (震)
        let g = life_gua_from_branches(Branch::Zi, Branch::Yin, Branch::Zi, Some(Branch::Zi));
        assert_eq!(g.to_string(), "离震");
    }

    #[test]
    fn branch_method_zero_maps_to_kun() {
        // 亥=12, month 子=11, 辰=5 → 28 mod 8 = 4 (震); hour 辰=5 → 33 mod 8 = 1 (乾)
        let g = life_gua_from_branches(Branch::Hai, Branch::Zi, Branch::Chen, Some(Branch::Chen));
        assert_eq!(g.to_string(), "震乾");
        // 申=9, month 寅=1, 午=7 → 17 mod 8 = 1; hour 未=8 → 25 mod 8 = 1
        let g = life_gua_from_branches(Branch::Shen, Branch::Yin, Branch::Wu, Some(Branch::Wei));
        assert_eq!(g.to_string(), "乾乾");
        // 寅=3, month 寅=1, 寅=3 → 7; hour 子=1 → 8 (坤)
        let g = life_gua_from_branches(Branch::Yin, Branch::Yin, Branch::Yin, Some(Branch::Zi));
        assert_eq!(g.to_string(), "艮坤");
    }

    #[test]
    fn missing_hour_repeats_upper() {
        let g = life_gua_from_branches(Branch::Zi, Branch::Yin, Branch::Zi, None);
        assert_eq!(g.to_string(), "离离");
    }

    #[test]
    fn year_formula() {
        // 1990 male: (100-90)%9 = 1 → 坎
        assert_eq!(life_gua_from_year(1990, Gender::Male).unwrap().to_string(), "坎");
        // 1990 female: (90+5)%9 = 5 → 艮
        assert_eq!(life_gua_from_year(1990, Gender::Female).unwrap().to_string(), "艮");
        // 1986 male: 14%9 = 5 → 坤
        assert_eq!(life_gua_from_year(1986, Gender::Male).unwrap().to_string(), "坤");
    }

    #[test]
    fn year_formula_unmapped_bucket() {
        // 1991 male: 9%9 = 0 → unmapped
        assert_eq!(life_gua_from_year(1991, Gender::Male), None);
    }

    #[test]
    fn overrides_win() {
        assert_eq!(life_gua_from_year(2000, Gender::Male).unwrap().to_string(), "离");
        assert_eq!(life_gua_from_year(2001, Gender::Male).unwrap().to_string(), "艮");
    }

    #[test]
    fn chain_prefers_branches() {
        let q = LifeGuaQuery {
            year_branch: Some(Branch::Zi),
            month_branch: Some(Branch::Yin),
            day_branch: Some(Branch::Zi),
            hour_branch: None,
            year: Some(1990),
            gender: Some(Gender::Male),
        };
        assert_eq!(life_gua(&q).unwrap().to_string(), "离离");
        let q = LifeGuaQuery {
            day_branch: None,
            ..q
        };
        assert_eq!(life_gua(&q).unwrap().to_string(), "坎");
        assert_eq!(life_gua(&LifeGuaQuery::default()), None);
    }
}
