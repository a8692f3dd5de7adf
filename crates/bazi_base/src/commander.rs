//! Commander element (人元司令): which hidden stem rules the month on a given day.
//!
//! Each month branch has an ordered list of `(last_day, stem)` ranges counted
//! from the month-opening solar term. Without a month branch or day count the
//! resolver falls back to literal date overrides and then a flat ten-stem list.

use std::fmt::{Display, Formatter};

use crate::branch::Branch;
use crate::calendar::LunarDate;
use crate::fallback::{NamedResolver, resolve_first};
use crate::pillar::Pillar;
use crate::solar_term::SolarTerm;
use crate::stem::Stem;

/// Per month branch (index 0 = 子): `(last_day, stem)` ranges in order.
pub const COMMANDER_TABLE: [&[(u32, Stem)]; 12] = [
    &[(10, Stem::Ren), (30, Stem::Gui)],
    &[(9, Stem::Gui), (12, Stem::Xin), (30, Stem::Ji)],
    &[(5, Stem::Wu), (10, Stem::Bing), (30, Stem::Jia)],
    &[(10, Stem::Jia), (30, Stem::Yi)],
    &[(9, Stem::Yi), (12, Stem::Gui), (30, Stem::Wu)],
    &[(5, Stem::Wu), (14, Stem::Geng), (30, Stem::Bing)],
    &[(10, Stem::Bing), (19, Stem::Ji), (30, Stem::Ding)],
    &[(9, Stem::Ding), (12, Stem::Yi), (30, Stem::Ji)],
    &[(7, Stem::Wu), (10, Stem::Ren), (30, Stem::Geng)],
    &[(10, Stem::Geng), (30, Stem::Xin)],
    &[(9, Stem::Xin), (12, Stem::Ding), (30, Stem::Wu)],
    &[(7, Stem::Wu), (12, Stem::Jia), (30, Stem::Ren)],
];

/// Flat list used when only the lunar month and day are known.
pub const COMMANDERS: [Stem; 10] = crate::stem::ALL_STEMS;

/// Literal `(lunar month, lunar day, year pillar)` overrides. `None` matches any year.
pub const COMMANDER_OVERRIDES: [(u8, u8, Option<Pillar>, Stem); 2] = [
    (1, 1, None, Stem::Jia),
    (12, 30, Some(Pillar::from_cycle_index(58)), Stem::Gui), // 壬戌年
];

/// The ruling stem; renders as `"{stem}{element}用事"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Commander(pub Stem);

impl Commander {
    pub const fn stem(self) -> Stem {
        self.0
    }
}

impl Display for Commander {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}用事", self.0, self.0.element())
    }
}

crate::text_serde::impl_text_serialize!(Commander);

/// Ruling stem for `month_branch` on day `days_elapsed` of the month.
///
/// Day 0 counts as day 1; days past the last range stay on the last stem.
pub fn commander_for_day(month_branch: Branch, days_elapsed: u32) -> Stem {
    let day = days_elapsed.max(1);
    let ranges = COMMANDER_TABLE[month_branch.index() as usize];
    ranges
        .iter()
        .find(|&&(last, _)| day <= last)
        .or(ranges.last())
        .map_or(Stem::Jia, |&(_, stem)| stem)
}

/// Inputs for commander resolution; any part may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommanderQuery {
    pub solar_term: Option<SolarTerm>,
    pub month_branch: Option<Branch>,
    pub days_elapsed: Option<u32>,
    pub lunar_date: Option<LunarDate>,
    pub year_pillar: Option<Pillar>,
}

fn by_solar_term(q: &CommanderQuery) -> Option<Stem> {
    Some(commander_for_day(q.solar_term?.month_branch(), q.days_elapsed?))
}

fn by_month_branch(q: &CommanderQuery) -> Option<Stem> {
    Some(commander_for_day(q.month_branch?, q.days_elapsed?))
}

fn by_override(q: &CommanderQuery) -> Option<Stem> {
    let date = q.lunar_date?;
    COMMANDER_OVERRIDES
        .iter()
        .find(|&&(m, d, year, _)| {
            m == date.month && d == date.day && year.is_none_or(|y| Some(y) == q.year_pillar)
        })
        .map(|&(_, _, _, stem)| stem)
}

fn by_lunar_formula(q: &CommanderQuery) -> Option<Stem> {
    let date = q.lunar_date?;
    Some(COMMANDERS[(date.month as usize + date.day as usize) % 10])
}

/// Resolution order for [`commander`].
pub const COMMANDER_CHAIN: [NamedResolver<CommanderQuery, Stem>; 4] = [
    ("solar_term", by_solar_term),
    ("month_branch", by_month_branch),
    ("date_override", by_override),
    ("lunar_formula", by_lunar_formula),
];

/// Resolve the commander; `None` renders as `未知`.
pub fn commander(query: &CommanderQuery) -> Option<Commander> {
    resolve_first(query, &COMMANDER_CHAIN).map(Commander)
}
