//! Void emptiness (空亡 / 旬空).
//!
//! The 60 pillars split into six decades (旬), each headed by a 甲 pillar.
//! A decade pairs ten stems with ten branches; the two branches left over
//! are "empty" for every pillar in that decade.

use std::fmt::{Display, Formatter};

use crate::branch::Branch;
use crate::fallback::UNKNOWN;
use crate::pillar::Pillar;

/// Empty branch pair for each decade, indexed by `cycle_index / 10`.
///
/// 甲子旬 戌亥, 甲戌旬 申酉, 甲申旬 午未, 甲午旬 辰巳, 甲辰旬 寅卯, 甲寅旬 子丑.
pub const XUN_KONG: [(Branch, Branch); 6] = [
    (Branch::Xu, Branch::Hai),
    (Branch::Shen, Branch::You),
    (Branch::Wu, Branch::Wei),
    (Branch::Chen, Branch::Si),
    (Branch::Yin, Branch::Mao),
    (Branch::Zi, Branch::Chou),
];

/// The two empty branches of a decade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoidPair {
    pub first: Branch,
    pub second: Branch,
}

impl VoidPair {
    pub fn contains(&self, branch: Branch) -> bool {
        self.first == branch || self.second == branch
    }
}

impl Display for VoidPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

crate::text_serde::impl_text_serialize!(VoidPair);

/// Decade head (旬首) of `pillar`, always a 甲 pillar.
pub const fn xun_head(pillar: Pillar) -> Pillar {
    Pillar::from_cycle_index(pillar.cycle_index() / 10 * 10)
}

/// Empty branches for `pillar`'s decade.
pub const fn void_emptiness(pillar: Pillar) -> VoidPair {
    let (first, second) = XUN_KONG[(pillar.cycle_index() / 10) as usize];
    VoidPair { first, second }
}

/// Empty branches of pillar text as a string such as `"戌亥"`; [`UNKNOWN`] otherwise.
pub fn void_emptiness_text(pillar: &str) -> String {
    match pillar.parse::<Pillar>() {
        Ok(p) => void_emptiness(p).to_string(),
        Err(_) => UNKNOWN.to_string(),
    }
}
