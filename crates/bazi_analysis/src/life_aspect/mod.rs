//! Life-aspect judgments (容貌, 婚姻, 子女, ...) from a read-only chart view.
//!
//! Each aspect is one pure rule in [`RULES`]. A rule always yields a
//! non-empty string: matched sub-conditions joined with `；`, or a neutral
//! sentence when nothing matches.

pub mod reference;
mod rules;

use bazi_base::{
    Branch, ElementTally, FourPillars, Gender, PillarPosition, Stem, TenGod, ten_god,
};
use serde::ser::{Serialize, SerializeMap, Serializer};

pub use rules::RULES;

/// Ten-god label of each stem relative to the day master. The day slot holds 比肩.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StemTenGods {
    pub year: TenGod,
    pub month: TenGod,
    pub day: TenGod,
    pub hour: TenGod,
}

impl StemTenGods {
    /// Derive the labels from the pillars.
    pub fn of(pillars: &FourPillars) -> Self {
        let dm = pillars.day_master();
        Self {
            year: ten_god(dm, pillars.year.stem()),
            month: ten_god(dm, pillars.month.stem()),
            day: TenGod::BiJian,
            hour: ten_god(dm, pillars.hour.stem()),
        }
    }

    pub const fn get(&self, position: PillarPosition) -> TenGod {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }
}

/// Everything a rule may look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartView {
    pub pillars: FourPillars,
    pub ten_gods: StemTenGods,
    pub gender: Gender,
    pub tally: ElementTally,
}

/// The three stems that are read against the day master.
const VISIBLE: [PillarPosition; 3] = [PillarPosition::Year, PillarPosition::Month, PillarPosition::Hour];

impl ChartView {
    /// View with ten-gods and element tally derived from the pillars.
    pub fn new(pillars: FourPillars, gender: Gender) -> Self {
        Self {
            pillars,
            ten_gods: StemTenGods::of(&pillars),
            gender,
            tally: ElementTally::from_pillars(&pillars),
        }
    }

    /// Replace the derived ten-god labels with caller-supplied ones.
    pub fn with_ten_gods(mut self, ten_gods: StemTenGods) -> Self {
        self.ten_gods = ten_gods;
        self
    }

    /// Replace the derived element tally with a caller-supplied one.
    pub fn with_tally(mut self, tally: ElementTally) -> Self {
        self.tally = tally;
        self
    }

    pub fn day_master(&self) -> Stem {
        self.pillars.day_master()
    }

    pub fn stems(&self) -> [Stem; 4] {
        self.pillars.stems()
    }

    pub fn branches(&self) -> [Branch; 4] {
        self.pillars.branches()
    }

    /// Positions (year, month, hour) whose stem carries `god`.
    pub fn positions_of(&self, god: TenGod) -> Vec<PillarPosition> {
        VISIBLE
            .into_iter()
            .filter(|&p| self.ten_gods.get(p) == god)
            .collect()
    }

    /// True if any of year, month, hour stems carries `god`.
    pub fn has(&self, god: TenGod) -> bool {
        VISIBLE.iter().any(|&p| self.ten_gods.get(p) == god)
    }

    /// Number of year, month, hour stems carrying any of `gods`.
    pub fn count_of(&self, gods: &[TenGod]) -> usize {
        VISIBLE
            .iter()
            .filter(|&&p| gods.contains(&self.ten_gods.get(p)))
            .count()
    }

    /// Every unordered pair of branch positions.
    pub fn branch_pairs(&self) -> impl Iterator<Item = (PillarPosition, Branch, PillarPosition, Branch)> + '_ {
        const POSITIONS: [PillarPosition; 4] = [
            PillarPosition::Year,
            PillarPosition::Month,
            PillarPosition::Day,
            PillarPosition::Hour,
        ];
        (0..4).flat_map(move |i| {
            (i + 1..4).map(move |j| {
                let (a, b) = (POSITIONS[i], POSITIONS[j]);
                (a, self.pillars.get(a).branch(), b, self.pillars.get(b).branch())
            })
        })
    }
}

/// One registered aspect.
pub struct LifeAspectRule {
    pub name: &'static str,
    pub evaluate: fn(&ChartView) -> String,
}

/// Aspect judgments in registry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeAspectReport {
    entries: Vec<(&'static str, String)>,
}

impl LifeAspectReport {
    pub fn get(&self, aspect: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == aspect)
            .map(|(_, text)| text.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(name, text)| (*name, text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for LifeAspectReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, text) in &self.entries {
            map.serialize_entry(name, text)?;
        }
        map.end()
    }
}

/// Run every rule in [`RULES`] over `view`.
pub fn evaluate_life_aspects(view: &ChartView) -> LifeAspectReport {
    LifeAspectReport {
        entries: RULES
            .iter()
            .map(|rule| (rule.name, (rule.evaluate)(view)))
            .collect(),
    }
}
