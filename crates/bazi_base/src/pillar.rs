//! Sexagenary pillars (干支) and the four-pillar chart.
//!
//! Only the 60 stem/branch combinations of equal polarity exist. The cycle
//! index runs 甲子=0, 乙丑=1, … 癸亥=59 and satisfies
//! `index % 10 == stem` and `index % 12 == branch`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::branch::Branch;
use crate::error::BaziError;
use crate::stem::Stem;

/// One stem/branch pair from the 60-term cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

impl Pillar {
    /// Pair `stem` with `branch`. `None` if their polarity differs.
    pub const fn new(stem: Stem, branch: Branch) -> Option<Self> {
        if stem.index() % 2 == branch.index() % 2 {
            Some(Self { stem, branch })
        } else {
            None
        }
    }

    /// Caller guarantees equal polarity.
    pub(crate) const fn aligned(stem: Stem, branch: Branch) -> Self {
        debug_assert!(stem.index() % 2 == branch.index() % 2);
        Self { stem, branch }
    }

    /// Pillar at sexagenary `index`, wrapping modulo 60.
    pub const fn from_cycle_index(index: u8) -> Self {
        let i = index % 60;
        Self {
            stem: Stem::from_index(i % 10),
            branch: Branch::from_index(i % 12),
        }
    }

    /// 0-based sexagenary index (甲子=0 .. 癸亥=59).
    pub const fn cycle_index(self) -> u8 {
        // Unique k in 0..60 with k ≡ s (mod 10) and k ≡ b (mod 12).
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        (6 * s - 5 * b).rem_euclid(60) as u8
    }

    pub const fn stem(self) -> Stem {
        self.stem
    }

    pub const fn branch(self) -> Branch {
        self.branch
    }

    /// Step forward (or backward) around the 60-term cycle.
    pub const fn offset(self, steps: i32) -> Self {
        Self::from_cycle_index(((self.cycle_index() as i32 + steps.rem_euclid(60)) % 60) as u8)
    }

    /// All 60 pillars in cycle order.
    pub fn all() -> impl Iterator<Item = Pillar> {
        (0..60u8).map(Self::from_cycle_index)
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl FromStr for Pillar {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let (Some(sc), Some(bc), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(BaziError::MalformedPillar(s.into()));
        };
        let stem = Stem::from_char(sc).ok_or_else(|| BaziError::MalformedPillar(s.into()))?;
        let branch = Branch::from_char(bc).ok_or_else(|| BaziError::MalformedPillar(s.into()))?;
        Self::new(stem, branch).ok_or(BaziError::ParityMismatch { stem, branch })
    }
}

crate::text_serde::impl_text_serde!(Pillar);

// ---------------------------------------------------------------------------
// Four pillars
// ---------------------------------------------------------------------------

/// Position of a pillar within the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

impl PillarPosition {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "年柱",
            Self::Month => "月柱",
            Self::Day => "日柱",
            Self::Hour => "时柱",
        }
    }
}

/// The year, month, day and hour pillars of a birth chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    pub const fn new(year: Pillar, month: Pillar, day: Pillar, hour: Pillar) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Parse four pillar strings in year, month, day, hour order.
    pub fn parse(year: &str, month: &str, day: &str, hour: &str) -> Result<Self, BaziError> {
        Ok(Self::new(
            year.parse()?,
            month.parse()?,
            day.parse()?,
            hour.parse()?,
        ))
    }

    /// Pillars in year, month, day, hour order.
    pub const fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    pub const fn get(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// The four stems in year, month, day, hour order.
    pub fn stems(&self) -> [Stem; 4] {
        self.pillars().map(Pillar::stem)
    }

    /// The four branches in year, month, day, hour order.
    pub fn branches(&self) -> [Branch; 4] {
        self.pillars().map(Pillar::branch)
    }

    /// The day stem (日主).
    pub const fn day_master(&self) -> Stem {
        self.day.stem()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_distinct_pillars() {
        let all: Vec<Pillar> = Pillar::all().collect();
        assert_eq!(all.len(), 60);
        for (i, p) in all.iter().enumerate() {
            assert_eq!(p.cycle_index() as usize, i);
        }
        assert_eq!(all[0].to_string(), "甲子");
        assert_eq!(all[10].to_string(), "甲戌");
        assert_eq!(all[59].to_string(), "癸亥");
    }

    #[test]
    fn new_rejects_mixed_polarity() {
        assert!(Pillar::new(Stem::Jia, Branch::Chou).is_none());
        assert!(Pillar::new(Stem::Yi, Branch::Chou).is_some());
    }

    #[test]
    fn parse_errors() {
        assert!(matches!("甲丑".parse::<Pillar>(), Err(BaziError::ParityMismatch { .. })));
        assert!(matches!("甲".parse::<Pillar>(), Err(BaziError::MalformedPillar(_))));
        assert!(matches!("甲子丑".parse::<Pillar>(), Err(BaziError::MalformedPillar(_))));
        assert!(matches!("子甲".parse::<Pillar>(), Err(BaziError::MalformedPillar(_))));
    }

    #[test]
    fn offset_wraps() {
        let p: Pillar = "癸亥".parse().unwrap();
        assert_eq!(p.offset(1).to_string(), "甲子");
        assert_eq!(p.offset(-59).to_string(), "甲子");
    }

    #[test]
    fn offset_extreme_steps() {
        let jia_zi = Pillar::from_cycle_index(0);
        assert_eq!(jia_zi.offset(i32::MAX).to_string(), "辛未");
        assert_eq!(jia_zi.offset(i32::MIN).to_string(), "丙辰");
        assert_eq!(Pillar::from_cycle_index(59).offset(i32::MAX).to_string(), "庚午");
    }

    #[test]
    fn serde_as_text() {
        let p: Pillar = "丙寅".parse().unwrap();
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"丙寅\"");
        let back: Pillar = serde_json::from_str("\"丙寅\"").unwrap();
        assert_eq!(back, p);
        assert!(serde_json::from_str::<Pillar>("\"丙卯\"").is_err());
    }

    #[test]
    fn four_pillars_accessors() {
        let fp = FourPillars::parse("甲子", "丙寅", "戊辰", "庚申").unwrap();
        assert_eq!(fp.day_master(), Stem::Wu);
        assert_eq!(fp.branches(), [Branch::Zi, Branch::Yin, Branch::Chen, Branch::Shen]);
        assert_eq!(fp.get(PillarPosition::Hour).to_string(), "庚申");
    }
}
