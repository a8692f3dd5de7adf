//! The ten heavenly stems (天干).
//!
//! Index order 甲(0) 乙(1) 丙(2) 丁(3) 戊(4) 己(5) 庚(6) 辛(7) 壬(8) 癸(9).
//! Even indices are yang, odd indices are yin.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::element::Element;
use crate::error::BaziError;

/// The ten heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All ten stems in cyclic order (index 0 = 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_CHARS: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

const STEM_NAMES: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

impl Stem {
    /// 0-based cyclic index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at `index`, wrapping modulo 10.
    pub const fn from_index(index: u8) -> Self {
        ALL_STEMS[(index % 10) as usize]
    }

    /// Single-character Chinese name.
    pub const fn name(self) -> &'static str {
        STEM_NAMES[self.index() as usize]
    }

    /// The stem as a `char`.
    pub const fn as_char(self) -> char {
        STEM_CHARS[self.index() as usize]
    }

    /// Parse a single character.
    pub fn from_char(c: char) -> Option<Self> {
        STEM_CHARS
            .iter()
            .position(|&sc| sc == c)
            .map(|i| ALL_STEMS[i])
    }

    /// Element of the stem (甲乙木, 丙丁火, 戊己土, 庚辛金, 壬癸水).
    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Mu,
            Self::Bing | Self::Ding => Element::Huo,
            Self::Wu | Self::Ji => Element::Tu,
            Self::Geng | Self::Xin => Element::Jin,
            Self::Ren | Self::Gui => Element::Shui,
        }
    }

    /// True for the five yang stems.
    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }

    /// Step forward (or backward for negative `steps`) around the cycle.
    pub const fn offset(self, steps: i32) -> Self {
        ALL_STEMS[((self.index() as i32 + steps.rem_euclid(10)) % 10) as usize]
    }
}

/// Day-master attribute, e.g. `甲木`.
pub fn day_master_attribute(day_stem: Stem) -> String {
    format!("{}{}", day_stem.name(), day_stem.element().name())
}

impl Display for Stem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stem {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c).ok_or_else(|| BaziError::UnknownStem(s.into())),
            _ => Err(BaziError::UnknownStem(s.into())),
        }
    }
}

crate::text_serde::impl_text_serde!(Stem);
