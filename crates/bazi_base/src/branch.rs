//! The twelve earthly branches (地支).
//!
//! Index order 子(0) 丑(1) 寅(2) 卯(3) 辰(4) 巳(5) 午(6) 未(7) 申(8) 酉(9) 戌(10) 亥(11).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::element::Element;
use crate::error::BaziError;

/// The twelve earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All twelve branches in cyclic order (index 0 = 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_CHARS: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

const BRANCH_NAMES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

impl Branch {
    /// 0-based cyclic index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch at `index`, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_BRANCHES[(index % 12) as usize]
    }

    /// Single-character Chinese name.
    pub const fn name(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize]
    }

    /// The branch as a `char`.
    pub const fn as_char(self) -> char {
        BRANCH_CHARS[self.index() as usize]
    }

    /// Parse a single character.
    pub fn from_char(c: char) -> Option<Self> {
        BRANCH_CHARS
            .iter()
            .position(|&bc| bc == c)
            .map(|i| ALL_BRANCHES[i])
    }

    /// Principal element of the branch.
    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Mu,
            Self::Si | Self::Wu => Element::Huo,
            Self::Chen | Self::Xu | Self::Chou | Self::Wei => Element::Tu,
            Self::Shen | Self::You => Element::Jin,
            Self::Hai | Self::Zi => Element::Shui,
        }
    }

    /// True for the six yang branches.
    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }

    /// Step forward (or backward for negative `steps`) around the cycle.
    pub const fn offset(self, steps: i32) -> Self {
        ALL_BRANCHES[((self.index() as i32 + steps.rem_euclid(12)) % 12) as usize]
    }

    /// Forward steps from `self` to `to`, in `0..12`.
    pub const fn steps_to(self, to: Branch) -> u8 {
        (to.index() as i32 - self.index() as i32).rem_euclid(12) as u8
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Branch {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_char(c).ok_or_else(|| BaziError::UnknownBranch(s.into()))
            }
            _ => Err(BaziError::UnknownBranch(s.into())),
        }
    }
}

crate::text_serde::impl_text_serde!(Branch);
