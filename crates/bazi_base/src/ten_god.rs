//! Ten gods (十神): the relation of a stem to the day master.
//!
//! Derived from the element relation plus whether the two stems share
//! polarity (same polarity → the 偏 / 比 form).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::element::ElementRelation;
use crate::error::BaziError;
use crate::stem::Stem;

/// The ten gods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenGod {
    /// 比肩
    BiJian,
    /// 劫财
    JieCai,
    /// 食神
    ShiShen,
    /// 伤官
    ShangGuan,
    /// 偏财
    PianCai,
    /// 正财
    ZhengCai,
    /// 七杀 (偏官)
    QiSha,
    /// 正官
    ZhengGuan,
    /// 偏印 (枭神)
    PianYin,
    /// 正印
    ZhengYin,
}

pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::BiJian,
    TenGod::JieCai,
    TenGod::ShiShen,
    TenGod::ShangGuan,
    TenGod::PianCai,
    TenGod::ZhengCai,
    TenGod::QiSha,
    TenGod::ZhengGuan,
    TenGod::PianYin,
    TenGod::ZhengYin,
];

const TEN_GOD_NAMES: [&str; 10] = [
    "比肩", "劫财", "食神", "伤官", "偏财", "正财", "七杀", "正官", "偏印", "正印",
];

impl TenGod {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        TEN_GOD_NAMES[self.index() as usize]
    }
}

impl Display for TenGod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TenGod {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "偏官" => Ok(Self::QiSha),
            "枭神" => Ok(Self::PianYin),
            name => TEN_GOD_NAMES
                .iter()
                .position(|&n| n == name)
                .map(|i| ALL_TEN_GODS[i])
                .ok_or_else(|| BaziError::UnknownTenGod(s.into())),
        }
    }
}

crate::text_serde::impl_text_serde!(TenGod);

/// Ten god of `other` relative to `day_master`.
pub fn ten_god(day_master: Stem, other: Stem) -> TenGod {
    let same_polarity = day_master.is_yang() == other.is_yang();
    let (same, differ) = match day_master.element().relation_to(other.element()) {
        ElementRelation::Same => (TenGod::BiJian, TenGod::JieCai),
        ElementRelation::Generates => (TenGod::ShiShen, TenGod::ShangGuan),
        ElementRelation::Controls => (TenGod::PianCai, TenGod::ZhengCai),
        ElementRelation::ControlledBy => (TenGod::QiSha, TenGod::ZhengGuan),
        ElementRelation::GeneratedBy => (TenGod::PianYin, TenGod::ZhengYin),
    };
    if same_polarity { same } else { differ }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::ALL_STEMS;

    #[test]
    fn jia_day_master_row() {
        let row: Vec<&str> = ALL_STEMS.iter().map(|&s| ten_god(Stem::Jia, s).name()).collect();
        assert_eq!(
            row,
            ["比肩", "劫财", "食神", "伤官", "偏财", "正财", "七杀", "正官", "偏印", "正印"]
        );
    }

    #[test]
    fn yin_day_master() {
        assert_eq!(ten_god(Stem::Yi, Stem::Jia), TenGod::JieCai);
        assert_eq!(ten_god(Stem::Yi, Stem::Geng), TenGod::ZhengGuan);
        assert_eq!(ten_god(Stem::Gui, Stem::Wu), TenGod::ZhengGuan);
        assert_eq!(ten_god(Stem::Gui, Stem::Ji), TenGod::QiSha);
    }

    #[test]
    fn each_god_once_per_day_master() {
        for dm in ALL_STEMS {
            let mut seen: Vec<TenGod> = ALL_STEMS.iter().map(|&s| ten_god(dm, s)).collect();
            seen.sort_by_key(|g| g.index());
            assert_eq!(seen, ALL_TEN_GODS);
        }
    }

    #[test]
    fn parse_aliases() {
        assert_eq!("偏官".parse::<TenGod>().unwrap(), TenGod::QiSha);
        assert_eq!("枭神".parse::<TenGod>().unwrap(), TenGod::PianYin);
        assert_eq!(" 正财 ".parse::<TenGod>().unwrap(), TenGod::ZhengCai);
        assert!("财神".parse::<TenGod>().is_err());
    }
}
