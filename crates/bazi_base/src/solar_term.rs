//! The 24 solar terms (二十四节气) and the pre-computed term window.
//!
//! Terms start at 立春. Even indices are 节 (month openers), odd indices are
//! 气 (mid-month). Each 节/气 pair belongs to one month branch, 立春/雨水 → 寅.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::branch::Branch;
use crate::error::BaziError;

/// The 24 solar terms, 立春 first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum SolarTerm {
    LiChun,
    YuShui,
    JingZhe,
    ChunFen,
    QingMing,
    GuYu,
    LiXia,
    XiaoMan,
    MangZhong,
    XiaZhi,
    XiaoShu,
    DaShu,
    LiQiu,
    ChuShu,
    BaiLu,
    QiuFen,
    HanLu,
    ShuangJiang,
    LiDong,
    XiaoXue,
    DaXue,
    DongZhi,
    XiaoHan,
    DaHan,
}

/// All terms in order (index 0 = 立春).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::LiChun,
    SolarTerm::YuShui,
    SolarTerm::JingZhe,
    SolarTerm::ChunFen,
    SolarTerm::QingMing,
    SolarTerm::GuYu,
    SolarTerm::LiXia,
    SolarTerm::XiaoMan,
    SolarTerm::MangZhong,
    SolarTerm::XiaZhi,
    SolarTerm::XiaoShu,
    SolarTerm::DaShu,
    SolarTerm::LiQiu,
    SolarTerm::ChuShu,
    SolarTerm::BaiLu,
    SolarTerm::QiuFen,
    SolarTerm::HanLu,
    SolarTerm::ShuangJiang,
    SolarTerm::LiDong,
    SolarTerm::XiaoXue,
    SolarTerm::DaXue,
    SolarTerm::DongZhi,
    SolarTerm::XiaoHan,
    SolarTerm::DaHan,
];

const SOLAR_TERM_NAMES: [&str; 24] = [
    "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至", "小暑", "大暑",
    "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至", "小寒", "大寒",
];

impl SolarTerm {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        SOLAR_TERM_NAMES[self.index() as usize]
    }

    /// True for the twelve month-opening 节.
    pub const fn is_jie(self) -> bool {
        self.index() % 2 == 0
    }

    /// Month branch the term belongs to.
    pub const fn month_branch(self) -> Branch {
        Branch::Yin.offset((self.index() / 2) as i32)
    }
}

impl Display for SolarTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolarTerm {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // 启蛰 is the older name of 惊蛰.
        let name = if trimmed == "启蛰" { "惊蛰" } else { trimmed };
        SOLAR_TERM_NAMES
            .iter()
            .position(|&n| n == name)
            .map(|i| ALL_SOLAR_TERMS[i])
            .ok_or_else(|| BaziError::UnknownSolarTerm(s.into()))
    }
}

crate::text_serde::impl_text_serde!(SolarTerm);

/// Pre-computed position inside the current solar term.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SolarTermWindow {
    pub current_jieqi_name: String,
    #[serde(default)]
    pub next_jieqi_name: Option<String>,
    pub days_elapsed_in_term: u32,
}

impl SolarTermWindow {
    /// The current term, if its name is recognised.
    pub fn current_term(&self) -> Option<SolarTerm> {
        self.current_jieqi_name.parse().ok()
    }
}
