//! Lunar mansion (二十八宿) of the birth day.
//!
//! The primary source is the day pillar: in the first cycle of the 七元禽星
//! arrangement 甲子 falls on 虚 and each following day advances one mansion.
//! Without a day pillar, the mansion is approximated from the lunar date.

use std::fmt::{Display, Formatter};

use crate::calendar::LunarDate;
use crate::fallback::{NamedResolver, resolve_first};
use crate::pillar::Pillar;

/// One of the 28 lunar mansions, 0 = 角 .. 27 = 轸.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Mansion(u8);

/// Single-character mansion names in traditional order (东方青龙 first).
pub const MANSION_NAMES: [&str; 28] = [
    "角", "亢", "氐", "房", "心", "尾", "箕", // 东方青龙
    "斗", "牛", "女", "虚", "危", "室", "壁", // 北方玄武
    "奎", "娄", "胃", "昴", "毕", "觜", "参", // 西方白虎
    "井", "鬼", "柳", "星", "张", "翼", "轸", // 南方朱雀
];

/// Full names with the governing luminary/element and animal.
pub const MANSION_FULL_NAMES: [&str; 28] = [
    "角木蛟", "亢金龙", "氐土貉", "房日兔", "心月狐", "尾火虎", "箕水豹",
    "斗木獬", "牛金牛", "女土蝠", "虚日鼠", "危月燕", "室火猪", "壁水貐",
    "奎木狼", "娄金狗", "胃土雉", "昴日鸡", "毕月乌", "觜火猴", "参水猿",
    "井木犴", "鬼金羊", "柳土獐", "星日马", "张月鹿", "翼火蛇", "轸水蚓",
];

impl Mansion {
    /// Mansion at `index`, wrapping modulo 28.
    pub const fn from_index(index: u8) -> Self {
        Self(index % 28)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// Single-character name, e.g. `角`.
    pub const fn name(self) -> &'static str {
        MANSION_NAMES[self.0 as usize]
    }

    /// Full name, e.g. `角木蛟`.
    pub const fn full_name(self) -> &'static str {
        MANSION_FULL_NAMES[self.0 as usize]
    }
}

impl Display for Mansion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

crate::text_serde::impl_text_serialize!(Mansion);

/// Mansion used when nothing else resolves.
pub const DEFAULT_MANSION: Mansion = Mansion(0);

/// Day pillar → mansion index, by `Pillar::cycle_index()`.
pub const DAY_PILLAR_MANSIONS: [u8; 60] = [
    10, 11, 12, 13, 14, 15, 16, 17, 18, 19, // 甲子虚 乙丑危 丙寅室 丁卯壁 戊辰奎 己巳娄 庚午胃 辛未昴 壬申毕 癸酉觜
    20, 21, 22, 23, 24, 25, 26, 27, 0, 1, // 甲戌参 乙亥井 丙子鬼 丁丑柳 戊寅星 己卯张 庚辰翼 辛巳轸 壬午角 癸未亢
    2, 3, 4, 5, 6, 7, 8, 9, 10, 11, // 甲申氐 乙酉房 丙戌心 丁亥尾 戊子箕 己丑斗 庚寅牛 辛卯女 壬辰虚 癸巳危
    12, 13, 14, 15, 16, 17, 18, 19, 20, 21, // 甲午室 乙未壁 丙申奎 丁酉娄 戊戌胃 己亥昴 庚子毕 辛丑觜 壬寅参 癸卯井
    22, 23, 24, 25, 26, 27, 0, 1, 2, 3, // 甲辰鬼 乙巳柳 丙午星 丁未张 戊申翼 己酉轸 庚戌角 辛亥亢 壬子氐 癸丑房
    4, 5, 6, 7, 8, 9, 10, 11, 12, 13, // 甲寅心 乙卯尾 丙辰箕 丁巳斗 戊午牛 己未女 庚申虚 辛酉危 壬戌室 癸亥壁
];

/// Lunar dates whose mansion is fixed by almanac record rather than formula.
pub const MANSION_DATE_OVERRIDES: [(LunarDate, Mansion); 2] = [
    (LunarDate::new(1900, 1, 1), Mansion(0)),  // 角
    (LunarDate::new(2000, 1, 1), Mansion(9)),  // 女
];

/// Inputs for mansion resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MansionQuery {
    pub day_pillar: Option<Pillar>,
    pub lunar_date: Option<LunarDate>,
}

/// Mansion of a day pillar.
pub const fn mansion_of_day(day: Pillar) -> Mansion {
    Mansion(DAY_PILLAR_MANSIONS[day.cycle_index() as usize])
}

/// Lunar-date approximation: `((year−1900)·365 + (month−1)·30 + day) mod 28`.
pub fn mansion_from_lunar_date(date: LunarDate) -> Mansion {
    let days = (date.year as i64 - 1900) * 365 + (date.month as i64 - 1) * 30 + date.day as i64;
    Mansion(days.rem_euclid(28) as u8)
}

fn by_day_pillar(q: &MansionQuery) -> Option<Mansion> {
    q.day_pillar.map(mansion_of_day)
}

fn by_date_override(q: &MansionQuery) -> Option<Mansion> {
    let date = q.lunar_date?;
    MANSION_DATE_OVERRIDES
        .iter()
        .find(|(d, _)| *d == date)
        .map(|&(_, m)| m)
}

fn by_lunar_formula(q: &MansionQuery) -> Option<Mansion> {
    q.lunar_date.map(mansion_from_lunar_date)
}

/// Resolution order for [`mansion`].
pub const MANSION_CHAIN: [NamedResolver<MansionQuery, Mansion>; 3] = [
    ("day_pillar", by_day_pillar),
    ("date_override", by_date_override),
    ("lunar_formula", by_lunar_formula),
];

/// Resolve the birth mansion. Falls back to [`DEFAULT_MANSION`] with a warning.
pub fn mansion(query: &MansionQuery) -> Mansion {
    match resolve_first(query, &MANSION_CHAIN) {
        Some(m) => m,
        None => {
            tracing::warn!(
                default = DEFAULT_MANSION.name(),
                "no day pillar or lunar date for mansion lookup, using default"
            );
            DEFAULT_MANSION
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jiazi_is_xu() {
        let p: Pillar = "甲子".parse().unwrap();
        assert_eq!(mansion_of_day(p).name(), "虚");
        assert_eq!(mansion_of_day(p).full_name(), "虚日鼠");
    }

    #[test]
    fn table_advances_one_per_day() {
        for i in 1..60u8 {
            let prev = DAY_PILLAR_MANSIONS[(i - 1) as usize];
            assert_eq!(DAY_PILLAR_MANSIONS[i as usize], (prev + 1) % 28);
        }
    }

    #[test]
    fn day_pillar_beats_date() {
        let q = MansionQuery {
            day_pillar: Some("壬午".parse().unwrap()),
            lunar_date: Some(LunarDate::new(2000, 1, 1)),
        };
        assert_eq!(mansion(&q).name(), "角");
    }

    #[test]
    fn override_beats_formula() {
        let q = MansionQuery {
            day_pillar: None,
            lunar_date: Some(LunarDate::new(2000, 1, 1)),
        };
        // Formula would give (100·365 + 1) mod 28 = 17 (昴).
        assert_eq!(mansion_from_lunar_date(LunarDate::new(2000, 1, 1)).name(), "昴");
        assert_eq!(mansion(&q).name(), "女");
    }

    #[test]
    fn formula_path() {
        let q = MansionQuery {
            day_pillar: None,
            lunar_date: Some(LunarDate::new(1900, 1, 2)),
        };
        assert_eq!(mansion(&q).index(), 2);
    }

    #[test]
    fn formula_handles_years_before_epoch() {
        let m = mansion_from_lunar_date(LunarDate::new(1899, 12, 30));
        assert!(m.index() < 28);
    }

    #[test]
    fn empty_query_defaults() {
        assert_eq!(mansion(&MansionQuery::default()), DEFAULT_MANSION);
        assert_eq!(DEFAULT_MANSION.name(), "角");
    }
}
