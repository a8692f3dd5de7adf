//! Life palace (命宫) and body palace (身宫).
//!
//! Two numberings of the same twelve branches are in play and must not be
//! mixed up, so each has its own newtype:
//! - [`MonthNumber`]: month order, 寅=1 … 丑=12 (so 子=11, 丑=12, 亥=10).
//! - [`StandardNumber`]: branch order, 子=1 … 亥=12.
//!
//! The palace stem comes from the five-tiger rule (五虎遁): the year stem
//! fixes the stem of the 寅 month, and the palace stem advances from there.

use crate::branch::Branch;
use crate::pillar::Pillar;
use crate::stem::Stem;

/// Month-order branch number, 寅=1 … 丑=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthNumber(u8);

impl MonthNumber {
    pub const fn of(branch: Branch) -> Self {
        Self((branch.index() + 10) % 12 + 1)
    }

    /// Value in 1..=12.
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Branch-order number, 子=1 … 亥=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardNumber(u8);

impl StandardNumber {
    pub const fn of(branch: Branch) -> Self {
        Self(branch.index() + 1)
    }

    /// Bring any integer into 1..=12 by repeated ±12.
    pub const fn normalized(raw: i32) -> Self {
        let mut n = raw;
        while n < 1 {
            n += 12;
        }
        while n > 12 {
            n -= 12;
        }
        Self(n as u8)
    }

    /// Value in 1..=12.
    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn branch(self) -> Branch {
        Branch::from_index(self.0 - 1)
    }
}

/// Life palace number: `6 − month − hour`, normalized into 1..=12.
pub const fn life_palace_number(month: MonthNumber, hour: StandardNumber) -> StandardNumber {
    StandardNumber::normalized(6 - month.get() as i32 - hour.get() as i32)
}

/// Body palace number: `(month + hour + 2) mod 12`, with 0 read as 12.
pub const fn body_palace_number(month: MonthNumber, hour: StandardNumber) -> StandardNumber {
    match (month.get() + hour.get() + 2) % 12 {
        0 => StandardNumber(12),
        n => StandardNumber(n),
    }
}

/// 寅-month pillars per year-stem group (甲己 丙寅, 乙庚 戊寅, 丙辛 庚寅, 丁壬 壬寅, 戊癸 甲寅).
pub const YIN_MONTH_PILLARS: [Pillar; 5] = [
    Pillar::from_cycle_index(2),  // 丙寅
    Pillar::from_cycle_index(14), // 戊寅
    Pillar::from_cycle_index(26), // 庚寅
    Pillar::from_cycle_index(38), // 壬寅
    Pillar::from_cycle_index(50), // 甲寅
];

/// Stem of the 寅 month for a year stem.
pub const fn yin_month_stem(year_stem: Stem) -> Stem {
    YIN_MONTH_PILLARS[(year_stem.index() % 5) as usize].stem()
}

/// Pillar of `branch` counted forward from the 寅 month under `year_stem`.
pub const fn five_tiger_pillar(year_stem: Stem, branch: Branch) -> Pillar {
    let start = YIN_MONTH_PILLARS[(year_stem.index() % 5) as usize];
    start.offset(Branch::Yin.steps_to(branch) as i32)
}

/// Life palace pillar.
pub const fn life_palace(year_stem: Stem, month_branch: Branch, hour_branch: Branch) -> Pillar {
    let n = life_palace_number(MonthNumber::of(month_branch), StandardNumber::of(hour_branch));
    five_tiger_pillar(year_stem, n.branch())
}

/// Body palace pillar.
pub const fn body_palace(year_stem: Stem, month_branch: Branch, hour_branch: Branch) -> Pillar {
    let n = body_palace_number(MonthNumber::of(month_branch), StandardNumber::of(hour_branch));
    five_tiger_pillar(year_stem, n.branch())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;
    use crate::stem::ALL_STEMS;

    #[test]
    fn month_numbers() {
        assert_eq!(MonthNumber::of(Branch::Yin).get(), 1);
        assert_eq!(MonthNumber::of(Branch::Zi).get(), 11);
        assert_eq!(MonthNumber::of(Branch::Chou).get(), 12);
        assert_eq!(MonthNumber::of(Branch::Hai).get(), 10);
    }

    #[test]
    fn standard_numbers_round_trip() {
        for b in ALL_BRANCHES {
            let n = StandardNumber::of(b);
            assert!((1..=12).contains(&n.get()));
            assert_eq!(n.branch(), b);
        }
    }

    #[test]
    fn normalize_far_values() {
        assert_eq!(StandardNumber::normalized(0).get(), 12);
        assert_eq!(StandardNumber::normalized(-18).get(), 6);
        assert_eq!(StandardNumber::normalized(25).get(), 1);
        assert_eq!(StandardNumber::normalized(12).get(), 12);
    }

    #[test]
    fn palace_numbers_in_range() {
        for m in ALL_BRANCHES {
            for h in ALL_BRANCHES {
                let month = MonthNumber::of(m);
                let hour = StandardNumber::of(h);
                let life = life_palace_number(month, hour).get();
                let body = body_palace_number(month, hour).get();
                assert!((1..=12).contains(&life), "life {m}{h} = {life}");
                assert!((1..=12).contains(&body), "body {m}{h} = {body}");
            }
        }
    }

    #[test]
    fn yin_month_stems() {
        assert_eq!(yin_month_stem(Stem::Jia), Stem::Bing);
        assert_eq!(yin_month_stem(Stem::Ji), Stem::Bing);
        assert_eq!(yin_month_stem(Stem::Geng), Stem::Wu);
        assert_eq!(yin_month_stem(Stem::Xin), Stem::Geng);
        assert_eq!(yin_month_stem(Stem::Ren), Stem::Ren);
        assert_eq!(yin_month_stem(Stem::Gui), Stem::Jia);
    }

    #[test]
    fn five_tiger_months() {
        // 甲年: 寅丙寅 卯丁卯 … 子丙子 丑丁丑
        assert_eq!(five_tiger_pillar(Stem::Jia, Branch::Yin).to_string(), "丙寅");
        assert_eq!(five_tiger_pillar(Stem::Jia, Branch::Mao).to_string(), "丁卯");
        assert_eq!(five_tiger_pillar(Stem::Jia, Branch::Zi).to_string(), "丙子");
        assert_eq!(five_tiger_pillar(Stem::Jia, Branch::Chou).to_string(), "丁丑");
        for s in ALL_STEMS {
            for b in ALL_BRANCHES {
                assert_eq!(five_tiger_pillar(s, b).branch(), b);
            }
        }
    }

    #[test]
    fn life_and_body_palace() {
        // 甲年, 寅月(1), 子时(1): life 6-1-1 = 4 → 卯, stem 丁; body 1+1+2 = 4 → 卯
        assert_eq!(life_palace(Stem::Jia, Branch::Yin, Branch::Zi).to_string(), "丁卯");
        assert_eq!(body_palace(Stem::Jia, Branch::Yin, Branch::Zi).to_string(), "丁卯");
        // 庚年, 午月(5), 酉时(10): life 6-5-10 = -9 → 3 → 寅 戊寅; body 17 mod 12 = 5 → 辰 庚辰
        assert_eq!(life_palace(Stem::Geng, Branch::Wu, Branch::You).to_string(), "戊寅");
        assert_eq!(body_palace(Stem::Geng, Branch::Wu, Branch::You).to_string(), "庚辰");
    }
}
