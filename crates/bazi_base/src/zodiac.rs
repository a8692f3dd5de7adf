//! Chinese zodiac animal (生肖) of a lunar year.

use std::fmt::{Display, Formatter};

use crate::branch::Branch;

/// The twelve zodiac animals, in branch order (鼠 = 子).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Zodiac {
    Shu,
    Niu,
    Hu,
    Tu,
    Long,
    She,
    Ma,
    Yang,
    Hou,
    Ji,
    Gou,
    Zhu,
}

/// All animals in order (index 0 = 鼠).
pub const ALL_ZODIACS: [Zodiac; 12] = [
    Zodiac::Shu,
    Zodiac::Niu,
    Zodiac::Hu,
    Zodiac::Tu,
    Zodiac::Long,
    Zodiac::She,
    Zodiac::Ma,
    Zodiac::Yang,
    Zodiac::Hou,
    Zodiac::Ji,
    Zodiac::Gou,
    Zodiac::Zhu,
];

const ZODIAC_NAMES: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

impl Zodiac {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        ZODIAC_NAMES[self.index() as usize]
    }

    /// The branch the animal belongs to.
    pub const fn branch(self) -> Branch {
        Branch::from_index(self.index())
    }
}

impl Display for Zodiac {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

crate::text_serde::impl_text_serialize!(Zodiac);

/// Animal of `lunar_year`: `ALL_ZODIACS[(year − 4) mod 12]` (CE 4 was a 鼠 year).
pub const fn zodiac_from_year(lunar_year: i32) -> Zodiac {
    ALL_ZODIACS[((lunar_year.rem_euclid(12) + 8) % 12) as usize]
}

/// Animal of a year branch.
pub const fn zodiac_from_branch(branch: Branch) -> Zodiac {
    ALL_ZODIACS[branch.index() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_years() {
        assert_eq!(zodiac_from_year(1984), Zodiac::Shu);
        assert_eq!(zodiac_from_year(1990), Zodiac::Ma);
        assert_eq!(zodiac_from_year(2024), Zodiac::Long);
        assert_eq!(zodiac_from_year(2025).name(), "蛇");
    }

    #[test]
    fn period_twelve() {
        for y in -30..2100 {
            assert_eq!(zodiac_from_year(y), zodiac_from_year(y + 12));
        }
    }

    #[test]
    fn extreme_years() {
        // i32::MIN ≡ 4 and i32::MAX ≡ 7 (mod 12)
        assert_eq!(zodiac_from_year(i32::MIN), Zodiac::Shu);
        assert_eq!(zodiac_from_year(i32::MAX).name(), "兔");
        assert_eq!(zodiac_from_year(-8), Zodiac::Shu);
    }

    #[test]
    fn branch_agrees() {
        for z in ALL_ZODIACS {
            assert_eq!(zodiac_from_branch(z.branch()), z);
        }
    }
}
