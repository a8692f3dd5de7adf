//! Literal reference sets consulted by the life-aspect rules.

use bazi_base::{Branch, Pillar, Stem};

/// Year pillars read as handsome for a male chart.
pub const MALE_HANDSOME_PILLARS: [Pillar; 12] = [
    Pillar::from_cycle_index(0),  // 甲子
    Pillar::from_cycle_index(2),  // 丙寅
    Pillar::from_cycle_index(4),  // 戊辰
    Pillar::from_cycle_index(6),  // 庚午
    Pillar::from_cycle_index(8),  // 壬申
    Pillar::from_cycle_index(10), // 甲戌
    Pillar::from_cycle_index(12), // 丙子
    Pillar::from_cycle_index(16), // 庚辰
    Pillar::from_cycle_index(18), // 壬午
    Pillar::from_cycle_index(20), // 甲申
    Pillar::from_cycle_index(36), // 庚子
    Pillar::from_cycle_index(42), // 丙午
];

/// Year pillars read as beautiful for a female chart.
pub const FEMALE_BEAUTY_PILLARS: [Pillar; 12] = [
    Pillar::from_cycle_index(1),  // 乙丑
    Pillar::from_cycle_index(3),  // 丁卯
    Pillar::from_cycle_index(5),  // 己巳
    Pillar::from_cycle_index(7),  // 辛未
    Pillar::from_cycle_index(9),  // 癸酉
    Pillar::from_cycle_index(11), // 乙亥
    Pillar::from_cycle_index(13), // 丁丑
    Pillar::from_cycle_index(15), // 己卯
    Pillar::from_cycle_index(17), // 辛巳
    Pillar::from_cycle_index(19), // 癸未
    Pillar::from_cycle_index(33), // 丁酉
    Pillar::from_cycle_index(51), // 乙卯
];

/// Stems and branches whose co-occurrence marks accident risk.
pub const ACCIDENT_STEMS: [Stem; 4] = [Stem::Jia, Stem::Ding, Stem::Wu, Stem::Geng];
pub const ACCIDENT_BRANCHES: [Branch; 4] = [Branch::Chen, Branch::Wu, Branch::You, Branch::Hai];

/// 天乙贵人 branches per day stem.
pub const fn noble_branches(day_stem: Stem) -> [Branch; 2] {
    match day_stem {
        Stem::Jia | Stem::Wu | Stem::Geng => [Branch::Chou, Branch::Wei],
        Stem::Yi | Stem::Ji => [Branch::Zi, Branch::Shen],
        Stem::Bing | Stem::Ding => [Branch::Hai, Branch::You],
        Stem::Xin => [Branch::Yin, Branch::Wu],
        Stem::Ren | Stem::Gui => [Branch::Mao, Branch::Si],
    }
}

/// Trine group index of a branch: 申子辰 0, 亥卯未 1, 寅午戌 2, 巳酉丑 3.
const fn trine(branch: Branch) -> usize {
    match branch {
        Branch::Shen | Branch::Zi | Branch::Chen => 0,
        Branch::Hai | Branch::Mao | Branch::Wei => 1,
        Branch::Yin | Branch::Wu | Branch::Xu => 2,
        Branch::Si | Branch::You | Branch::Chou => 3,
    }
}

/// 咸池 (peach blossom) per trine group.
const PEACH_BLOSSOM: [Branch; 4] = [Branch::You, Branch::Zi, Branch::Mao, Branch::Wu];

/// 驿马 (travelling horse) per trine group.
const TRAVEL_HORSE: [Branch; 4] = [Branch::Yin, Branch::Si, Branch::Shen, Branch::Hai];

pub const fn peach_blossom(base: Branch) -> Branch {
    PEACH_BLOSSOM[trine(base)]
}

pub const fn travel_horse(base: Branch) -> Branch {
    TRAVEL_HORSE[trine(base)]
}
