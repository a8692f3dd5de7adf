//! Na-yin (纳音) names of the 60 pillars.
//!
//! Consecutive pairs of the cycle share a name (甲子乙丑海中金, …).

use crate::element::Element;
use crate::fallback::UNKNOWN;
use crate::pillar::Pillar;

/// Na-yin name for each pillar, indexed by `Pillar::cycle_index()`.
pub const NAYIN: [&str; 60] = [
    "海中金", "海中金", // 甲子 乙丑
    "炉中火", "炉中火", // 丙寅 丁卯
    "大林木", "大林木", // 戊辰 己巳
    "路旁土", "路旁土", // 庚午 辛未
    "剑锋金", "剑锋金", // 壬申 癸酉
    "山头火", "山头火", // 甲戌 乙亥
    "涧下水", "涧下水", // 丙子 丁丑
    "城头土", "城头土", // 戊寅 己卯
    "白蜡金", "白蜡金", // 庚辰 辛巳
    "杨柳木", "杨柳木", // 壬午 癸未
    "泉中水", "泉中水", // 甲申 乙酉
    "屋上土", "屋上土", // 丙戌 丁亥
    "霹雳火", "霹雳火", // 戊子 己丑
    "松柏木", "松柏木", // 庚寅 辛卯
    "长流水", "长流水", // 壬辰 癸巳
    "沙中金", "沙中金", // 甲午 乙未
    "山下火", "山下火", // 丙申 丁酉
    "平地木", "平地木", // 戊戌 己亥
    "壁上土", "壁上土", // 庚子 辛丑
    "金箔金", "金箔金", // 壬寅 癸卯
    "覆灯火", "覆灯火", // 甲辰 乙巳
    "天河水", "天河水", // 丙午 丁未
    "大驿土", "大驿土", // 戊申 己酉
    "钗钏金", "钗钏金", // 庚戌 辛亥
    "桑柘木", "桑柘木", // 壬子 癸丑
    "大溪水", "大溪水", // 甲寅 乙卯
    "沙中土", "沙中土", // 丙辰 丁巳
    "天上火", "天上火", // 戊午 己未
    "石榴木", "石榴木", // 庚申 辛酉
    "大海水", "大海水", // 壬戌 癸亥
];

/// Na-yin name of `pillar`.
pub const fn na_yin(pillar: Pillar) -> &'static str {
    NAYIN[pillar.cycle_index() as usize]
}

/// Na-yin of pillar text such as `"甲子"`; [`UNKNOWN`] if the text is not a pillar.
pub fn na_yin_text(pillar: &str) -> &'static str {
    pillar.parse::<Pillar>().map(na_yin).unwrap_or(UNKNOWN)
}

/// Element carried by the na-yin name (its last character).
pub fn na_yin_element(pillar: Pillar) -> Element {
    match na_yin(pillar).chars().last() {
        Some('金') => Element::Jin,
        Some('火') => Element::Huo,
        Some('木') => Element::Mu,
        Some('水') => Element::Shui,
        _ => Element::Tu,
    }
}
