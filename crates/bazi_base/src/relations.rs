//! Stem combinations and branch relations.
//!
//! Provides the five stem combinations (天干五合), six harmonies (六合),
//! six conflicts (六冲), three penalties (三刑, including self-penalty) and
//! six harms (六害).

use crate::branch::Branch;
use crate::element::Element;
use crate::stem::Stem;

use Branch::*;

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// 天干五合: (stem, stem, transformed element).
pub const STEM_HE: [(Stem, Stem, Element); 5] = [
    (Stem::Jia, Stem::Ji, Element::Tu),
    (Stem::Yi, Stem::Geng, Element::Jin),
    (Stem::Bing, Stem::Xin, Element::Shui),
    (Stem::Ding, Stem::Ren, Element::Mu),
    (Stem::Wu, Stem::Gui, Element::Huo),
];

/// 地支六合: (branch, branch, transformed element).
pub const BRANCH_LIUHE: [(Branch, Branch, Element); 6] = [
    (Zi, Chou, Element::Tu),
    (Yin, Hai, Element::Mu),
    (Mao, Xu, Element::Huo),
    (Chen, You, Element::Jin),
    (Si, Shen, Element::Shui),
    (Wu, Wei, Element::Tu),
];

/// 地支六冲.
pub const BRANCH_CHONG: [(Branch, Branch); 6] = [
    (Zi, Wu),
    (Chou, Wei),
    (Yin, Shen),
    (Mao, You),
    (Chen, Xu),
    (Si, Hai),
];

/// 地支三刑, directed (punisher, punished).
///
/// 寅刑巳、巳刑申、申刑寅 (恃势之刑); 丑刑戌、戌刑未、未刑丑 (无恩之刑);
/// 子刑卯、卯刑子 (无礼之刑).
pub const BRANCH_XING: [(Branch, Branch); 8] = [
    (Yin, Si),
    (Si, Shen),
    (Shen, Yin),
    (Chou, Xu),
    (Xu, Wei),
    (Wei, Chou),
    (Zi, Mao),
    (Mao, Zi),
];

/// 自刑: a branch meeting itself.
pub const BRANCH_SELF_XING: [Branch; 4] = [Chen, Wu, You, Hai];

/// 地支六害.
pub const BRANCH_HAI: [(Branch, Branch); 6] = [
    (Zi, Wei),
    (Chou, Wu),
    (Yin, Si),
    (Mao, Chen),
    (Shen, Hai),
    (You, Xu),
];

fn unordered_hit(table: &[(Branch, Branch)], a: Branch, b: Branch) -> bool {
    table
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

// ---------------------------------------------------------------------------
// Stem relations
// ---------------------------------------------------------------------------

/// Element produced when `a` and `b` combine, if they do.
pub fn stem_combination(a: Stem, b: Stem) -> Option<Element> {
    STEM_HE
        .iter()
        .find(|&&(x, y, _)| (x == a && y == b) || (x == b && y == a))
        .map(|&(_, _, e)| e)
}

/// True if `a` and `b` form one of the five combinations.
pub fn stems_combine(a: Stem, b: Stem) -> bool {
    stem_combination(a, b).is_some()
}

/// The stem that combines with `stem` (甲↔己, 乙↔庚, 丙↔辛, 丁↔壬, 戊↔癸).
pub const fn stem_partner(stem: Stem) -> Stem {
    stem.offset(5)
}

// ---------------------------------------------------------------------------
// Branch relations
// ---------------------------------------------------------------------------

/// 六合.
pub fn branches_harmonize(a: Branch, b: Branch) -> bool {
    BRANCH_LIUHE
        .iter()
        .any(|&(x, y, _)| (x == a && y == b) || (x == b && y == a))
}

/// The six-harmony partner of `branch`.
pub fn branch_partner(branch: Branch) -> Branch {
    BRANCH_LIUHE
        .iter()
        .find_map(|&(x, y, _)| {
            if x == branch {
                Some(y)
            } else if y == branch {
                Some(x)
            } else {
                None
            }
        })
        .unwrap_or(branch)
}

/// 六冲.
pub fn branches_clash(a: Branch, b: Branch) -> bool {
    unordered_hit(&BRANCH_CHONG, a, b)
}

/// 三刑 in either direction, or 自刑 when both are the same self-penalty branch.
pub fn branches_punish(a: Branch, b: Branch) -> bool {
    if a == b {
        return BRANCH_SELF_XING.contains(&a);
    }
    unordered_hit(&BRANCH_XING, a, b)
}

/// 六害.
pub fn branches_harm(a: Branch, b: Branch) -> bool {
    unordered_hit(&BRANCH_HAI, a, b)
}

/// Named relation between two branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchRelation {
    /// 六合
    LiuHe,
    /// 六冲
    Chong,
    /// 三刑 / 自刑
    Xing,
    /// 六害
    Hai,
    /// 伏吟 (identical branch)
    FuYin,
}

impl BranchRelation {
    pub const fn name(self) -> &'static str {
        match self {
            Self::LiuHe => "六合",
            Self::Chong => "六冲",
            Self::Xing => "相刑",
            Self::Hai => "六害",
            Self::FuYin => "伏吟",
        }
    }
}

/// Every relation that holds between `a` and `b`, in table order.
pub fn branch_relations(a: Branch, b: Branch) -> Vec<BranchRelation> {
    let mut out = Vec::new();
    if branches_harmonize(a, b) {
        out.push(BranchRelation::LiuHe);
    }
    if branches_clash(a, b) {
        out.push(BranchRelation::Chong);
    }
    if branches_punish(a, b) {
        out.push(BranchRelation::Xing);
    }
    if branches_harm(a, b) {
        out.push(BranchRelation::Hai);
    }
    if a == b {
        out.push(BranchRelation::FuYin);
    }
    out
}
