//! Core BaZi (Four Pillars) symbols, tables and derived chart attributes.
//!
//! This crate provides:
//! - Heavenly stems, earthly branches, five elements and the 60 pillars
//! - Stem/branch relation tables (five-combination, six-harmony, clash, penalty, harm)
//! - Lookup tables: na-yin, void-emptiness, lunar mansions, zodiac, constellation
//! - Palaces, fetal origin/breath, life gua and the monthly commander stem
//! - Ten-god classification relative to the day master
//!
//! Every lookup is a pure function over `const` tables. Inputs that may be
//! missing are resolved through ordered fallback chains (see [`fallback`]).

pub mod branch;
pub mod calendar;
pub mod commander;
pub mod constellation;
pub mod element;
pub mod error;
pub mod fallback;
pub mod fetal;
pub mod kongwang;
pub mod life_gua;
pub mod mansion;
pub mod nayin;
pub mod palace;
pub mod pillar;
pub mod relations;
pub mod solar_term;
pub mod stem;
pub mod ten_god;
mod text_serde;
pub mod zodiac;

pub use branch::{ALL_BRANCHES, Branch};
pub use calendar::{Gender, LunarDate};
pub use commander::{Commander, CommanderQuery, commander, commander_for_day};
pub use constellation::{Constellation, constellation};
pub use element::{ALL_ELEMENTS, Element, ElementRelation, ElementTally};
pub use error::BaziError;
pub use fallback::{NamedResolver, Resolver, UNKNOWN, resolve_first};
pub use fetal::{fetal_breath, fetal_origin};
pub use kongwang::{VoidPair, void_emptiness, void_emptiness_text, xun_head};
pub use life_gua::{LifeGua, LifeGuaQuery, Trigram, life_gua, life_gua_from_branches, life_gua_from_year};
pub use mansion::{DEFAULT_MANSION, Mansion, MansionQuery, mansion, mansion_of_day};
pub use nayin::{na_yin, na_yin_element, na_yin_text};
pub use palace::{MonthNumber, StandardNumber, body_palace, five_tiger_pillar, life_palace};
pub use pillar::{FourPillars, Pillar, PillarPosition};
pub use relations::{
    BranchRelation, branch_relations, branches_clash, branches_harm, branches_harmonize,
    branches_punish, stem_combination, stems_combine,
};
pub use solar_term::{ALL_SOLAR_TERMS, SolarTerm, SolarTermWindow};
pub use stem::{ALL_STEMS, Stem, day_master_attribute};
pub use ten_god::{ALL_TEN_GODS, TenGod, ten_god};
pub use zodiac::{ALL_ZODIACS, Zodiac, zodiac_from_branch, zodiac_from_year};
