//! Calendar inputs supplied by the external calendar engine.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::BaziError;

/// Lunar (traditional calendar) date of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct LunarDate {
    pub year: i32,
    /// 1-12.
    pub month: u8,
    /// 1-30.
    pub day: u8,
}

impl LunarDate {
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

/// Gender of the chart owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[serde(alias = "男", alias = "m")]
    Male,
    #[serde(alias = "女", alias = "f")]
    Female,
}

impl Gender {
    /// Chinese label (男 / 女).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gender {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "男" | "male" | "m" | "乾" => Ok(Self::Male),
            "女" | "female" | "f" | "坤" => Ok(Self::Female),
            _ => Err(BaziError::UnknownGender(s.into())),
        }
    }
}
