//! Western sun sign (星座) from a Gregorian month and day.

use std::fmt::{Display, Formatter};

/// The twelve Western constellations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Constellation {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Constellation {
    /// Chinese name, e.g. `射手座`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "白羊座",
            Self::Taurus => "金牛座",
            Self::Gemini => "双子座",
            Self::Cancer => "巨蟹座",
            Self::Leo => "狮子座",
            Self::Virgo => "处女座",
            Self::Libra => "天秤座",
            Self::Scorpio => "天蝎座",
            Self::Sagittarius => "射手座",
            Self::Capricorn => "摩羯座",
            Self::Aquarius => "水瓶座",
            Self::Pisces => "双鱼座",
        }
    }
}

impl Display for Constellation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

crate::text_serde::impl_text_serialize!(Constellation);

/// Per month (index 0 = January): last day of the earlier sign, earlier sign, later sign.
pub const CONSTELLATION_BOUNDARIES: [(u8, Constellation, Constellation); 12] = [
    (19, Constellation::Capricorn, Constellation::Aquarius),
    (18, Constellation::Aquarius, Constellation::Pisces),
    (20, Constellation::Pisces, Constellation::Aries),
    (19, Constellation::Aries, Constellation::Taurus),
    (20, Constellation::Taurus, Constellation::Gemini),
    (21, Constellation::Gemini, Constellation::Cancer),
    (22, Constellation::Cancer, Constellation::Leo),
    (22, Constellation::Leo, Constellation::Virgo),
    (22, Constellation::Virgo, Constellation::Libra),
    (23, Constellation::Libra, Constellation::Scorpio),
    (22, Constellation::Scorpio, Constellation::Sagittarius),
    (21, Constellation::Sagittarius, Constellation::Capricorn),
];

/// Constellation for `month` (1-12) and `day`. `None` if the month is out of range.
pub const fn constellation(month: u8, day: u8) -> Option<Constellation> {
    if month < 1 || month > 12 {
        return None;
    }
    let (last_day, earlier, later) = CONSTELLATION_BOUNDARIES[(month - 1) as usize];
    if day <= last_day { Some(earlier) } else { Some(later) }
}
