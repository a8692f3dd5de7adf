//! Secondary chart attributes derived from the pillars and birth data.

use std::fmt::Display;

use bazi_base::{
    Commander, CommanderQuery, Constellation, FourPillars, LifeGua, LifeGuaQuery, Mansion,
    MansionQuery, Pillar, UNKNOWN, VoidPair, Zodiac, body_palace, commander, constellation,
    day_master_attribute, fetal_breath, fetal_origin, five_tiger_pillar, life_gua, life_palace,
    mansion, na_yin, void_emptiness, zodiac_from_year,
};
use serde::{Serialize, Serializer};

use crate::birth::ChartInput;

/// Na-yin of each pillar; [`UNKNOWN`] when the pillars are not known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PillarNaYin {
    pub year: &'static str,
    pub month: &'static str,
    pub day: &'static str,
    pub hour: &'static str,
}

impl PillarNaYin {
    pub const MISSING: Self = Self {
        year: UNKNOWN,
        month: UNKNOWN,
        day: UNKNOWN,
        hour: UNKNOWN,
    };

    pub const fn of(pillars: &FourPillars) -> Self {
        Self {
            year: na_yin(pillars.year),
            month: na_yin(pillars.month),
            day: na_yin(pillars.day),
            hour: na_yin(pillars.hour),
        }
    }
}

/// All derived attributes. Unresolved values serialize as `"未知"`.
///
/// `constellation` needs the Gregorian birth date in
/// [`BirthContext::solar_date`](crate::BirthContext::solar_date); the lunar
/// date alone leaves it unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedAttributes {
    #[serde(serialize_with = "or_unknown")]
    pub constellation: Option<Constellation>,
    pub zodiac: Zodiac,
    pub mansion: Mansion,
    pub na_yin: PillarNaYin,
    #[serde(serialize_with = "or_unknown")]
    pub void_emptiness: Option<VoidPair>,
    #[serde(serialize_with = "or_unknown")]
    pub life_gua: Option<LifeGua>,
    #[serde(serialize_with = "or_unknown")]
    pub life_palace: Option<Pillar>,
    #[serde(serialize_with = "or_unknown")]
    pub body_palace: Option<Pillar>,
    #[serde(serialize_with = "or_unknown")]
    pub fetal_origin: Option<Pillar>,
    #[serde(serialize_with = "or_unknown")]
    pub fetal_breath: Option<Pillar>,
    #[serde(serialize_with = "or_unknown")]
    pub commander: Option<Commander>,
    #[serde(serialize_with = "or_unknown")]
    pub day_master: Option<String>,
}

fn or_unknown<T: Display, S: Serializer>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => serializer.collect_str(v),
        None => serializer.serialize_str(UNKNOWN),
    }
}

/// Text of an optional attribute, [`UNKNOWN`] when absent.
pub fn text_or_unknown<T: Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(|| UNKNOWN.to_string(), |v| v.to_string())
}

/// Compute every derived attribute for `input`.
pub fn derive_attributes(input: &ChartInput) -> DerivedAttributes {
    let birth = &input.birth;
    let pillars = input.pillars;
    let year_pillar = input.year_pillar();
    let month_branch = input.month_branch();
    let hour_branch = input.hour_branch();

    let palace_inputs = year_pillar.zip(month_branch).zip(hour_branch);
    let (life, body) = match palace_inputs {
        Some(((year, month), hour)) => (
            Some(life_palace(year.stem(), month, hour)),
            Some(body_palace(year.stem(), month, hour)),
        ),
        None => (None, None),
    };

    // Without pillars the month pillar is rebuilt from the year stem (五虎遁).
    let month_pillar = pillars.map(|p| p.month).or_else(|| {
        year_pillar
            .zip(month_branch)
            .map(|(y, m)| five_tiger_pillar(y.stem(), m))
    });

    let window = input.solar_term.as_ref();
    let commander_query = CommanderQuery {
        solar_term: window.and_then(|w| w.current_term()),
        month_branch,
        days_elapsed: window.map(|w| w.days_elapsed_in_term),
        lunar_date: Some(birth.lunar_date),
        year_pillar,
    };

    let life_gua_query = LifeGuaQuery {
        year_branch: year_pillar.map(Pillar::branch),
        month_branch,
        day_branch: pillars.map(|p| p.day.branch()),
        hour_branch,
        year: Some(birth.lunar_date.year),
        gender: Some(birth.gender),
    };

    let attributes = DerivedAttributes {
        constellation: birth.solar_date.and_then(|d| constellation(d.month, d.day)),
        zodiac: zodiac_from_year(birth.lunar_date.year),
        mansion: mansion(&MansionQuery {
            day_pillar: pillars.map(|p| p.day),
            lunar_date: Some(birth.lunar_date),
        }),
        na_yin: pillars.as_ref().map_or(PillarNaYin::MISSING, PillarNaYin::of),
        void_emptiness: pillars.map(|p| void_emptiness(p.day)),
        life_gua: life_gua(&life_gua_query),
        life_palace: life,
        body_palace: body,
        fetal_origin: month_pillar.map(fetal_origin),
        fetal_breath: pillars.map(|p| fetal_breath(p.day)),
        commander: commander(&commander_query),
        day_master: pillars.map(|p| day_master_attribute(p.day_master())),
    };
    tracing::debug!(
        has_pillars = pillars.is_some(),
        mansion = attributes.mansion.name(),
        "derived chart attributes"
    );
    attributes
}
