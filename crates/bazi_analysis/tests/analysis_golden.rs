//! End-to-end analysis of sample charts.

use bazi_analysis::{
    AnnualQuery, AuspiciousnessScorer, BirthContext, ChartInput, ChartView, Level, SolarDate,
    StemTenGods, derive_attributes, evaluate_life_aspects, text_or_unknown,
};
use bazi_base::{ElementTally, FourPillars, Gender, LunarDate, Pillar, SolarTermWindow, TenGod};
use bazi_config::ScorerConfig;

fn sample_pillars() -> FourPillars {
    FourPillars::parse("庚午", "辛巳", "甲子", "丙寅").unwrap()
}

// ---------------------------------------------------------------------------
// Derived attributes
// ---------------------------------------------------------------------------

#[test]
fn derived_from_json_input() {
    let input: ChartInput = serde_json::from_str(
        r#"{
            "pillars": {"year": "庚午", "month": "辛巳", "day": "甲子", "hour": "丙寅"},
            "birth": {
                "lunar_date": {"year": 1990, "month": 4, "day": 16},
                "solar_date": {"year": 1990, "month": 5, "day": 10},
                "gender": "male"
            },
            "solar_term": {"current_jieqi_name": "立夏", "days_elapsed_in_term": 12}
        }"#,
    )
    .unwrap();
    let a = derive_attributes(&input);
    assert_eq!(text_or_unknown(&a.constellation), "金牛座");
    assert_eq!(text_or_unknown(&a.life_palace), "丙戌");
    // 巳 month day 12 → 庚
    assert_eq!(text_or_unknown(&a.commander), "庚金用事");

    let json = serde_json::to_value(&a).unwrap();
    assert_eq!(json["na_yin"]["year"], "路旁土");
    assert_eq!(json["void_emptiness"], "戌亥");
    assert_eq!(json["mansion"], "虚");
}

#[test]
fn unknown_solar_term_falls_back() {
    let mut input = ChartInput::new(
        Some(sample_pillars()),
        BirthContext::new(LunarDate::new(1990, 4, 16), Gender::Male),
    );
    input.solar_term = Some(SolarTermWindow {
        current_jieqi_name: "不存在".into(),
        next_jieqi_name: None,
        days_elapsed_in_term: 20,
    });
    // month branch from the pillars (巳) with day 20 → 丙
    let a = derive_attributes(&input);
    assert_eq!(text_or_unknown(&a.commander), "丙火用事");
    assert_eq!(a.constellation, None);
}

// ---------------------------------------------------------------------------
// Life aspects
// ---------------------------------------------------------------------------

#[test]
fn life_aspects_sample_chart() {
    let view = ChartView::new(sample_pillars(), Gender::Male);
    let report = evaluate_life_aspects(&view);
    assert_eq!(report.len(), 22);
    assert!(report.get("容貌").unwrap().contains("容貌俊美"));
    assert!(report.get("性格").unwrap().starts_with("日主甲木"));
    // 七杀 and 正官 both visible
    let career = report.get("事业").unwrap();
    assert!(career.contains("正官透干"), "{career}");
    assert!(career.contains("七杀透干"), "{career}");
    assert!(career.contains("；"));
    assert_eq!(report.get("不存在"), None);
}

#[test]
fn supplied_labels_replace_derived_ones() {
    let labels = StemTenGods {
        year: TenGod::ZhengCai,
        month: TenGod::ZhengCai,
        day: TenGod::BiJian,
        hour: TenGod::ZhengCai,
    };
    let mut tally = ElementTally::default();
    tally.shui = 4;
    let view = ChartView::new(sample_pillars(), Gender::Male)
        .with_ten_gods(labels)
        .with_tally(tally);
    let report = evaluate_life_aspects(&view);
    assert!(report.get("配偶").unwrap().contains("正财透干"));
    assert!(report.get("健康").unwrap().contains("水旺"));
    assert_eq!(report.get("事业").unwrap(), "事业平稳，无明显特征");
}

#[test]
fn female_year_pillar_not_listed() {
    let view = ChartView::new(sample_pillars(), Gender::Female);
    let text = evaluate_life_aspects(&view).get("容貌").unwrap().to_string();
    assert!(text.contains("不在") && text.contains("列表中"), "{text}");
}

// ---------------------------------------------------------------------------
// Annual score
// ---------------------------------------------------------------------------

#[test]
fn annual_score_json_shape() {
    let day: Pillar = "甲子".parse().unwrap();
    let year: Pillar = "丁丑".parse().unwrap();
    let result = AuspiciousnessScorer::default().score(&AnnualQuery::new(day, year));
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["level"], "中平");
    assert_eq!(json["score_breakdown"]["stem"], 45.0);
    assert_eq!(json["score_breakdown"]["branch"], 65.0);
    assert!(json["analysis"].as_str().unwrap().lines().count() >= 5);
}

#[test]
fn scorer_uses_config_weights() {
    let config = ScorerConfig::from_toml_str(
        "[weights]\nstem = 1.0\nbranch = 0.0\nten_god = 0.0\ndeity = 0.0\nelement = 0.0\n",
    )
    .unwrap();
    let day: Pillar = "甲子".parse().unwrap();
    let year: Pillar = "壬申".parse().unwrap();
    let result = AuspiciousnessScorer::new(&config).unwrap().score(&AnnualQuery::new(day, year));
    // 壬 feeds 甲: stem component 70, the only weighted part
    assert_eq!(result.score, 70.0);
    assert_eq!(result.level, Level::Fortune);
}
