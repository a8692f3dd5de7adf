//! Integration tests for bazi_rs.
//!
//! The shared scorer is process-wide, so only one test installs a config and
//! it uses values that give the same results as the defaults.

use std::io::Write;

use bazi_rs::*;

fn birth() -> BirthContext {
    let mut birth = BirthContext::new(LunarDate::new(1990, 4, 16), Gender::Male);
    birth.solar_date = Some(SolarDate::new(1990, 5, 10));
    birth
}

#[test]
fn analyze_sample_chart() {
    let term = SolarTermWindow {
        current_jieqi_name: "立夏".into(),
        next_jieqi_name: Some("小满".into()),
        days_elapsed_in_term: 3,
    };
    let chart = analyze_chart(["庚午", "辛巳", "甲子", "丙寅"], birth(), Some(term)).unwrap();
    assert_eq!(chart.pillars.day.to_string(), "甲子");
    assert_eq!(text_or_unknown(&chart.attributes.commander), "戊土用事");
    assert_eq!(text_or_unknown(&chart.attributes.fetal_breath), "己丑");
    assert_eq!(chart.life_aspects.len(), 22);

    let json = serde_json::to_value(&chart).unwrap();
    assert_eq!(json["pillars"]["year"], "庚午");
    assert_eq!(json["attributes"]["constellation"], "金牛座");
    assert!(json["life_aspects"]["容貌"].as_str().unwrap().contains("容貌俊美"));
}

#[test]
fn analyze_rejects_bad_pillar() {
    let err = analyze_chart(["庚午", "辛巳", "甲丑", "丙寅"], birth(), None).unwrap_err();
    assert!(matches!(err, BaziRsError::Parse(BaziError::ParityMismatch { .. })));
    assert!(err.to_string().contains("甲丑"));
}

#[test]
fn life_aspects_from_text() {
    let report = life_aspects(["辛未", "辛卯", "甲子", "甲子"], "男").unwrap();
    let text = report.get("容貌").unwrap();
    assert!(text.contains("不在") && text.contains("列表中"));
    assert!(matches!(
        life_aspects(["辛未", "辛卯", "甲子", "甲子"], "?"),
        Err(BaziRsError::Parse(BaziError::UnknownGender(_)))
    ));
}

#[test]
fn score_year_with_configured_scorer() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[deities]\nauspicious = [\"天乙贵人\"]\ninauspicious = [\"羊刃\"]\n").unwrap();
    init_from_path(file.path()).unwrap();
    assert!(is_initialized());
    assert!(matches!(
        init(ScorerConfig::default()),
        Err(BaziRsError::AlreadyInitialized)
    ));

    let result = score_year("甲子", "丁丑", &["天乙贵人", "红鸾"], Some("壬子")).unwrap();
    // 红鸾 is not in the installed list
    assert_eq!(result.score_breakdown.deity, 55.0);
    // 丁壬 combine, 子丑 harmonize
    assert_eq!(result.score_breakdown.luck_adjustment, 10.0);
    assert!((0.0..=100.0).contains(&result.score));
}

#[test]
fn score_year_bad_input() {
    assert!(matches!(
        score_year("甲子", "丁丑", &[], Some("乙子")),
        Err(BaziRsError::Parse(_))
    ));
    assert!(score_year("x", "丁丑", &[], None).is_err());
}

#[test]
fn text_lookups() {
    assert_eq!(na_yin_text("壬戌"), "大海水");
    assert_eq!(void_emptiness_text("甲寅"), "子丑");
    assert_eq!(na_yin_text("??"), UNKNOWN);
}
