use criterion::{Criterion, black_box, criterion_group, criterion_main};
use bazi_analysis::{
    AnnualQuery, AuspiciousnessScorer, BirthContext, ChartInput, ChartView, derive_attributes,
    evaluate_life_aspects,
};
use bazi_base::{FourPillars, Gender, LunarDate, Pillar};

fn sample() -> FourPillars {
    FourPillars::new(
        Pillar::from_cycle_index(6),
        Pillar::from_cycle_index(17),
        Pillar::from_cycle_index(0),
        Pillar::from_cycle_index(2),
    )
}

fn derive_bench(c: &mut Criterion) {
    let full = ChartInput::new(
        Some(sample()),
        BirthContext::new(LunarDate::new(1990, 4, 16), Gender::Male),
    );
    let sparse = ChartInput::new(None, BirthContext::new(LunarDate::new(1990, 4, 16), Gender::Male));

    let mut group = c.benchmark_group("derive_attributes");
    group.bench_function("full_chart", |b| b.iter(|| derive_attributes(black_box(&full))));
    group.bench_function("birth_only", |b| b.iter(|| derive_attributes(black_box(&sparse))));
    group.finish();
}

fn life_aspect_bench(c: &mut Criterion) {
    let view = ChartView::new(sample(), Gender::Male);

    let mut group = c.benchmark_group("life_aspects");
    group.bench_function("all_22_rules", |b| b.iter(|| evaluate_life_aspects(black_box(&view))));
    group.finish();
}

fn scorer_bench(c: &mut Criterion) {
    let scorer = AuspiciousnessScorer::default();
    let mut query = AnnualQuery::new(Pillar::from_cycle_index(0), Pillar::from_cycle_index(13));
    query.deities = vec!["天乙贵人".into(), "羊刃".into()];
    query.luck_pillar = Some(Pillar::from_cycle_index(25));

    let mut group = c.benchmark_group("auspiciousness");
    group.bench_function("score_year", |b| b.iter(|| scorer.score(black_box(&query))));
    group.finish();
}

criterion_group!(benches, derive_bench, life_aspect_bench, scorer_bench);
criterion_main!(benches);
