use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use insights_engine::core::period::{Period, PeriodContext};
use insights_engine::insights::dashboard::compute_dashboard_insights;
use insights_engine::insights::recap::compute_period_recap;
use insights_engine::insights::upcoming::compute_upcoming_payments;
use insights_engine::simulation::scenario::{generate_random_plan, ScenarioConfig};

fn bench_ctx() -> PeriodContext {
    PeriodContext::new(
        Period::new(2026, 6),
        25,
        NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
    )
}

fn bench_recap_30_bills(c: &mut Criterion) {
    let ctx = bench_ctx();
    let config = ScenarioConfig {
        bills_per_period: 30,
        ..Default::default()
    };
    let plan = generate_random_plan(&config, &ctx);
    let previous = ctx.period.prev();
    let obligations = plan.obligations.for_period(previous);
    let prev_ctx = ctx.for_period(previous);

    c.bench_function("recap_30_bills", |b| {
        b.iter(|| compute_period_recap(black_box(&obligations), black_box(&prev_ctx)))
    });
}

fn bench_ranking_100_bills(c: &mut Criterion) {
    let ctx = bench_ctx();
    let config = ScenarioConfig {
        bills_per_period: 100,
        ..Default::default()
    };
    let plan = generate_random_plan(&config, &ctx);
    let obligations = plan.obligations.for_period(ctx.period);

    c.bench_function("ranking_100_bills", |b| {
        b.iter(|| compute_upcoming_payments(black_box(&obligations), black_box(&ctx), Some(6)))
    });
}

fn bench_full_pipeline_small(c: &mut Criterion) {
    let ctx = bench_ctx();
    let plan = generate_random_plan(&ScenarioConfig::default(), &ctx);

    c.bench_function("full_pipeline_small", |b| {
        b.iter(|| compute_dashboard_insights(black_box(&plan), black_box(&ctx)))
    });
}

fn bench_full_pipeline_large(c: &mut Criterion) {
    let ctx = bench_ctx();
    let config = ScenarioConfig {
        bills_per_period: 60,
        debt_count: 10,
        ..Default::default()
    };
    let plan = generate_random_plan(&config, &ctx);

    c.bench_function("full_pipeline_large", |b| {
        b.iter(|| compute_dashboard_insights(black_box(&plan), black_box(&ctx)))
    });
}

criterion_group!(
    benches,
    bench_recap_30_bills,
    bench_ranking_100_bills,
    bench_full_pipeline_small,
    bench_full_pipeline_large
);
criterion_main!(benches);
