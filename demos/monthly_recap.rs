//! Previous-month recap and tip generation example.
//!
//! Walks one troubled month through the recap aggregator and shows
//! which tips the heuristics surface from it.

use chrono::NaiveDate;
use insights_engine::core::forecast::ForecastPoint;
use insights_engine::core::obligation::{Obligation, ObligationId};
use insights_engine::core::period::{Period, PeriodContext};
use insights_engine::insights::priority::prioritize_tips;
use insights_engine::insights::recap::compute_period_recap;
use insights_engine::insights::tips::{generate_recap_tips, TipInputs};

fn main() {
    println!("╔══════════════════════════════════════════╗");
    println!("║  insights-engine: Monthly Recap Example  ║");
    println!("╚══════════════════════════════════════════╝\n");

    let march = Period::new(2026, 3);
    let february = march.prev();
    let today = NaiveDate::from_ymd_opt(2026, 3, 12).unwrap();
    let ctx = PeriodContext::new(march, 25, today);

    // --- February: how did it actually go? ---
    let february_bills = vec![
        Obligation::new(ObligationId::new("rent"), "Rent", 900.0, february)
            .with_due_date(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap())
            .with_payment(true, 900.0),
        Obligation::new(ObligationId::new("power"), "Electricity", 85.0, february)
            .with_due_date(NaiveDate::from_ymd_opt(2026, 2, 10).unwrap())
            .with_payment(false, 40.0),
        Obligation::new(ObligationId::new("water"), "Water", 42.0, february)
            .with_due_date(NaiveDate::from_ymd_opt(2026, 2, 18).unwrap()),
        Obligation::new(ObligationId::new("gym"), "Gym", 30.0, february),
    ];

    let recap = compute_period_recap(&february_bills, &ctx.for_period(february));
    println!("{}\n", recap);

    // --- March: one bill already overdue. ---
    let march_bills = vec![
        Obligation::new(ObligationId::new("power-3"), "Electricity", 85.0, march)
            .with_due_date(NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()),
    ];

    // History: the gym membership slipped twice before.
    let history = vec![
        Obligation::new(ObligationId::new("gym-1"), "Gym", 30.0, Period::new(2026, 1)),
        Obligation::new(ObligationId::new("gym-2"), "Gym", 30.0, february),
    ];

    // Projections: April is the strongest month, May goes negative.
    let forecasts = vec![
        ForecastPoint::new(march, 2200.0, 2100.0),
        ForecastPoint::new(Period::new(2026, 4), 2400.0, 1700.0),
        ForecastPoint::new(Period::new(2026, 5), 1500.0, 1750.0),
    ];

    let tips = generate_recap_tips(&TipInputs {
        recap: &recap,
        current: &march_bills,
        ctx: &ctx,
        forecasts: &forecasts,
        history: &history,
    });
    let ranked = prioritize_tips(tips, None);

    println!("━━━ Tips (highest priority first) ━━━\n");
    for tip in &ranked {
        println!("[{:>3}] {}", tip.priority.unwrap_or(0), tip.title);
        println!("      {}\n", tip.detail);
    }
}
