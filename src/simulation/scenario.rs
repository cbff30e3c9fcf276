//! Random plan generation.
//!
//! Produces plausible plan snapshots for benchmarks, demos, and the CLI
//! `generate` command. Randomness lives only here; the engine itself
//! is deterministic.

use crate::core::allocation::AllocationPlan;
use crate::core::debt::{DebtAccount, DebtKind};
use crate::core::forecast::ForecastPoint;
use crate::core::obligation::{Obligation, ObligationId, ObligationSet};
use crate::core::period::PeriodContext;
use crate::insights::dashboard::{PlanSnapshot, HISTORY_PERIODS, UPCOMING_PERIODS};
use rand::Rng;
use uuid::Uuid;

const BILL_NAMES: &[&str] = &[
    "Rent",
    "Electricity",
    "Water",
    "Internet",
    "Phone",
    "Gym",
    "Insurance",
    "Streaming",
    "Groceries",
    "Council tax",
    "Car payment",
    "Childcare",
];

const DEBT_NAMES: &[&str] = &["Visa", "Store card", "Car loan", "Overdraft", "Student loan"];

/// Configuration for generating a random plan snapshot.
#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    /// Bills generated per period.
    pub bills_per_period: usize,
    /// Debt accounts generated.
    pub debt_count: usize,
    /// Minimum bill amount.
    pub min_amount: f64,
    /// Maximum bill amount.
    pub max_amount: f64,
    /// Probability that a generated bill is already fully paid.
    pub paid_ratio: f64,
    /// Probability that a bill carries an explicit due date.
    pub explicit_due_ratio: f64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            bills_per_period: 8,
            debt_count: 3,
            min_amount: 10.0,
            max_amount: 500.0,
            paid_ratio: 0.5,
            explicit_due_ratio: 0.6,
        }
    }
}

/// Generate a random plan snapshot covering the full history and
/// upcoming windows around the context period.
pub fn generate_random_plan(config: &ScenarioConfig, ctx: &PeriodContext) -> PlanSnapshot {
    let mut rng = rand::thread_rng();
    let mut obligations = ObligationSet::new();

    let first = ctx.period.offset(-(HISTORY_PERIODS as i32 - 1));
    let total_periods = HISTORY_PERIODS + UPCOMING_PERIODS - 1;

    for step in 0..total_periods as i32 {
        let period = first.offset(step);
        for _ in 0..config.bills_per_period {
            let name = BILL_NAMES[rng.gen_range(0..BILL_NAMES.len())];
            let amount = rng.gen_range(config.min_amount..config.max_amount);
            let mut bill = Obligation::new(
                ObligationId::new(Uuid::new_v4().to_string()),
                name,
                amount,
                period,
            );

            if rng.gen_bool(config.explicit_due_ratio) {
                let day = rng.gen_range(1..=28);
                if let Some(due) =
                    chrono::NaiveDate::from_ymd_opt(period.year, period.month, day)
                {
                    bill = bill.with_due_date(due);
                }
            }

            // Future periods stay unpaid; past and current ones get a
            // mixed payment history.
            let in_past = period <= ctx.period;
            if in_past && rng.gen_bool(config.paid_ratio) {
                bill = bill.with_payment(true, amount);
            } else if in_past && rng.gen_bool(0.3) {
                bill = bill.with_payment(false, amount * rng.gen_range(0.1..0.9));
            }

            obligations.add(bill);
        }
    }

    let debts: Vec<DebtAccount> = (0..config.debt_count)
        .map(|i| {
            let name = DEBT_NAMES[i % DEBT_NAMES.len()];
            let balance = rng.gen_range(100.0..5000.0);
            let mut debt = DebtAccount::new(
                ObligationId::new(Uuid::new_v4().to_string()),
                name,
                rng.gen_range(20.0..300.0),
                balance,
            )
            .with_interest_rate(rng.gen_range(3.0..35.0));
            if name == "Visa" || name == "Store card" {
                debt = debt
                    .with_kind(if name == "Visa" {
                        DebtKind::CreditCard
                    } else {
                        DebtKind::StoreCard
                    })
                    .with_credit_limit(balance * rng.gen_range(1.0..2.0));
            } else {
                debt = debt.with_kind(DebtKind::Loan);
            }
            debt
        })
        .collect();

    let mut allocations = AllocationPlan::new();
    allocations.push("Savings contribution", rng.gen_range(50.0..300.0));
    allocations.push("Emergency fund", rng.gen_range(20.0..150.0));

    let income = rng.gen_range(1800.0..3500.0);
    let forecasts: Vec<ForecastPoint> = (0..=UPCOMING_PERIODS as i32)
        .map(|ahead| {
            let period = ctx.period.offset(ahead);
            let bills: f64 = obligations
                .for_period(period)
                .iter()
                .map(|o| o.amount())
                .sum();
            ForecastPoint::new(period, income, bills)
        })
        .collect();

    PlanSnapshot {
        obligations,
        debts,
        allocations,
        forecasts,
        total_income: Some(income),
        suppress_recap: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::period::Period;
    use crate::insights::dashboard::compute_dashboard_insights;
    use chrono::NaiveDate;

    fn ctx() -> PeriodContext {
        PeriodContext::new(
            Period::new(2026, 6),
            25,
            NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
        )
    }

    #[test]
    fn test_generated_plan_shape() {
        let config = ScenarioConfig::default();
        let plan = generate_random_plan(&config, &ctx());

        let expected_periods = HISTORY_PERIODS + UPCOMING_PERIODS - 1;
        assert_eq!(plan.obligations.periods().len(), expected_periods);
        assert_eq!(
            plan.obligations.len(),
            expected_periods * config.bills_per_period
        );
        assert_eq!(plan.debts.len(), config.debt_count);
        assert!(plan.allocations.total() > 0.0);
    }

    #[test]
    fn test_future_bills_stay_unpaid() {
        let plan = generate_random_plan(&ScenarioConfig::default(), &ctx());
        let next = ctx().period.next();
        for ob in plan.obligations.for_period(next) {
            assert!(!ob.status().is_paid());
        }
    }

    #[test]
    fn test_generated_plan_feeds_pipeline() {
        let plan = generate_random_plan(&ScenarioConfig::default(), &ctx());
        let insights = compute_dashboard_insights(&plan, &ctx());
        assert!(insights.recap.is_some());
        assert!(insights.upcoming.len() <= 6);
    }
}
