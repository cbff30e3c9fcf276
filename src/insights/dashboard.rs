use crate::core::allocation::AllocationPlan;
use crate::core::debt::DebtAccount;
use crate::core::forecast::ForecastPoint;
use crate::core::obligation::{Obligation, ObligationSet};
use crate::core::period::{Period, PeriodContext};
use crate::insights::debt_tips::generate_debt_tips;
use crate::insights::mixer::{mix_upcoming, MixQuotas};
use crate::insights::priority::prioritize_tips;
use crate::insights::recap::{compute_period_recap, RecapSummary};
use crate::insights::tips::{generate_recap_tips, Tip, TipInputs};
use crate::insights::upcoming::{
    allocation_upcoming, compute_upcoming_payments, sort_for_mix, upcoming_debt_payments,
    UpcomingPayment,
};
use serde::{Deserialize, Serialize};

/// How many past periods feed the history heuristics (current period
/// included).
pub const HISTORY_PERIODS: usize = 6;

/// How many periods ahead contribute upcoming candidates (current
/// period included).
pub const UPCOMING_PERIODS: usize = 3;

/// Upper bound on candidates taken from any single period before
/// mixing.
const PER_PERIOD_CANDIDATES: usize = 50;

/// Final cap on the prioritized tip list.
pub const DEFAULT_TIP_LIMIT: usize = 6;

/// Full snapshot of one budget plan, fetched by the record-store
/// collaborator. The engine only reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanSnapshot {
    /// Bill obligations across every period the caller fetched:
    /// history, current, and the upcoming window.
    #[serde(default)]
    pub obligations: ObligationSet,
    #[serde(default)]
    pub debts: Vec<DebtAccount>,
    #[serde(default)]
    pub allocations: AllocationPlan,
    #[serde(default)]
    pub forecasts: Vec<ForecastPoint>,
    /// Plan income for the current period, when known. Feeds the
    /// debt-load tip.
    #[serde(default)]
    pub total_income: Option<f64>,
    /// Caller-decided: the previous period predates the account and has
    /// no data, so skip the recap entirely. Never computed here.
    #[serde(default)]
    pub suppress_recap: bool,
}

/// Everything the dashboard renders from one engine invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardInsights {
    pub recap: Option<RecapSummary>,
    pub upcoming: Vec<UpcomingPayment>,
    pub tips: Vec<Tip>,
}

/// Run the full pipeline for one plan.
///
/// A pure function: the same snapshot and context always produce the
/// same insights, so concurrent invocations for different plans need no
/// coordination. The context period must be the one containing
/// `ctx.today`.
pub fn compute_dashboard_insights(
    snapshot: &PlanSnapshot,
    ctx: &PeriodContext,
) -> DashboardInsights {
    let current = ctx.period;
    let previous = current.prev();

    let current_obligations = snapshot.obligations.for_period(current);
    let previous_obligations = snapshot.obligations.for_period(previous);

    let history_periods: Vec<Period> = (0..HISTORY_PERIODS as i32)
        .map(|back| current.offset(-back))
        .collect();
    let history: Vec<Obligation> = snapshot
        .obligations
        .obligations()
        .iter()
        .filter(|o| history_periods.contains(&o.period()))
        .cloned()
        .collect();

    let recap = if snapshot.suppress_recap {
        None
    } else {
        Some(compute_period_recap(
            &previous_obligations,
            &ctx.for_period(previous),
        ))
    };

    // Candidates from the forward window; paid bills need no action and
    // drop out before mixing.
    let mut expense_candidates: Vec<UpcomingPayment> = Vec::new();
    for ahead in 0..UPCOMING_PERIODS as i32 {
        let period = current.offset(ahead);
        let period_obligations = snapshot.obligations.for_period(period);
        expense_candidates.extend(
            compute_upcoming_payments(
                &period_obligations,
                &ctx.for_period(period),
                Some(PER_PERIOD_CANDIDATES),
            )
            .into_iter()
            .filter(|u| !u.status.is_paid()),
        );
    }
    sort_for_mix(&mut expense_candidates);

    let debt_candidates = upcoming_debt_payments(&snapshot.debts, ctx);
    let allocation = allocation_upcoming(&snapshot.allocations, ctx);
    let upcoming = mix_upcoming(
        &expense_candidates,
        &debt_candidates,
        allocation,
        MixQuotas::default(),
    );

    let mut tips = match &recap {
        Some(recap) => generate_recap_tips(&TipInputs {
            recap,
            current: &current_obligations,
            ctx,
            forecasts: &snapshot.forecasts,
            history: &history,
        }),
        None => Vec::new(),
    };
    tips.extend(generate_debt_tips(&snapshot.debts, snapshot.total_income));
    let tips = prioritize_tips(tips, Some(DEFAULT_TIP_LIMIT));

    log::debug!(
        "dashboard insights for {}: recap={}, {} upcoming, {} tips",
        current,
        recap.is_some(),
        upcoming.len(),
        tips.len()
    );

    DashboardInsights {
        recap,
        upcoming,
        tips,
    }
}
