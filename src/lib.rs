//! # insights-engine
//!
//! Financial-obligation insights engine for a personal budget planner.
//!
//! Given read-only snapshots of bills, debts, and income allocations,
//! the engine computes three artifacts for a dashboard:
//!
//! - a **recap** of how the previous period went,
//! - a ranked, quota-balanced list of **upcoming payments**,
//! - a prioritized list of actionable **tips**.
//!
//! Every computation is a pure, synchronous function of its inputs:
//! "today" is always injected, nothing is cached between calls, and no
//! record is ever mutated. Malformed records degrade individually
//! instead of failing the batch.
//!
//! ## Architecture
//!
//! - **core** — Foundational types: obligations, payment status, periods, debts, allocations, forecasts
//! - **schedule** — Due-date resolution and payday arithmetic
//! - **insights** — Recap aggregation, upcoming-payment ranking and mixing, tip generation and prioritization
//! - **simulation** — Random plan generation for benchmarks and demos

pub mod core;
pub mod insights;
pub mod schedule;
pub mod simulation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::allocation::AllocationPlan;
    pub use crate::core::debt::{DebtAccount, DebtKind};
    pub use crate::core::forecast::ForecastPoint;
    pub use crate::core::obligation::{Obligation, ObligationId, ObligationSet};
    pub use crate::core::period::{Period, PeriodContext};
    pub use crate::core::status::{classify_payment, PaymentStatus};
    pub use crate::insights::dashboard::{
        compute_dashboard_insights, DashboardInsights, PlanSnapshot,
    };
    pub use crate::insights::mixer::{mix_upcoming, MixQuotas};
    pub use crate::insights::priority::prioritize_tips;
    pub use crate::insights::recap::{compute_period_recap, RecapSummary};
    pub use crate::insights::tips::Tip;
    pub use crate::insights::upcoming::{
        compute_upcoming_payments, PaymentKind, UpcomingPayment, Urgency,
    };
}
