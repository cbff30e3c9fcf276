use crate::core::allocation::AllocationPlan;
use crate::core::debt::DebtAccount;
use crate::core::obligation::{Obligation, ObligationId};
use crate::core::period::PeriodContext;
use crate::core::status::PaymentStatus;
use crate::schedule::due_date::resolve_due_date;
use crate::schedule::payday::next_pay_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Days within which an unpaid obligation counts as due "soon".
pub const SOON_WINDOW_DAYS: i64 = 7;

/// Default cap on a rendered upcoming list.
pub const DEFAULT_UPCOMING_LIMIT: usize = 6;

/// Ranking score table. Scores sort ascending, so smaller means more
/// pressing. The bands are spaced far enough apart that day offsets can
/// never bleed one band into another.
pub mod score {
    /// Paid items sink to the bottom regardless of date.
    pub const PAID_BASE: i64 = 10_000;
    /// Overdue items float to the top, oldest first.
    pub const OVERDUE_BASE: i64 = -1_000;
    /// Items due today outrank everything except overdue ones.
    pub const DUE_TODAY: i64 = -500;
    /// Unpaid items beyond the soon window.
    pub const LATER_BASE: i64 = 100;
}

/// Coarse classification of how soon an unpaid obligation needs action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Overdue,
    Today,
    Soon,
    Later,
}

/// Which source an upcoming payment came from.
///
/// A tagged variant rather than a flat record so kind-specific data (a
/// debt's interest rate) rides along without weakening the shared
/// ranking contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PaymentKind {
    Expense,
    Debt {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        interest_rate: Option<f64>,
    },
    Allocation,
}

impl PaymentKind {
    pub fn is_expense(&self) -> bool {
        matches!(self, PaymentKind::Expense)
    }

    pub fn is_debt(&self) -> bool {
        matches!(self, PaymentKind::Debt { .. })
    }

    pub fn is_allocation(&self) -> bool {
        matches!(self, PaymentKind::Allocation)
    }
}

/// One entry in the upcoming-payments list.
///
/// Built fresh on every invocation and handed to the rendering
/// collaborator; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingPayment {
    pub id: ObligationId,
    #[serde(flatten)]
    pub kind: PaymentKind,
    pub name: String,
    pub amount: f64,
    pub paid_amount: f64,
    pub status: PaymentStatus,
    pub due_date: NaiveDate,
    pub days_until_due: i64,
    pub urgency: Urgency,
}

/// Urgency of an item given its status and days until due.
///
/// Paid items need no action and always classify as `Later`, however
/// old their due date is.
pub fn classify_urgency(status: PaymentStatus, days_until_due: i64) -> Urgency {
    if status.is_paid() {
        return Urgency::Later;
    }
    if days_until_due < 0 {
        Urgency::Overdue
    } else if days_until_due == 0 {
        Urgency::Today
    } else if days_until_due <= SOON_WINDOW_DAYS {
        Urgency::Soon
    } else {
        Urgency::Later
    }
}

/// Ranking score for ordering; ascending sort puts the most pressing
/// item first.
pub fn ranking_score(payment: &UpcomingPayment) -> i64 {
    if payment.status.is_paid() {
        return score::PAID_BASE + payment.days_until_due;
    }
    match payment.urgency {
        Urgency::Overdue => score::OVERDUE_BASE + payment.days_until_due,
        Urgency::Today => score::DUE_TODAY,
        Urgency::Soon => payment.days_until_due,
        Urgency::Later => score::LATER_BASE + payment.days_until_due,
    }
}

/// Sort for the mixer: ascending score, ties broken by descending
/// amount so the bigger obligation surfaces first.
pub fn sort_for_mix(payments: &mut [UpcomingPayment]) {
    payments.sort_by(|a, b| {
        ranking_score(a)
            .cmp(&ranking_score(b))
            .then_with(|| b.amount.total_cmp(&a.amount))
    });
}

/// Build and rank upcoming payments for one period's bill obligations.
///
/// Obligations with nothing owed are skipped, and so are obligations
/// whose due date cannot be resolved: an unschedulable item has no
/// place in a list ordered by due date. Ties keep input order; callers
/// may cap the sorted list with `limit`.
pub fn compute_upcoming_payments(
    obligations: &[Obligation],
    ctx: &PeriodContext,
    limit: Option<usize>,
) -> Vec<UpcomingPayment> {
    let mut upcoming = Vec::new();

    for ob in obligations {
        let amount = ob.amount();
        if amount <= 0.0 {
            continue;
        }
        let Some(due) = resolve_due_date(ob, ctx) else {
            continue;
        };
        let status = ob.status();
        let days_until_due = (due - ctx.today).num_days();

        upcoming.push(UpcomingPayment {
            id: ob.id().clone(),
            kind: PaymentKind::Expense,
            name: ob.name().to_string(),
            amount,
            paid_amount: ob.paid_amount(),
            status,
            due_date: due,
            days_until_due,
            urgency: classify_urgency(status, days_until_due),
        });
    }

    upcoming.sort_by_key(ranking_score);
    if let Some(limit) = limit {
        upcoming.truncate(limit);
    }
    upcoming
}

/// One upcoming payment per active debt account, due on the next
/// payday.
///
/// Debt payments are tracked outside the bill snapshots, so there is no
/// per-period paid amount here. Items always start `Unpaid`; the record
/// store drops settled accounts from the snapshot instead. Output is
/// mixer-sorted.
pub fn upcoming_debt_payments(
    debts: &[DebtAccount],
    ctx: &PeriodContext,
) -> Vec<UpcomingPayment> {
    let Some(due) = next_pay_date(ctx) else {
        return Vec::new();
    };
    let days_until_due = (due - ctx.today).num_days();
    let urgency = classify_urgency(PaymentStatus::Unpaid, days_until_due);

    let mut items: Vec<UpcomingPayment> = debts
        .iter()
        .filter(|d| d.is_active() && d.amount() > 0.0)
        .map(|d| UpcomingPayment {
            id: d.id().clone(),
            kind: PaymentKind::Debt {
                interest_rate: d.interest_rate(),
            },
            name: d.name().to_string(),
            amount: d.amount(),
            paid_amount: 0.0,
            status: PaymentStatus::Unpaid,
            due_date: due,
            days_until_due,
            urgency,
        })
        .collect();

    sort_for_mix(&mut items);
    items
}

/// Collapse a period's allocation parts into at most one synthetic
/// payment due on the next payday. `None` when nothing is allocated.
pub fn allocation_upcoming(
    plan: &AllocationPlan,
    ctx: &PeriodContext,
) -> Option<UpcomingPayment> {
    let total = plan.total();
    if total <= 0.0 {
        return None;
    }
    let due = next_pay_date(ctx)?;
    let days_until_due = (due - ctx.today).num_days();

    Some(UpcomingPayment {
        id: ObligationId::new(format!("allocation:{}", ctx.period)),
        kind: PaymentKind::Allocation,
        name: plan.bucket_name().to_string(),
        amount: total,
        paid_amount: 0.0,
        status: PaymentStatus::Unpaid,
        due_date: due,
        days_until_due,
        urgency: classify_urgency(PaymentStatus::Unpaid, days_until_due),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::period::Period;

    fn ctx() -> PeriodContext {
        PeriodContext::new(
            Period::new(2026, 3),
            28,
            NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
        )
    }

    fn bill(id: &str, amount: f64, due_day: u32) -> Obligation {
        Obligation::new(ObligationId::new(id), id, amount, Period::new(2026, 3))
            .with_due_date(NaiveDate::from_ymd_opt(2026, 3, due_day).unwrap())
    }

    #[test]
    fn test_urgency_bands() {
        assert_eq!(classify_urgency(PaymentStatus::Unpaid, -1), Urgency::Overdue);
        assert_eq!(classify_urgency(PaymentStatus::Unpaid, 0), Urgency::Today);
        assert_eq!(classify_urgency(PaymentStatus::Unpaid, 7), Urgency::Soon);
        assert_eq!(classify_urgency(PaymentStatus::Unpaid, 8), Urgency::Later);
        // Paid items never escalate.
        assert_eq!(classify_urgency(PaymentStatus::Paid, -30), Urgency::Later);
    }

    #[test]
    fn test_ranking_order() {
        let obligations = vec![
            bill("later", 10.0, 25),
            bill("overdue", 10.0, 5),
            bill("soon", 10.0, 13),
            bill("today", 10.0, 10),
        ];
        let ranked = compute_upcoming_payments(&obligations, &ctx(), None);
        let ids: Vec<&str> = ranked.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["overdue", "today", "soon", "later"]);
    }

    #[test]
    fn test_paid_items_sink() {
        let obligations = vec![
            bill("paid-overdue", 10.0, 1).with_payment(true, 10.0),
            bill("unpaid-later", 10.0, 28),
        ];
        let ranked = compute_upcoming_payments(&obligations, &ctx(), None);
        assert_eq!(ranked[0].id.as_str(), "unpaid-later");
        assert_eq!(ranked[1].urgency, Urgency::Later);
    }

    #[test]
    fn test_zero_amount_and_unresolvable_skipped() {
        let period = Period::new(2026, 3);
        let obligations = vec![
            Obligation::new(ObligationId::new("free"), "Freebie", 0.0, period),
            Obligation::new(ObligationId::new("no-date"), "Floating", 40.0, period),
        ];
        let bad_ctx = PeriodContext::new(period, 0, ctx().today);
        // Pay date 0 resolves nothing, and the zero-amount bill is out anyway.
        assert!(compute_upcoming_payments(&obligations, &bad_ctx, None).is_empty());
    }

    #[test]
    fn test_limit_caps_after_sort() {
        let obligations = vec![bill("a", 10.0, 25), bill("b", 10.0, 5)];
        let ranked = compute_upcoming_payments(&obligations, &ctx(), Some(1));
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].id.as_str(), "b");
    }

    #[test]
    fn test_debt_items_unpaid_on_payday() {
        let debts = vec![
            DebtAccount::new(ObligationId::new("d-1"), "Visa", 120.0, 900.0)
                .with_interest_rate(21.9),
            DebtAccount::new(ObligationId::new("d-2"), "Settled", 50.0, 0.0),
            DebtAccount::new(ObligationId::new("d-3"), "No plan", 0.0, 300.0),
        ];
        let items = upcoming_debt_payments(&debts, &ctx());
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.status, PaymentStatus::Unpaid);
        assert_eq!(item.due_date, NaiveDate::from_ymd_opt(2026, 3, 28).unwrap());
        assert_eq!(
            item.kind,
            PaymentKind::Debt {
                interest_rate: Some(21.9)
            }
        );
    }

    #[test]
    fn test_allocation_bucket_sums_parts() {
        let mut plan = AllocationPlan::new();
        plan.push("Savings", 150.0);
        plan.push("Emergency fund", 50.0);
        let item = allocation_upcoming(&plan, &ctx()).unwrap();
        assert_eq!(item.amount, 200.0);
        assert_eq!(item.name, "Income sacrifice");
        assert!(item.kind.is_allocation());

        assert!(allocation_upcoming(&AllocationPlan::new(), &ctx()).is_none());
    }

    #[test]
    fn test_mix_sort_breaks_ties_by_amount() {
        let obligations = vec![bill("small", 10.0, 13), bill("big", 90.0, 13)];
        let mut ranked = compute_upcoming_payments(&obligations, &ctx(), None);
        sort_for_mix(&mut ranked);
        assert_eq!(ranked[0].id.as_str(), "big");
    }
}
