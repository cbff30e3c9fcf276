use crate::core::obligation::Obligation;
use crate::core::period::PeriodContext;
use crate::core::status::PaymentStatus;
use crate::schedule::due_date::{end_of_month, resolve_due_date};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregated outcome of one past period's obligations.
///
/// An obligation can contribute to both the partial/unpaid buckets and
/// the missed bucket: "missed" tracks anything not fully paid that was
/// due within the period, independent of how far payment got.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecapSummary {
    /// Human-readable period label, e.g. "January 2026".
    pub label: String,
    pub total_count: usize,
    pub total_amount: f64,
    pub paid_count: usize,
    pub paid_amount: f64,
    pub partial_count: usize,
    /// Amount still owed across partially paid obligations.
    pub partial_amount: f64,
    pub unpaid_count: usize,
    pub unpaid_amount: f64,
    pub missed_due_count: usize,
    /// Outstanding amount across obligations that were due within the
    /// period.
    pub missed_due_amount: f64,
}

impl RecapSummary {
    /// Whether the period left anything worth advising about. Gates tip
    /// generation.
    pub fn needs_attention(&self) -> bool {
        self.missed_due_count > 0 || self.unpaid_count + self.partial_count > 0
    }
}

impl fmt::Display for RecapSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Recap: {} ===", self.label)?;
        writeln!(
            f,
            "Total:    {} obligations, {:.2}",
            self.total_count, self.total_amount
        )?;
        writeln!(
            f,
            "Paid:     {} obligations, {:.2}",
            self.paid_count, self.paid_amount
        )?;
        writeln!(
            f,
            "Partial:  {} obligations, {:.2} still owed",
            self.partial_count, self.partial_amount
        )?;
        writeln!(
            f,
            "Unpaid:   {} obligations, {:.2}",
            self.unpaid_count, self.unpaid_amount
        )?;
        write!(
            f,
            "Missed:   {} obligations, {:.2} past their due date",
            self.missed_due_count, self.missed_due_amount
        )
    }
}

/// Summarize how a past period's obligations were ultimately paid.
///
/// Obligations with nothing owed are skipped. An obligation whose due
/// date cannot be resolved still counts as due within the period: the
/// conservative reading, so an unscheduled bill is never silently
/// excused from the missed bucket.
pub fn compute_period_recap(obligations: &[Obligation], ctx: &PeriodContext) -> RecapSummary {
    let end_of_period = end_of_month(ctx.period);
    let mut recap = RecapSummary {
        label: ctx.period.label(),
        ..RecapSummary::default()
    };

    for ob in obligations {
        let amount = ob.amount();
        if amount <= 0.0 {
            continue;
        }

        let status = ob.status();
        let due_by_end_of_period = match (resolve_due_date(ob, ctx), end_of_period) {
            (Some(due), Some(end)) => due <= end,
            _ => true,
        };

        recap.total_count += 1;
        recap.total_amount += amount;

        match status {
            PaymentStatus::Paid => {
                recap.paid_count += 1;
                recap.paid_amount += amount;
                continue;
            }
            PaymentStatus::Partial => {
                recap.partial_count += 1;
                recap.partial_amount += ob.remaining();
            }
            PaymentStatus::Unpaid => {
                recap.unpaid_count += 1;
                recap.unpaid_amount += amount;
            }
        }

        if due_by_end_of_period {
            recap.missed_due_count += 1;
            recap.missed_due_amount += ob.remaining();
        }
    }

    recap
}
