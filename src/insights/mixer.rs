use crate::insights::upcoming::{sort_for_mix, UpcomingPayment, DEFAULT_UPCOMING_LIMIT};
use serde::{Deserialize, Serialize};

/// Per-source quotas for the mixed upcoming list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixQuotas {
    /// Overall cap on the mixed list.
    pub limit: usize,
    /// Slots reserved for ranked expense items.
    pub max_expenses: usize,
    /// Slots reserved for ranked debt items.
    pub max_debts: usize,
}

impl Default for MixQuotas {
    fn default() -> Self {
        Self {
            limit: DEFAULT_UPCOMING_LIMIT,
            max_expenses: 3,
            max_debts: 2,
        }
    }
}

/// Merge ranked per-source lists under representation quotas.
///
/// Without quotas a month of pressing bills crowds every debt off the
/// dashboard. Each source list must already be mixer-sorted (ascending
/// score, amount-descending ties).
///
/// # Algorithm
///
/// 1. Reserve up to `max_expenses` expense items, `max_debts` debt
///    items, and at most one allocation item.
/// 2. Backfill unused capacity from leftover expenses, then leftover
///    debts, up to `limit`.
/// 3. Re-sort the combined set by ranking score (amount-descending
///    ties) and truncate to `limit`.
///
/// Guarantee: when at least `max_debts` debt items exist, the final
/// list keeps at least `max_debts` of them, however the expense items
/// score.
pub fn mix_upcoming(
    expenses: &[UpcomingPayment],
    debts: &[UpcomingPayment],
    allocation: Option<UpcomingPayment>,
    quotas: MixQuotas,
) -> Vec<UpcomingPayment> {
    let mut selected: Vec<UpcomingPayment> = Vec::new();

    selected.extend(expenses.iter().take(quotas.max_expenses).cloned());
    selected.extend(debts.iter().take(quotas.max_debts).cloned());
    selected.extend(allocation);

    if selected.len() < quotas.limit {
        let remaining = quotas.limit - selected.len();
        selected.extend(
            expenses
                .iter()
                .skip(quotas.max_expenses)
                .take(remaining)
                .cloned(),
        );
    }
    if selected.len() < quotas.limit {
        let remaining = quotas.limit - selected.len();
        selected.extend(debts.iter().skip(quotas.max_debts).take(remaining).cloned());
    }

    log::debug!(
        "mixing upcoming: {} expenses, {} debts, allocation={}, {} selected before cap {}",
        expenses.len(),
        debts.len(),
        selected.iter().any(|u| u.kind.is_allocation()),
        selected.len(),
        quotas.limit
    );

    sort_for_mix(&mut selected);
    selected.truncate(quotas.limit);
    selected
}
