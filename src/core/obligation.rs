use crate::core::period::Period;
use crate::core::status::{classify_payment, finite_or_zero, PaymentStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for an obligation, assigned by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObligationId(String);

impl ObligationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObligationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ObligationId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A single payable item for one period: a bill, a debt line, or an
/// allocation share.
///
/// Owned and mutated exclusively by the external record store; the
/// engine receives read-only snapshots and never writes one back.
/// Amounts are accessed through coercing accessors, so a malformed
/// (non-finite) field degrades that record to 0 instead of poisoning
/// the batch.
///
/// # Examples
///
/// ```
/// use insights_engine::core::obligation::{Obligation, ObligationId};
/// use insights_engine::core::period::Period;
/// use insights_engine::core::status::PaymentStatus;
///
/// let rent = Obligation::new(ObligationId::new("ob-1"), "Rent", 950.0, Period::new(2026, 1))
///     .with_payment(false, 400.0);
///
/// assert_eq!(rent.status(), PaymentStatus::Partial);
/// assert_eq!(rent.remaining(), 550.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obligation {
    id: ObligationId,
    name: String,
    /// Amount owed for the period. Must be >= 0 in well-formed data.
    amount: f64,
    /// The store's explicit "fully paid" flag.
    #[serde(default)]
    paid: bool,
    #[serde(default)]
    paid_amount: f64,
    /// Explicit due date, when the user set one. Absent dates fall back
    /// to the plan's payday.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    due_date: Option<NaiveDate>,
    /// The period this snapshot belongs to.
    #[serde(flatten)]
    period: Period,
}

impl Obligation {
    /// Create an unpaid obligation snapshot.
    pub fn new(id: ObligationId, name: impl Into<String>, amount: f64, period: Period) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
            paid: false,
            paid_amount: 0.0,
            due_date: None,
            period,
        }
    }

    /// Set an explicit due date.
    pub fn with_due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    /// Set the payment state.
    pub fn with_payment(mut self, paid: bool, paid_amount: f64) -> Self {
        self.paid = paid;
        self.paid_amount = paid_amount;
        self
    }

    // --- Accessors ---

    pub fn id(&self) -> &ObligationId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Amount owed, with non-finite values coerced to 0.
    pub fn amount(&self) -> f64 {
        finite_or_zero(self.amount)
    }

    pub fn is_flagged_paid(&self) -> bool {
        self.paid
    }

    /// Amount paid so far, with non-finite values coerced to 0.
    pub fn paid_amount(&self) -> f64 {
        finite_or_zero(self.paid_amount)
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    pub fn period(&self) -> Period {
        self.period
    }

    /// Derived payment status. Recomputed on every call, never cached.
    pub fn status(&self) -> PaymentStatus {
        classify_payment(self.amount, self.paid, self.paid_amount)
    }

    /// Amount still owed, floored at zero for overpayments.
    pub fn remaining(&self) -> f64 {
        (self.amount() - self.paid_amount()).max(0.0)
    }
}

/// A collection of obligation snapshots, possibly spanning several
/// periods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObligationSet {
    obligations: Vec<Obligation>,
}

impl ObligationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, obligation: Obligation) {
        self.obligations.push(obligation);
    }

    pub fn obligations(&self) -> &[Obligation] {
        &self.obligations
    }

    pub fn len(&self) -> usize {
        self.obligations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obligations.is_empty()
    }

    /// Total owed across the set.
    pub fn gross_total(&self) -> f64 {
        self.obligations.iter().map(|o| o.amount()).sum()
    }

    /// The snapshots belonging to one period, in input order.
    pub fn for_period(&self, period: Period) -> Vec<Obligation> {
        self.obligations
            .iter()
            .filter(|o| o.period() == period)
            .cloned()
            .collect()
    }

    /// All periods represented in this set, sorted and deduplicated.
    pub fn periods(&self) -> Vec<Period> {
        let mut periods: Vec<Period> = self.obligations.iter().map(|o| o.period()).collect();
        periods.sort();
        periods.dedup();
        periods
    }
}

impl FromIterator<Obligation> for ObligationSet {
    fn from_iter<T: IntoIterator<Item = Obligation>>(iter: T) -> Self {
        Self {
            obligations: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, amount: f64, period: Period) -> Obligation {
        Obligation::new(ObligationId::new(id), "Electricity", amount, period)
    }

    #[test]
    fn test_obligation_defaults_unpaid() {
        let ob = sample("ob-1", 80.0, Period::new(2026, 1));
        assert_eq!(ob.status(), PaymentStatus::Unpaid);
        assert_eq!(ob.remaining(), 80.0);
        assert!(ob.due_date().is_none());
    }

    #[test]
    fn test_non_finite_amount_degrades() {
        let ob = sample("ob-1", f64::NAN, Period::new(2026, 1));
        assert_eq!(ob.amount(), 0.0);
        // Nothing owed means the record classifies as paid.
        assert_eq!(ob.status(), PaymentStatus::Paid);
    }

    #[test]
    fn test_remaining_floors_at_zero() {
        let ob = sample("ob-1", 50.0, Period::new(2026, 1)).with_payment(false, 80.0);
        assert_eq!(ob.remaining(), 0.0);
    }

    #[test]
    fn test_set_partitions_by_period() {
        let jan = Period::new(2026, 1);
        let feb = Period::new(2026, 2);
        let set: ObligationSet = vec![
            sample("a", 10.0, jan),
            sample("b", 20.0, feb),
            sample("c", 30.0, jan),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 3);
        assert_eq!(set.gross_total(), 60.0);
        assert_eq!(set.for_period(jan).len(), 2);
        assert_eq!(set.periods(), vec![jan, feb]);
    }

    #[test]
    fn test_obligation_json_shape() {
        let ob = sample("ob-9", 25.5, Period::new(2026, 3))
            .with_due_date(NaiveDate::from_ymd_opt(2026, 3, 10).unwrap());
        let json = serde_json::to_value(&ob).unwrap();
        assert_eq!(json["id"], "ob-9");
        assert_eq!(json["year"], 2026);
        assert_eq!(json["month"], 3);
        assert_eq!(json["due_date"], "2026-03-10");
    }
}
