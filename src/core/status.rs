use serde::{Deserialize, Serialize};
use std::fmt;

/// Tolerance used when comparing paid amounts against owed amounts.
///
/// Amounts are plain `f64` currency values, so a bill paid in two
/// transfers of 33.33 and 66.67 must still classify as fully paid even
/// when the float sum lands a fraction of a cent short.
pub const PAID_EPSILON: f64 = 0.005;

/// Coerce a possibly malformed amount to a usable value.
///
/// Snapshots arrive from an external record store; a NaN or infinite
/// field degrades that one record to 0 instead of aborting the batch.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Derived payment state of an obligation.
///
/// Never stored, always recomputed from the snapshot's raw amounts via
/// [`classify_payment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Partial,
    Unpaid,
}

impl PaymentStatus {
    pub fn is_paid(self) -> bool {
        matches!(self, PaymentStatus::Paid)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Partial => "partial",
            PaymentStatus::Unpaid => "unpaid",
        };
        write!(f, "{}", s)
    }
}

/// Classify a payment from its raw amounts.
///
/// An obligation is paid when the store's explicit flag says so, when
/// nothing is owed (`amount <= 0`), or when the paid amount covers the
/// owed amount within [`PAID_EPSILON`]. A positive paid amount short of
/// that is partial; otherwise unpaid.
///
/// Total and deterministic: every input maps to exactly one status, and
/// identical inputs always agree.
///
/// # Examples
///
/// ```
/// use insights_engine::core::status::{classify_payment, PaymentStatus};
///
/// assert_eq!(classify_payment(100.0, false, 40.0), PaymentStatus::Partial);
/// assert_eq!(classify_payment(100.0, false, 99.999), PaymentStatus::Paid);
/// assert_eq!(classify_payment(100.0, false, 0.0), PaymentStatus::Unpaid);
/// ```
pub fn classify_payment(amount: f64, paid: bool, paid_amount: f64) -> PaymentStatus {
    let amount = finite_or_zero(amount);
    let paid_amount = finite_or_zero(paid_amount);

    if paid || amount <= 0.0 || paid_amount >= amount - PAID_EPSILON {
        return PaymentStatus::Paid;
    }
    if paid_amount > 0.0 {
        PaymentStatus::Partial
    } else {
        PaymentStatus::Unpaid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_flag_wins() {
        assert_eq!(classify_payment(100.0, true, 0.0), PaymentStatus::Paid);
    }

    #[test]
    fn test_zero_amount_is_paid() {
        assert_eq!(classify_payment(0.0, false, 0.0), PaymentStatus::Paid);
        assert_eq!(classify_payment(-5.0, false, 0.0), PaymentStatus::Paid);
    }

    #[test]
    fn test_epsilon_covers_float_shortfall() {
        // 33.33 + 66.67 style sums can land a hair under the owed amount.
        assert_eq!(classify_payment(100.0, false, 99.996), PaymentStatus::Paid);
        assert_eq!(classify_payment(100.0, false, 99.99), PaymentStatus::Partial);
    }

    #[test]
    fn test_partial_and_unpaid() {
        assert_eq!(classify_payment(100.0, false, 40.0), PaymentStatus::Partial);
        assert_eq!(classify_payment(100.0, false, 0.0), PaymentStatus::Unpaid);
    }

    #[test]
    fn test_non_finite_degrades_to_zero() {
        // NaN amount coerces to 0, which classifies as paid (nothing owed).
        assert_eq!(classify_payment(f64::NAN, false, 0.0), PaymentStatus::Paid);
        // NaN paid amount coerces to 0 against a real balance.
        assert_eq!(classify_payment(100.0, false, f64::NAN), PaymentStatus::Unpaid);
        assert_eq!(
            classify_payment(100.0, false, f64::INFINITY),
            PaymentStatus::Unpaid
        );
    }
}
