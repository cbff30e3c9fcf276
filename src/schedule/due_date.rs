use crate::core::obligation::Obligation;
use crate::core::period::{Period, PeriodContext};
use chrono::NaiveDate;

/// Number of days in a calendar month, or `None` when the month is not
/// a real one.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((next - first).num_days() as u32)
}

/// Last calendar day of a period.
pub fn end_of_month(period: Period) -> Option<NaiveDate> {
    let last_day = days_in_month(period.year, period.month)?;
    NaiveDate::from_ymd_opt(period.year, period.month, last_day)
}

/// The payday as a concrete date inside a period, with the day clamped
/// into the period's range (a 31st payday lands on the 28th/29th/30th in
/// shorter months). `None` when the period or pay date cannot produce a
/// date.
pub fn pay_date_in_period(period: Period, pay_date: u32) -> Option<NaiveDate> {
    if pay_date < 1 {
        return None;
    }
    let max_day = days_in_month(period.year, period.month)?;
    NaiveDate::from_ymd_opt(period.year, period.month, pay_date.min(max_day))
}

/// Effective due date of an obligation.
///
/// An explicit due date always wins. Otherwise the obligation falls due
/// on the context period's (clamped) payday. Returns `None` instead of
/// failing when the context cannot produce a date; each downstream
/// consumer carries its own policy for that case.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use insights_engine::core::obligation::{Obligation, ObligationId};
/// use insights_engine::core::period::{Period, PeriodContext};
/// use insights_engine::schedule::due_date::resolve_due_date;
///
/// let feb = Period::new(2026, 2);
/// let today = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
/// let ctx = PeriodContext::new(feb, 31, today);
///
/// // No explicit date: payday fallback, clamped to February's last day.
/// let bill = Obligation::new(ObligationId::new("b"), "Internet", 30.0, feb);
/// assert_eq!(
///     resolve_due_date(&bill, &ctx),
///     NaiveDate::from_ymd_opt(2026, 2, 28)
/// );
/// ```
pub fn resolve_due_date(obligation: &Obligation, ctx: &PeriodContext) -> Option<NaiveDate> {
    if let Some(date) = obligation.due_date() {
        return Some(date);
    }
    pay_date_in_period(ctx.period, ctx.pay_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::obligation::ObligationId;

    fn bill(period: Period) -> Obligation {
        Obligation::new(ObligationId::new("b-1"), "Internet", 30.0, period)
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2026, 2), Some(28));
        assert_eq!(days_in_month(2028, 2), Some(29));
        assert_eq!(days_in_month(2026, 12), Some(31));
        assert_eq!(days_in_month(2026, 0), None);
        assert_eq!(days_in_month(2026, 13), None);
    }

    #[test]
    fn test_explicit_date_wins() {
        let period = Period::new(2026, 3);
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let explicit = NaiveDate::from_ymd_opt(2026, 7, 4).unwrap();
        let ctx = PeriodContext::new(period, 15, today);
        let ob = bill(period).with_due_date(explicit);
        assert_eq!(resolve_due_date(&ob, &ctx), Some(explicit));
    }

    #[test]
    fn test_payday_fallback_clamps() {
        let period = Period::new(2026, 2);
        let today = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let ctx = PeriodContext::new(period, 31, today);
        assert_eq!(
            resolve_due_date(&bill(period), &ctx),
            NaiveDate::from_ymd_opt(2026, 2, 28)
        );
    }

    #[test]
    fn test_unresolvable_context() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let bad_month = PeriodContext::new(Period::new(2026, 13), 15, today);
        assert_eq!(resolve_due_date(&bill(Period::new(2026, 13)), &bad_month), None);

        let bad_payday = PeriodContext::new(Period::new(2026, 2), 0, today);
        assert_eq!(resolve_due_date(&bill(Period::new(2026, 2)), &bad_payday), None);
    }

    #[test]
    fn test_end_of_month() {
        assert_eq!(
            end_of_month(Period::new(2026, 1)),
            NaiveDate::from_ymd_opt(2026, 1, 31)
        );
        assert_eq!(end_of_month(Period::new(2026, 0)), None);
    }
}
