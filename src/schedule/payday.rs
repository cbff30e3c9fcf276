use crate::core::period::PeriodContext;
use crate::schedule::due_date::pay_date_in_period;
use chrono::NaiveDate;

/// The next payday on or after "today": the context period's payday when
/// it has not passed yet, otherwise the following period's.
///
/// Debt payments and income allocations have no stored due date of
/// their own; they are scheduled against this date. Assumes the context
/// period is the one containing `today` (the orchestrator guarantees
/// it).
pub fn next_pay_date(ctx: &PeriodContext) -> Option<NaiveDate> {
    let this_period = pay_date_in_period(ctx.period, ctx.pay_date)?;
    if this_period >= ctx.today {
        return Some(this_period);
    }
    pay_date_in_period(ctx.period.next(), ctx.pay_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::period::Period;

    fn ctx(day: u32, pay_date: u32) -> PeriodContext {
        PeriodContext::new(
            Period::new(2026, 3),
            pay_date,
            NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
        )
    }

    #[test]
    fn test_payday_still_ahead() {
        assert_eq!(
            next_pay_date(&ctx(10, 25)),
            NaiveDate::from_ymd_opt(2026, 3, 25)
        );
    }

    #[test]
    fn test_payday_today() {
        assert_eq!(
            next_pay_date(&ctx(25, 25)),
            NaiveDate::from_ymd_opt(2026, 3, 25)
        );
    }

    #[test]
    fn test_payday_passed_rolls_to_next_period() {
        assert_eq!(
            next_pay_date(&ctx(26, 25)),
            NaiveDate::from_ymd_opt(2026, 4, 25)
        );
    }

    #[test]
    fn test_clamped_payday_rolls_correctly() {
        // Payday 31 clamps to Feb 28, which has passed by Mar 1 of the
        // next period's evaluation; here it clamps within March to the 31st.
        let ctx = PeriodContext::new(
            Period::new(2026, 2),
            31,
            NaiveDate::from_ymd_opt(2026, 2, 28).unwrap(),
        );
        assert_eq!(
            next_pay_date(&ctx),
            NaiveDate::from_ymd_opt(2026, 2, 28)
        );
    }

    #[test]
    fn test_invalid_payday() {
        assert_eq!(next_pay_date(&ctx(10, 0)), None);
    }
}
