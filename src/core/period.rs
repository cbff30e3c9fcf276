use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors for invalid caller-supplied context.
///
/// Per-record problems never raise these; malformed records degrade
/// individually. Only a context the caller should never have built
/// (an impossible month or pay date) is reported as an error.
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("month must be 1-12, got {month}")]
    InvalidMonth { month: u32 },
    #[error("pay date must be 1-31, got {pay_date}")]
    InvalidPayDate { pay_date: u32 },
}

/// One calendar month of obligations.
///
/// # Examples
///
/// ```
/// use insights_engine::core::period::Period;
///
/// let jan = Period::new(2026, 1);
/// assert_eq!(jan.prev(), Period::new(2025, 12));
/// assert_eq!(jan.offset(13), Period::new(2027, 2));
/// assert_eq!(jan.label(), "January 2026");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The period containing a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Shift by a signed number of months, normalizing across year
    /// boundaries.
    pub fn offset(self, months: i32) -> Self {
        let zero_based = self.year * 12 + self.month as i32 - 1 + months;
        Self {
            year: zero_based.div_euclid(12),
            month: (zero_based.rem_euclid(12) + 1) as u32,
        }
    }

    pub fn next(self) -> Self {
        self.offset(1)
    }

    pub fn prev(self) -> Self {
        self.offset(-1)
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// True when the month is a real calendar month.
    pub fn is_valid(self) -> bool {
        (1..=12).contains(&self.month)
    }

    /// Human-readable label, e.g. "January 2026".
    ///
    /// Falls back to the numeric form for an invalid month rather than
    /// failing; labels are display-only.
    pub fn label(self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(first) => first.format("%B %Y").to_string(),
            None => format!("{}", self),
        }
    }

    /// Short label, e.g. "Jan 2026". Used in tip text.
    pub fn short_label(self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(first) => first.format("%b %Y").to_string(),
            None => format!("{}", self),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Everything the engine needs to know about "when": the period under
/// evaluation, the plan's payday, and an injected "today".
///
/// The engine never reads the system clock. Callers inject `today`, so
/// identical inputs always produce identical outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodContext {
    pub period: Period,
    /// Day of month income typically arrives (1-31). Used as the
    /// due-date fallback for obligations without an explicit date.
    pub pay_date: u32,
    pub today: NaiveDate,
}

impl PeriodContext {
    pub fn new(period: Period, pay_date: u32, today: NaiveDate) -> Self {
        Self {
            period,
            pay_date,
            today,
        }
    }

    /// Validating constructor for callers crossing the engine boundary.
    ///
    /// An out-of-range month or pay date is a contract violation and is
    /// reported explicitly here; the plain constructor leaves the values
    /// as-is and lets the due-date resolver degrade per record.
    pub fn checked(period: Period, pay_date: u32, today: NaiveDate) -> Result<Self, ContextError> {
        if !period.is_valid() {
            return Err(ContextError::InvalidMonth {
                month: period.month,
            });
        }
        if !(1..=31).contains(&pay_date) {
            return Err(ContextError::InvalidPayDate { pay_date });
        }
        Ok(Self::new(period, pay_date, today))
    }

    /// Same payday and "today", different period under evaluation.
    pub fn for_period(&self, period: Period) -> Self {
        Self { period, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_wraps_years() {
        assert_eq!(Period::new(2026, 1).prev(), Period::new(2025, 12));
        assert_eq!(Period::new(2025, 12).next(), Period::new(2026, 1));
        assert_eq!(Period::new(2026, 6).offset(-18), Period::new(2024, 12));
    }

    #[test]
    fn test_offset_round_trips() {
        let p = Period::new(2026, 7);
        assert_eq!(p.offset(5).offset(-5), p);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Period::new(2026, 1).label(), "January 2026");
        assert_eq!(Period::new(2026, 1).short_label(), "Jan 2026");
        // Invalid months fall back to the numeric form.
        assert_eq!(Period::new(2026, 13).label(), "2026-13");
    }

    #[test]
    fn test_contains() {
        let p = Period::new(2026, 2);
        assert!(p.contains(NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()));
        assert!(!p.contains(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()));
    }

    #[test]
    fn test_checked_context() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        assert!(PeriodContext::checked(Period::new(2026, 2), 28, today).is_ok());
        assert!(matches!(
            PeriodContext::checked(Period::new(2026, 0), 28, today),
            Err(ContextError::InvalidMonth { month: 0 })
        ));
        assert!(matches!(
            PeriodContext::checked(Period::new(2026, 2), 0, today),
            Err(ContextError::InvalidPayDate { pay_date: 0 })
        ));
        assert!(matches!(
            PeriodContext::checked(Period::new(2026, 2), 32, today),
            Err(ContextError::InvalidPayDate { pay_date: 32 })
        ));
    }
}
