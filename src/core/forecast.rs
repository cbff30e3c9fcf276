use crate::core::period::Period;
use crate::core::status::finite_or_zero;
use serde::{Deserialize, Serialize};

/// Projected income and bill totals for one period, supplied by an
/// external projection collaborator. Read-only input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub period: Period,
    pub income_total: f64,
    pub bills_total: f64,
}

impl ForecastPoint {
    pub fn new(period: Period, income_total: f64, bills_total: f64) -> Self {
        Self {
            period,
            income_total,
            bills_total,
        }
    }

    /// What is left after bills. Negative means a tight month.
    pub fn net(&self) -> f64 {
        finite_or_zero(self.income_total) - finite_or_zero(self.bills_total)
    }
}
