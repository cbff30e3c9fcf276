//! Foundational types: obligations, payment status, periods, debts,
//! allocations, and forecasts.

pub mod allocation;
pub mod debt;
pub mod forecast;
pub mod obligation;
pub mod period;
pub mod status;
