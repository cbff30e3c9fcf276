//! The insight algorithms: recap aggregation, upcoming-payment ranking
//! and mixing, and tip generation/prioritization.

pub mod dashboard;
pub mod debt_tips;
pub mod mixer;
pub mod priority;
pub mod recap;
pub mod tips;
pub mod upcoming;
