//! Eligibility and scoring engine.
//!
//! This module contains the pure rule functions applied to an application's
//! GPA and shortfall: eligibility classification, GPA points, shortfall
//! points, award tier selection and shortfall summary statistics, plus the
//! combined assessment that records each decision in an audit trail.

mod assessment;
mod award_tier;
mod gpa_points;
mod shortfall_points;
mod statistics;
mod status;

pub use assessment::assess;
pub use award_tier::award_tier;
pub use gpa_points::gpa_points;
pub use shortfall_points::shortfall_points;
pub use statistics::{AVERAGE_DECIMAL_PLACES, summarize_shortfalls};
pub use status::classify;
