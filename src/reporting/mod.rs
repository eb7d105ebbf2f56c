//! Report builders.
//!
//! This module runs the scoring engine over the whole application store,
//! writes the derived fields back onto the records, and returns the typed
//! summary and awardee reports.

mod awardees;
mod summary;

pub use awardees::build_awardee_report;
pub use summary::build_summary;
