//! Core data models for the tuition grants system.
//!
//! This module contains all the domain models used throughout the crate.

mod application;
mod assessment;
mod report;

pub use application::{ApplicationNumber, ApplicationRecord, ApplicationStatus};
pub use assessment::{Assessment, AuditStep, AwardTier, PointsBreakdown};
pub use report::{AwardeeEntry, AwardeeReport, ShortfallStatistics, SummaryEntry, SummaryReport};
