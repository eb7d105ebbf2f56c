//! Report models for the summary and awardee views.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ApplicationNumber, ApplicationStatus, AwardTier};

/// Aggregate shortfall statistics over every stored application.
///
/// All four values are zero when no applications exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortfallStatistics {
    /// Number of applications summarized.
    pub count: usize,
    /// Sum of all shortfalls.
    pub total: Decimal,
    /// Mean shortfall, rounded to cents.
    pub average: Decimal,
    /// Smallest shortfall.
    pub minimum: Decimal,
    /// Largest shortfall.
    pub maximum: Decimal,
}

/// One application line in the summary report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryEntry {
    /// The displayed application number.
    pub application_number: ApplicationNumber,
    /// The student's name.
    pub student_name: String,
    /// The student's tuition shortfall.
    pub shortfall: Decimal,
    /// The freshly computed status.
    pub status: ApplicationStatus,
}

/// The summary of all applications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Every application in insertion order.
    pub entries: Vec<SummaryEntry>,
    /// Shortfall statistics across all applications, rejected included.
    pub statistics: ShortfallStatistics,
}

impl SummaryReport {
    /// Returns the number of applications summarized.
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

/// One awardee line in the awardee report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardeeEntry {
    /// The displayed application number.
    pub application_number: ApplicationNumber,
    /// The student's name.
    pub student_name: String,
    /// Points from the GPA bands.
    pub gpa_points: u32,
    /// Points from the shortfall bands.
    pub shortfall_points: u32,
    /// Sum of GPA and shortfall points.
    pub total_points: u32,
    /// The award tier.
    pub tier: AwardTier,
    /// The grant value.
    pub award_amount: Decimal,
}

/// The grant awardees: every application that was not rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardeeReport {
    /// Awardees in insertion order.
    pub entries: Vec<AwardeeEntry>,
}

impl AwardeeReport {
    /// Returns true if no grants were approved.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
