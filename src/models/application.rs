//! Application record model and related types.
//!
//! This module defines the [`ApplicationRecord`] struct, its
//! [`ApplicationStatus`] and the displayed [`ApplicationNumber`].

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::StoreConfig;

use super::Assessment;

/// The eligibility status of an application.
///
/// Every record starts as `Unset`; the status is written by the summary and
/// awardee passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    /// Not yet classified.
    #[default]
    Unset,
    /// Failed the minimum GPA or shortfall threshold.
    Rejected,
    /// Passed the minimum thresholds and is eligible for scoring.
    Shortlisted,
}

impl ApplicationStatus {
    /// Returns true if the application was rejected.
    pub fn is_rejected(&self) -> bool {
        *self == ApplicationStatus::Rejected
    }

    /// Returns the console label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Unset => "UNSET",
            ApplicationStatus::Rejected => "REJECTED",
            ApplicationStatus::Shortlisted => "SHORTLISTED",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The application number shown to users, e.g. `UL1000`.
///
/// # Example
///
/// ```
/// use tuition_grants::models::ApplicationNumber;
///
/// let number = ApplicationNumber::new("UL", 1003);
/// assert_eq!(number.to_string(), "UL1003");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationNumber {
    /// The textual prefix.
    pub prefix: String,
    /// The numeric part.
    pub number: u32,
}

impl ApplicationNumber {
    /// Creates an application number from a prefix and numeric part.
    pub fn new(prefix: impl Into<String>, number: u32) -> Self {
        Self {
            prefix: prefix.into(),
            number,
        }
    }
}

impl fmt::Display for ApplicationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.number)
    }
}

/// A single student grant application.
///
/// The entered fields (`student_name`, `gpa`, `shortfall`) never change after
/// entry. `status` and the point fields are derived and are overwritten every
/// time a summary or awardee pass runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    /// 0-based insertion order.
    pub sequence_index: usize,
    /// The student's name as entered.
    pub student_name: String,
    /// The student's GPA.
    pub gpa: Decimal,
    /// The student's tuition shortfall in dollars.
    pub shortfall: Decimal,
    /// The derived eligibility status.
    pub status: ApplicationStatus,
    /// Derived points from the GPA bands.
    pub gpa_points: u32,
    /// Derived points from the shortfall bands.
    pub shortfall_points: u32,
    /// Derived sum of GPA and shortfall points.
    pub total_points: u32,
}

impl ApplicationRecord {
    /// Creates a record with unset derived fields.
    pub fn new(
        sequence_index: usize,
        student_name: impl Into<String>,
        gpa: Decimal,
        shortfall: Decimal,
    ) -> Self {
        Self {
            sequence_index,
            student_name: student_name.into(),
            gpa,
            shortfall,
            status: ApplicationStatus::Unset,
            gpa_points: 0,
            shortfall_points: 0,
            total_points: 0,
        }
    }

    /// Returns the displayed application number for this record.
    pub fn application_number(&self, store: &StoreConfig) -> ApplicationNumber {
        let offset = store.application_number_offset as usize;
        ApplicationNumber::new(
            store.application_number_prefix.as_str(),
            (offset + self.sequence_index) as u32,
        )
    }

    /// Overwrites the derived status from an assessment, leaving points untouched.
    pub(crate) fn apply_status(&mut self, status: ApplicationStatus) {
        self.status = status;
    }

    /// Overwrites every derived field from an assessment.
    ///
    /// Rejected assessments carry no points, so the point fields reset to zero.
    pub(crate) fn apply_assessment(&mut self, assessment: &Assessment) {
        self.status = assessment.status;
        match &assessment.points {
            Some(points) => {
                self.gpa_points = points.gpa_points;
                self.shortfall_points = points.shortfall_points;
                self.total_points = points.total_points;
            }
            None => {
                self.gpa_points = 0;
                self.shortfall_points = 0;
                self.total_points = 0;
            }
        }
    }
}
