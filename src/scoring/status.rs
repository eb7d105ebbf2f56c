//! Eligibility classification.
//!
//! This module decides whether an application is rejected outright or
//! shortlisted for scoring.

use rust_decimal::Decimal;

use crate::config::EligibilityThresholds;
use crate::models::ApplicationStatus;

/// Classifies an application from its GPA and shortfall.
///
/// An application is `Rejected` if its GPA is below `min_gpa` or its
/// shortfall is below `min_shortfall`; otherwise it is `Shortlisted`. The
/// result is never `Unset`.
///
/// # Examples
///
/// ```
/// use tuition_grants::config::EligibilityThresholds;
/// use tuition_grants::models::ApplicationStatus;
/// use tuition_grants::scoring::classify;
/// use rust_decimal::Decimal;
///
/// let thresholds = EligibilityThresholds {
///     min_gpa: Decimal::new(25, 1),
///     min_shortfall: Decimal::new(10000, 0),
/// };
///
/// let status = classify(Decimal::new(36, 1), Decimal::new(15000, 0), &thresholds);
/// assert_eq!(status, ApplicationStatus::Shortlisted);
///
/// let status = classify(Decimal::new(20, 1), Decimal::new(15000, 0), &thresholds);
/// assert_eq!(status, ApplicationStatus::Rejected);
/// ```
pub fn classify(
    gpa: Decimal,
    shortfall: Decimal,
    thresholds: &EligibilityThresholds,
) -> ApplicationStatus {
    if gpa < thresholds.min_gpa || shortfall < thresholds.min_shortfall {
        ApplicationStatus::Rejected
    } else {
        ApplicationStatus::Shortlisted
    }
}
