//! Assessment result models.
//!
//! This module contains the [`Assessment`] type produced by the scoring
//! engine for one application, together with its points breakdown, award
//! tier and audit steps.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ApplicationStatus;

/// The share of the shortfall covered by a grant.
///
/// # Example
///
/// ```
/// use tuition_grants::models::AwardTier;
/// use rust_decimal::Decimal;
///
/// assert_eq!(AwardTier::FullGrant.coverage(), Decimal::ONE);
/// assert_eq!(AwardTier::ThreeQuarter.message(), "GRANT IS ONLY FOR [ 75% ] OF SHORTFALL AWARDED");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AwardTier {
    /// The whole shortfall is covered.
    FullGrant,
    /// 75% of the shortfall is covered.
    ThreeQuarter,
    /// 50% of the shortfall is covered.
    Half,
}

impl AwardTier {
    /// Returns the covered fraction of the shortfall.
    pub fn coverage(&self) -> Decimal {
        match self {
            AwardTier::FullGrant => Decimal::ONE,
            AwardTier::ThreeQuarter => Decimal::new(75, 2),
            AwardTier::Half => Decimal::new(50, 2),
        }
    }

    /// Returns the console message announcing this tier.
    pub fn message(&self) -> &'static str {
        match self {
            AwardTier::FullGrant => "FULL GRANT AWARDED",
            AwardTier::ThreeQuarter => "GRANT IS ONLY FOR [ 75% ] OF SHORTFALL AWARDED",
            AwardTier::Half => "GRANT IS ONLY FOR [ 50% ] OF SHORTFALL AWARDED",
        }
    }
}

/// Points and award for a scored (non-rejected) application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsBreakdown {
    /// Points from the GPA bands.
    pub gpa_points: u32,
    /// Points from the shortfall bands.
    pub shortfall_points: u32,
    /// Sum of GPA and shortfall points.
    pub total_points: u32,
    /// The award tier selected by the total.
    pub tier: AwardTier,
    /// The grant value: shortfall times tier coverage.
    pub award_amount: Decimal,
}

/// A single step in the audit trail recording a rule decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The outcome of assessing one application.
///
/// `points` is `None` for rejected applications; no GPA rule applies below the
/// minimum GPA, so rejected applications are never scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    /// The eligibility status.
    pub status: ApplicationStatus,
    /// Points and award, present only when not rejected.
    pub points: Option<PointsBreakdown>,
    /// The rule decisions made, in order.
    pub audit_steps: Vec<AuditStep>,
}

impl Assessment {
    /// Returns the award tier, if the application was scored.
    pub fn tier(&self) -> Option<AwardTier> {
        self.points.as_ref().map(|p| p.tier)
    }
}
