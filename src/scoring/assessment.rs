//! Full assessment of a single application.
//!
//! This module runs the eligibility and scoring rules in order and records
//! each decision as an [`AuditStep`].

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::GrantConfig;
use crate::models::{Assessment, AuditStep, PointsBreakdown};

use super::{award_tier, classify, gpa_points, shortfall_points};

/// Assesses an application from its GPA and shortfall.
///
/// Classification always runs. GPA points, shortfall points and the award
/// tier are computed only when the application is not rejected. A loaded
/// config never sets `eligibility.min_gpa` below the lowest GPA band, so a
/// shortlisted GPA always earns band points.
///
/// # Examples
///
/// ```
/// use tuition_grants::config::ConfigLoader;
/// use tuition_grants::models::{ApplicationStatus, AwardTier};
/// use tuition_grants::scoring::assess;
/// use rust_decimal::Decimal;
///
/// let config = ConfigLoader::embedded().unwrap().into_config();
/// let assessment = assess(Decimal::new(36, 1), Decimal::new(15000, 0), &config);
///
/// assert_eq!(assessment.status, ApplicationStatus::Shortlisted);
/// let points = assessment.points.unwrap();
/// assert_eq!(points.total_points, 160);
/// assert_eq!(points.tier, AwardTier::ThreeQuarter);
/// ```
pub fn assess(gpa: Decimal, shortfall: Decimal, config: &GrantConfig) -> Assessment {
    let mut audit_steps = Vec::new();

    let status = classify(gpa, shortfall, &config.eligibility);
    audit_steps.push(AuditStep {
        step_number: 1,
        rule_id: "eligibility_classification".to_string(),
        rule_name: "Eligibility Classification".to_string(),
        input: serde_json::json!({
            "gpa": gpa.normalize().to_string(),
            "shortfall": shortfall.normalize().to_string(),
            "min_gpa": config.eligibility.min_gpa.normalize().to_string(),
            "min_shortfall": config.eligibility.min_shortfall.normalize().to_string()
        }),
        output: serde_json::json!({ "status": status }),
        reasoning: if status.is_rejected() {
            format!(
                "GPA {} below {} or shortfall ${} below ${}, application rejected",
                gpa.normalize(),
                config.eligibility.min_gpa.normalize(),
                shortfall.normalize(),
                config.eligibility.min_shortfall.normalize()
            )
        } else {
            format!(
                "GPA {} and shortfall ${} meet minimum thresholds, application shortlisted",
                gpa.normalize(),
                shortfall.normalize()
            )
        },
    });

    if status.is_rejected() {
        debug!(gpa = %gpa, shortfall = %shortfall, "Application rejected, not scored");
        return Assessment {
            status,
            points: None,
            audit_steps,
        };
    }

    let gpa_score = gpa_points(gpa, &config.gpa_points).unwrap_or(0);
    audit_steps.push(AuditStep {
        step_number: 2,
        rule_id: "gpa_points".to_string(),
        rule_name: "GPA Points".to_string(),
        input: serde_json::json!({ "gpa": gpa.normalize().to_string() }),
        output: serde_json::json!({ "points": gpa_score }),
        reasoning: format!("GPA {} earns {} points", gpa.normalize(), gpa_score),
    });

    let shortfall_score = shortfall_points(shortfall, &config.shortfall_points);
    audit_steps.push(AuditStep {
        step_number: 3,
        rule_id: "shortfall_points".to_string(),
        rule_name: "Shortfall Points".to_string(),
        input: serde_json::json!({ "shortfall": shortfall.normalize().to_string() }),
        output: serde_json::json!({ "points": shortfall_score }),
        reasoning: format!(
            "Shortfall ${} earns {} points",
            shortfall.normalize(),
            shortfall_score
        ),
    });

    let total_points = gpa_score + shortfall_score;
    let tier = award_tier(total_points, &config.tiers);
    let award_amount = (shortfall * tier.coverage()).round_dp(2);
    audit_steps.push(AuditStep {
        step_number: 4,
        rule_id: "award_tier".to_string(),
        rule_name: "Award Tier".to_string(),
        input: serde_json::json!({
            "total_points": total_points,
            "full_grant_above": config.tiers.full_grant_above,
            "three_quarter_above": config.tiers.three_quarter_above
        }),
        output: serde_json::json!({
            "tier": tier,
            "award_amount": award_amount.normalize().to_string()
        }),
        reasoning: format!(
            "{} total points selects {:?}, covering ${} of ${} shortfall",
            total_points,
            tier,
            award_amount.normalize(),
            shortfall.normalize()
        ),
    });

    debug!(
        gpa = %gpa,
        shortfall = %shortfall,
        total_points,
        tier = ?tier,
        "Application scored"
    );

    Assessment {
        status,
        points: Some(PointsBreakdown {
            gpa_points: gpa_score,
            shortfall_points: shortfall_score,
            total_points,
            tier,
            award_amount,
        }),
        audit_steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::{ApplicationStatus, AwardTier};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn config() -> GrantConfig {
        ConfigLoader::embedded().unwrap().into_config()
    }

    /// Scenario 1: Alice, 3.6 GPA, $15000 shortfall
    #[test]
    fn test_shortlisted_alice_earns_three_quarter_grant() {
        let assessment = assess(dec("3.6"), dec("15000"), &config());

        assert_eq!(assessment.status, ApplicationStatus::Shortlisted);
        let points = assessment.points.unwrap();
        assert_eq!(points.gpa_points, 80);
        assert_eq!(points.shortfall_points, 80);
        assert_eq!(points.total_points, 160);
        assert_eq!(points.tier, AwardTier::ThreeQuarter);
        assert_eq!(points.award_amount, dec("11250"));
    }

    /// Scenario 2: 2.0 GPA, $5000 shortfall
    #[test]
    fn test_low_gpa_is_rejected_and_unscored() {
        let assessment = assess(dec("2.0"), dec("5000"), &config());

        assert_eq!(assessment.status, ApplicationStatus::Rejected);
        assert!(assessment.points.is_none());
        assert_eq!(assessment.audit_steps.len(), 1);
    }

    /// Scenario 3: 3.9 GPA, $8000 shortfall is below the minimum shortfall
    #[test]
    fn test_small_shortfall_is_rejected_despite_top_gpa() {
        let assessment = assess(dec("3.9"), dec("8000"), &config());

        assert_eq!(assessment.status, ApplicationStatus::Rejected);
        assert_eq!(assessment.tier(), None);
    }

    #[test]
    fn test_full_grant_at_minimum_shortfall_and_top_gpa() {
        let assessment = assess(dec("3.9"), dec("10000"), &config());

        let points = assessment.points.unwrap();
        assert_eq!(points.gpa_points, 100);
        assert_eq!(points.shortfall_points, 100);
        assert_eq!(points.total_points, 200);
        assert_eq!(points.tier, AwardTier::FullGrant);
        assert_eq!(points.award_amount, dec("10000"));
    }

    #[test]
    fn test_half_grant_for_low_band_scores() {
        let assessment = assess(dec("2.7"), dec("45000"), &config());

        let points = assessment.points.unwrap();
        assert_eq!(points.gpa_points, 20);
        assert_eq!(points.shortfall_points, 20);
        assert_eq!(points.tier, AwardTier::Half);
        assert_eq!(points.award_amount, dec("22500"));
    }

    #[test]
    fn test_minimum_eligible_gpa_earns_lowest_band_points() {
        let assessment = assess(dec("2.5"), dec("10000"), &config());

        let points = assessment.points.unwrap();
        assert_eq!(points.gpa_points, 20);
        assert_eq!(points.total_points, 120);
        assert_eq!(points.tier, AwardTier::Half);
    }

    #[test]
    fn test_audit_steps_are_numbered_in_order() {
        let assessment = assess(dec("3.2"), dec("25000"), &config());

        let rule_ids: Vec<&str> = assessment
            .audit_steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rule_ids,
            vec![
                "eligibility_classification",
                "gpa_points",
                "shortfall_points",
                "award_tier"
            ]
        );
        let numbers: Vec<u32> = assessment.audit_steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_audit_step_records_inputs_and_outputs() {
        let assessment = assess(dec("3.2"), dec("25000"), &config());

        let classification = &assessment.audit_steps[0];
        assert_eq!(classification.input["gpa"], "3.2");
        assert_eq!(classification.output["status"], "shortlisted");

        let tier = &assessment.audit_steps[3];
        assert_eq!(tier.input["total_points"], 120);
        assert_eq!(tier.output["tier"], "half");
        assert!(tier.reasoning.contains("120 total points"));
    }

    #[test]
    fn test_assessment_is_deterministic() {
        let first = assess(dec("3.55"), dec("19999.99"), &config());
        let second = assess(dec("3.55"), dec("19999.99"), &config());
        assert_eq!(first, second);
    }
}
