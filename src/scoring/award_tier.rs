//! Award tier selection.
//!
//! This module maps a total point score onto a grant tier.

use crate::config::TierThresholds;
use crate::models::AwardTier;

/// Selects the award tier for a total point score.
///
/// Both thresholds are exclusive: a total must be strictly above
/// `full_grant_above` for a full grant, and strictly above
/// `three_quarter_above` for 75% coverage. Everything else earns 50%.
///
/// # Examples
///
/// ```
/// use tuition_grants::config::TierThresholds;
/// use tuition_grants::models::AwardTier;
/// use tuition_grants::scoring::award_tier;
///
/// let tiers = TierThresholds { full_grant_above: 160, three_quarter_above: 140 };
///
/// assert_eq!(award_tier(200, &tiers), AwardTier::FullGrant);
/// assert_eq!(award_tier(160, &tiers), AwardTier::ThreeQuarter);
/// assert_eq!(award_tier(140, &tiers), AwardTier::Half);
/// ```
pub fn award_tier(total_points: u32, tiers: &TierThresholds) -> AwardTier {
    if total_points > tiers.full_grant_above {
        AwardTier::FullGrant
    } else if total_points > tiers.three_quarter_above {
        AwardTier::ThreeQuarter
    } else {
        AwardTier::Half
    }
}
