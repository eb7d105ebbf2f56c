//! Configuration types for grant assessment.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the embedded YAML rules file.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Banner metadata shown on the splash screen.
#[derive(Debug, Clone, Deserialize)]
pub struct ProgramMetadata {
    /// The program title.
    pub name: String,
    /// The program version string.
    pub version: String,
    /// One-line description of the program.
    pub description: String,
    /// The program author.
    pub author: String,
    /// Licence holder text.
    pub licence: String,
}

/// Capacity and numbering of the application store.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Maximum number of applications held in one session.
    pub capacity: usize,
    /// Prefix printed before every application number (e.g., "UL").
    pub application_number_prefix: String,
    /// Added to the 0-based sequence index to form the application number.
    pub application_number_offset: u32,
}

/// Accepted input domains for entered values (inclusive on both ends).
#[derive(Debug, Clone, Deserialize)]
pub struct InputLimits {
    /// Lowest accepted GPA.
    pub gpa_min: Decimal,
    /// Highest accepted GPA.
    pub gpa_max: Decimal,
    /// Lowest accepted tuition shortfall.
    pub shortfall_min: Decimal,
    /// Highest accepted tuition shortfall.
    pub shortfall_max: Decimal,
}

/// Thresholds below which an application is rejected outright.
#[derive(Debug, Clone, Deserialize)]
pub struct EligibilityThresholds {
    /// Applications with a GPA below this are rejected.
    pub min_gpa: Decimal,
    /// Applications with a shortfall below this are rejected.
    pub min_shortfall: Decimal,
}

/// A GPA band: GPAs at or above `min_gpa` (and below the next band) earn `points`.
#[derive(Debug, Clone, Deserialize)]
pub struct GpaBand {
    /// Inclusive lower bound of the band.
    pub min_gpa: Decimal,
    /// Points awarded inside the band.
    pub points: u32,
}

/// A shortfall band: shortfalls at or below `max_shortfall` (and above the previous band) earn `points`.
#[derive(Debug, Clone, Deserialize)]
pub struct ShortfallBand {
    /// Inclusive upper bound of the band.
    pub max_shortfall: Decimal,
    /// Points awarded inside the band.
    pub points: u32,
}

/// Shortfall points configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ShortfallPoints {
    /// Bands in ascending order of `max_shortfall`.
    pub bands: Vec<ShortfallBand>,
    /// Points for a shortfall above the last band.
    pub beyond_points: u32,
}

/// Total-point thresholds selecting the award tier (both exclusive).
#[derive(Debug, Clone, Deserialize)]
pub struct TierThresholds {
    /// Totals strictly above this earn a full grant.
    pub full_grant_above: u32,
    /// Totals strictly above this (and not a full grant) earn 75% of shortfall.
    pub three_quarter_above: u32,
}

/// The complete grant configuration.
///
/// Aggregates every threshold, band and banner string used by the system.
#[derive(Debug, Clone, Deserialize)]
pub struct GrantConfig {
    /// Banner metadata.
    pub program: ProgramMetadata,
    /// Store capacity and numbering.
    pub store: StoreConfig,
    /// Accepted input domains.
    pub limits: InputLimits,
    /// Rejection thresholds.
    pub eligibility: EligibilityThresholds,
    /// GPA bands in ascending order of `min_gpa`.
    pub gpa_points: Vec<GpaBand>,
    /// Shortfall bands.
    pub shortfall_points: ShortfallPoints,
    /// Award tier thresholds.
    pub tiers: TierThresholds,
}
