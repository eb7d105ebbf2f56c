//! Configuration for the tuition grants system.
//!
//! This module provides the typed grant rules (eligibility thresholds, point
//! bands, award tiers, store capacity and banner text) and the loader that
//! parses them from the YAML compiled into the binary.
//!
//! # Example
//!
//! ```
//! use tuition_grants::config::ConfigLoader;
//!
//! let config = ConfigLoader::embedded().unwrap().into_config();
//! println!("Loaded rules for: {}", config.program.name);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, EMBEDDED_CONFIG_NAME};
pub use types::{
    EligibilityThresholds, GpaBand, GrantConfig, InputLimits, ProgramMetadata, ShortfallBand,
    ShortfallPoints, StoreConfig, TierThresholds,
};
