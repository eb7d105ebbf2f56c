//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for parsing and validating
//! grant rules from YAML.

use crate::error::{GrantError, GrantResult};

use super::types::GrantConfig;

/// Name reported in errors for the built-in rules file.
pub const EMBEDDED_CONFIG_NAME: &str = "config/grants.yaml";

const EMBEDDED_CONFIG: &str = include_str!("../../config/grants.yaml");

/// Parses and provides access to grant configuration.
///
/// The rules are compiled into the binary; there is no runtime file loading.
///
/// # Example
///
/// ```
/// use tuition_grants::config::ConfigLoader;
///
/// let loader = ConfigLoader::embedded().unwrap();
/// assert_eq!(loader.config().store.capacity, 5000);
/// assert_eq!(loader.config().program.version, "1.0.0");
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: GrantConfig,
}

impl ConfigLoader {
    /// Loads the built-in rules.
    pub fn embedded() -> GrantResult<Self> {
        Self::from_yaml_str(EMBEDDED_CONFIG_NAME, EMBEDDED_CONFIG)
    }

    /// Parses and validates rules from a YAML document.
    ///
    /// # Arguments
    ///
    /// * `source_name` - Name used in error messages
    /// * `yaml` - The YAML document
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The document is not valid YAML or is missing fields (`ConfigParseError`)
    /// - Bands are empty or out of order, or limits are inverted (`InvalidConfig`)
    pub fn from_yaml_str(source_name: &str, yaml: &str) -> GrantResult<Self> {
        let config: GrantConfig =
            serde_yaml::from_str(yaml).map_err(|e| GrantError::ConfigParseError {
                source_name: source_name.to_string(),
                message: e.to_string(),
            })?;

        Self::validate(&config)?;

        Ok(Self { config })
    }

    fn validate(config: &GrantConfig) -> GrantResult<()> {
        if config.store.capacity == 0 {
            return Err(invalid("store capacity must be greater than zero"));
        }

        let limits = &config.limits;
        if limits.gpa_min > limits.gpa_max {
            return Err(invalid("gpa_min must not exceed gpa_max"));
        }
        if limits.shortfall_min > limits.shortfall_max {
            return Err(invalid("shortfall_min must not exceed shortfall_max"));
        }

        if config.gpa_points.is_empty() {
            return Err(invalid("gpa_points must contain at least one band"));
        }
        if config
            .gpa_points
            .windows(2)
            .any(|pair| pair[0].min_gpa >= pair[1].min_gpa)
        {
            return Err(invalid("gpa_points bands must be strictly ascending"));
        }
        // Every shortlisted GPA must land in a band.
        if config.eligibility.min_gpa < config.gpa_points[0].min_gpa {
            return Err(invalid(
                "eligibility min_gpa must not be below the lowest gpa_points band",
            ));
        }

        let bands = &config.shortfall_points.bands;
        if bands.is_empty() {
            return Err(invalid("shortfall_points must contain at least one band"));
        }
        if bands
            .windows(2)
            .any(|pair| pair[0].max_shortfall >= pair[1].max_shortfall)
        {
            return Err(invalid("shortfall_points bands must be strictly ascending"));
        }

        if config.tiers.three_quarter_above > config.tiers.full_grant_above {
            return Err(invalid(
                "three_quarter_above must not exceed full_grant_above",
            ));
        }

        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &GrantConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> GrantConfig {
        self.config
    }
}

fn invalid(message: &str) -> GrantError {
    GrantError::InvalidConfig {
        message: message.to_string(),
    }
}
