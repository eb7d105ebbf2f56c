//! Validation of entered application values.
//!
//! Each function takes one raw line of console input (terminator already
//! stripped) and returns either the validated value or a recoverable
//! [`GrantError`].

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::config::InputLimits;
use crate::error::{GrantError, GrantResult};

/// Validates a student name.
///
/// The name is kept verbatim; surrounding spaces are not trimmed. Only an
/// empty line is refused.
pub fn validate_name(raw: &str) -> GrantResult<String> {
    if raw.is_empty() {
        return Err(GrantError::OutOfDomain {
            field: "student_name".to_string(),
            message: "name cannot be empty".to_string(),
        });
    }
    Ok(raw.to_string())
}

/// Parses a GPA and checks it lies within the configured limits.
///
/// # Examples
///
/// ```
/// use tuition_grants::config::ConfigLoader;
/// use tuition_grants::validation::parse_gpa;
/// use rust_decimal::Decimal;
///
/// let config = ConfigLoader::embedded().unwrap().into_config();
/// assert_eq!(parse_gpa(" 3.6 ", &config.limits).unwrap(), Decimal::new(36, 1));
/// assert!(parse_gpa("4.1", &config.limits).is_err());
/// assert!(parse_gpa("abc", &config.limits).is_err());
/// ```
pub fn parse_gpa(raw: &str, limits: &InputLimits) -> GrantResult<Decimal> {
    parse_bounded("gpa", raw, limits.gpa_min, limits.gpa_max)
}

/// Parses a tuition shortfall and checks it lies within the configured limits.
pub fn parse_shortfall(raw: &str, limits: &InputLimits) -> GrantResult<Decimal> {
    parse_bounded("shortfall", raw, limits.shortfall_min, limits.shortfall_max)
}

fn parse_bounded(field: &str, raw: &str, min: Decimal, max: Decimal) -> GrantResult<Decimal> {
    let trimmed = raw.trim();
    let value = Decimal::from_str(trimmed).map_err(|_| GrantError::InvalidInputFormat {
        field: field.to_string(),
        input: trimmed.to_string(),
    })?;

    if value < min || value > max {
        return Err(GrantError::OutOfDomain {
            field: field.to_string(),
            message: format!(
                "{} is outside {} - {}",
                value.normalize(),
                min.normalize(),
                max.normalize()
            ),
        });
    }

    Ok(value)
}
