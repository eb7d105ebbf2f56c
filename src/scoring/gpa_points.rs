//! GPA points lookup.
//!
//! This module maps a GPA onto the configured GPA bands.

use rust_decimal::Decimal;

use crate::config::GpaBand;

/// Returns the points earned by a GPA.
///
/// Bands are sorted ascending by `min_gpa`; the GPA scores the last band whose
/// minimum it reaches. Returns `None` below the lowest band, where no rule
/// applies (those applications are always rejected before scoring).
///
/// # Examples
///
/// ```
/// use tuition_grants::config::GpaBand;
/// use tuition_grants::scoring::gpa_points;
/// use rust_decimal::Decimal;
///
/// let bands = vec![
///     GpaBand { min_gpa: Decimal::new(25, 1), points: 20 },
///     GpaBand { min_gpa: Decimal::new(30, 1), points: 60 },
/// ];
///
/// assert_eq!(gpa_points(Decimal::new(29, 1), &bands), Some(20));
/// assert_eq!(gpa_points(Decimal::new(35, 1), &bands), Some(60));
/// assert_eq!(gpa_points(Decimal::new(20, 1), &bands), None);
/// ```
pub fn gpa_points(gpa: Decimal, bands: &[GpaBand]) -> Option<u32> {
    bands
        .iter()
        .rfind(|band| band.min_gpa <= gpa)
        .map(|band| band.points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn bands() -> Vec<GpaBand> {
        vec![
            GpaBand {
                min_gpa: dec("2.5"),
                points: 20,
            },
            GpaBand {
                min_gpa: dec("3.0"),
                points: 60,
            },
            GpaBand {
                min_gpa: dec("3.5"),
                points: 80,
            },
            GpaBand {
                min_gpa: dec("3.75"),
                points: 100,
            },
        ]
    }

    #[test]
    fn test_each_band_lower_bound_is_inclusive() {
        assert_eq!(gpa_points(dec("2.5"), &bands()), Some(20));
        assert_eq!(gpa_points(dec("3.0"), &bands()), Some(60));
        assert_eq!(gpa_points(dec("3.5"), &bands()), Some(80));
        assert_eq!(gpa_points(dec("3.75"), &bands()), Some(100));
    }

    #[test]
    fn test_values_just_below_each_boundary() {
        assert_eq!(gpa_points(dec("2.99"), &bands()), Some(20));
        assert_eq!(gpa_points(dec("3.49"), &bands()), Some(60));
        assert_eq!(gpa_points(dec("3.74"), &bands()), Some(80));
    }

    #[test]
    fn test_maximum_gpa_scores_top_band() {
        assert_eq!(gpa_points(dec("4.0"), &bands()), Some(100));
    }

    #[test]
    fn test_below_lowest_band_has_no_points() {
        assert_eq!(gpa_points(dec("2.49"), &bands()), None);
        assert_eq!(gpa_points(dec("0"), &bands()), None);
    }

    #[test]
    fn test_scenario_gpa_values() {
        assert_eq!(gpa_points(dec("3.6"), &bands()), Some(80));
        assert_eq!(gpa_points(dec("3.9"), &bands()), Some(100));
    }
}
