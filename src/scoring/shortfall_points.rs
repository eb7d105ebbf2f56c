//! Shortfall points lookup.

use rust_decimal::Decimal;

use crate::config::ShortfallPoints;

/// Returns the points earned by a tuition shortfall.
///
/// Bands are sorted ascending by `max_shortfall`; the shortfall scores the
/// first band whose maximum it does not exceed, or `beyond_points` when it
/// exceeds every band. Smaller shortfalls earn more points.
pub fn shortfall_points(shortfall: Decimal, config: &ShortfallPoints) -> u32 {
    config
        .bands
        .iter()
        .find(|band| shortfall <= band.max_shortfall)
        .map_or(config.beyond_points, |band| band.points)
}
