//! Shortfall summary statistics.

use rust_decimal::Decimal;

use crate::models::{ApplicationRecord, ShortfallStatistics};

/// Decimal places kept on the average shortfall.
pub const AVERAGE_DECIMAL_PLACES: u32 = 2;

/// Computes total, average, minimum and maximum shortfall over all records.
///
/// Rejected applications are included. An empty slice yields all zeros
/// without dividing.
///
/// # Examples
///
/// ```
/// use tuition_grants::models::ApplicationRecord;
/// use tuition_grants::scoring::summarize_shortfalls;
/// use rust_decimal::Decimal;
///
/// let records = vec![
///     ApplicationRecord::new(0, "Alice", Decimal::new(36, 1), Decimal::new(15000, 0)),
///     ApplicationRecord::new(1, "Bob", Decimal::new(20, 1), Decimal::new(5000, 0)),
/// ];
///
/// let stats = summarize_shortfalls(&records);
/// assert_eq!(stats.total, Decimal::new(20000, 0));
/// assert_eq!(stats.average, Decimal::new(10000, 0));
/// assert_eq!(stats.minimum, Decimal::new(5000, 0));
/// assert_eq!(stats.maximum, Decimal::new(15000, 0));
/// ```
pub fn summarize_shortfalls(records: &[ApplicationRecord]) -> ShortfallStatistics {
    let mut shortfalls = records.iter().map(|record| record.shortfall);

    let Some(first) = shortfalls.next() else {
        return ShortfallStatistics::default();
    };

    let (total, minimum, maximum) = shortfalls.fold(
        (first, first, first),
        |(total, minimum, maximum), shortfall| {
            (total + shortfall, minimum.min(shortfall), maximum.max(shortfall))
        },
    );

    let count = records.len();
    let average = (total / Decimal::from(count)).round_dp(AVERAGE_DECIMAL_PLACES);

    ShortfallStatistics {
        count,
        total,
        average,
        minimum,
        maximum,
    }
}
