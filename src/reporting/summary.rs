//! Summary report of all applications.

use tracing::debug;

use crate::config::GrantConfig;
use crate::models::{SummaryEntry, SummaryReport};
use crate::scoring::{classify, summarize_shortfalls};
use crate::store::ApplicationStore;

/// Classifies every stored application and summarizes the shortfalls.
///
/// Each record's status is recomputed and written back to the store; points
/// are left as they are. Running the summary twice on an unchanged store
/// produces identical reports.
///
/// # Examples
///
/// ```
/// use tuition_grants::config::ConfigLoader;
/// use tuition_grants::models::ApplicationStatus;
/// use tuition_grants::reporting::build_summary;
/// use tuition_grants::store::ApplicationStore;
/// use rust_decimal::Decimal;
///
/// let config = ConfigLoader::embedded().unwrap().into_config();
/// let mut store = ApplicationStore::new(config.store.clone());
/// store.add("Alice", Decimal::new(36, 1), Decimal::new(15000, 0)).unwrap();
///
/// let report = build_summary(&mut store, &config);
/// assert_eq!(report.count(), 1);
/// assert_eq!(report.entries[0].status, ApplicationStatus::Shortlisted);
/// assert_eq!(store.records()[0].status, ApplicationStatus::Shortlisted);
/// ```
pub fn build_summary(store: &mut ApplicationStore, config: &GrantConfig) -> SummaryReport {
    let mut entries = Vec::with_capacity(store.count());

    for index in 0..store.count() {
        let Some(record) = store.get(index) else {
            break;
        };
        let status = classify(record.gpa, record.shortfall, &config.eligibility);
        let entry = SummaryEntry {
            application_number: record.application_number(store.config()),
            student_name: record.student_name.clone(),
            shortfall: record.shortfall,
            status,
        };

        store.annotate_status(index, status);
        entries.push(entry);
    }

    let statistics = summarize_shortfalls(store.records());
    debug!(
        count = statistics.count,
        total = %statistics.total,
        "Summary report built"
    );

    SummaryReport {
        entries,
        statistics,
    }
}
