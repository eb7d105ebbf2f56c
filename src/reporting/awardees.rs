//! Grant awardee report.

use tracing::{debug, trace};

use crate::config::GrantConfig;
use crate::models::{ApplicationNumber, AuditStep, AwardeeEntry, AwardeeReport};
use crate::scoring::assess;
use crate::store::ApplicationStore;

/// Scores every stored application and lists the awardees.
///
/// Classification is recomputed from each record's GPA and shortfall, never
/// read from a previously stored status, so the report is correct even if no
/// summary has run. Status and points are written back to the store (zero
/// points for rejected records). Rejected applications do not appear in the
/// report.
///
/// The audit trail of every assessment is emitted at `TRACE` level.
pub fn build_awardee_report(store: &mut ApplicationStore, config: &GrantConfig) -> AwardeeReport {
    let mut entries = Vec::new();

    for index in 0..store.count() {
        let Some(record) = store.get(index) else {
            break;
        };
        let assessment = assess(record.gpa, record.shortfall, config);
        let application_number = record.application_number(store.config());
        trace_audit_steps(&application_number, &assessment.audit_steps);

        if let Some(points) = &assessment.points {
            entries.push(AwardeeEntry {
                application_number,
                student_name: record.student_name.clone(),
                gpa_points: points.gpa_points,
                shortfall_points: points.shortfall_points,
                total_points: points.total_points,
                tier: points.tier,
                award_amount: points.award_amount,
            });
        }

        store.annotate(index, &assessment);
    }

    debug!(
        applications = store.count(),
        awardees = entries.len(),
        "Awardee report built"
    );

    AwardeeReport { entries }
}

fn trace_audit_steps(application_number: &ApplicationNumber, steps: &[AuditStep]) {
    for step in steps {
        trace!(
            application_number = %application_number,
            step = step.step_number,
            rule_id = %step.rule_id,
            input = %step.input,
            output = %step.output,
            "{}",
            step.reasoning
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::{ApplicationStatus, AwardTier};
    use rust_decimal::Decimal;
    use std::io;
    use std::str::FromStr;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn setup() -> (ApplicationStore, GrantConfig) {
        let config = ConfigLoader::embedded().unwrap().into_config();
        let store = ApplicationStore::new(config.store.clone());
        (store, config)
    }

    #[test]
    fn test_empty_store_has_no_awardees() {
        let (mut store, config) = setup();
        assert!(build_awardee_report(&mut store, &config).is_empty());
    }

    #[test]
    fn test_rejected_applications_are_excluded() {
        let (mut store, config) = setup();
        store.add("Bob", dec("2.0"), dec("5000")).unwrap();
        store.add("Carol", dec("3.9"), dec("8000")).unwrap();

        let report = build_awardee_report(&mut store, &config);

        assert!(report.is_empty());
        assert!(store.records().iter().all(|r| r.status.is_rejected()));
    }

    #[test]
    fn test_awardee_entries_carry_points_and_tier() {
        let (mut store, config) = setup();
        store.add("Bob", dec("2.0"), dec("5000")).unwrap();
        store.add("Alice", dec("3.6"), dec("15000")).unwrap();
        store.add("Dana", dec("3.8"), dec("10000")).unwrap();

        let report = build_awardee_report(&mut store, &config);

        assert_eq!(report.entries.len(), 2);

        let alice = &report.entries[0];
        assert_eq!(alice.application_number.to_string(), "UL1001");
        assert_eq!(alice.student_name, "Alice");
        assert_eq!(alice.gpa_points, 80);
        assert_eq!(alice.shortfall_points, 80);
        assert_eq!(alice.total_points, 160);
        assert_eq!(alice.tier, AwardTier::ThreeQuarter);

        let dana = &report.entries[1];
        assert_eq!(dana.total_points, 200);
        assert_eq!(dana.tier, AwardTier::FullGrant);
    }

    #[test]
    fn test_report_does_not_depend_on_prior_summary() {
        let (mut store, config) = setup();
        store.add("Alice", dec("3.6"), dec("15000")).unwrap();
        store.add("Bob", dec("2.0"), dec("5000")).unwrap();
        assert!(
            store
                .records()
                .iter()
                .all(|r| r.status == ApplicationStatus::Unset)
        );

        let report = build_awardee_report(&mut store, &config);

        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].student_name, "Alice");
    }

    #[test]
    fn test_points_written_back_to_store() {
        let (mut store, config) = setup();
        store.add("Alice", dec("3.6"), dec("15000")).unwrap();

        build_awardee_report(&mut store, &config);

        let record = &store.records()[0];
        assert_eq!(record.status, ApplicationStatus::Shortlisted);
        assert_eq!(record.gpa_points, 80);
        assert_eq!(record.shortfall_points, 80);
        assert_eq!(record.total_points, 160);
    }

    #[test]
    fn test_audit_trail_is_traced_per_application() {
        let (mut store, config) = setup();
        store.add("Alice", dec("3.6"), dec("15000")).unwrap();
        store.add("Bob", dec("2.0"), dec("5000")).unwrap();

        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            build_awardee_report(&mut store, &config);
        });

        let output = logs.contents();
        assert_eq!(output.matches("rule_id=eligibility_classification").count(), 2);
        assert_eq!(output.matches("rule_id=award_tier").count(), 1);
        assert!(output.contains("application_number=UL1000"));
        assert!(output.contains("160 total points selects ThreeQuarter"));
        assert!(output.contains("application rejected"));
    }

    #[test]
    fn test_awardee_report_is_idempotent() {
        let (mut store, config) = setup();
        store.add("Alice", dec("3.6"), dec("15000")).unwrap();
        store.add("Eve", dec("3.1"), dec("28000")).unwrap();

        let first = build_awardee_report(&mut store, &config);
        let snapshot = store.records().to_vec();
        let second = build_awardee_report(&mut store, &config);

        assert_eq!(first, second);
        assert_eq!(snapshot, store.records());
    }
}
