//! In-memory application store.
//!
//! This module provides the [`ApplicationStore`], an ordered, append-only
//! collection of application records with a fixed capacity.

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::config::StoreConfig;
use crate::error::{GrantError, GrantResult};
use crate::models::{ApplicationNumber, ApplicationRecord, ApplicationStatus, Assessment};

/// Holds every application entered during a session.
///
/// Records are stored in insertion order and their `sequence_index` equals
/// their position. Only the derived fields of a record may change after entry,
/// via [`ApplicationStore::annotate`] and [`ApplicationStore::annotate_status`].
///
/// # Example
///
/// ```
/// use tuition_grants::config::StoreConfig;
/// use tuition_grants::store::ApplicationStore;
/// use rust_decimal::Decimal;
///
/// let mut store = ApplicationStore::new(StoreConfig {
///     capacity: 2,
///     application_number_prefix: "UL".to_string(),
///     application_number_offset: 1000,
/// });
///
/// let index = store.add("Alice", Decimal::new(36, 1), Decimal::new(15000, 0)).unwrap();
/// assert_eq!(index, 0);
/// assert_eq!(store.count(), 1);
/// assert_eq!(store.application_number(index).unwrap().to_string(), "UL1000");
/// ```
#[derive(Debug, Clone)]
pub struct ApplicationStore {
    config: StoreConfig,
    records: Vec<ApplicationRecord>,
}

impl ApplicationStore {
    /// Creates an empty store.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            records: Vec::new(),
        }
    }

    /// Appends a new application and returns its sequence index.
    ///
    /// The caller validates the name and values before calling; the store
    /// only enforces capacity. A full store is left unchanged.
    pub fn add(
        &mut self,
        student_name: impl Into<String>,
        gpa: Decimal,
        shortfall: Decimal,
    ) -> GrantResult<usize> {
        if self.is_full() {
            warn!(
                capacity = self.config.capacity,
                "Application refused, store is full"
            );
            return Err(GrantError::CapacityExceeded {
                capacity: self.config.capacity,
            });
        }

        let sequence_index = self.records.len();
        let record = ApplicationRecord::new(sequence_index, student_name, gpa, shortfall);
        info!(
            application_number = %record.application_number(&self.config),
            gpa = %gpa,
            shortfall = %shortfall,
            "Application recorded"
        );
        self.records.push(record);

        Ok(sequence_index)
    }

    /// Returns the number of stored applications.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no applications are stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the maximum number of applications.
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Returns true if another application cannot be added.
    pub fn is_full(&self) -> bool {
        self.records.len() >= self.config.capacity
    }

    /// Returns all applications in insertion order.
    pub fn records(&self) -> &[ApplicationRecord] {
        &self.records
    }

    /// Returns the application at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&ApplicationRecord> {
        self.records.get(index)
    }

    /// Returns the store's numbering configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the displayed application number of the record at `index`.
    pub fn application_number(&self, index: usize) -> Option<ApplicationNumber> {
        self.get(index)
            .map(|record| record.application_number(&self.config))
    }

    /// Overwrites every derived field of the record at `index`.
    ///
    /// Returns false if no record exists at `index`.
    pub fn annotate(&mut self, index: usize, assessment: &Assessment) -> bool {
        match self.records.get_mut(index) {
            Some(record) => {
                record.apply_assessment(assessment);
                true
            }
            None => false,
        }
    }

    /// Overwrites only the status of the record at `index`.
    ///
    /// Returns false if no record exists at `index`.
    pub fn annotate_status(&mut self, index: usize, status: ApplicationStatus) -> bool {
        match self.records.get_mut(index) {
            Some(record) => {
                record.apply_status(status);
                true
            }
            None => false,
        }
    }
}
