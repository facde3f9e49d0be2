//! Basic metrics instrumentation for contact book operations.
//!
//! Provides counters for successful mutations and for each class of rejected request.

use crate::error::{ContactBookError, StoreError};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics collector for contact book activity.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Contacts successfully added
    contacts_added_total: Arc<AtomicU64>,

    /// Contacts successfully edited
    contacts_updated_total: Arc<AtomicU64>,

    /// Contacts successfully deleted
    contacts_removed_total: Arc<AtomicU64>,

    /// Requests rejected by field validation
    validation_failures_total: Arc<AtomicU64>,

    /// Adds rejected as duplicates
    duplicates_rejected_total: Arc<AtomicU64>,

    /// Requests addressing a position with no contact
    index_errors_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            contacts_added_total: Arc::new(AtomicU64::new(0)),
            contacts_updated_total: Arc::new(AtomicU64::new(0)),
            contacts_removed_total: Arc::new(AtomicU64::new(0)),
            validation_failures_total: Arc::new(AtomicU64::new(0)),
            duplicates_rejected_total: Arc::new(AtomicU64::new(0)),
            index_errors_total: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn record_added(&self) {
        self.contacts_added_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_updated(&self) {
        self.contacts_updated_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_removed(&self) {
        self.contacts_removed_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a rejected request under the counter matching its error.
    pub fn record_error(&self, error: &ContactBookError) {
        let counter = match error {
            ContactBookError::Validation(_) => &self.validation_failures_total,
            ContactBookError::Store(StoreError::DuplicateContact(_)) => {
                &self.duplicates_rejected_total
            }
            ContactBookError::Store(StoreError::IndexOutOfRange { .. }) => {
                &self.index_errors_total
            }
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn contacts_added_total(&self) -> u64 {
        self.contacts_added_total.load(Ordering::Relaxed)
    }

    pub fn contacts_updated_total(&self) -> u64 {
        self.contacts_updated_total.load(Ordering::Relaxed)
    }

    pub fn contacts_removed_total(&self) -> u64 {
        self.contacts_removed_total.load(Ordering::Relaxed)
    }

    pub fn validation_failures_total(&self) -> u64 {
        self.validation_failures_total.load(Ordering::Relaxed)
    }

    pub fn duplicates_rejected_total(&self) -> u64 {
        self.duplicates_rejected_total.load(Ordering::Relaxed)
    }

    pub fn index_errors_total(&self) -> u64 {
        self.index_errors_total.load(Ordering::Relaxed)
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            contacts_added_total: self.contacts_added_total(),
            contacts_updated_total: self.contacts_updated_total(),
            contacts_removed_total: self.contacts_removed_total(),
            validation_failures_total: self.validation_failures_total(),
            duplicates_rejected_total: self.duplicates_rejected_total(),
            index_errors_total: self.index_errors_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSummary {
    pub contacts_added_total: u64,
    pub contacts_updated_total: u64,
    pub contacts_removed_total: u64,
    pub validation_failures_total: u64,
    pub duplicates_rejected_total: u64,
    pub index_errors_total: u64,
}
