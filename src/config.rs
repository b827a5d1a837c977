use std::path::PathBuf;

use crate::constants::sources::{DEFAULT_PAYMENTS_PATH, DEFAULT_TICKETS_PATH};
use crate::errors::ReconcileError;

/// How identifiers repeated within one collection are handled.
///
/// Both policies treat repeats as one logical transaction; they differ only in
/// whether the repeat is reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Collapse repeats silently.
    Collapse,
    /// Collapse repeats and report each one as a data-quality diagnostic.
    #[default]
    Flag,
}

/// Top-level reconciliation configuration.
#[derive(Clone, Debug)]
pub struct ReconcileConfig {
    /// Line-delimited JSON log of payments.
    pub payments_path: PathBuf,
    /// Line-delimited JSON log of issued tickets.
    pub tickets_path: PathBuf,
    /// Handling of repeated transaction ids within a single log.
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            payments_path: PathBuf::from(DEFAULT_PAYMENTS_PATH),
            tickets_path: PathBuf::from(DEFAULT_TICKETS_PATH),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

impl ReconcileConfig {
    /// Override the payments log path.
    pub fn with_payments_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.payments_path = path.into();
        self
    }

    /// Override the tickets log path.
    pub fn with_tickets_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tickets_path = path.into();
        self
    }

    /// Override the duplicate-id policy.
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Reject configurations that cannot name a log to read.
    pub fn validate(&self) -> Result<(), ReconcileError> {
        if self.payments_path.as_os_str().is_empty() {
            return Err(ReconcileError::Configuration(
                "payments log path must not be empty".to_string(),
            ));
        }
        if self.tickets_path.as_os_str().is_empty() {
            return Err(ReconcileError::Configuration(
                "tickets log path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
