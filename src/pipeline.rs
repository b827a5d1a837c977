//! One-shot reconciliation run: load both logs, diff them, synthesize events.
//!
//! Data flows one way: sources -> `missing` -> `synthesize` (which consults
//! and updates the caller's ledger) -> report. The ledger is borrowed for the
//! duration of the run, so repeated runs against the same ledger never reissue
//! an event.

use tracing::{info, warn};

use crate::config::{DuplicatePolicy, ReconcileConfig};
use crate::constants::sources::{PAYMENTS_SOURCE_ID, TICKETS_SOURCE_ID};
use crate::data::CorrectiveEvent;
use crate::errors::ReconcileError;
use crate::ledger::CorrectionLedger;
use crate::metrics::{ReconcileStats, reconcile_stats};
use crate::reconcile::{duplicate_ids, missing};
use crate::source::{
    DiagnosticKind, JsonLinesSource, LoadedRecords, RecordSource, SourceDiagnostic,
};
use crate::synthesize::synthesize;

/// Outcome of a reconciliation run.
#[derive(Clone, Debug)]
pub struct ReconcileReport {
    /// Corrective events emitted by this run.
    pub events: Vec<CorrectiveEvent>,
    /// Recoverable conditions from both sources, payments first.
    pub diagnostics: Vec<SourceDiagnostic>,
    /// Aggregate counts for the run.
    pub stats: ReconcileStats,
}

impl ReconcileReport {
    /// True when at least one corrective event was emitted.
    pub fn has_missing_tickets(&self) -> bool {
        !self.events.is_empty()
    }
}

/// Reconciles a payments source against a tickets source.
pub struct ReconcileRun {
    payments: Box<dyn RecordSource>,
    tickets: Box<dyn RecordSource>,
    duplicate_policy: DuplicatePolicy,
}

impl ReconcileRun {
    /// Create a run over explicit sources.
    pub fn new(
        payments: impl RecordSource + 'static,
        tickets: impl RecordSource + 'static,
    ) -> Self {
        Self {
            payments: Box::new(payments),
            tickets: Box::new(tickets),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }

    /// Create a run reading both logs from the configured paths.
    pub fn from_config(config: &ReconcileConfig) -> Self {
        Self::new(
            JsonLinesSource::new(PAYMENTS_SOURCE_ID, &config.payments_path),
            JsonLinesSource::new(TICKETS_SOURCE_ID, &config.tickets_path),
        )
        .with_duplicate_policy(config.duplicate_policy)
    }

    /// Override the duplicate-id policy.
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Execute the run, recording corrected ids in `ledger`.
    pub fn run<L>(&self, ledger: &mut L) -> Result<ReconcileReport, ReconcileError>
    where
        L: CorrectionLedger + ?Sized,
    {
        let mut payments = self.payments.load()?;
        let mut tickets = self.tickets.load()?;

        let mut diagnostics = std::mem::take(&mut payments.diagnostics);
        diagnostics.append(&mut tickets.diagnostics);
        if self.duplicate_policy == DuplicatePolicy::Flag {
            diagnostics.extend(flag_duplicates(&payments));
            diagnostics.extend(flag_duplicates(&tickets));
        }

        let missing_ids = missing(&payments.records, &tickets.records);
        let events = synthesize(&missing_ids, ledger);
        let stats = reconcile_stats(
            &payments.records,
            &tickets.records,
            missing_ids.len(),
            events.len(),
        );

        info!(
            "[reconcile:run] payments={} tickets={} missing={} emitted={} already_corrected={} diagnostics={}",
            stats.payments_loaded,
            stats.tickets_loaded,
            stats.missing,
            stats.emitted,
            stats.already_corrected,
            diagnostics.len()
        );

        Ok(ReconcileReport {
            events,
            diagnostics,
            stats,
        })
    }
}

fn flag_duplicates(loaded: &LoadedRecords) -> Vec<SourceDiagnostic> {
    duplicate_ids(&loaded.records)
        .into_iter()
        .map(|(id, count)| {
            let diagnostic = SourceDiagnostic::new(
                &loaded.source_id,
                DiagnosticKind::DuplicateTransactionId,
                format!("transaction id '{id}' appears {count} times; treated as one transaction"),
            );
            warn!("[reconcile:run] {}", diagnostic);
            diagnostic
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LogRecord;
    use crate::ledger::DedupLedger;
    use crate::source::InMemorySource;

    fn source(id: &str, ids: &[&str]) -> InMemorySource {
        InMemorySource::new(id, ids.iter().map(|tx| LogRecord::new(*tx)).collect())
    }

    #[test]
    fn run_emits_events_for_unticketed_payments() {
        let run = ReconcileRun::new(
            source("payments", &["T1", "T2", "T3"]),
            source("tickets", &["T2"]),
        );
        let mut ledger = DedupLedger::new();
        let report = run.run(&mut ledger).unwrap();

        assert!(report.has_missing_tickets());
        assert_eq!(
            report.events,
            vec![
                CorrectiveEvent::ticket_issued("T1"),
                CorrectiveEvent::ticket_issued("T3"),
            ]
        );
        assert!(report.diagnostics.is_empty());
        assert_eq!(report.stats.missing, 2);
        assert_eq!(report.stats.emitted, 2);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn repeated_run_with_same_ledger_emits_nothing() {
        let run = ReconcileRun::new(source("payments", &["T5"]), source("tickets", &[]));
        let mut ledger = DedupLedger::new();

        let first = run.run(&mut ledger).unwrap();
        let second = run.run(&mut ledger).unwrap();

        assert_eq!(first.events, vec![CorrectiveEvent::ticket_issued("T5")]);
        assert!(!second.has_missing_tickets());
        assert_eq!(second.stats.missing, 1);
        assert_eq!(second.stats.already_corrected, 1);
    }

    #[test]
    fn duplicates_are_flagged_by_default_and_silent_when_collapsed() {
        let payments = ["T1", "T1", "T2"];
        let tickets = ["T2", "T2"];

        let flagged = ReconcileRun::new(source("payments", &payments), source("tickets", &tickets))
            .run(&mut DedupLedger::new())
            .unwrap();
        assert_eq!(flagged.events, vec![CorrectiveEvent::ticket_issued("T1")]);
        let flagged_sources: Vec<&str> = flagged
            .diagnostics
            .iter()
            .filter(|d| d.kind == DiagnosticKind::DuplicateTransactionId)
            .map(|d| d.source_id.as_str())
            .collect();
        assert_eq!(flagged_sources, vec!["payments", "tickets"]);
        assert!(flagged.diagnostics[0].message.contains("'T1' appears 2 times"));

        let collapsed =
            ReconcileRun::new(source("payments", &payments), source("tickets", &tickets))
                .with_duplicate_policy(DuplicatePolicy::Collapse)
                .run(&mut DedupLedger::new())
                .unwrap();
        assert_eq!(collapsed.events, flagged.events);
        assert!(collapsed.diagnostics.is_empty());
    }
}
