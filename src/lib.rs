#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Command-line runner shared by the binary.
pub mod app;
/// Reconciliation configuration types.
pub mod config;
/// Centralized constants for record fields, sources, and output.
pub mod constants;
/// Log record and corrective event types.
pub mod data;
/// Run-scoped dedup ledger.
pub mod ledger;
/// Aggregate run statistics.
pub mod metrics;
/// Console rendering of events and diagnostics.
pub mod output;
/// End-to-end reconciliation run.
pub mod pipeline;
/// Set difference over transaction ids.
pub mod reconcile;
/// Log source traits and built-in sources.
pub mod source;
/// Corrective event synthesis.
pub mod synthesize;
/// Input transports used by sources.
pub mod transport;
/// Shared type aliases.
pub mod types;

mod errors;

pub use config::{DuplicatePolicy, ReconcileConfig};
pub use data::{CorrectiveEvent, EventType, LogRecord};
pub use errors::ReconcileError;
pub use ledger::{CorrectionLedger, DedupLedger};
pub use metrics::ReconcileStats;
pub use pipeline::{ReconcileReport, ReconcileRun};
pub use reconcile::{duplicate_ids, missing, transaction_ids};
pub use source::{
    DiagnosticKind, InMemorySource, JsonLinesSource, LoadedRecords, RecordSource,
    SourceDiagnostic,
};
pub use synthesize::synthesize;
pub use types::{FieldName, LogMessage, PathString, SourceId, TransactionId};
