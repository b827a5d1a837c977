//! Log source interfaces and load results.
//!
//! Ownership model:
//! - `RecordSource` is the reconciler-facing interface that yields one log's records.
//! - `LoadedRecords` carries the records together with every recoverable
//!   condition met while loading them. Sources never abort a run for a
//!   missing file or a bad line; they report it and move on.

use std::fmt;

use crate::data::LogRecord;
use crate::errors::ReconcileError;
use crate::types::{LogMessage, SourceId};

/// Source implementation modules.
pub mod sources;
pub use sources::json_lines::JsonLinesSource;

/// Category of a recoverable condition reported during a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// The log could not be located; it contributes zero records.
    SourceNotFound,
    /// The log exists but could not be opened; it contributes zero records.
    SourceUnreadable,
    /// A line is not valid JSON and was skipped.
    MalformedEntry,
    /// A line is valid JSON but lacks a string `transaction_id` and was skipped.
    InvalidRecord,
    /// A transaction id occurs more than once in the same log.
    DuplicateTransactionId,
}

/// A recoverable condition tied to a source and, when known, a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceDiagnostic {
    /// Source the condition was met in.
    pub source_id: SourceId,
    /// 1-based line number inside the source.
    pub line: Option<usize>,
    pub kind: DiagnosticKind,
    pub message: LogMessage,
}

impl SourceDiagnostic {
    /// Create a diagnostic not tied to a specific line.
    pub fn new(
        source_id: impl Into<SourceId>,
        kind: DiagnosticKind,
        message: impl Into<LogMessage>,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            line: None,
            kind,
            message: message.into(),
        }
    }

    /// Attach a 1-based line number.
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for SourceDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "[{}] line {}: {}", self.source_id, line, self.message),
            None => write!(f, "[{}] {}", self.source_id, self.message),
        }
    }
}

/// Result of loading one source.
#[derive(Clone, Debug, Default)]
pub struct LoadedRecords {
    /// Source that produced these records.
    pub source_id: SourceId,
    /// Parsed records in source order.
    pub records: Vec<LogRecord>,
    /// Recoverable conditions met while loading.
    pub diagnostics: Vec<SourceDiagnostic>,
}

impl LoadedRecords {
    /// An empty load result for `source_id`.
    pub fn empty(source_id: impl Into<SourceId>) -> Self {
        Self {
            source_id: source_id.into(),
            ..Self::default()
        }
    }

    /// True when no records were loaded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Reconciler-facing log source.
///
/// `load` returns `Err` only for conditions that make further progress
/// meaningless (for example a read failure halfway through an opened file).
/// Missing logs and bad lines belong in `LoadedRecords::diagnostics`.
pub trait RecordSource {
    /// Stable source identifier used in diagnostics.
    fn id(&self) -> &str;
    /// Load every record this source holds.
    fn load(&self) -> Result<LoadedRecords, ReconcileError>;
}

/// Source backed by prebuilt records.
pub struct InMemorySource {
    id: SourceId,
    records: Vec<LogRecord>,
}

impl InMemorySource {
    /// Create an in-memory source from prebuilt records.
    pub fn new(id: impl Into<SourceId>, records: Vec<LogRecord>) -> Self {
        Self {
            id: id.into(),
            records,
        }
    }
}

impl RecordSource for InMemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn load(&self) -> Result<LoadedRecords, ReconcileError> {
        Ok(LoadedRecords {
            source_id: self.id.clone(),
            records: self.records.clone(),
            diagnostics: Vec::new(),
        })
    }
}
