use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{info, warn};

use crate::data::LogRecord;
use crate::errors::ReconcileError;
use crate::source::{DiagnosticKind, LoadedRecords, RecordSource, SourceDiagnostic};
use crate::transport::fs::{LogFile, is_blank, is_not_found};
use crate::types::SourceId;

/// Filesystem source reading one JSON object per line.
///
/// Loading is best-effort. A missing or unopenable file yields zero records
/// plus a diagnostic. Lines that do not parse, or that parse to something
/// other than an object with a string `transaction_id`, are skipped with a
/// diagnostic naming the line. Blank lines are ignored.
pub struct JsonLinesSource {
    source_id: SourceId,
    path: PathBuf,
}

impl JsonLinesSource {
    /// Create a source reading `path` under the id `source_id`.
    pub fn new(source_id: impl Into<SourceId>, path: impl Into<PathBuf>) -> Self {
        Self {
            source_id: source_id.into(),
            path: path.into(),
        }
    }

    /// Path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn report(&self, loaded: &mut LoadedRecords, diagnostic: SourceDiagnostic) {
        warn!("[reconcile:source] {}", diagnostic);
        loaded.diagnostics.push(diagnostic);
    }

    fn open_failure(&self, err: std::io::Error) -> SourceDiagnostic {
        let (kind, error) = if is_not_found(&err) {
            (
                DiagnosticKind::SourceNotFound,
                ReconcileError::SourceNotFound {
                    source_id: self.source_id.clone(),
                    path: self.path.display().to_string(),
                },
            )
        } else {
            (
                DiagnosticKind::SourceUnreadable,
                ReconcileError::SourceUnreadable {
                    source_id: self.source_id.clone(),
                    reason: format!("{}: {err}", self.path.display()),
                },
            )
        };
        SourceDiagnostic::new(&self.source_id, kind, error.to_string())
    }

    fn parse_line(&self, line: &[u8]) -> Result<LogRecord, (DiagnosticKind, String)> {
        let value: Value = serde_json::from_slice(line)
            .map_err(|err| (DiagnosticKind::MalformedEntry, format!("malformed JSON: {err}")))?;
        serde_json::from_value(value)
            .map_err(|err| (DiagnosticKind::InvalidRecord, err.to_string()))
    }
}

impl RecordSource for JsonLinesSource {
    fn id(&self) -> &str {
        &self.source_id
    }

    fn load(&self) -> Result<LoadedRecords, ReconcileError> {
        let mut loaded = LoadedRecords::empty(&self.source_id);
        let log = match LogFile::open(&self.path) {
            Ok(log) => log,
            Err(err) => {
                let diagnostic = self.open_failure(err);
                self.report(&mut loaded, diagnostic);
                return Ok(loaded);
            }
        };

        for (line_number, line) in log.numbered_lines() {
            let line = line?;
            if is_blank(&line) {
                continue;
            }
            match self.parse_line(&line) {
                Ok(record) => loaded.records.push(record),
                Err((kind, message)) => {
                    let diagnostic =
                        SourceDiagnostic::new(&self.source_id, kind, message).at_line(line_number);
                    self.report(&mut loaded, diagnostic);
                }
            }
        }

        info!(
            "[reconcile:source] loaded {} records from '{}' ({}), skipped {}",
            loaded.records.len(),
            self.source_id,
            self.path.display(),
            loaded.diagnostics.len()
        );
        Ok(loaded)
    }
}
