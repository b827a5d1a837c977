use std::io;

use thiserror::Error;

use crate::types::SourceId;

/// Error type for log loading, record shape, configuration, and output failures.
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("log source '{source_id}' not found at {path}")]
    SourceNotFound { source_id: SourceId, path: String },
    #[error("log source '{source_id}' could not be opened: {reason}")]
    SourceUnreadable { source_id: SourceId, reason: String },
    #[error("invalid record: {0}")]
    InvalidRecord(String),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("failed to serialize corrective events: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}
