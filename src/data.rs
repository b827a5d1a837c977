use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::events::TICKET_ISSUED_LABEL;
use crate::constants::records::TRANSACTION_ID_FIELD;
use crate::errors::ReconcileError;

pub use crate::types::{FieldName, TransactionId};

/// A single payment or ticket log entry.
///
/// Fields are kept opaque and in their original order. The only field the
/// crate interprets is `transaction_id`, which is guaranteed to be present and
/// to hold a string for every constructed (or deserialized) record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "IndexMap<FieldName, Value>",
    into = "IndexMap<FieldName, Value>"
)]
pub struct LogRecord {
    fields: IndexMap<FieldName, Value>,
}

impl LogRecord {
    /// Create a record carrying only a transaction id.
    pub fn new(transaction_id: impl Into<TransactionId>) -> Self {
        let mut fields = IndexMap::new();
        fields.insert(
            TRANSACTION_ID_FIELD.to_string(),
            Value::String(transaction_id.into()),
        );
        Self { fields }
    }

    /// Attach an extra field.
    ///
    /// A non-string value for `transaction_id` is ignored so the id stays valid.
    pub fn with_field(mut self, name: impl Into<FieldName>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let value = value.into();
        if name == TRANSACTION_ID_FIELD && !value.is_string() {
            return self;
        }
        self.fields.insert(name, value);
        self
    }

    /// The transaction identifier of this record.
    pub fn transaction_id(&self) -> &str {
        self.fields
            .get(TRANSACTION_ID_FIELD)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Look up a raw field value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// All fields in source order.
    pub fn fields(&self) -> &IndexMap<FieldName, Value> {
        &self.fields
    }
}

impl TryFrom<IndexMap<FieldName, Value>> for LogRecord {
    type Error = ReconcileError;

    fn try_from(fields: IndexMap<FieldName, Value>) -> Result<Self, Self::Error> {
        match fields.get(TRANSACTION_ID_FIELD) {
            Some(Value::String(_)) => Ok(Self { fields }),
            Some(other) => Err(ReconcileError::InvalidRecord(format!(
                "field '{}' must be a string, found {}",
                TRANSACTION_ID_FIELD,
                json_kind(other)
            ))),
            None => Err(ReconcileError::InvalidRecord(format!(
                "missing required field '{}'",
                TRANSACTION_ID_FIELD
            ))),
        }
    }
}

impl From<LogRecord> for IndexMap<FieldName, Value> {
    fn from(record: LogRecord) -> Self {
        record.fields
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Label carried by a corrective event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// A ticket should have been issued for a paid transaction.
    #[serde(rename = "Ticket Issued")]
    TicketIssued,
}

impl EventType {
    /// Human-readable label, identical to the serialized form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            EventType::TicketIssued => TICKET_ISSUED_LABEL,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Synthesized replacement for an event that should have been logged but was not.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CorrectiveEvent {
    /// Transaction the event is issued for.
    pub transaction_id: TransactionId,
    /// Fixed event label.
    pub event_type: EventType,
}

impl CorrectiveEvent {
    /// Build a `Ticket Issued` event for `transaction_id`.
    pub fn ticket_issued(transaction_id: impl Into<TransactionId>) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            event_type: EventType::TicketIssued,
        }
    }
}
