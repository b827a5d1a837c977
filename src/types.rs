/// Opaque transaction identifier correlating a payment with its ticket.
/// Examples: `T1`, `txn_0001`, `9f1c2d7e-3b1a-4c2e-9a55-0d7f3c1e2b44`
pub type TransactionId = String;
/// Identifier for the log source that produced a record.
/// Examples: `payments`, `tickets`
pub type SourceId = String;
/// Name of a field inside a log record.
/// Examples: `transaction_id`, `amount`, `seat`
pub type FieldName = String;
/// Warning/log message text.
/// Examples: `source not found: payments.json`, `expected value at line 1 column 1`
pub type LogMessage = String;
/// File path strings accepted from the command line or environment.
/// Example: `logs/2024-05-01/payments.json`
pub type PathString = String;
