use indexmap::{IndexMap, IndexSet};

use crate::data::LogRecord;
use crate::types::TransactionId;

/// Project records onto their distinct transaction ids.
///
/// Repeated ids collapse to one entry. First-seen order is kept so results are
/// reproducible, but callers should treat the output as a set.
pub fn transaction_ids(records: &[LogRecord]) -> IndexSet<TransactionId> {
    records
        .iter()
        .map(|record| record.transaction_id().to_string())
        .collect()
}

/// Transaction ids present in `payments` but absent from `tickets`.
///
/// Pure set difference on exact id matches.
pub fn missing(payments: &[LogRecord], tickets: &[LogRecord]) -> IndexSet<TransactionId> {
    let ticketed = transaction_ids(tickets);
    transaction_ids(payments)
        .into_iter()
        .filter(|id| !ticketed.contains(id))
        .collect()
}

/// Ids that occur more than once in `records`, with their occurrence count.
///
/// Returned in first-seen order.
pub fn duplicate_ids(records: &[LogRecord]) -> Vec<(TransactionId, usize)> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for record in records {
        *counts.entry(record.transaction_id()).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(id, count)| (id.to_string(), count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn records(ids: &[&str]) -> Vec<LogRecord> {
        ids.iter().map(|id| LogRecord::new(*id)).collect()
    }

    fn as_set(ids: IndexSet<TransactionId>) -> HashSet<TransactionId> {
        ids.into_iter().collect()
    }

    fn set(ids: &[&str]) -> HashSet<TransactionId> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn missing_is_payments_minus_tickets() {
        let payments = records(&["T1", "T2", "T3", "T4"]);
        let tickets = records(&["T2", "T4", "T7"]);
        assert_eq!(as_set(missing(&payments, &tickets)), set(&["T1", "T3"]));
    }

    #[test]
    fn missing_boundary_cases() {
        let a = records(&["T1", "T2"]);
        let b = records(&["T9"]);
        assert!(missing(&a, &a).is_empty());
        assert!(missing(&[], &b).is_empty());
        assert_eq!(as_set(missing(&a, &[])), set(&["T1", "T2"]));
        assert!(missing(&[], &[]).is_empty());
    }

    #[test]
    fn missing_matches_ids_exactly() {
        let payments = records(&["t1", "T1 ", "T1"]);
        let tickets = records(&["T1"]);
        assert_eq!(as_set(missing(&payments, &tickets)), set(&["t1", "T1 "]));
    }

    #[test]
    fn missing_is_deterministic_and_collapses_repeats() {
        let payments = records(&["T3", "T1", "T3", "T2"]);
        let tickets = records(&["T2"]);
        let first = missing(&payments, &tickets);
        let second = missing(&payments, &tickets);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert_eq!(
            first.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["T3", "T1"]
        );
    }

    #[test]
    fn duplicate_ids_reports_only_repeated_ids() {
        let payments = records(&["T1", "T2", "T1", "T3", "T1", "T3"]);
        assert_eq!(
            duplicate_ids(&payments),
            vec![("T1".to_string(), 3), ("T3".to_string(), 2)]
        );
        assert!(duplicate_ids(&records(&["T1", "T2"])).is_empty());
    }
}
