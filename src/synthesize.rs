use indexmap::IndexSet;
use tracing::debug;

use crate::data::CorrectiveEvent;
use crate::ledger::CorrectionLedger;
use crate::types::TransactionId;

/// Build one `Ticket Issued` event per missing id the ledger has not seen.
///
/// Every id is visited once. Ids already in the ledger are skipped; every
/// emitted id is marked before the next id is visited, so the output holds no
/// duplicates and a second call with the same ledger emits nothing.
pub fn synthesize<L>(missing_ids: &IndexSet<TransactionId>, ledger: &mut L) -> Vec<CorrectiveEvent>
where
    L: CorrectionLedger + ?Sized,
{
    let mut events = Vec::new();
    for id in missing_ids {
        if ledger.contains(id) {
            debug!("[reconcile:synthesize] '{}' already corrected, skipping", id);
            continue;
        }
        events.push(CorrectiveEvent::ticket_issued(id.as_str()));
        ledger.mark(id);
        debug!("[reconcile:synthesize] issued corrective event for '{}'", id);
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::EventType;
    use crate::ledger::DedupLedger;

    fn ids(values: &[&str]) -> IndexSet<TransactionId> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn emits_one_event_per_unmarked_id() {
        let mut ledger = DedupLedger::new();
        let events = synthesize(&ids(&["T1", "T2"]), &mut ledger);
        assert_eq!(
            events,
            vec![
                CorrectiveEvent::ticket_issued("T1"),
                CorrectiveEvent::ticket_issued("T2"),
            ]
        );
        assert!(events.iter().all(|event| event.event_type == EventType::TicketIssued));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn skips_ids_already_in_the_ledger() {
        let mut ledger = DedupLedger::new();
        ledger.mark("T1");
        let events = synthesize(&ids(&["T1", "T2", "T3"]), &mut ledger);
        let emitted: Vec<&str> = events.iter().map(|e| e.transaction_id.as_str()).collect();
        assert_eq!(emitted, vec!["T2", "T3"]);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn second_call_with_same_ledger_is_empty() {
        let mut ledger = DedupLedger::new();
        let missing = ids(&["T5"]);
        assert_eq!(synthesize(&missing, &mut ledger).len(), 1);
        assert!(synthesize(&missing, &mut ledger).is_empty());
    }

    #[test]
    fn empty_input_emits_nothing_and_leaves_ledger_untouched() {
        let mut ledger = DedupLedger::new();
        assert!(synthesize(&IndexSet::new(), &mut ledger).is_empty());
        assert!(ledger.is_empty());
    }

    #[test]
    fn works_through_a_trait_object() {
        let mut ledger = DedupLedger::new();
        let dyn_ledger: &mut dyn CorrectionLedger = &mut ledger;
        let events = synthesize(&ids(&["T8"]), dyn_ledger);
        assert_eq!(events.len(), 1);
        assert!(ledger.contains("T8"));
    }
}
