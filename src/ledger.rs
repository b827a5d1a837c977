use std::collections::HashSet;

use crate::types::TransactionId;

/// Record of transaction ids that already received a corrective event.
///
/// Implementations must make `mark` idempotent and must never forget an id
/// once marked. `DedupLedger` is the run-scoped in-memory version; an external
/// keyed store can implement the same contract.
pub trait CorrectionLedger {
    /// True if `id` was already corrected.
    fn contains(&self, id: &str) -> bool;
    /// Remember `id` as corrected. Marking twice is a no-op.
    fn mark(&mut self, id: &str);
}

/// In-memory ledger scoped to a single run.
///
/// Starts empty, has no removal operation, and is dropped with the run.
/// Not synchronized; a run owns its ledger exclusively.
#[derive(Clone, Debug, Default)]
pub struct DedupLedger {
    corrected: HashSet<TransactionId>,
}

impl DedupLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of corrected ids.
    pub fn len(&self) -> usize {
        self.corrected.len()
    }

    /// True when nothing has been corrected yet.
    pub fn is_empty(&self) -> bool {
        self.corrected.is_empty()
    }

    /// Iterate corrected ids in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.corrected.iter().map(String::as_str)
    }
}

impl CorrectionLedger for DedupLedger {
    fn contains(&self, id: &str) -> bool {
        self.corrected.contains(id)
    }

    fn mark(&mut self, id: &str) {
        if !self.corrected.contains(id) {
            self.corrected.insert(id.to_string());
        }
    }
}
