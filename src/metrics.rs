use crate::data::LogRecord;
use crate::reconcile::transaction_ids;

/// Aggregate counts for one reconciliation run.
#[derive(Clone, Debug, PartialEq)]
pub struct ReconcileStats {
    /// Payment records loaded, repeats included.
    pub payments_loaded: usize,
    /// Ticket records loaded, repeats included.
    pub tickets_loaded: usize,
    /// Distinct payment transaction ids.
    pub unique_payments: usize,
    /// Distinct ticket transaction ids.
    pub unique_tickets: usize,
    /// Paid transactions with no ticket.
    pub missing: usize,
    /// Corrective events emitted by this run.
    pub emitted: usize,
    /// Missing transactions skipped because the ledger already held them.
    pub already_corrected: usize,
    /// Share of distinct paid transactions that have a ticket (1.0 with no payments).
    pub ticket_coverage: f64,
}

/// Compute run statistics from loaded collections and synthesis output.
pub fn reconcile_stats(
    payments: &[LogRecord],
    tickets: &[LogRecord],
    missing: usize,
    emitted: usize,
) -> ReconcileStats {
    let unique_payments = transaction_ids(payments).len();
    let unique_tickets = transaction_ids(tickets).len();
    let ticket_coverage = if unique_payments == 0 {
        1.0
    } else {
        unique_payments.saturating_sub(missing) as f64 / unique_payments as f64
    };
    ReconcileStats {
        payments_loaded: payments.len(),
        tickets_loaded: tickets.len(),
        unique_payments,
        unique_tickets,
        missing,
        emitted,
        already_corrected: missing.saturating_sub(emitted),
        ticket_coverage,
    }
}
