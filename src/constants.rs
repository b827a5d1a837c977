/// Constants describing the log record shape.
pub mod records {
    /// Field every payment and ticket record must carry as a string.
    pub const TRANSACTION_ID_FIELD: &str = "transaction_id";
}

/// Constants used for corrective events.
pub mod events {
    /// Label written on every synthesized corrective event.
    pub const TICKET_ISSUED_LABEL: &str = "Ticket Issued";
}

/// Constants naming the two log sources and their default locations.
pub mod sources {
    /// Source id used for the payments log.
    pub const PAYMENTS_SOURCE_ID: &str = "payments";
    /// Source id used for the tickets log.
    pub const TICKETS_SOURCE_ID: &str = "tickets";
    /// Payments log path, relative to the working directory.
    pub const DEFAULT_PAYMENTS_PATH: &str = "payments.json";
    /// Tickets log path, relative to the working directory.
    pub const DEFAULT_TICKETS_PATH: &str = "tickets.json";
    /// Environment variable overriding the payments log path.
    pub const PAYMENTS_PATH_ENV: &str = "TICKET_RECONCILE_PAYMENTS";
    /// Environment variable overriding the tickets log path.
    pub const TICKETS_PATH_ENV: &str = "TICKET_RECONCILE_TICKETS";
}

/// Constants used when rendering run output.
pub mod output {
    /// Message printed when every payment already has a ticket.
    pub const NO_MISSING_TICKETS_MESSAGE: &str = "No missing tickets found.";
}
