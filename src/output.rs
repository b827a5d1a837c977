use crate::constants::output::NO_MISSING_TICKETS_MESSAGE;
use crate::data::CorrectiveEvent;
use crate::errors::ReconcileError;
use crate::source::SourceDiagnostic;

/// Render corrective events for stdout.
///
/// Non-empty input becomes a pretty-printed JSON array; empty input becomes the
/// "no missing tickets" message.
pub fn render_events(events: &[CorrectiveEvent]) -> Result<String, ReconcileError> {
    if events.is_empty() {
        return Ok(NO_MISSING_TICKETS_MESSAGE.to_string());
    }
    Ok(serde_json::to_string_pretty(events)?)
}

/// Render diagnostics as one human-readable line each.
pub fn render_diagnostics(diagnostics: &[SourceDiagnostic]) -> Vec<String> {
    diagnostics
        .iter()
        .map(|diagnostic| format!("warning: {diagnostic}"))
        .collect()
}
