//! Auto-scroll controller.
//!
//! Translates the current scroll directive into incremental scroll-to
//! requests, one per render tick while a drag is active. The shell applies
//! each request to the widget it owns and reports the resulting position
//! back through [`handle_scroll_notification`]; this module never writes
//! the offset itself.

use crate::state::AppState;

/// One auto-scroll tick.
///
/// Returns the offset to request from the rendering collaborator, or `None`
/// when the directive is `None`. Up requests clamp at 0; Down requests
/// clamp at `max_offset` when it is known and run unclamped otherwise.
pub fn tick_auto_scroll(state: &AppState) -> Option<f32> {
    state.scroll.next_offset(state.config.scroll_step)
}

/// Ingest a scroll-position-changed notification.
///
/// Called for every position report from the rendering collaborator,
/// independent of drag state. The stored offset may lag the authoritative
/// one by a tick; nothing here depends on zero lag.
pub fn handle_scroll_notification(state: &mut AppState, offset: f32, max_offset: Option<f32>) {
    state.scroll.sync(offset, max_offset);
}

/// Whether the grid's native scroll input may run.
///
/// Disabled for the whole of a drag so the controller is the sole writer of
/// the offset; re-enabled the moment the machine returns to idle.
pub fn manual_scroll_enabled(state: &AppState) -> bool {
    !state.selection.in_progress()
}

// ===== Tests =====

#[cfg(test)]
#[path = "scroll_handler_tests.rs"]
mod tests;
