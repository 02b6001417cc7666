//! Gesture event handler.
//!
//! Turns the abstract gesture stream into Selection Model calls and scroll
//! directives. Pure state transform: side effects (haptics, day mutation)
//! are expressed as [`GestureOutput`] values for the shell to act on.
//!
//! # State machine
//!
//! - Idle → `LongPress(i)` → Selecting (begins the selection, one-shot
//!   haptic output).
//! - Selecting → `Move(x, y)` → Selecting (remaps the target cell, updates
//!   the range, recomputes the scroll directive).
//! - Selecting → `Release` / `Terminate` → Idle (commits, emits the final
//!   mode + indices, clears the directive). Terminate is handled exactly
//!   like Release so an interrupted gesture can never leave the machine
//!   stuck in Selecting.
//! - `Tap(i)` bypasses the machine entirely: it is forwarded as a
//!   single-cell toggle request and never touches selection state.
//!
//! Invalid input (`Move`/`Release` while idle, out-of-bounds indices) is
//! absorbed as a no-op, never an error.

use crate::state::{AppState, SelectionMode};
use crate::view_state::geometry::{scroll_directive, target_cell_index};
use tracing::{debug, info};

/// Abstract gesture event, as delivered by the host gesture source.
///
/// `Move` coordinates are **anchor-relative**: measured from the anchor
/// cell's origin, not from the viewport or the initial touch point. See
/// `view_state::geometry` for why that framing matters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Dwell elapsed on the cell at `index`; the drag gesture starts here.
    LongPress {
        /// Cell the press originated on.
        index: usize,
    },
    /// Plain tap (press released before the dwell elapsed).
    Tap {
        /// Cell the tap landed on.
        index: usize,
    },
    /// Pointer moved during an active drag, anchor-relative units.
    Move {
        /// Horizontal offset from the anchor cell's origin.
        x: f32,
        /// Vertical offset from the anchor cell's origin.
        y: f32,
    },
    /// Pointer lifted; the drag (if any) is complete.
    Release,
    /// Host interrupted the gesture. Treated identically to `Release`.
    Terminate,
}

/// Effect the shell must perform in response to a gesture event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureOutput {
    /// One-shot tactile/alert feedback for entering the drag.
    HapticPulse,
    /// A plain tap requested a single-cell toggle.
    SingleCellToggle(usize),
    /// A drag finished; apply `active = (mode == Select)` over `indices`.
    MultiSelectionEnd {
        /// Select or deselect pass.
        mode: SelectionMode,
        /// Covered cell indices, ascending.
        indices: Vec<usize>,
    },
}

/// Process one gesture event against the current state.
///
/// Returns at most one output per event; `None` means the event either only
/// updated internal state (moves) or was absorbed as invalid.
pub fn handle_gesture(state: &mut AppState, event: GestureEvent) -> Option<GestureOutput> {
    match event {
        GestureEvent::LongPress { index } => handle_long_press(state, index),
        GestureEvent::Tap { index } => handle_tap(state, index),
        GestureEvent::Move { x, y } => handle_move(state, x, y),
        GestureEvent::Release | GestureEvent::Terminate => handle_end(state),
    }
}

fn handle_long_press(state: &mut AppState, index: usize) -> Option<GestureOutput> {
    if state.selection.in_progress() {
        // Host guarantees one gesture at a time; a second long-press mid-drag
        // is malformed input and gets absorbed.
        debug!(index, "long-press while already selecting; ignored");
        return None;
    }
    if state.selection.begin(index, &state.days) {
        Some(GestureOutput::HapticPulse)
    } else {
        None
    }
}

fn handle_tap(state: &mut AppState, index: usize) -> Option<GestureOutput> {
    if index >= state.days.len() {
        debug!(index, "tap outside the grid; ignored");
        return None;
    }
    Some(GestureOutput::SingleCellToggle(index))
}

fn handle_move(state: &mut AppState, x: f32, y: f32) -> Option<GestureOutput> {
    let anchor = state.selection.anchor()?;
    let Some(cell) = state.cell_layout() else {
        // No measurement yet; nothing to map pixel deltas against.
        return None;
    };
    let cells_per_row = state.days.cells_per_row();

    let target = target_cell_index(anchor, x, y, cell, cells_per_row);
    state.selection.update(target, state.days.len());

    let directive = scroll_directive(
        anchor,
        y,
        cell,
        cells_per_row,
        state.scroll.offset(),
        state.viewport.height,
        state.config.edge_margin,
    );
    state.scroll.set_directive(directive);
    None
}

fn handle_end(state: &mut AppState) -> Option<GestureOutput> {
    state.scroll.clear_directive();
    let (mode, range) = state.selection.commit()?;
    let indices: Vec<usize> = range.collect();
    info!(?mode, first = indices.first(), last = indices.last(), "drag committed");
    Some(GestureOutput::MultiSelectionEnd { mode, indices })
}

// ===== Tests =====

#[cfg(test)]
#[path = "gesture_handler_tests.rs"]
mod tests;
