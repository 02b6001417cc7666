//! Long-press recognition.
//!
//! Collapses raw pointer press/move/release input into the abstract
//! `Tap` / `LongPress` / `Move` / `Release` events the gesture handler
//! consumes. A press that stays within the movement slop for the dwell
//! duration becomes a long press; moving early or releasing early
//! degenerates the gesture to a tap, reported on release. Every press
//! resolves to exactly one terminal event.

use crate::state::GestureEvent;
use std::time::{Duration, Instant};

/// Pointer travel (in layout units) tolerated before a pending long press
/// is cancelled.
const MOVE_SLOP: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    /// Pressed, dwell not yet elapsed. `cancelled` is set once the pointer
    /// strays beyond the slop; the press then resolves to a tap on release.
    Pending {
        index: usize,
        pressed_at: Instant,
        origin: (f32, f32),
        cancelled: bool,
    },
    /// Dwell elapsed; drag in progress.
    Held,
}

/// Dwell state machine for one pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressTracker {
    phase: Phase,
}

impl Default for PressTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PressTracker {
    /// Fresh tracker, no press in flight.
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Whether the dwell has elapsed and a drag is in progress.
    pub fn is_held(&self) -> bool {
        self.phase == Phase::Held
    }

    /// Pointer pressed on the cell at `index`, at viewport position
    /// `(x, y)`.
    ///
    /// A press while another press is in flight is malformed input and is
    /// ignored.
    pub fn press(&mut self, index: usize, x: f32, y: f32, now: Instant) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Pending {
                index,
                pressed_at: now,
                origin: (x, y),
                cancelled: false,
            };
        }
    }

    /// Periodic dwell check. Returns `LongPress` exactly once, when an
    /// uncancelled pending press has been held for `dwell`.
    pub fn poll(&mut self, now: Instant, dwell: Duration) -> Option<GestureEvent> {
        let Phase::Pending {
            index,
            pressed_at,
            cancelled: false,
            ..
        } = self.phase
        else {
            return None;
        };
        if now.duration_since(pressed_at) >= dwell {
            self.phase = Phase::Held;
            Some(GestureEvent::LongPress { index })
        } else {
            None
        }
    }

    /// Pointer moved to viewport position `(x, y)`.
    ///
    /// While pending, movement beyond the slop cancels the dwell (the press
    /// will resolve to a tap). While held, returns `true` to tell the shell
    /// to forward an anchor-relative `Move` to the gesture handler; the
    /// tracker itself never sees anchor-relative coordinates.
    pub fn pointer_moved(&mut self, x: f32, y: f32) -> bool {
        match &mut self.phase {
            Phase::Pending {
                origin, cancelled, ..
            } => {
                let (ox, oy) = *origin;
                if (x - ox).abs() > MOVE_SLOP || (y - oy).abs() > MOVE_SLOP {
                    *cancelled = true;
                }
                false
            }
            Phase::Held => true,
            Phase::Idle => false,
        }
    }

    /// Pointer lifted. The one terminal event for the press: `Tap` if the
    /// dwell never elapsed, `Release` if a drag was in progress.
    pub fn release(&mut self) -> Option<GestureEvent> {
        let event = match self.phase {
            Phase::Pending { index, .. } => Some(GestureEvent::Tap { index }),
            Phase::Held => Some(GestureEvent::Release),
            Phase::Idle => None,
        };
        self.phase = Phase::Idle;
        event
    }

    /// Host interrupted the gesture (focus loss, suspend). Emits
    /// `Terminate` if a drag was in progress, otherwise just resets.
    pub fn cancel(&mut self) -> Option<GestureEvent> {
        let event = match self.phase {
            Phase::Held => Some(GestureEvent::Terminate),
            _ => None,
        };
        self.phase = Phase::Idle;
        event
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "press_tracker_tests.rs"]
mod tests;
