//! The Selection Model: single source of truth for the in-progress range.
//!
//! Holds which cells are tentatively select/deselect-highlighted between
//! long-press and release, and hands the finished range to the caller on
//! commit. Rendering only ever asks the boolean predicates; the visual
//! mapping lives in `view::hints`.

use crate::model::DayGrid;
use std::ops::RangeInclusive;
use tracing::debug;

/// Whether a drag pass is turning cells on or off.
///
/// Decided once at the anchor: dragging from an inactive cell starts a
/// select pass, from an active cell a deselect pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Committed cells become active.
    Select,
    /// Committed cells become inactive.
    Deselect,
}

/// In-progress drag selection.
///
/// # Invariants
/// - `range` is non-empty exactly while a mode is set.
/// - `range` is always the contiguous interval between the anchor and the
///   latest drag target, clamped to `[0, day_count)`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionModel {
    mode: Option<SelectionMode>,
    anchor: Option<usize>,
    range: Option<RangeInclusive<usize>>,
}

impl SelectionModel {
    /// Fresh, idle model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag selection at `anchor`.
    ///
    /// The mode is the inverse of the anchor's current active state. An
    /// out-of-bounds anchor is rejected with no state change; returns
    /// whether the selection actually began.
    pub fn begin(&mut self, anchor: usize, grid: &DayGrid) -> bool {
        if anchor >= grid.len() {
            debug!(anchor, len = grid.len(), "rejected out-of-bounds anchor");
            return false;
        }
        let mode = if grid.is_active(anchor) {
            SelectionMode::Deselect
        } else {
            SelectionMode::Select
        };
        debug!(anchor, ?mode, "selection began");
        self.mode = Some(mode);
        self.anchor = Some(anchor);
        self.range = Some(anchor..=anchor);
        true
    }

    /// Extend or shrink the range toward `current`.
    ///
    /// `current` comes straight from the coordinate mapping and may be far
    /// out of bounds in either direction; the stored range is the interval
    /// between anchor and `current` intersected with `[0, day_count)`.
    /// No-op while idle.
    pub fn update(&mut self, current: i64, day_count: usize) {
        let (Some(_), Some(anchor)) = (self.mode, self.anchor) else {
            return;
        };
        if day_count == 0 {
            return;
        }
        let anchor = anchor as i64;
        let start = anchor.min(current).max(0) as usize;
        let end = anchor.max(current).min(day_count as i64 - 1) as usize;
        self.range = Some(start..=end);
    }

    /// Finish the drag: return the mode and range, and reset to idle.
    ///
    /// Always resets, even when called while idle (in which case it returns
    /// `None`). The caller is responsible for applying the returned range to
    /// the day collection.
    pub fn commit(&mut self) -> Option<(SelectionMode, RangeInclusive<usize>)> {
        let mode = self.mode.take();
        self.anchor = None;
        let range = self.range.take();
        mode.zip(range)
    }

    /// Whether a drag is currently in progress.
    pub fn in_progress(&self) -> bool {
        self.mode.is_some()
    }

    /// Current mode, if a drag is in progress.
    pub fn mode(&self) -> Option<SelectionMode> {
        self.mode
    }

    /// Anchor index, if a drag is in progress.
    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    /// Whether `index` is inside the tentative range (either mode).
    pub fn contains(&self, index: usize) -> bool {
        self.range.as_ref().is_some_and(|r| r.contains(&index))
    }

    /// Whether `index` is tentatively select-highlighted.
    pub fn is_selected(&self, index: usize) -> bool {
        self.mode == Some(SelectionMode::Select) && self.contains(index)
    }

    /// Whether `index` is tentatively deselect-highlighted.
    pub fn is_deselected(&self, index: usize) -> bool {
        self.mode == Some(SelectionMode::Deselect) && self.contains(index)
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
