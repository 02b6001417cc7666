//! Day records and the ordered day collection.
//!
//! `DayGrid` owns the day data. The selection core only reads it and asks
//! for mutations through `toggle` and `apply_selection`; it never writes
//! `active` flags directly.

use crate::state::selection::SelectionMode;
use std::ops::RangeInclusive;
use thiserror::Error;

/// A single selectable day cell.
///
/// `id` is unique and stable; `number` is the display value (typically the
/// day of month); `active` is the persistent on/off state a drag selection
/// ultimately mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Day {
    /// Unique, stable identifier.
    pub id: u32,
    /// Display value.
    pub number: u32,
    /// Whether the day is currently marked active.
    pub active: bool,
}

impl Day {
    /// Create a new day record.
    pub fn new(id: u32, number: u32, active: bool) -> Self {
        Self { id, number, active }
    }
}

/// Error returned when constructing a `DayGrid` with zero cells per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cells_per_row must be >= 1 (got {0})")]
pub struct InvalidGrid(pub usize);

/// Ordered collection of days laid out `cells_per_row` to a row.
///
/// Indices are 0-based positions in the sequence; row/column structure is
/// derived, not stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGrid {
    days: Vec<Day>,
    cells_per_row: usize,
}

impl DayGrid {
    /// Smart constructor. Rejects a zero column count.
    pub fn new(days: Vec<Day>, cells_per_row: usize) -> Result<Self, InvalidGrid> {
        if cells_per_row == 0 {
            return Err(InvalidGrid(cells_per_row));
        }
        Ok(Self {
            days,
            cells_per_row,
        })
    }

    /// Number of day cells.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the grid holds no days.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Columns per row.
    pub fn cells_per_row(&self) -> usize {
        self.cells_per_row
    }

    /// Number of (possibly partial) rows.
    pub fn row_count(&self) -> usize {
        self.days.len().div_ceil(self.cells_per_row)
    }

    /// Row containing `index`.
    pub fn row_of(&self, index: usize) -> usize {
        index / self.cells_per_row
    }

    /// Day at `index`, if in bounds.
    pub fn day(&self, index: usize) -> Option<&Day> {
        self.days.get(index)
    }

    /// All days in order.
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Whether the day at `index` is active. Out of bounds reads as inactive.
    pub fn is_active(&self, index: usize) -> bool {
        self.days.get(index).is_some_and(|d| d.active)
    }

    /// Toggle a single day's active flag (the plain-tap mutation).
    ///
    /// Returns `false` without changing anything when `index` is out of
    /// bounds.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.days.get_mut(index) {
            Some(day) => {
                day.active = !day.active;
                true
            }
            None => false,
        }
    }

    /// Apply a committed drag selection: every index in `range` becomes
    /// active for `Select`, inactive for `Deselect`.
    ///
    /// Indices beyond the end are ignored.
    pub fn apply_selection(&mut self, mode: SelectionMode, range: RangeInclusive<usize>) {
        let value = mode == SelectionMode::Select;
        for index in range {
            if let Some(day) = self.days.get_mut(index) {
                day.active = value;
            }
        }
    }
}
