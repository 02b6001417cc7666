//! Per-cell render hints.
//!
//! Pure predicates over `active` plus the current selection, recomputed on
//! every render. The run-edge flags exist purely for edge-rounding styling;
//! they feed no selection logic.

use crate::model::DayGrid;
use crate::state::SelectionModel;

/// What the renderer needs to know about one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellHints {
    /// Tentatively select-highlighted by the current drag.
    pub selected: bool,
    /// Tentatively deselect-highlighted by the current drag.
    pub deselected: bool,
    /// First cell of a lit run (left edge gets the rounding treatment).
    pub first_of_run: bool,
    /// Last cell of a lit run.
    pub last_of_run: bool,
}

/// A cell is "lit" when it is active or highlighted either way by the
/// in-progress drag. Runs are maximal consecutive sequences of lit cells.
fn lit(grid: &DayGrid, selection: &SelectionModel, index: usize) -> bool {
    grid.is_active(index) || selection.contains(index)
}

/// Compute render hints for the cell at `index`.
///
/// Run edges follow the original renderer's neighbor rules: a lit cell is
/// first of its run when it sits at index 0 or its left neighbor is unlit,
/// and last when it sits at the final index or its right neighbor is unlit.
pub fn cell_hints(grid: &DayGrid, selection: &SelectionModel, index: usize) -> CellHints {
    let mut hints = CellHints {
        selected: selection.is_selected(index),
        deselected: selection.is_deselected(index),
        ..CellHints::default()
    };

    if lit(grid, selection, index) {
        hints.first_of_run = index == 0 || !lit(grid, selection, index - 1);
        hints.last_of_run = index + 1 >= grid.len() || !lit(grid, selection, index + 1);
    }

    hints
}
