//! Root application state.
//!
//! `AppState` owns the day collection, the selection model, and the layout
//! and scroll bookkeeping. All of it lives on the single UI-event thread;
//! handlers mutate it synchronously inside each delivered event.

use crate::config::GestureConfig;
use crate::model::DayGrid;
use crate::state::SelectionModel;
use crate::view_state::{CellLayout, ScrollState, ViewportLayout};

/// Everything the gesture core operates on.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The day collection (domain data; everything else is UI state).
    pub days: DayGrid,
    /// In-progress drag selection.
    pub selection: SelectionModel,
    /// Scroll offset/bound mirror plus the current auto-scroll directive.
    pub scroll: ScrollState,
    /// Cell size, measured once from the first rendered cell.
    /// `None` until the first measurement or after a layout change.
    cell_layout: Option<CellLayout>,
    /// Scrollable container size, refreshed on resize.
    pub viewport: ViewportLayout,
    /// Tunable gesture constants (dwell, scroll step, edge margin).
    pub config: GestureConfig,
}

impl AppState {
    /// Create state around a seeded day grid.
    pub fn new(days: DayGrid, config: GestureConfig) -> Self {
        Self {
            days,
            selection: SelectionModel::new(),
            scroll: ScrollState::new(),
            cell_layout: None,
            viewport: ViewportLayout::default(),
            config,
        }
    }

    /// Measured cell size, if available.
    pub fn cell_layout(&self) -> Option<CellLayout> {
        self.cell_layout
    }

    /// Record the first cell measurement.
    ///
    /// Only the first call after construction (or after
    /// [`AppState::layout_changed`]) takes effect; the measurement is
    /// immutable in between.
    pub fn measure_cell(&mut self, layout: CellLayout) {
        if self.cell_layout.is_none() {
            self.cell_layout = Some(layout);
        }
    }

    /// A layout change invalidated the cell measurement; the next
    /// [`AppState::measure_cell`] call re-establishes it.
    pub fn layout_changed(&mut self) {
        self.cell_layout = None;
    }

    /// Refresh the viewport dimensions (container resized).
    pub fn resize_viewport(&mut self, width: f32, height: f32) {
        self.viewport = ViewportLayout::new(width, height);
    }
}

// ===== Tests =====
