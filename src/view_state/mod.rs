//! Layout geometry and scroll state (pure).
//!
//! Everything here is pure math over measured layouts; no terminal types.

pub mod geometry;
pub mod scroll;

// Re-export for convenience
pub use geometry::{
    scroll_directive, target_cell_index, CellLayout, InvalidCellLayout, ViewportLayout,
};
pub use scroll::{ScrollDirective, ScrollState};
