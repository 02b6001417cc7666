//! Cell/viewport layout and the drag coordinate math.
//!
//! The two free functions here are the exact heart of the drag gesture:
//! mapping an anchor-relative pointer position to a cell index, and deciding
//! whether the drag is close enough to a viewport edge to auto-scroll.
//!
//! # Anchor-relative framing
//!
//! `x` and `y` in both functions are measured from the **anchor cell's
//! origin**, not from the pointer's initial touch point and not from the
//! viewport. This framing is what keeps the index math stable while the view
//! auto-scrolls underneath the pointer: the anchor cell is pinned in content
//! space, so the deltas stay meaningful even as the viewport offset changes.
//! Viewport-absolute framing would drift by one row per scrolled cell height
//! after the first auto-scroll.

use super::scroll::ScrollDirective;
use thiserror::Error;

/// Error returned when a measured cell has a non-positive dimension.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("cell dimensions must be > 0 (got {width}x{height})")]
pub struct InvalidCellLayout {
    /// Rejected width.
    pub width: f32,
    /// Rejected height.
    pub height: f32,
}

/// Measured size of one grid cell, in layout units.
///
/// Measured once from the first rendered cell and held immutable until a
/// layout-changed event forces a re-measure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellLayout {
    width: f32,
    height: f32,
}

impl CellLayout {
    /// Smart constructor. Both dimensions must be strictly positive.
    pub fn new(width: f32, height: f32) -> Result<Self, InvalidCellLayout> {
        if width > 0.0 && height > 0.0 {
            Ok(Self { width, height })
        } else {
            Err(InvalidCellLayout { width, height })
        }
    }

    /// Cell width in layout units.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Cell height in layout units.
    pub fn height(&self) -> f32 {
        self.height
    }
}

/// Measured size of the scrollable container, refreshed on resize.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportLayout {
    /// Width in layout units.
    pub width: f32,
    /// Height in layout units.
    pub height: f32,
}

impl ViewportLayout {
    /// Create viewport dimensions.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Map an anchor-relative pointer position to a cell index.
///
/// `(x, y)` are measured from the anchor cell's origin (see module docs).
/// The result is intentionally unclamped and may be far outside
/// `[0, day_count)`; the selection model clamps when it folds the target
/// into the range.
pub fn target_cell_index(
    anchor: usize,
    x: f32,
    y: f32,
    cell: CellLayout,
    cells_per_row: usize,
) -> i64 {
    let col_delta = (x / cell.width()).floor() as i64;
    let row_delta = (y / cell.height()).floor() as i64;
    anchor as i64 + col_delta + cells_per_row as i64 * row_delta
}

/// Compute the auto-scroll directive for the current drag position.
///
/// Projects the anchor-relative `y` back into viewport space via the anchor
/// row's content offset and the current scroll offset, then compares against
/// the edge margins:
/// within `edge_margin` of the bottom edge scrolls down, within
/// `edge_margin` of the top edge scrolls up, the open band in between is
/// dead.
pub fn scroll_directive(
    anchor: usize,
    y: f32,
    cell: CellLayout,
    cells_per_row: usize,
    scroll_offset: f32,
    viewport_height: f32,
    edge_margin: f32,
) -> ScrollDirective {
    let anchor_row = (anchor / cells_per_row) as f32;
    let relative_y = anchor_row * cell.height() + y - scroll_offset;

    if relative_y > viewport_height - edge_margin {
        ScrollDirective::Down
    } else if relative_y < edge_margin {
        ScrollDirective::Up
    } else {
        ScrollDirective::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(w: f32, h: f32) -> CellLayout {
        CellLayout::new(w, h).unwrap()
    }

    mod cell_layout {
        use super::*;

        #[test]
        fn rejects_zero_width() {
            assert!(CellLayout::new(0.0, 10.0).is_err());
        }

        #[test]
        fn rejects_negative_height() {
            assert!(CellLayout::new(10.0, -1.0).is_err());
        }

        #[test]
        fn accepts_positive_dimensions() {
            let c = cell(40.0, 60.0);
            assert_eq!(c.width(), 40.0);
            assert_eq!(c.height(), 60.0);
        }
    }

    mod target_index {
        use super::*;

        #[test]
        fn origin_maps_to_anchor() {
            assert_eq!(target_cell_index(10, 0.0, 0.0, cell(40.0, 60.0), 7), 10);
        }

        #[test]
        fn two_cells_right_one_row_down() {
            // Spec scenario A: anchor 10, +2 columns, +1 row, 7 per row.
            let c = cell(40.0, 60.0);
            assert_eq!(target_cell_index(10, 80.0, 60.0, c, 7), 19);
        }

        #[test]
        fn negative_coordinates_floor_toward_earlier_cells() {
            let c = cell(40.0, 60.0);
            // Half a cell to the left of the anchor origin is column -1.
            assert_eq!(target_cell_index(10, -20.0, 0.0, c, 7), 9);
            // Just above the anchor origin is the previous row.
            assert_eq!(target_cell_index(10, 0.0, -1.0, c, 7), 3);
        }

        #[test]
        fn result_may_leave_bounds_in_either_direction() {
            let c = cell(40.0, 60.0);
            assert!(target_cell_index(0, 0.0, -600.0, c, 7) < 0);
            assert!(target_cell_index(0, 0.0, 6000.0, c, 7) > 100);
        }

        #[test]
        fn fractional_positions_round_down_to_the_containing_cell() {
            let c = cell(40.0, 60.0);
            assert_eq!(target_cell_index(0, 39.9, 59.9, c, 7), 0);
            assert_eq!(target_cell_index(0, 40.0, 59.9, c, 7), 1);
            assert_eq!(target_cell_index(0, 39.9, 60.0, c, 7), 7);
        }
    }

    mod directive {
        use super::*;

        const VIEWPORT_H: f32 = 400.0;
        const MARGIN: f32 = 50.0;

        fn directive_at(anchor: usize, y: f32, offset: f32) -> ScrollDirective {
            scroll_directive(anchor, y, cell(40.0, 60.0), 7, offset, VIEWPORT_H, MARGIN)
        }

        #[test]
        fn middle_of_viewport_is_dead() {
            assert_eq!(directive_at(0, 200.0, 0.0), ScrollDirective::None);
        }

        #[test]
        fn near_bottom_edge_scrolls_down() {
            assert_eq!(directive_at(0, 390.0, 0.0), ScrollDirective::Down);
        }

        #[test]
        fn near_top_edge_scrolls_up() {
            assert_eq!(directive_at(0, 20.0, 0.0), ScrollDirective::Up);
        }

        #[test]
        fn anchor_row_offset_feeds_into_the_projection() {
            // Anchor on row 3 (content y = 180): even a small drag y lands
            // deep in the viewport when nothing is scrolled away.
            assert_eq!(directive_at(21, 20.0, 0.0), ScrollDirective::None);
            // With the viewport scrolled past the anchor row, the same drag
            // y projects above the top edge.
            assert_eq!(directive_at(21, 20.0, 300.0), ScrollDirective::Up);
        }

        #[test]
        fn boundary_values_fall_in_the_dead_band() {
            // Strictly-greater / strictly-less comparisons: landing exactly
            // on a margin issues no directive.
            assert_eq!(directive_at(0, MARGIN, 0.0), ScrollDirective::None);
            assert_eq!(
                directive_at(0, VIEWPORT_H - MARGIN, 0.0),
                ScrollDirective::None
            );
        }
    }
}
