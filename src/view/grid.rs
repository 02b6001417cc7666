//! Day-grid renderer.
//!
//! Lays the day cells out `cells_per_row` to a row, each cell
//! [`CELL_ROWS`] terminal rows tall, and windows the resulting lines by
//! the current scroll offset. Layout units are terminal cells: one unit of
//! scroll offset is one terminal row.

use crate::state::AppState;
use crate::view::hints::cell_hints;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Terminal rows per day cell.
pub const CELL_ROWS: u16 = 2;

/// Layout units per terminal column/row.
///
/// The gesture constants (edge margin 50, scroll step 10) are calibrated
/// for pixel-ish densities; scaling a terminal cell to 10 units keeps them
/// meaningful on a character grid. One default scroll-step tick moves the
/// view by exactly one terminal row.
pub const UNITS_PER_CELL: f32 = 10.0;

/// Columns per day cell for a given drawing width. Never zero.
pub fn cell_columns(area_width: u16, cells_per_row: usize) -> u16 {
    (area_width / cells_per_row.max(1) as u16).max(1)
}

/// Total content height in terminal rows.
pub fn content_rows(row_count: usize) -> usize {
    row_count * CELL_ROWS as usize
}

/// Map a content-space position (column, row — scroll already added) to a
/// cell index. `None` for the gutter right of the last column or past the
/// last day.
pub fn hit_cell(
    content_x: u16,
    content_y: u16,
    cell_width: u16,
    cells_per_row: usize,
    day_count: usize,
) -> Option<usize> {
    let col = (content_x / cell_width) as usize;
    if col >= cells_per_row {
        return None;
    }
    let row = (content_y / CELL_ROWS) as usize;
    let index = row * cells_per_row + col;
    (index < day_count).then_some(index)
}

fn cell_style(active: bool, selected: bool, deselected: bool) -> Style {
    // Highlight wins over the persistent active color, deselect drawn as
    // the destructive color.
    if deselected {
        Style::default().bg(Color::Red)
    } else if selected {
        Style::default().bg(Color::Green)
    } else if active {
        Style::default().bg(Color::Blue)
    } else {
        Style::default()
    }
}

/// Build the full, unwindowed content as styled lines.
///
/// Run edges are "rounded" by leaving the outermost column of an edge cell
/// unstyled, matching the original's corner-radius treatment as closely as
/// a character grid allows.
pub fn grid_lines(state: &AppState, width: u16) -> Vec<Line<'static>> {
    let grid = &state.days;
    let cells_per_row = grid.cells_per_row();
    let cell_w = cell_columns(width, cells_per_row) as usize;

    let mut lines = Vec::with_capacity(content_rows(grid.row_count()));
    for row in 0..grid.row_count() {
        let mut label_spans = Vec::with_capacity(cells_per_row);
        let mut pad_spans = Vec::with_capacity(cells_per_row);

        for col in 0..cells_per_row {
            let index = row * cells_per_row + col;
            let Some(day) = grid.day(index) else {
                break;
            };
            let hints = cell_hints(grid, &state.selection, index);
            let style = cell_style(day.active, hints.selected, hints.deselected);

            let label = format!("{:^cell_w$}", day.number);
            push_cell(&mut label_spans, label, style, &hints, cell_w);
            push_cell(&mut pad_spans, " ".repeat(cell_w), style, &hints, cell_w);
        }

        lines.push(Line::from(label_spans));
        lines.push(Line::from(pad_spans));
    }
    lines
}

/// Append one cell's text, splitting off unstyled edge columns at run
/// boundaries.
fn push_cell(
    spans: &mut Vec<Span<'static>>,
    text: String,
    style: Style,
    hints: &crate::view::hints::CellHints,
    cell_w: usize,
) {
    if cell_w >= 3 && (hints.first_of_run || hints.last_of_run) {
        let (head, rest) = text.split_at(1);
        let (mid, tail) = rest.split_at(rest.len() - 1);
        let edge = Style::default();
        spans.push(Span::styled(
            head.to_string(),
            if hints.first_of_run { edge } else { style },
        ));
        spans.push(Span::styled(mid.to_string(), style));
        spans.push(Span::styled(
            tail.to_string(),
            if hints.last_of_run { edge } else { style },
        ));
    } else {
        spans.push(Span::styled(text, style));
    }
}

/// Render the grid into `area`, windowed by the current scroll offset
/// (offset is in layout units; see [`UNITS_PER_CELL`]).
pub fn render_grid(frame: &mut Frame, area: Rect, state: &AppState) {
    let offset_rows = (state.scroll.offset() / UNITS_PER_CELL).max(0.0).round() as usize;
    let lines: Vec<Line<'static>> = grid_lines(state, area.width)
        .into_iter()
        .skip(offset_rows)
        .take(area.height as usize)
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}
