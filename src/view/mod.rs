//! TUI rendering and terminal management (impure shell).
//!
//! Adapts crossterm mouse input into the core's abstract gesture events:
//! presses feed the dwell tracker, drags are converted to anchor-relative
//! layout units before reaching the gesture handler, and a periodic tick
//! drives both dwell expiry and the auto-scroll controller. The shell owns
//! the authoritative scroll offset and reports it back to the core after
//! every change, exactly the request/notify split the core expects.

mod grid;
pub mod hints;

pub use grid::{cell_columns, content_rows, grid_lines, hit_cell, render_grid, CELL_ROWS, UNITS_PER_CELL};
pub use hints::{cell_hints, CellHints};

use crate::state::{
    handle_gesture, handle_scroll_notification, manual_scroll_enabled, tick_auto_scroll, AppState,
    GestureEvent, GestureOutput, PressTracker,
};
use crate::view_state::CellLayout;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, warn};

/// Event-poll granularity. Bounds dwell-expiry latency and the auto-scroll
/// tick rate.
const TICK: Duration = Duration::from_millis(50);

/// Offset change for one manual wheel notch, in layout units (two rows).
const WHEEL_STEP: f32 = 2.0 * UNITS_PER_CELL;

/// Errors that can occur during TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations.
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application: terminal, core state, and the shell-owned scroll
/// offset.
pub struct TuiApp {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    state: AppState,
    tracker: PressTracker,
    /// Authoritative scroll offset, layout units.
    offset: f32,
    should_quit: bool,
}

impl TuiApp {
    /// Set up the terminal (raw mode, alternate screen, mouse capture) and
    /// build the app.
    pub fn new(state: AppState) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            state,
            tracker: PressTracker::new(),
            offset: 0.0,
            should_quit: false,
        })
    }

    /// Run the event loop until quit. Restores the terminal before
    /// returning.
    pub fn run(mut self) -> Result<(), TuiError> {
        let result = self.event_loop();
        self.restore_terminal();
        result
    }

    fn event_loop(&mut self) -> Result<(), TuiError> {
        while !self.should_quit {
            self.sync_layout()?;
            self.auto_scroll_tick();
            self.poll_dwell();
            self.draw()?;

            if event::poll(TICK)? {
                match event::read()? {
                    Event::Key(key) => self.on_key(key),
                    Event::Mouse(mouse) => self.on_mouse(mouse),
                    Event::Resize(_, _) => {
                        // Dimensions are re-read at the top of the loop; the
                        // cell measurement is invalidated here.
                        self.state.layout_changed();
                    }
                    Event::FocusLost => {
                        let event = self.tracker.cancel();
                        self.forward(event);
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Refresh viewport/cell measurements and report the scroll position.
    fn sync_layout(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        self.state
            .resize_viewport(units(size.width), units(size.height));
        if self.state.cell_layout().is_none() {
            let cell_w = cell_columns(size.width, self.state.days.cells_per_row());
            if let Ok(layout) =
                CellLayout::new(units(cell_w), units(CELL_ROWS))
            {
                self.state.measure_cell(layout);
            }
        }

        let content = units(content_rows(self.state.days.row_count()) as u16);
        let max_offset = (content - units(size.height)).max(0.0);
        self.offset = self.offset.clamp(0.0, max_offset);
        handle_scroll_notification(&mut self.state, self.offset, Some(max_offset));
        Ok(())
    }

    /// One auto-scroll tick: apply the controller's request, if any.
    fn auto_scroll_tick(&mut self) {
        if let Some(requested) = tick_auto_scroll(&self.state) {
            self.offset = requested;
            let max = self.state.scroll.max_offset();
            handle_scroll_notification(&mut self.state, self.offset, max);
        }
    }

    /// Check the dwell timer and forward a long press when it fires.
    fn poll_dwell(&mut self) {
        let dwell = self.state.config.dwell();
        let event = self.tracker.poll(Instant::now(), dwell);
        self.forward(event);
    }

    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.state;
        self.terminal.draw(|frame| {
            render_grid(frame, frame.area(), state);
        })?;
        Ok(())
    }

    fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn on_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(index) = self.hit(mouse.column, mouse.row) else {
                    debug!(col = mouse.column, row = mouse.row, "press outside the grid");
                    return;
                };
                self.tracker
                    .press(index, units(mouse.column), units(mouse.row), Instant::now());
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self
                    .tracker
                    .pointer_moved(units(mouse.column), units(mouse.row))
                {
                    let event = self.anchor_relative_move(mouse.column, mouse.row);
                    self.forward(event);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let event = self.tracker.release();
                self.forward(event);
            }
            MouseEventKind::ScrollDown => self.manual_scroll(WHEEL_STEP),
            MouseEventKind::ScrollUp => self.manual_scroll(-WHEEL_STEP),
            _ => {}
        }
    }

    /// Viewport position → cell index, accounting for the current scroll.
    fn hit(&self, column: u16, row: u16) -> Option<usize> {
        let cell = self.state.cell_layout()?;
        let cell_w = (cell.width() / UNITS_PER_CELL) as u16;
        let offset_rows = (self.offset / UNITS_PER_CELL).round() as u16;
        hit_cell(
            column,
            row.saturating_add(offset_rows),
            cell_w.max(1),
            self.state.days.cells_per_row(),
            self.state.days.len(),
        )
    }

    /// Convert a viewport position into a `Move` event framed relative to
    /// the anchor cell's origin in content space. The drag math requires
    /// this framing; see `view_state::geometry`.
    fn anchor_relative_move(&self, column: u16, row: u16) -> Option<GestureEvent> {
        let anchor = self.state.selection.anchor()?;
        let cell = self.state.cell_layout()?;
        let cells_per_row = self.state.days.cells_per_row();

        let anchor_x = (anchor % cells_per_row) as f32 * cell.width();
        let anchor_y = (anchor / cells_per_row) as f32 * cell.height();
        let content_x = units(column);
        let content_y = units(row) + self.offset;

        Some(GestureEvent::Move {
            x: content_x - anchor_x,
            y: content_y - anchor_y,
        })
    }

    fn manual_scroll(&mut self, delta: f32) {
        // The auto-scroll controller is the sole writer during a drag.
        if !manual_scroll_enabled(&self.state) {
            return;
        }
        let max = self.state.scroll.max_offset();
        self.offset = (self.offset + delta).clamp(0.0, max.unwrap_or(f32::MAX));
        handle_scroll_notification(&mut self.state, self.offset, max);
    }

    /// Feed one gesture event through the core and act on its output.
    fn forward(&mut self, event: Option<GestureEvent>) {
        let Some(event) = event else { return };
        match handle_gesture(&mut self.state, event) {
            Some(GestureOutput::HapticPulse) => ring_bell(),
            Some(GestureOutput::SingleCellToggle(index)) => {
                self.state.days.toggle(index);
            }
            Some(GestureOutput::MultiSelectionEnd { mode, indices }) => {
                if let (Some(&first), Some(&last)) = (indices.first(), indices.last()) {
                    self.state.days.apply_selection(mode, first..=last);
                }
            }
            None => {}
        }
    }

    fn restore_terminal(&mut self) {
        if let Err(err) = disable_raw_mode() {
            warn!(?err, "failed to disable raw mode");
        }
        let mut stdout = io::stdout();
        if let Err(err) = stdout.execute(DisableMouseCapture) {
            warn!(?err, "failed to disable mouse capture");
        }
        if let Err(err) = stdout.execute(LeaveAlternateScreen) {
            warn!(?err, "failed to leave alternate screen");
        }
    }
}

/// Terminal cells → layout units.
fn units(cells: u16) -> f32 {
    cells as f32 * UNITS_PER_CELL
}

/// The closest a terminal gets to a haptic pulse.
fn ring_bell() {
    let mut stdout = io::stdout();
    let _ = stdout.write_all(b"\x07");
    let _ = stdout.flush();
}
