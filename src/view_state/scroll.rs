//! Scroll state shared between the gesture core and the rendering shell.
//!
//! The rendering collaborator owns the authoritative offset; this state is
//! the core's possibly one-tick-stale view of it, refreshed from every
//! scroll-position notification. The core never writes the offset directly —
//! it computes scroll *requests* (see [`ScrollState::next_offset`]) and the
//! shell applies them.

/// Auto-scroll instruction recomputed on every drag move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirective {
    /// Pointer is in the dead band; do not scroll.
    #[default]
    None,
    /// Pointer is near the top edge; scroll toward offset 0.
    Up,
    /// Pointer is near the bottom edge; scroll toward `max_offset`.
    Down,
}

/// Offset, content bound, and current directive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    offset: f32,
    max_offset: Option<f32>,
    directive: ScrollDirective,
}

impl ScrollState {
    /// Fresh state: offset 0, unknown bound, no directive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last reported scroll offset.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Last reported maximum offset. `None` while unknown/unbounded.
    pub fn max_offset(&self) -> Option<f32> {
        self.max_offset
    }

    /// Current auto-scroll directive.
    pub fn directive(&self) -> ScrollDirective {
        self.directive
    }

    /// Replace the directive (recomputed on every drag move).
    pub fn set_directive(&mut self, directive: ScrollDirective) {
        self.directive = directive;
    }

    /// Reset the directive to `None` (gesture ended).
    pub fn clear_directive(&mut self) {
        self.directive = ScrollDirective::None;
    }

    /// Ingest a scroll-position notification from the rendering
    /// collaborator. Independent of drag state.
    pub fn sync(&mut self, offset: f32, max_offset: Option<f32>) {
        self.offset = offset.max(0.0);
        self.max_offset = max_offset;
    }

    /// The offset the next auto-scroll tick should request, if any.
    ///
    /// - `Down`: `offset + step`, clamped to `max_offset` when known.
    /// - `Up`: `offset - step`, clamped to 0.
    /// - `None`: no request.
    pub fn next_offset(&self, step: f32) -> Option<f32> {
        match self.directive {
            ScrollDirective::None => None,
            ScrollDirective::Up => Some((self.offset - step).max(0.0)),
            ScrollDirective::Down => Some(match self.max_offset {
                Some(max) => (self.offset + step).min(max),
                None => self.offset + step,
            }),
        }
    }
}
