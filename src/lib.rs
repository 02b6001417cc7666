//! daygrid
//!
//! TUI day grid with long-press drag range selection and auto-scroll.
//!
//! The interesting part is the gesture core: a long press anchors a drag,
//! every pointer move is mapped (anchor-relative) to a target cell and
//! folded into a contiguous clamped range, and a scroll controller nudges
//! the viewport whenever the drag approaches an edge. The core follows a
//! Pure Core / Impure Shell split: everything under `model`, `state`, and
//! `view_state` is pure and synchronous; `view` owns the terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
pub mod view_state;
