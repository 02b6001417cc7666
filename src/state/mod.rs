//! Gesture and selection state machine (pure).
//!
//! All state transitions are pure functions testable without a terminal.

pub mod app_state;
pub mod gesture_handler;
pub mod press_tracker;
pub mod scroll_handler;
pub mod selection;

// Re-export for convenience
pub use app_state::AppState;
pub use gesture_handler::{handle_gesture, GestureEvent, GestureOutput};
pub use press_tracker::PressTracker;
pub use scroll_handler::{handle_scroll_notification, manual_scroll_enabled, tick_auto_scroll};
pub use selection::{SelectionMode, SelectionModel};
