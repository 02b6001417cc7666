//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod day;

// Re-export for convenience
pub use day::{Day, DayGrid, InvalidGrid};
