//! Configuration module.

pub mod loader;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig,
};

use std::time::Duration;

/// Tunable gesture constants.
///
/// Free-standing constants of the interaction, exposed as configuration
/// with the documented defaults `{dwell_ms: 500, scroll_step: 10,
/// edge_margin: 50}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// How long a press must stay put before it becomes a long press, in
    /// milliseconds.
    pub dwell_ms: u64,
    /// Offset change requested per auto-scroll tick, in layout units.
    pub scroll_step: f32,
    /// Distance from a viewport edge at which a drag starts auto-scrolling,
    /// in layout units.
    pub edge_margin: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            dwell_ms: 500,
            scroll_step: 10.0,
            edge_margin: 50.0,
        }
    }
}

impl GestureConfig {
    /// Dwell as a `Duration`.
    pub fn dwell(&self) -> Duration {
        Duration::from_millis(self.dwell_ms)
    }
}
