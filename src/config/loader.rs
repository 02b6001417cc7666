//! Configuration file loading with precedence handling.

use crate::config::GestureConfig;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read a config file that exists.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; anything unset falls back to the hardcoded
/// defaults. Corresponds to `~/.config/daygrid/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Columns per grid row.
    #[serde(default)]
    pub cells_per_row: Option<usize>,

    /// Number of demo days to seed.
    #[serde(default)]
    pub day_count: Option<usize>,

    /// Long-press dwell in milliseconds.
    #[serde(default)]
    pub dwell_ms: Option<u64>,

    /// Auto-scroll step per tick, layout units.
    #[serde(default)]
    pub scroll_step: Option<f32>,

    /// Edge margin that triggers auto-scroll, layout units.
    #[serde(default)]
    pub edge_margin: Option<f32>,

    /// Path to the tracing log file.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Columns per grid row.
    pub cells_per_row: usize,
    /// Number of demo days to seed.
    pub day_count: usize,
    /// Gesture constants (dwell, step, margin).
    pub gesture: GestureConfig,
    /// Path to the tracing log file.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            cells_per_row: 7,
            day_count: 357,
            gesture: GestureConfig::default(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve the default log file path.
///
/// `~/.local/state/daygrid/daygrid.log` on Unix-like systems, the platform
/// equivalent elsewhere; falls back to the current directory when no state
/// directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("daygrid").join("daygrid.log")
    } else {
        PathBuf::from("daygrid.log")
    }
}

/// Resolve the default config file path.
///
/// `~/.config/daygrid/config.toml` on Unix, the platform equivalent
/// elsewhere. `None` when no config directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("daygrid").join("config.toml"))
}

/// Load a configuration file from a specific path.
///
/// A missing file is not an error (`Ok(None)` — use defaults); a file that
/// exists but cannot be read or parsed is.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Path precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `DAYGRID_CONFIG` environment variable
/// 3. Default path `~/.config/daygrid/config.toml`
///
/// Missing config files are not errors; defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("DAYGRID_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge a loaded config file into the defaults.
///
/// For each field: `Some(value)` from the file wins, otherwise the default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        cells_per_row: config.cells_per_row.unwrap_or(defaults.cells_per_row),
        day_count: config.day_count.unwrap_or(defaults.day_count),
        gesture: GestureConfig {
            dwell_ms: config.dwell_ms.unwrap_or(defaults.gesture.dwell_ms),
            scroll_step: config.scroll_step.unwrap_or(defaults.gesture.scroll_step),
            edge_margin: config.edge_margin.unwrap_or(defaults.gesture.edge_margin),
        },
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides.
///
/// Checks `DAYGRID_DWELL_MS` and `DAYGRID_CELLS_PER_ROW`; unparseable
/// values are ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(dwell) = env_parse("DAYGRID_DWELL_MS") {
        config.gesture.dwell_ms = dwell;
    }
    if let Some(cells) = env_parse::<usize>("DAYGRID_CELLS_PER_ROW") {
        if cells > 0 {
            config.cells_per_row = cells;
        }
    }
    config
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}

/// Apply CLI argument overrides.
///
/// CLI args have the highest precedence. Only flags the user explicitly
/// set are passed as `Some`.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    cells_per_row: Option<usize>,
    day_count: Option<usize>,
    dwell_ms: Option<u64>,
) -> ResolvedConfig {
    if let Some(cells) = cells_per_row {
        if cells > 0 {
            config.cells_per_row = cells;
        }
    }
    if let Some(count) = day_count {
        config.day_count = count;
    }
    if let Some(dwell) = dwell_ms {
        config.gesture.dwell_ms = dwell;
    }
    config
}

// ===== Tests =====

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
