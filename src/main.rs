//! daygrid - Entry Point

use chrono::{Datelike, Duration as ChronoDuration, Local, NaiveDate};
use clap::Parser;
use daygrid::config;
use daygrid::model::{Day, DayGrid};
use daygrid::state::AppState;
use daygrid::view::TuiApp;
use std::path::PathBuf;
use tracing::info;

/// TUI day grid with long-press drag range selection
#[derive(Parser, Debug)]
#[command(name = "daygrid")]
#[command(version)]
#[command(about = "Day grid with long-press drag range selection and auto-scroll")]
pub struct Args {
    /// Number of days to seed
    #[arg(long)]
    pub days: Option<usize>,

    /// Cells per row
    #[arg(long)]
    pub columns: Option<usize>,

    /// Long-press dwell in milliseconds
    #[arg(long)]
    pub dwell_ms: Option<u64>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Precedence chain: Defaults → Config File → Env Vars → CLI Args
    let resolved = {
        let config_file = config::load_config_with_precedence(args.config.clone())?;
        let merged = config::merge_config(config_file);
        let with_env = config::apply_env_overrides(merged);
        config::apply_cli_overrides(with_env, args.columns, args.days, args.dwell_ms)
    };

    daygrid::logging::init(&resolved.log_file_path)?;
    info!(config = ?resolved, "Configuration loaded and resolved");

    let days = seed_days(resolved.day_count, Local::now().date_naive());
    let grid = DayGrid::new(days, resolved.cells_per_row)?;
    let state = AppState::new(grid, resolved.gesture);

    TuiApp::new(state)?.run()?;
    Ok(())
}

/// Seed the demo day sequence: consecutive calendar days starting at
/// `start`, with a deterministic pseudo-random initial active pattern.
fn seed_days(count: usize, start: NaiveDate) -> Vec<Day> {
    let mut rng = 0x9e37_79b9_7f4a_7c15_u64;
    (0..count)
        .map(|i| {
            let date = start + ChronoDuration::days(i as i64);
            // xorshift64: deterministic, no RNG dependency needed.
            rng ^= rng << 13;
            rng ^= rng >> 7;
            rng ^= rng << 17;
            Day::new(i as u32 + 1, date.day(), rng & 1 == 0)
        })
        .collect()
}
