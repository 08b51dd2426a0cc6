//! Logging to a file
//!
//! The terminal is taken by the UI, so `log` output goes to
//! `debug-YYYYmmdd-HHMMSS.log`: in the working directory for debug builds,
//! in the cache directory for release builds.

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Debug;

/// Install the file logger and return where it writes
pub fn init() -> Result<PathBuf> {
    let path = log_dir().join(log_file_name(chrono::Local::now()));
    let file =
        File::create(&path).with_context(|| format!("Failed to create log file {:?}", path))?;

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        // Keeps UTC when the local offset cannot be determined
        .unwrap_or_else(|builder| builder)
        .build();
    let level = std::env::var("RUST_LOG")
        .map(|value| level_from(&value))
        .unwrap_or(DEFAULT_LEVEL);

    WriteLogger::init(level, config, file).context("Failed to install logger")?;
    Ok(path)
}

fn log_dir() -> PathBuf {
    if cfg!(debug_assertions) {
        return PathBuf::new();
    }
    hacker_stories_config::cache_dir().unwrap_or_default()
}

fn log_file_name(now: chrono::DateTime<chrono::Local>) -> String {
    format!("debug-{}.log", now.format("%Y%m%d-%H%M%S"))
}

/// Plain level names only, anything else gets the same level as an unset
/// `RUST_LOG`
fn level_from(value: &str) -> LevelFilter {
    value.trim().parse().unwrap_or(DEFAULT_LEVEL)
}
