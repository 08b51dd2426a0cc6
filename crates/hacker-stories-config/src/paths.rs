//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/hacker-stories/`, `~/.cache/hacker-stories/`
//! - macOS: `~/Library/Application Support/hacker-stories/`, `~/Library/Caches/hacker-stories/`
//! - Windows: `%APPDATA%\hacker-stories\`, `%LOCALAPPDATA%\hacker-stories\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "hacker-stories";
const STORE_FILE: &str = "state.toml";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create config directory {:?}", dir))?;
    Ok(dir)
}

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory {:?}", dir))?;
    Ok(dir)
}

/// Default location of the persistent store file
pub fn default_store_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(STORE_FILE))
}
