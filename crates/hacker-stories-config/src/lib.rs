//! Configuration and file management for hacker-stories
//!
//! This crate provides:
//! - Directory helpers for config and cache files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - The persistent key-value store that remembers the last search term

pub mod app_config;
pub mod config_file;
pub mod paths;
pub mod store;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use paths::{cache_dir, config_dir, default_store_path};
pub use store::{FileStore, MemoryStore, PersistentStore, SEARCH_TERM_KEY};
