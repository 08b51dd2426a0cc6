//! Persistent key-value store
//!
//! Remembers small string values (most importantly the last search term)
//! across runs.
//!
//! # File format
//!
//! ```toml
//! [meta]
//! last_modified = "2024-01-01T00:00:00Z"
//! version = 1
//!
//! [values]
//! search = "React"
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Key under which the current search term is stored
pub const SEARCH_TERM_KEY: &str = "search";

const STORE_VERSION: u32 = 1;

/// String key-value storage that survives restarts
pub trait PersistentStore: Send {
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Store metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreMeta {
    pub last_modified: DateTime<Utc>,
    pub version: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreFile {
    meta: StoreMeta,
    #[serde(default)]
    values: BTreeMap<String, String>,
}

impl Default for StoreFile {
    fn default() -> Self {
        Self {
            meta: StoreMeta {
                last_modified: Utc::now(),
                version: STORE_VERSION,
            },
            values: BTreeMap::new(),
        }
    }
}

/// TOML-file backed store, every `set` is written through to disk
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    file: StoreFile,
}

impl FileStore {
    /// Open the store at `path`
    ///
    /// A missing or unreadable file starts an empty store; it is created on
    /// the first `set`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file = if path.exists() {
            match Self::load_from_path(&path) {
                Ok(file) => {
                    log::info!("Loaded store from {:?}", path);
                    file
                }
                Err(e) => {
                    log::warn!("Ignoring unreadable store {:?}: {:#}", path, e);
                    StoreFile::default()
                }
            }
        } else {
            log::info!("No existing store at {:?}, starting empty", path);
            StoreFile::default()
        };
        Self { path, file }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_from_path(path: &Path) -> Result<StoreFile> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read store file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse store file: {:?}", path))
    }

    fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(&self.file).context("Failed to serialize store")?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write store file: {:?}", path))?;

        log::debug!("Saved store to {:?}", path);
        Ok(())
    }
}

impl PersistentStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.file.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.file.values.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        self.file.values.insert(key.to_string(), value.to_string());
        self.file.meta.last_modified = Utc::now();
        self.save_to_path(&self.path)
    }
}

/// In-memory store, nothing is persisted
///
/// Clones share their values, so a handle kept after boxing the store away
/// still sees every write.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.values().insert(key.to_string(), value.to_string());
        self
    }

    fn values(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PersistentStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("state.toml"));
        assert_eq!(store.get(SEARCH_TERM_KEY), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_set_writes_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.toml");

        let mut store = FileStore::open(&path);
        store.set(SEARCH_TERM_KEY, "Redux").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[meta]"));
        assert!(content.contains("[values]"));
        assert!(content.contains("search = \"Redux\""));

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get(SEARCH_TERM_KEY).as_deref(), Some("Redux"));
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.toml");

        let mut store = FileStore::open(&path);
        store.set(SEARCH_TERM_KEY, "React").unwrap();
        store.set(SEARCH_TERM_KEY, "Rust").unwrap();

        assert_eq!(FileStore::open(&path).get(SEARCH_TERM_KEY).as_deref(), Some("Rust"));
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.toml");
        fs::write(&path, "this is = = not toml").unwrap();

        let mut store = FileStore::open(&path);
        assert_eq!(store.get(SEARCH_TERM_KEY), None);

        // The next write replaces the broken file
        store.set(SEARCH_TERM_KEY, "React").unwrap();
        assert_eq!(FileStore::open(&path).get(SEARCH_TERM_KEY).as_deref(), Some("React"));
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new().with_value(SEARCH_TERM_KEY, "React");
        assert_eq!(store.get(SEARCH_TERM_KEY).as_deref(), Some("React"));
        store.set(SEARCH_TERM_KEY, "").unwrap();
        assert_eq!(store.get(SEARCH_TERM_KEY).as_deref(), Some(""));
        assert_eq!(store.get("other"), None);
    }

    #[test]
    fn test_memory_store_clones_share_values() {
        let observer = MemoryStore::new();
        let mut boxed: Box<dyn PersistentStore> = Box::new(observer.clone());
        boxed.set(SEARCH_TERM_KEY, "Rust").unwrap();
        assert_eq!(observer.get(SEARCH_TERM_KEY).as_deref(), Some("Rust"));
    }
}
