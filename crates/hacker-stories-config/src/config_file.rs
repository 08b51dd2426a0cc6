use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = ".hacker-stories.toml";

/// Load config file content from CWD first, then home directory
///
/// Searches for `.hacker-stories.toml` in:
/// 1. Current working directory
/// 2. Home directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    let candidates = [Some(PathBuf::from(CONFIG_FILE)), home_config_path()];
    candidates.iter().flatten().find_map(|path| read_config(path))
}

fn read_config(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("Loaded config from {}", path.display());
            Some(content)
        }
        Err(_) => None,
    }
}

fn home_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_config(&dir.path().join(CONFIG_FILE)).is_none());
    }

    #[test]
    fn test_read_config_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "default_search_term = \"Rust\"\n").unwrap();
        assert_eq!(
            read_config(&path).as_deref(),
            Some("default_search_term = \"Rust\"\n")
        );
    }
}
