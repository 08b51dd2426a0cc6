//! Application configuration
//!
//! Configuration loaded from `.hacker-stories.toml`.

use hn_search_client::DEFAULT_API_BASE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration loaded from `.hacker-stories.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL every search URL is built on
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Search term used when nothing has been stored yet
    #[serde(default = "default_search_term")]
    pub default_search_term: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Override for the persistent store file (defaults to the config dir)
    #[serde(default)]
    pub store_path: Option<PathBuf>,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_search_term() -> String {
    "React".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            default_search_term: default_search_term(),
            request_timeout_secs: default_request_timeout_secs(),
            store_path: None,
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::parse(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Resolve where the persistent store lives
    pub fn resolve_store_path(&self) -> anyhow::Result<PathBuf> {
        match &self.store_path {
            Some(path) => Ok(path.clone()),
            None => crate::paths::default_store_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_base, "https://hn.algolia.com/api/v1");
        assert_eq!(config.default_search_term, "React");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.store_path.is_none());
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            default_search_term = "Rust"
        "#;
        let config = AppConfig::parse(toml).unwrap();
        assert_eq!(config.default_search_term, "Rust");
        // Other fields should use defaults
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_config_store_path_override() {
        let toml = r#"
            api_base = "http://localhost:8080"
            store_path = "/tmp/hacker-stories.toml"
            request_timeout_secs = 5
        "#;
        let config = AppConfig::parse(toml).unwrap();
        assert_eq!(config.api_base, "http://localhost:8080");
        assert_eq!(
            config.resolve_store_path().unwrap(),
            PathBuf::from("/tmp/hacker-stories.toml")
        );
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_config_rejects_wrong_types() {
        assert!(AppConfig::parse("request_timeout_secs = \"soon\"").is_err());
    }
}
