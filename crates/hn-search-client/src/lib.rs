//! Hacker News search API client
//!
//! This crate provides a trait-based client for the Hacker News search API
//! hosted by Algolia, plus the small amount of URL plumbing the application
//! uses to remember what it asked for.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │          SearchClient trait          │
//! │  - search(&SearchUrl)                │
//! └──────────────────────────────────────┘
//!                    │
//!                    ▼
//!         ┌─────────────────────┐
//!         │    AlgoliaClient    │
//!         │  (reqwest, direct)  │
//!         └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use hn_search_client::{AlgoliaClient, SearchClient, SearchUrl};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), hn_search_client::SearchError> {
//! let client = AlgoliaClient::new(Duration::from_secs(30))?;
//! let url = SearchUrl::new("React", 0);
//! let response = client.search(&url).await?;
//! println!("{} stories", response.hits.len());
//! # Ok(())
//! # }
//! ```

pub mod algolia_client;
pub mod client;
pub mod error;
pub mod search_url;
pub mod types;

/// Default base of the Hacker News search API
pub const DEFAULT_API_BASE: &str = "https://hn.algolia.com/api/v1";

pub use algolia_client::AlgoliaClient;
pub use client::SearchClient;
pub use error::SearchError;
pub use search_url::SearchUrl;
pub use types::{SearchResponse, Story};
