//! reqwest-based search client
//!
//! Direct implementation of the `SearchClient` trait against the Algolia
//! hosted Hacker News API. No caching, no retries: a failed request is
//! reported once and the caller decides what to do.

use crate::client::SearchClient;
use crate::error::SearchError;
use crate::search_url::SearchUrl;
use crate::types::SearchResponse;
use async_trait::async_trait;
use log::debug;
use std::time::Duration;

const USER_AGENT: &str = concat!("hacker-stories/", env!("CARGO_PKG_VERSION"));

/// Search client that makes real HTTP calls
#[derive(Debug, Clone)]
pub struct AlgoliaClient {
    http: reqwest::Client,
}

impl AlgoliaClient {
    /// Create a client whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(SearchError::Client)?;
        Ok(Self { http })
    }
}

#[async_trait]
impl SearchClient for AlgoliaClient {
    async fn search(&self, url: &SearchUrl) -> Result<SearchResponse, SearchError> {
        debug!("Searching {}", url);

        // Let reqwest encode the term; the raw URL is kept verbatim for history
        let request = match url.page() {
            Some(page) => self.http.get(url.endpoint()).query(&[
                ("query", url.query_term().to_string()),
                ("page", page.to_string()),
            ]),
            None => self.http.get(url.as_str()),
        };

        let response = request.send().await.map_err(SearchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(SearchError::Transport)?;
        let decoded: SearchResponse =
            serde_json::from_slice(&body).map_err(|e| SearchError::Decode(e.to_string()))?;

        debug!(
            "Search for {:?} returned {} hits (page {}/{})",
            url.query_term(),
            decoded.hits.len(),
            decoded.page,
            decoded.nb_pages
        );
        Ok(decoded)
    }
}
