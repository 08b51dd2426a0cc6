//! Search client trait
//!
//! Defines the `SearchClient` trait the application talks to. The real
//! implementation hits the network; tests substitute scripted clients.

use crate::error::SearchError;
use crate::search_url::SearchUrl;
use crate::types::SearchResponse;
use async_trait::async_trait;

/// Hacker News search client
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a single client can be shared
/// between concurrently running fetch tasks.
///
/// # Example
///
/// ```rust,ignore
/// use hn_search_client::{SearchClient, SearchUrl, Story};
///
/// async fn first_page(client: &dyn SearchClient) -> Vec<Story> {
///     match client.search(&SearchUrl::new("rust", 0)).await {
///         Ok(response) => response.hits,
///         Err(_) => Vec::new(),
///     }
/// }
/// ```
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Execute the search described by `url`
    ///
    /// Returns the decoded response body, or an error for any transport,
    /// status or decoding failure.
    async fn search(&self, url: &SearchUrl) -> Result<SearchResponse, SearchError>;
}
