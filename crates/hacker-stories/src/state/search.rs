//! Search State

use hn_search_client::SearchUrl;

use crate::domain_models::last_searches;

/// Which part of the search view receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchFocus {
    #[default]
    Input,
    List,
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Live (uncommitted) search term
    pub term: String,
    /// Every issued request URL, oldest first (append-only)
    pub urls: Vec<SearchUrl>,
    /// Generation of the most recently issued URL (0 before the first request)
    pub latest_generation: u64,
    pub focus: SearchFocus,
}

impl SearchState {
    pub fn last_url(&self) -> Option<&SearchUrl> {
        self.urls.last()
    }

    /// Prior distinct searches for the history bar
    pub fn last_searches(&self) -> Vec<String> {
        last_searches(&self.urls)
    }
}
