//! Stories State

use hn_search_client::Story;

/// Result set of the current search
///
/// Only ever changed through `reduce_stories`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoriesState {
    /// Stories in arrival order, unique by object id
    pub data: Vec<Story>,
    /// Last loaded page index
    pub page: u32,
    pub is_loading: bool,
    pub is_error: bool,
}
