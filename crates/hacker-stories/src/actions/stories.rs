//! Stories actions
//!
//! The four transitions of the stories state machine.

use hn_search_client::Story;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoriesAction {
    /// A request is about to be issued
    FetchInit,
    /// A page of results arrived; page 0 replaces, any other page appends
    FetchSuccess { list: Vec<Story>, page: u32 },
    /// The request failed (transport, status or decoding)
    FetchFailure,
    /// Dismiss a story (matched by object id)
    RemoveStory(Story),
}
