//! Search actions
//!
//! User intents around the search term plus the bookkeeping actions the
//! fetch controller emits when it issues a request.

use hn_search_client::SearchUrl;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// Character typed into the search input
    InputChar(char),
    /// Remove the last character of the search input
    Backspace,
    /// Clear the search input
    ClearInput,
    /// Replace the live search term (restored term, picked last search)
    SetTerm(String),

    /// Submit the live search term as a fresh search (page 0)
    Submit,
    /// Re-run one of the last searches (0-based index into the history bar)
    SelectLastSearch(usize),
    /// Load the next page of the current search
    More,

    /// A request URL was issued under `generation`
    Issued { url: SearchUrl, generation: u64 },

    /// Move keyboard focus to the search input
    FocusInput,
    /// Move keyboard focus to the story list
    FocusList,
}
