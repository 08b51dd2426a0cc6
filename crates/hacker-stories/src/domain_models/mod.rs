//! Domain models
//!
//! Pure helpers over the canonical state: search history derived from the
//! issued URLs and the client-side sorted view of the story list.

pub mod search_history;
pub mod sort;

pub use search_history::last_searches;
pub use sort::{sorted_stories, ColumnToggle, SortKey, SortState};
