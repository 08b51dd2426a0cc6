//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod help;
mod search;
mod status_bar;
mod stories;
mod story_list;

pub use app::AppState;
pub use help::HelpState;
pub use search::{SearchFocus, SearchState};
pub use status_bar::{StatusBarState, StatusKind, StatusMessage};
pub use stories::StoriesState;
pub use story_list::StoryListState;
