//! View models
//!
//! Pre-computed, display-ready data derived from `AppState`. Views only lay
//! these out.

pub mod help;
pub mod search_panel;
pub mod status_bar;
pub mod stories_table;

pub use help::{help_line_count, HelpViewModel};
pub use search_panel::SearchPanelViewModel;
pub use status_bar::StatusBarViewModel;
pub use stories_table::{ListFooter, StoriesTableViewModel, LOADING_NOTICE};
