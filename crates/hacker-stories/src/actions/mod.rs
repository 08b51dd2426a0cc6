//! Everything that can happen in the app
//!
//! Input arrives as generic actions (`Navigate`, `TextInput`, `ViewContext`)
//! that the view on top rewrites into domain actions. Domain actions go
//! straight to their middleware and reducer.

pub mod context_action;
pub mod global;
pub mod navigation;
pub mod text_input;

pub mod bootstrap;
pub mod fetch;
pub mod help;
pub mod search;
pub mod status_bar;
pub mod stories;
pub mod story_list;

pub use bootstrap::BootstrapAction;
pub use context_action::ContextAction;
pub use fetch::FetchAction;
pub use global::GlobalAction;
pub use help::HelpAction;
pub use navigation::NavigationAction;
pub use search::SearchAction;
pub use status_bar::StatusBarAction;
pub use stories::StoriesAction;
pub use story_list::StoryListAction;
pub use text_input::TextInputAction;

#[derive(Debug, Clone)]
pub enum Action {
    // Rewritten by the active view
    Navigate(NavigationAction),
    TextInput(TextInputAction),
    ViewContext(ContextAction),

    Global(GlobalAction),

    Bootstrap(BootstrapAction),
    /// Term editing, focus and search intents
    Search(SearchAction),
    /// Request lifecycle, tagged with the request generation
    Fetch(FetchAction),
    Stories(StoriesAction),
    StoryList(StoryListAction),
    Help(HelpAction),
    StatusBar(StatusBarAction),
}
