//! The whole application state, one field per concern

use hacker_stories_config::AppConfig;
use hacker_stories_theme::Theme;

use crate::keymap::{default_keymap, Keymap};
use crate::views::{SearchView, View};

use super::{HelpState, SearchState, StatusBarState, StoriesState, StoryListState};

#[derive(Clone)]
pub struct AppState {
    pub running: bool,
    /// Search screen first, overlays after it; the last entry gets the keys
    pub view_stack: Vec<Box<dyn View>>,
    pub search: SearchState,
    pub stories: StoriesState,
    pub story_list: StoryListState,
    pub help: HelpState,
    pub status_bar: StatusBarState,
    pub theme: Theme,
    pub keymap: Keymap,
    pub app_config: AppConfig,
}

impl AppState {
    pub fn new(app_config: AppConfig) -> Self {
        Self {
            running: true,
            view_stack: vec![Box::new(SearchView::new())],
            search: SearchState::default(),
            stories: StoriesState::default(),
            story_list: StoryListState::default(),
            help: HelpState::default(),
            status_bar: StatusBarState::default(),
            theme: Theme::default(),
            keymap: default_keymap(),
            app_config,
        }
    }

    /// The view receiving keyboard input
    pub fn active_view(&self) -> Option<&dyn View> {
        self.view_stack.last().map(|view| view.as_ref())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

/// Summarized, a full dump of the stories would drown the log
impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("running", &self.running)
            .field("view_stack", &format!("{} views", self.view_stack.len()))
            .field("search", &self.search)
            .field("stories", &format!("{} stories", self.stories.data.len()))
            .field("story_list", &self.story_list)
            .field("help", &self.help)
            .field("status_bar", &self.status_bar.latest())
            .field("theme", &"<theme>")
            .field("app_config", &self.app_config)
            .finish()
    }
}
