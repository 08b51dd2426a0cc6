//! Search input and last-searches bar

use crate::command_id::CommandId;
use crate::state::{AppState, SearchFocus};

/// One entry of the last-searches bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastSearchEntry {
    /// Key that re-runs the search ("1".."5")
    pub key: String,
    pub term: String,
}

#[derive(Debug, Clone)]
pub struct SearchPanelViewModel {
    pub title: &'static str,
    pub term: String,
    pub is_focused: bool,
    /// Oldest first
    pub last_searches: Vec<LastSearchEntry>,
    /// Hint for moving focus back to the input
    pub focus_hint: String,
}

impl SearchPanelViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let last_searches = state
            .search
            .last_searches()
            .into_iter()
            .enumerate()
            .map(|(i, term)| LastSearchEntry {
                key: (i + 1).to_string(),
                term,
            })
            .collect();

        Self {
            title: "My Hacker Stories",
            term: state.search.term.clone(),
            is_focused: state.search.focus == SearchFocus::Input,
            last_searches,
            focus_hint: state
                .keymap
                .compact_hint_for_command(CommandId::SearchFocusInput)
                .unwrap_or_else(|| "/".to_string()),
        }
    }
}
