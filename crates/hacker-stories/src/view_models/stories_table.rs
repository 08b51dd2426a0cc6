//! View model for the stories table
//!
//! The rows are the sorted view over the loaded stories, recomputed on
//! every render.

use crate::command_id::CommandId;
use crate::domain_models::{sorted_stories, SortKey};
use crate::state::{AppState, SearchFocus};
use ratatui::style::Style;

pub const ERROR_NOTICE: &str = "Something went wrong ...";
pub const LOADING_NOTICE: &str = "...Loading";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    /// Label with sort indicator, e.g. "Points ▼"
    pub label: String,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct StoryRow {
    pub title: String,
    pub author: String,
    pub comments: String,
    pub points: String,
    /// Alternating row background
    pub style: Style,
}

/// What the line under the table shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListFooter {
    Loading,
    More { hint: String },
}

#[derive(Debug, Clone)]
pub struct StoriesTableViewModel {
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<StoryRow>,
    /// Highlighted row, only while the list has focus
    pub selected: Option<usize>,
    pub error: Option<&'static str>,
    pub footer: ListFooter,
    pub is_focused: bool,
}

impl StoriesTableViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let list = &state.story_list;

        let columns = SortKey::columns()
            .into_iter()
            .map(|key| {
                let is_active = list.columns.is_active(key);
                let indicator = if is_active { "▼" } else { "▲" };
                ColumnHeader {
                    label: format!("{} {}", key, indicator),
                    is_active,
                }
            })
            .collect();

        let rows: Vec<StoryRow> = sorted_stories(&state.stories.data, list.sort)
            .into_iter()
            .enumerate()
            .map(|(i, story)| StoryRow {
                title: story.title.clone(),
                author: story.author.clone(),
                comments: story.num_comments.to_string(),
                points: story.points.to_string(),
                style: theme.story_row(i),
            })
            .collect();

        let is_focused = state.search.focus == SearchFocus::List;
        let selected = (is_focused && !rows.is_empty())
            .then(|| list.selected.min(rows.len() - 1));

        let footer = if state.stories.is_loading {
            ListFooter::Loading
        } else {
            ListFooter::More {
                hint: state
                    .keymap
                    .compact_hint_for_command(CommandId::SearchMore)
                    .unwrap_or_else(|| "m".to_string()),
            }
        };

        Self {
            columns,
            rows,
            selected,
            error: state.stories.is_error.then_some(ERROR_NOTICE),
            footer,
            is_focused,
        }
    }
}
