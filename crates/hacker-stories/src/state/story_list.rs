//! Story List State

use crate::domain_models::{ColumnToggle, SortState};

/// Cursor and sorting of the story table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoryListState {
    /// Cursor position in the sorted view
    pub selected: usize,
    pub sort: SortState,
    pub columns: ColumnToggle,
}

impl StoryListState {
    /// Keep the cursor inside a list of `len` stories
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}
