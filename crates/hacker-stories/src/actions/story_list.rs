//! Story list actions
//!
//! Cursor movement, client-side sorting and opening stories.

use crate::domain_models::SortKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryListAction {
    NavigateNext,
    NavigatePrevious,
    NavigateToTop,
    NavigateToBottom,
    /// Sort by a column (selecting the same column again reverses)
    Sort(SortKey),
    /// Open a story link in the system browser
    OpenUrl(String),
}
