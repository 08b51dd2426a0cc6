//! Command identifiers
//!
//! All commands as an enum for type-safe command references in keybindings
//! and the help view.

use crate::actions::{
    Action, ContextAction, GlobalAction, NavigationAction, SearchAction, StoryListAction,
};
use crate::domain_models::SortKey;
use crate::views::HelpView;

/// Unique identifier for each command a key can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    // === Navigation ===
    NavigateNext,
    NavigatePrevious,
    /// Jump to the first item (gg in vim)
    NavigateToTop,
    /// Jump to the last item (G in vim)
    NavigateToBottom,

    // === Search ===
    /// Move focus to the search input
    SearchFocusInput,
    /// Load the next page of results
    SearchMore,
    LastSearch1,
    LastSearch2,
    LastSearch3,
    LastSearch4,
    LastSearch5,

    // === Sorting ===
    SortByTitle,
    SortByAuthor,
    SortByComments,
    SortByPoints,
    /// Back to arrival order
    SortReset,

    // === Stories ===
    /// Context dependent primary action (open story)
    Confirm,
    /// Dismiss the focused story
    RemoveStory,

    // === General ===
    HelpToggle,
    /// Close the current view/panel
    GlobalClose,
    GlobalQuit,
}

impl CommandId {
    /// Convert this command ID to an Action
    pub fn to_action(self) -> Action {
        match self {
            Self::NavigateNext => Action::Navigate(NavigationAction::Next),
            Self::NavigatePrevious => Action::Navigate(NavigationAction::Previous),
            Self::NavigateToTop => Action::Navigate(NavigationAction::ToTop),
            Self::NavigateToBottom => Action::Navigate(NavigationAction::ToBottom),

            Self::SearchFocusInput => Action::Search(SearchAction::FocusInput),
            Self::SearchMore => Action::Search(SearchAction::More),
            Self::LastSearch1 => Action::Search(SearchAction::SelectLastSearch(0)),
            Self::LastSearch2 => Action::Search(SearchAction::SelectLastSearch(1)),
            Self::LastSearch3 => Action::Search(SearchAction::SelectLastSearch(2)),
            Self::LastSearch4 => Action::Search(SearchAction::SelectLastSearch(3)),
            Self::LastSearch5 => Action::Search(SearchAction::SelectLastSearch(4)),

            Self::SortByTitle => Action::StoryList(StoryListAction::Sort(SortKey::Title)),
            Self::SortByAuthor => Action::StoryList(StoryListAction::Sort(SortKey::Author)),
            Self::SortByComments => Action::StoryList(StoryListAction::Sort(SortKey::Comments)),
            Self::SortByPoints => Action::StoryList(StoryListAction::Sort(SortKey::Points)),
            Self::SortReset => Action::StoryList(StoryListAction::Sort(SortKey::None)),

            Self::Confirm => Action::ViewContext(ContextAction::Confirm),
            Self::RemoveStory => Action::ViewContext(ContextAction::Remove),

            Self::HelpToggle => Action::Global(GlobalAction::PushView(Box::new(HelpView::new()))),
            Self::GlobalClose => Action::Global(GlobalAction::Close),
            Self::GlobalQuit => Action::Global(GlobalAction::Quit),
        }
    }

    /// Description shown in the help panel
    pub fn description(&self) -> &'static str {
        match self {
            Self::NavigateNext => "Move to the next story",
            Self::NavigatePrevious => "Move to the previous story",
            Self::NavigateToTop => "Jump to the first story",
            Self::NavigateToBottom => "Jump to the last story",

            Self::SearchFocusInput => "Edit the search term",
            Self::SearchMore => "Load more stories",
            Self::LastSearch1 => "Repeat last search #1",
            Self::LastSearch2 => "Repeat last search #2",
            Self::LastSearch3 => "Repeat last search #3",
            Self::LastSearch4 => "Repeat last search #4",
            Self::LastSearch5 => "Repeat last search #5",

            Self::SortByTitle => "Sort by title (again to reverse)",
            Self::SortByAuthor => "Sort by author (again to reverse)",
            Self::SortByComments => "Sort by comments (again to reverse)",
            Self::SortByPoints => "Sort by points (again to reverse)",
            Self::SortReset => "Show stories in arrival order",

            Self::Confirm => "Open the story in your browser",
            Self::RemoveStory => "Dismiss the story",

            Self::HelpToggle => "Show or hide this help",
            Self::GlobalClose => "Close the current view",
            Self::GlobalQuit => "Exit the application",
        }
    }

    /// Category for grouping in the help panel
    pub fn category(&self) -> &'static str {
        match self {
            Self::NavigateNext
            | Self::NavigatePrevious
            | Self::NavigateToTop
            | Self::NavigateToBottom => "Navigation",

            Self::SearchFocusInput
            | Self::SearchMore
            | Self::LastSearch1
            | Self::LastSearch2
            | Self::LastSearch3
            | Self::LastSearch4
            | Self::LastSearch5 => "Search",

            Self::SortByTitle
            | Self::SortByAuthor
            | Self::SortByComments
            | Self::SortByPoints
            | Self::SortReset => "Sort",

            Self::Confirm | Self::RemoveStory => "Stories",

            Self::HelpToggle | Self::GlobalClose | Self::GlobalQuit => "General",
        }
    }
}
