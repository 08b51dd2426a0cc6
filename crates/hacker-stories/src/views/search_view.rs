//! Search View - the main screen
//!
//! Search input, last searches, the stories table with its footer and the
//! status bar. Keys go to the input or to the table depending on focus.

use crate::actions::{
    Action, ContextAction, NavigationAction, SearchAction, StoriesAction, StoryListAction,
    TextInputAction,
};
use crate::capabilities::PanelCapabilities;
use crate::domain_models::sorted_stories;
use crate::state::{AppState, SearchFocus};
use crate::view_models::{
    ListFooter, SearchPanelViewModel, StatusBarViewModel, StoriesTableViewModel, LOADING_NOTICE,
};
use crate::views::status_bar::StatusBarWidget;
use crate::views::{View, ViewId};
use hacker_stories_theme::Theme;
use hn_search_client::Story;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, BorderType, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

/// Discussion page for stories without an external link
const ITEM_URL: &str = "https://news.ycombinator.com/item?id=";

#[derive(Debug, Clone, Default)]
pub struct SearchView;

impl SearchView {
    pub fn new() -> Self {
        Self
    }

    /// The story under the cursor, as the table shows it
    fn focused_story<'a>(&self, state: &'a AppState) -> Option<&'a Story> {
        sorted_stories(&state.stories.data, state.story_list.sort)
            .get(state.story_list.selected)
            .copied()
    }
}

impl View for SearchView {
    fn view_id(&self) -> ViewId {
        ViewId::Search
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, state: &AppState) -> PanelCapabilities {
        match state.search.focus {
            SearchFocus::Input => PanelCapabilities::TEXT_INPUT,
            SearchFocus::List => {
                PanelCapabilities::VIM_NAVIGATION_BINDINGS | PanelCapabilities::ITEM_NAVIGATION
            }
        }
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction, state: &AppState) -> Option<Action> {
        if state.search.focus == SearchFocus::Input {
            // Tab / arrows leave the input
            return Some(Action::Search(SearchAction::FocusList));
        }
        let action = match nav {
            NavigationAction::Next => StoryListAction::NavigateNext,
            NavigationAction::Previous => StoryListAction::NavigatePrevious,
            NavigationAction::ToTop => StoryListAction::NavigateToTop,
            NavigationAction::ToBottom => StoryListAction::NavigateToBottom,
        };
        Some(Action::StoryList(action))
    }

    fn translate_text_input(&self, input: &TextInputAction, _state: &AppState) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => SearchAction::InputChar(*c),
            TextInputAction::Backspace => SearchAction::Backspace,
            TextInputAction::ClearLine => SearchAction::ClearInput,
            TextInputAction::Confirm => SearchAction::Submit,
            TextInputAction::Escape => SearchAction::FocusList,
        };
        Some(Action::Search(action))
    }

    fn translate_context_action(&self, action: &ContextAction, state: &AppState) -> Option<Action> {
        let story = self.focused_story(state)?;
        match action {
            ContextAction::Confirm => {
                let url = if story.url.is_empty() {
                    format!("{}{}", ITEM_URL, story.object_id)
                } else {
                    story.url.clone()
                };
                Some(Action::StoryList(StoryListAction::OpenUrl(url)))
            }
            ContextAction::Remove => Some(Action::Stories(StoriesAction::RemoveStory(
                story.clone(),
            ))),
        }
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::Navigate(_)
                | Action::TextInput(_)
                | Action::ViewContext(_)
                | Action::Search(_)
                | Action::StoryList(_)
                | Action::Stories(_)
                | Action::Global(_)
        )
    }
}

fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let panel = SearchPanelViewModel::from_state(state);
    let table = StoriesTableViewModel::from_state(state);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                                     // Title
            Constraint::Length(3),                                     // Search input
            Constraint::Length(1),                                     // Last searches
            Constraint::Length(if table.error.is_some() { 1 } else { 0 }), // Error notice
            Constraint::Min(0),                                        // Stories
            Constraint::Length(1),                                     // Footer
            Constraint::Length(1),                                     // Status bar
        ])
        .split(area);

    let title = Paragraph::new(Line::from(panel.title).bold())
        .style(theme.title())
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    render_search_input(&panel, theme, chunks[1], f);
    f.render_widget(last_searches_line(&panel, theme), chunks[2]);

    if let Some(error) = table.error {
        f.render_widget(Paragraph::new(error).style(theme.error_text()), chunks[3]);
    }

    render_stories_table(&table, theme, chunks[4], f);
    f.render_widget(footer_line(&table, theme), chunks[5]);

    let status_vm = StatusBarViewModel::from_state(state);
    f.render_widget(StatusBarWidget(&status_vm), chunks[6]);
}

fn render_search_input(vm: &SearchPanelViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let text = if vm.is_focused {
        format!("{}▏", vm.term)
    } else {
        vm.term.clone()
    };

    let mut block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.border(vm.is_focused))
        .title(" Search ");
    if !vm.is_focused {
        block = block.title(
            Line::from(vec![
                Span::styled(format!(" {}", vm.focus_hint), theme.key_hint()),
                Span::styled(" edit ", theme.faint()),
            ])
            .right_aligned(),
        );
    }

    let input = Paragraph::new(text).style(theme.input()).block(block);
    f.render_widget(input, area);
}

fn last_searches_line<'a>(vm: &'a SearchPanelViewModel, theme: &Theme) -> Line<'a> {
    if vm.last_searches.is_empty() {
        return Line::from(Span::styled(" No previous searches", theme.faint()));
    }

    let mut spans = vec![Span::styled(" Last searches: ", theme.faint())];
    for entry in &vm.last_searches {
        spans.push(Span::styled(format!("[{}] ", entry.key), theme.key_hint()));
        spans.push(Span::styled(entry.term.as_str(), theme.key_description()));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

fn render_stories_table(vm: &StoriesTableViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let header = Row::new(vm.columns.iter().map(|column| {
        Cell::from(column.label.clone()).style(theme.column_header(column.is_active))
    }))
    .style(theme.column_header(false))
    .height(1);

    let rows: Vec<Row> = vm
        .rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.title.clone()),
                Cell::from(row.author.clone()),
                Cell::from(format!("{:>8}", row.comments)),
                Cell::from(format!("{:>8}", row.points)),
            ])
            .style(row.style)
            .height(1)
        })
        .collect();

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.border(vm.is_focused))
        .title(format!(" Stories ({}) ", vm.rows.len()));

    let widths = [
        Constraint::Percentage(55), // Title
        Constraint::Percentage(20), // Author
        Constraint::Length(12),     // Comments
        Constraint::Length(10),     // Points
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(theme.cursor_row())
        .highlight_symbol("> ");

    let mut table_state = TableState::default();
    table_state.select(vm.selected);
    f.render_stateful_widget(table, area, &mut table_state);
}

fn footer_line<'a>(vm: &'a StoriesTableViewModel, theme: &Theme) -> Line<'a> {
    match &vm.footer {
        ListFooter::Loading => {
            Line::from(Span::styled(format!(" {}", LOADING_NOTICE), theme.loading_text()))
        }
        ListFooter::More { hint } => Line::from(vec![
            Span::styled(format!(" {}", hint), theme.key_hint()),
            Span::styled(" More  ", theme.key_description()),
            Span::styled("?", theme.key_hint()),
            Span::styled(" Help", theme.key_description()),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::SortKey;

    fn list_state() -> AppState {
        let mut state = AppState::default();
        state.search.focus = SearchFocus::List;
        state.stories.data = vec![
            Story::new("1", "https://b.example", "Beta", "x", 0, 0),
            Story::new("2", "https://a.example", "Alpha", "y", 0, 0),
        ];
        state
    }

    #[test]
    fn test_capabilities_follow_focus() {
        let view = SearchView::new();
        let mut state = AppState::default();
        assert!(view.capabilities(&state).accepts_text_input());

        state.search.focus = SearchFocus::List;
        assert!(!view.capabilities(&state).accepts_text_input());
    }

    #[test]
    fn test_focused_story_uses_sorted_order() {
        let mut state = list_state();
        state.story_list.sort = state.story_list.sort.select(SortKey::Title);

        let action = SearchView::new().translate_context_action(&ContextAction::Remove, &state);
        assert!(matches!(
            action,
            Some(Action::Stories(StoriesAction::RemoveStory(story))) if story.title == "Alpha"
        ));
    }

    #[test]
    fn test_context_actions_need_a_story() {
        let mut state = AppState::default();
        state.search.focus = SearchFocus::List;
        let action = SearchView::new().translate_context_action(&ContextAction::Confirm, &state);
        assert!(action.is_none());
    }

    #[test]
    fn test_escape_leaves_input() {
        let action =
            SearchView::new().translate_text_input(&TextInputAction::Escape, &AppState::default());
        assert!(matches!(action, Some(Action::Search(SearchAction::FocusList))));
    }
}
