//! Help overlay listing every key binding

use crate::actions::{Action, HelpAction, NavigationAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::view_models::HelpViewModel;
use crate::views::{View, ViewId};
use hacker_stories_theme::Theme;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Default)]
pub struct HelpView;

impl HelpView {
    pub fn new() -> Self {
        Self
    }
}

impl View for HelpView {
    fn view_id(&self) -> ViewId {
        ViewId::Help
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::SCROLL_VERTICAL | PanelCapabilities::VIM_NAVIGATION_BINDINGS
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction, _state: &AppState) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next => HelpAction::ScrollDown,
            NavigationAction::Previous => HelpAction::ScrollUp,
            NavigationAction::ToTop => HelpAction::ScrollToTop,
            NavigationAction::ToBottom => HelpAction::ScrollToBottom,
        };
        Some(Action::Help(action))
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::Help(_) | Action::Navigate(_) | Action::Global(_)
        )
    }
}

/// Width of the key column
const KEY_COLUMN: usize = 16;

fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let vm = HelpViewModel::from_state(state);
    let popup = centered(area, 60, 80);

    // Dim whatever is underneath
    f.render_widget(
        Block::new().style(Style::new().bg(Color::Black).add_modifier(Modifier::DIM)),
        area,
    );
    f.render_widget(Clear, popup);

    let hints = Line::from(vec![
        Span::styled(format!(" {}", vm.scroll_hint), theme.key_hint()),
        Span::styled(" scroll  ", theme.faint()),
        Span::styled(vm.close_hint.as_str(), theme.key_hint()),
        Span::styled(" close ", theme.faint()),
    ]);

    let block = Block::bordered()
        .border_style(theme.border(true))
        .title(Line::from(vm.title).style(theme.title()).centered())
        .title_bottom(hints.centered());

    let scroll = u16::try_from(vm.scroll).unwrap_or(u16::MAX);
    let help = Paragraph::new(section_lines(&vm, theme))
        .block(block)
        .style(theme.surface())
        .scroll((scroll, 0));
    f.render_widget(help, popup);
}

/// `area` shrunk to the given percentages, centered on both axes
fn centered(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(height_percent)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(width_percent)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Heading, underline, one line per binding, blank separator
fn section_lines<'a>(vm: &'a HelpViewModel, theme: &Theme) -> Vec<Line<'a>> {
    vm.sections
        .iter()
        .flat_map(|section| {
            let underline = "─".repeat(section.category.chars().count());
            let heading = [
                Line::styled(format!("  {}", section.category), theme.section_header()),
                Line::styled(format!("  {}", underline), theme.faint()),
            ];
            let bindings = section.rows.iter().map(|row| {
                Line::from(vec![
                    Span::styled(format!("  {:<KEY_COLUMN$}", row.keys), theme.key_hint()),
                    Span::styled(row.description, theme.key_description()),
                ])
            });
            heading
                .into_iter()
                .chain(bindings)
                .chain(std::iter::once(Line::default()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_models::help_line_count;

    #[test]
    fn test_every_help_line_is_rendered() {
        let state = AppState::default();
        let vm = HelpViewModel::from_state(&state);
        let lines = section_lines(&vm, &state.theme);
        assert_eq!(lines.len(), help_line_count(&state.keymap));
    }

    #[test]
    fn test_navigation_scrolls() {
        let action = HelpView::new()
            .translate_navigation(NavigationAction::ToBottom, &AppState::default());
        assert!(matches!(action, Some(Action::Help(HelpAction::ScrollToBottom))));
    }

    #[test]
    fn test_popup_is_centered() {
        let popup = centered(Rect::new(0, 0, 100, 50), 60, 80);
        assert_eq!(popup, Rect::new(20, 5, 60, 40));
    }
}
