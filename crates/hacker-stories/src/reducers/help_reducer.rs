//! Help Panel Reducer

use crate::actions::HelpAction;
use crate::state::HelpState;

/// Scroll the help panel, never past `max_scroll`
pub fn reduce_help(mut state: HelpState, action: &HelpAction, max_scroll: usize) -> HelpState {
    state.scroll = match action {
        HelpAction::ScrollDown => (state.scroll + 1).min(max_scroll),
        HelpAction::ScrollUp => state.scroll.saturating_sub(1),
        HelpAction::ScrollToTop => 0,
        HelpAction::ScrollToBottom => max_scroll,
    };
    state
}
