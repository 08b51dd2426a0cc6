//! Screens of the app
//!
//! The search screen sits at the bottom of the view stack, the help overlay
//! is pushed on top of it. Views hold no state of their own; they read
//! `AppState` and map generic input onto their domain actions.

use crate::actions::{Action, ContextAction, NavigationAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use ratatui::{layout::Rect, Frame};

pub mod help_view;
pub mod search_view;
pub mod status_bar;

pub use help_view::HelpView;
pub use search_view::SearchView;

/// Compared to tell whether a pushed view is already on top
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Search,
    Help,
}

/// An entry of the view stack. Views sit in the shared state and inside
/// `GlobalAction::PushView`, hence object safety plus `Send + Sync`.
pub trait View: std::fmt::Debug + Send + Sync {
    fn view_id(&self) -> ViewId;

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);

    /// Decides how the keyboard middleware routes keys, may change with focus
    fn capabilities(&self, state: &AppState) -> PanelCapabilities;

    fn clone_box(&self) -> Box<dyn View>;

    /// j/k, arrows, gg/G as this view understands them
    fn translate_navigation(&self, _nav: NavigationAction, _state: &AppState) -> Option<Action> {
        None
    }

    /// Editing keys, only sent while `TEXT_INPUT` is advertised
    fn translate_text_input(&self, _input: &TextInputAction, _state: &AppState) -> Option<Action> {
        None
    }

    /// Enter / d on the item under the cursor
    fn translate_context_action(
        &self,
        _action: &ContextAction,
        _state: &AppState,
    ) -> Option<Action> {
        None
    }

    /// Keymap commands producing actions this rejects are skipped
    fn accepts_action(&self, action: &Action) -> bool;
}

impl Clone for Box<dyn View> {
    fn clone(&self) -> Box<dyn View> {
        self.clone_box()
    }
}

/// Overlays draw after, and so above, the views below them
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    for view in &state.view_stack {
        view.render(state, area, f);
    }
}
