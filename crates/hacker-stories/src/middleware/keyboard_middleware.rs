//! KeyboardMiddleware - translates keyboard events into context-aware actions
//!
//! ## Layer 1: Priority Keys
//! Ctrl+C and Esc work regardless of context.
//!
//! ## Layer 2: Capabilities
//! When the active view accepts text input (search input focused), printable
//! characters, Backspace, Enter and Tab go to text input instead of the keymap.
//!
//! ## Layer 3: Keymap + Gating
//! Look up the key in the keymap and dispatch the first bound command the
//! active view accepts.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::actions::{Action, GlobalAction, NavigationAction, TextInputAction};
use crate::dispatcher::Dispatcher;
use crate::keybindings::{KeyMatch, PendingKey};
use crate::middleware::Middleware;
use crate::state::AppState;

#[derive(Debug, Default)]
pub struct KeyboardMiddleware {
    /// First key of a two-key sequence
    pending_key: Option<PendingKey>,
}

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle_key(&mut self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        let view = state.active_view();
        let capabilities = view.map(|v| v.capabilities(state)).unwrap_or_default();

        // Layer 1
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("Layer 1: Ctrl+C - dispatching Quit");
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }

        if key.code == KeyCode::Esc {
            self.pending_key = None;
            if capabilities.accepts_text_input() {
                dispatcher.dispatch(Action::TextInput(TextInputAction::Escape));
            } else {
                dispatcher.dispatch(Action::Global(GlobalAction::Close));
            }
            return;
        }

        // Layer 2
        if capabilities.accepts_text_input() {
            self.pending_key = None;
            if let Some(input) = text_input_for(&key) {
                log::debug!("Layer 2: TEXT_INPUT - routing {:?}", input);
                dispatcher.dispatch(input);
                return;
            }
        }

        // Layer 3
        let commands = match state.keymap.match_key(&key, self.pending_key.as_ref()) {
            KeyMatch::Pending(first) => {
                log::debug!("Layer 3: waiting for second key after '{}'", first);
                self.pending_key = Some(PendingKey::new(first));
                return;
            }
            KeyMatch::Commands(commands) => commands,
            KeyMatch::NoMatch => Vec::new(),
        };
        self.pending_key = None;

        for command in commands {
            let action = command.to_action();
            match view {
                Some(view) if !view.accepts_action(&action) => {
                    log::debug!(
                        "Layer 3: {:?} rejected by view {:?}, trying next",
                        command,
                        view.view_id()
                    );
                }
                _ => {
                    log::debug!("Layer 3: dispatching {:?}", command);
                    dispatcher.dispatch(action);
                    return;
                }
            }
        }
    }
}

/// Text input action for `key`, if it is one
fn text_input_for(key: &KeyEvent) -> Option<Action> {
    let ctrl_or_alt = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    let action = match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::TextInput(TextInputAction::ClearLine)
        }
        KeyCode::Char(c) if !ctrl_or_alt => Action::TextInput(TextInputAction::Char(c)),
        KeyCode::Backspace if key.modifiers.contains(KeyModifiers::SUPER) => {
            Action::TextInput(TextInputAction::ClearLine)
        }
        KeyCode::Backspace => Action::TextInput(TextInputAction::Backspace),
        KeyCode::Enter => Action::TextInput(TextInputAction::Confirm),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
            Action::Navigate(NavigationAction::Previous)
        }
        KeyCode::Tab => Action::Navigate(NavigationAction::Next),
        KeyCode::BackTab => Action::Navigate(NavigationAction::Previous),
        _ => return None,
    };
    Some(action)
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            log::debug!("KeyboardMiddleware: key={:?}", key);
            self.handle_key(*key, state, dispatcher);
            // Raw keys never reach the reducers
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{SearchAction, StoryListAction};
    use crate::domain_models::SortKey;
    use crate::state::SearchFocus;
    use crate::views::{HelpView, ViewId};
    use std::sync::mpsc::{self, Receiver};

    fn press(code: KeyCode) -> Action {
        Action::Global(GlobalAction::KeyPressed(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn ctrl(c: char) -> Action {
        Action::Global(GlobalAction::KeyPressed(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::CONTROL,
        )))
    }

    fn list_state() -> AppState {
        let mut state = AppState::default();
        state.search.focus = SearchFocus::List;
        state
    }

    struct Keys {
        middleware: KeyboardMiddleware,
        dispatcher: Dispatcher,
        rx: Receiver<Action>,
    }

    impl Keys {
        fn new() -> Self {
            let (tx, rx) = mpsc::channel();
            Self {
                middleware: KeyboardMiddleware::new(),
                dispatcher: Dispatcher::new(tx),
                rx,
            }
        }

        fn press(&mut self, key: Action, state: &AppState) -> Option<Action> {
            assert!(!self.middleware.handle(&key, state, &self.dispatcher));
            self.rx.try_recv().ok()
        }
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let mut keys = Keys::new();
        for state in [AppState::default(), list_state()] {
            let action = keys.press(ctrl('c'), &state);
            assert!(matches!(action, Some(Action::Global(GlobalAction::Quit))));
        }
    }

    #[test]
    fn test_esc_depends_on_focus() {
        let mut keys = Keys::new();

        let action = keys.press(press(KeyCode::Esc), &AppState::default());
        assert!(matches!(action, Some(Action::TextInput(TextInputAction::Escape))));

        let action = keys.press(press(KeyCode::Esc), &list_state());
        assert!(matches!(action, Some(Action::Global(GlobalAction::Close))));
    }

    #[test]
    fn test_input_focus_types_characters() {
        let mut keys = Keys::new();
        let state = AppState::default();

        // 'j' is a navigation binding but goes to the input here
        let action = keys.press(press(KeyCode::Char('j')), &state);
        assert!(matches!(action, Some(Action::TextInput(TextInputAction::Char('j')))));

        let action = keys.press(ctrl('u'), &state);
        assert!(matches!(action, Some(Action::TextInput(TextInputAction::ClearLine))));

        let action = keys.press(press(KeyCode::Enter), &state);
        assert!(matches!(action, Some(Action::TextInput(TextInputAction::Confirm))));

        let action = keys.press(press(KeyCode::Tab), &state);
        assert!(matches!(action, Some(Action::Navigate(NavigationAction::Next))));
    }

    #[test]
    fn test_list_focus_uses_keymap() {
        let mut keys = Keys::new();
        let state = list_state();

        let action = keys.press(press(KeyCode::Char('j')), &state);
        assert!(matches!(action, Some(Action::Navigate(NavigationAction::Next))));

        let action = keys.press(press(KeyCode::Char('m')), &state);
        assert!(matches!(action, Some(Action::Search(SearchAction::More))));

        let action = keys.press(press(KeyCode::Char('2')), &state);
        assert!(matches!(
            action,
            Some(Action::Search(SearchAction::SelectLastSearch(1)))
        ));

        let action = keys.press(press(KeyCode::Char('/')), &state);
        assert!(matches!(action, Some(Action::Search(SearchAction::FocusInput))));
    }

    #[test]
    fn test_sequences() {
        let mut keys = Keys::new();
        let state = list_state();

        assert!(keys.press(press(KeyCode::Char('g')), &state).is_none());
        let action = keys.press(press(KeyCode::Char('g')), &state);
        assert!(matches!(action, Some(Action::Navigate(NavigationAction::ToTop))));

        assert!(keys.press(press(KeyCode::Char('s')), &state).is_none());
        let action = keys.press(press(KeyCode::Char('p')), &state);
        assert!(matches!(
            action,
            Some(Action::StoryList(StoryListAction::Sort(SortKey::Points)))
        ));
    }

    #[test]
    fn test_help_view_gates_search_commands() {
        let mut keys = Keys::new();
        let mut state = list_state();
        state.view_stack.push(Box::new(HelpView::new()));

        // Last search shortcuts do not leak through the help overlay
        assert!(keys.press(press(KeyCode::Char('1')), &state).is_none());

        let action = keys.press(press(KeyCode::Char('?')), &state);
        match action {
            Some(Action::Global(GlobalAction::PushView(view))) => {
                assert_eq!(view.view_id(), ViewId::Help)
            }
            other => panic!("expected help toggle, got {:?}", other),
        }
    }
}
