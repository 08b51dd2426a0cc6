//! Translation Middleware
//!
//! Turns the generic actions (`Navigate`, `TextInput`, `ViewContext`) into
//! the domain actions of the active view. The translated action is
//! dispatched so it passes the full middleware chain (e.g. `Submit` reaching
//! the search middleware).

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

#[derive(Debug, Default)]
pub struct TranslationMiddleware;

impl TranslationMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for TranslationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Some(view) = state.active_view() else {
            return true;
        };

        let translated = match action {
            Action::Navigate(nav) => view.translate_navigation(*nav, state),
            Action::TextInput(input) => view.translate_text_input(input, state),
            Action::ViewContext(context) => view.translate_context_action(context, state),
            _ => return true,
        };

        match translated {
            Some(translated) => {
                log::debug!(
                    "TranslationMiddleware: {:?} -> {:?} (view {:?})",
                    action,
                    translated,
                    view.view_id()
                );
                dispatcher.dispatch(translated);
            }
            None => {
                log::debug!(
                    "{:?} not handled by active view {:?}",
                    action,
                    view.view_id()
                );
            }
        }

        // Generic actions never reach the reducers
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{
        ContextAction, NavigationAction, SearchAction, StoriesAction, StoryListAction,
        TextInputAction,
    };
    use crate::state::SearchFocus;
    use hn_search_client::Story;
    use std::sync::mpsc;

    fn translate(action: Action, state: &AppState) -> Option<Action> {
        let (tx, rx) = mpsc::channel();
        let consumed = !TranslationMiddleware::new().handle(&action, state, &Dispatcher::new(tx));
        assert!(consumed);
        rx.try_recv().ok()
    }

    #[test]
    fn test_input_focus_translates_typing() {
        let state = AppState::default();

        let action = translate(Action::TextInput(TextInputAction::Char('r')), &state);
        assert!(matches!(action, Some(Action::Search(SearchAction::InputChar('r')))));

        let action = translate(Action::TextInput(TextInputAction::Confirm), &state);
        assert!(matches!(action, Some(Action::Search(SearchAction::Submit))));

        let action = translate(Action::Navigate(NavigationAction::Next), &state);
        assert!(matches!(action, Some(Action::Search(SearchAction::FocusList))));
    }

    #[test]
    fn test_list_focus_translates_to_story_actions() {
        let mut state = AppState::default();
        state.search.focus = SearchFocus::List;
        state.stories.data = vec![
            Story::new("1", "https://a.example", "A", "x", 0, 0),
            Story::new("2", "", "Ask HN", "y", 0, 0),
        ];
        state.story_list.selected = 1;

        let action = translate(Action::Navigate(NavigationAction::ToTop), &state);
        assert!(matches!(
            action,
            Some(Action::StoryList(StoryListAction::NavigateToTop))
        ));

        let action = translate(Action::ViewContext(ContextAction::Confirm), &state);
        assert!(matches!(
            action,
            Some(Action::StoryList(StoryListAction::OpenUrl(url)))
                if url == "https://news.ycombinator.com/item?id=2"
        ));

        let action = translate(Action::ViewContext(ContextAction::Remove), &state);
        assert!(matches!(
            action,
            Some(Action::Stories(StoriesAction::RemoveStory(story))) if story.object_id == "2"
        ));
    }

    #[test]
    fn test_other_actions_pass_through() {
        let (tx, _rx) = mpsc::channel();
        let passed = TranslationMiddleware::new().handle(
            &Action::Search(SearchAction::More),
            &AppState::default(),
            &Dispatcher::new(tx),
        );
        assert!(passed);
    }
}
