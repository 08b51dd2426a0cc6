//! Search Reducer
//!
//! Live search term, issued URL history and focus.

use crate::actions::SearchAction;
use crate::state::{SearchFocus, SearchState};

pub fn reduce_search(mut state: SearchState, action: &SearchAction) -> SearchState {
    match action {
        SearchAction::InputChar(c) => {
            state.term.push(*c);
        }
        SearchAction::Backspace => {
            state.term.pop();
        }
        SearchAction::ClearInput => {
            state.term.clear();
        }
        SearchAction::SetTerm(term) => {
            state.term = term.clone();
        }
        SearchAction::Issued { url, generation } => {
            state.urls.push(url.clone());
            state.latest_generation = *generation;
        }
        SearchAction::FocusInput => {
            state.focus = SearchFocus::Input;
        }
        SearchAction::FocusList => {
            state.focus = SearchFocus::List;
        }
        // Intents, handled by the search middleware
        SearchAction::Submit | SearchAction::SelectLastSearch(_) | SearchAction::More => {}
    }
    state
}
