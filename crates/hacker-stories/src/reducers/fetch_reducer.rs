//! Fetch Reducer
//!
//! Gates request lifecycle actions by generation before they reach the
//! stories state machine.

use crate::actions::FetchAction;
use crate::reducers::stories_reducer::reduce_stories;
use crate::state::StoriesState;

/// Apply `action` unless it belongs to a superseded request
pub fn reduce_fetch(state: StoriesState, action: &FetchAction, latest_generation: u64) -> StoriesState {
    if action.generation() != latest_generation {
        log::debug!(
            "Discarding stale fetch result (generation {}, latest {})",
            action.generation(),
            latest_generation
        );
        return state;
    }
    reduce_stories(state, &action.to_stories_action())
}
