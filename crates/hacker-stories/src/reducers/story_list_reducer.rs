//! Story List Reducer
//!
//! Cursor movement and sort selection. The cursor indexes the sorted view,
//! wraps around at both ends and is clamped to the number of stories.

use crate::actions::StoryListAction;
use crate::state::StoryListState;

pub fn reduce_story_list(
    mut state: StoryListState,
    action: &StoryListAction,
    len: usize,
) -> StoryListState {
    match action {
        StoryListAction::NavigateNext => {
            if len > 0 {
                state.selected = (state.selected + 1) % len;
            }
        }
        StoryListAction::NavigatePrevious => {
            state.selected = if state.selected == 0 {
                len.saturating_sub(1)
            } else {
                state.selected - 1
            };
        }
        StoryListAction::NavigateToTop => {
            state.selected = 0;
        }
        StoryListAction::NavigateToBottom => {
            state.selected = len.saturating_sub(1);
        }
        StoryListAction::Sort(key) => {
            state.sort = state.sort.select(*key);
            state.columns = state.columns.toggle(*key);
        }
        // Side effect only, handled by the browser middleware
        StoryListAction::OpenUrl(_) => {}
    }
    state.clamp(len);
    state
}
