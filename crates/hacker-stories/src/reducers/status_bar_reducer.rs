//! Status Bar Reducer

use crate::actions::StatusBarAction;
use crate::state::StatusBarState;

pub fn reduce_status_bar(mut state: StatusBarState, action: &StatusBarAction) -> StatusBarState {
    match action {
        StatusBarAction::Show(message) => state.push(message.clone()),
    }
    state
}
