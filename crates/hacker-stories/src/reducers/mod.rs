//! Reducers
//!
//! Pure functions `(state, action) -> state`. The root reducer in
//! [`app_reducer`] routes each action to the sub-reducer owning that slice.

pub mod app_reducer;
pub mod fetch_reducer;
pub mod help_reducer;
pub mod search_reducer;
pub mod status_bar_reducer;
pub mod stories_reducer;
pub mod story_list_reducer;
