use crate::actions::{Action, FetchAction, GlobalAction};
use crate::reducers::fetch_reducer::reduce_fetch;
use crate::reducers::help_reducer::reduce_help;
use crate::reducers::search_reducer::reduce_search;
use crate::reducers::status_bar_reducer::reduce_status_bar;
use crate::reducers::stories_reducer::reduce_stories;
use crate::reducers::story_list_reducer::reduce_story_list;
use crate::state::AppState;
use crate::view_models::help_line_count;

/// Root reducer, hands each action to the reducer of its state slice
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(global) => {
            state = reduce_global(state, global);
        }
        Action::Search(search) => {
            state.search = reduce_search(state.search, search);
        }
        Action::Fetch(fetch) => {
            let latest = state.search.latest_generation;
            state.stories = reduce_fetch(state.stories, fetch, latest);

            // A fresh result set starts at the top
            if let FetchAction::Completed {
                generation, page: 0, ..
            } = fetch
            {
                if *generation == latest {
                    state.story_list.selected = 0;
                }
            }
            state.story_list.clamp(state.stories.data.len());
        }
        Action::Stories(stories) => {
            state.stories = reduce_stories(state.stories, stories);
            state.story_list.clamp(state.stories.data.len());
        }
        Action::StoryList(list) => {
            let len = state.stories.data.len();
            state.story_list = reduce_story_list(state.story_list, list, len);
        }
        Action::Help(help) => {
            let max_scroll = help_line_count(&state.keymap).saturating_sub(1);
            state.help = reduce_help(state.help, help, max_scroll);
        }
        Action::StatusBar(status) => {
            state.status_bar = reduce_status_bar(state.status_bar, status);
        }
        // Translated or consumed by middleware before reaching the store
        Action::Navigate(_)
        | Action::TextInput(_)
        | Action::ViewContext(_)
        | Action::Bootstrap(_) => {}
    }
    state
}

fn reduce_global(mut state: AppState, action: &GlobalAction) -> AppState {
    match action {
        GlobalAction::Quit => {
            state.running = false;
        }
        GlobalAction::PushView(new_view) => {
            // Pushing the view that is already on top closes it (toggle)
            let is_duplicate = state
                .view_stack
                .last()
                .map(|top| top.view_id() == new_view.view_id())
                .unwrap_or(false);

            if is_duplicate {
                log::debug!(
                    "Popping view from the stack, it is on top already: {:?}",
                    new_view.view_id()
                );
                state.view_stack.pop();
            } else {
                log::debug!("Pushing view onto stack: {:?}", new_view.view_id());
                state.help.scroll = 0;
                state.view_stack.push(new_view.clone());
            }
        }
        GlobalAction::Close => {
            if state.view_stack.len() > 1 {
                let popped = state.view_stack.pop();
                log::debug!("Closed view: {:?}", popped.map(|v| v.view_id()));
            } else {
                log::debug!("Closing last view - quitting application");
                state.running = false;
            }
        }
        GlobalAction::KeyPressed(_) => {}
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{SearchAction, StoriesAction, StoryListAction};
    use crate::views::{HelpView, ViewId};
    use hn_search_client::{SearchUrl, Story};
    use pretty_assertions::assert_eq;

    fn story(id: &str, title: &str) -> Story {
        Story::new(id, format!("https://example.com/{id}"), title, "author", 1, 1)
    }

    fn issue(state: AppState, term: &str, page: u32, generation: u64) -> AppState {
        let state = reduce(
            state,
            &Action::Search(SearchAction::Issued {
                url: SearchUrl::new(term, page),
                generation,
            }),
        );
        reduce(state, &Action::Fetch(FetchAction::Started { generation }))
    }

    fn complete(state: AppState, generation: u64, stories: Vec<Story>, page: u32) -> AppState {
        reduce(
            state,
            &Action::Fetch(FetchAction::Completed {
                generation,
                stories,
                page,
            }),
        )
    }

    fn titles(state: &AppState) -> Vec<String> {
        state.stories.data.iter().map(|s| s.title.clone()).collect()
    }

    #[test]
    fn test_search_then_dismiss() {
        let state = issue(AppState::default(), "React", 0, 1);
        assert!(state.stories.is_loading);

        let state = complete(state, 1, vec![story("0", "React"), story("1", "Redux")], 0);
        assert_eq!(titles(&state), vec!["React", "Redux"]);
        assert!(!state.stories.is_loading);

        let state = reduce(
            state,
            &Action::Stories(StoriesAction::RemoveStory(story("0", "React"))),
        );
        assert_eq!(titles(&state), vec!["Redux"]);
    }

    #[test]
    fn test_more_appends_next_page() {
        let state = issue(AppState::default(), "React", 0, 1);
        let state = complete(state, 1, vec![story("0", "A"), story("1", "B")], 0);
        let state = issue(state, "React", 1, 2);
        let state = complete(state, 2, vec![story("2", "C")], 1);

        assert_eq!(titles(&state), vec!["A", "B", "C"]);
        assert_eq!(state.stories.page, 1);
    }

    #[test]
    fn test_superseded_response_is_ignored() {
        let state = issue(AppState::default(), "React", 0, 1);
        let state = issue(state, "JS", 0, 2);

        let state = complete(state, 2, vec![story("9", "JS")], 0);
        let state = complete(state, 1, vec![story("0", "React")], 0);

        assert_eq!(titles(&state), vec!["JS"]);
        assert!(!state.stories.is_loading);
        assert!(!state.stories.is_error);
    }

    #[test]
    fn test_superseded_failure_is_ignored() {
        let state = issue(AppState::default(), "React", 0, 1);
        let state = issue(state, "JS", 0, 2);
        let state = reduce(
            state,
            &Action::Fetch(FetchAction::Failed {
                generation: 1,
                error: "timeout".to_string(),
            }),
        );

        assert!(state.stories.is_loading);
        assert!(!state.stories.is_error);
    }

    #[test]
    fn test_failed_fetch_keeps_stories() {
        let state = issue(AppState::default(), "React", 0, 1);
        let state = complete(state, 1, vec![story("0", "A")], 0);
        let state = issue(state, "React", 1, 2);
        let state = reduce(
            state,
            &Action::Fetch(FetchAction::Failed {
                generation: 2,
                error: "HTTP 500".to_string(),
            }),
        );

        assert!(state.stories.is_error);
        assert_eq!(titles(&state), vec!["A"]);
    }

    #[test]
    fn test_cursor_follows_shrinking_list() {
        let state = issue(AppState::default(), "React", 0, 1);
        let state = complete(state, 1, vec![story("0", "A"), story("1", "B")], 0);
        let state = reduce(state, &Action::StoryList(StoryListAction::NavigateToBottom));
        assert_eq!(state.story_list.selected, 1);

        let state = reduce(
            state,
            &Action::Stories(StoriesAction::RemoveStory(story("1", "B"))),
        );
        assert_eq!(state.story_list.selected, 0);
    }

    #[test]
    fn test_help_view_toggles() {
        let state = AppState::default();
        let push = Action::Global(GlobalAction::PushView(Box::new(HelpView::new())));

        let state = reduce(state, &push);
        assert_eq!(state.active_view().map(|v| v.view_id()), Some(ViewId::Help));

        let state = reduce(state, &push);
        assert_eq!(state.active_view().map(|v| v.view_id()), Some(ViewId::Search));
        assert!(state.running);
    }

    #[test]
    fn test_close_last_view_stops_running() {
        let state = reduce(AppState::default(), &Action::Global(GlobalAction::Close));
        assert!(!state.running);
    }
}
