//! Stories Reducer
//!
//! The stories state machine. Pure: no I/O, no logging of its own.

use crate::actions::StoriesAction;
use crate::state::StoriesState;

/// Apply one stories transition
///
/// | Action | Transition |
/// |---|---|
/// | `FetchInit` | loading, error cleared, data kept |
/// | `FetchSuccess` page 0 | data replaced |
/// | `FetchSuccess` page n | data appended (known ids skipped) |
/// | `FetchFailure` | error, loading cleared, data kept |
/// | `RemoveStory` | every story with that id removed |
pub fn reduce_stories(mut state: StoriesState, action: &StoriesAction) -> StoriesState {
    match action {
        StoriesAction::FetchInit => {
            state.is_loading = true;
            state.is_error = false;
        }
        StoriesAction::FetchSuccess { list, page } => {
            state.is_loading = false;
            state.is_error = false;
            if *page == 0 {
                state.data = list.clone();
            } else {
                for story in list {
                    if !state.data.iter().any(|s| s.object_id == story.object_id) {
                        state.data.push(story.clone());
                    }
                }
            }
            state.page = *page;
        }
        StoriesAction::FetchFailure => {
            state.is_loading = false;
            state.is_error = true;
        }
        StoriesAction::RemoveStory(story) => {
            state.data.retain(|s| s.object_id != story.object_id);
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use hn_search_client::Story;
    use pretty_assertions::assert_eq;

    fn story(id: &str) -> Story {
        Story::new(id, format!("https://example.com/{id}"), format!("Story {id}"), "author", 1, 2)
    }

    fn loaded(ids: &[&str], page: u32) -> StoriesState {
        StoriesState {
            data: ids.iter().map(|id| story(id)).collect(),
            page,
            is_loading: false,
            is_error: false,
        }
    }

    fn states() -> Vec<StoriesState> {
        vec![
            StoriesState::default(),
            loaded(&["0", "1"], 0),
            loaded(&["0", "1", "2"], 3),
            StoriesState {
                is_error: true,
                ..loaded(&["5"], 1)
            },
            StoriesState {
                is_loading: true,
                ..loaded(&[], 0)
            },
        ]
    }

    #[test]
    fn test_remove_missing_story_is_noop() {
        for state in states() {
            let next = reduce_stories(state.clone(), &StoriesAction::RemoveStory(story("missing")));
            assert_eq!(next, state);
        }
    }

    #[test]
    fn test_remove_present_story() {
        for state in states().into_iter().filter(|s| !s.data.is_empty()) {
            let target = state.data[0].clone();
            let next = reduce_stories(state.clone(), &StoriesAction::RemoveStory(target.clone()));
            assert_eq!(next.data.len(), state.data.len() - 1);
            assert!(!next.data.contains(&target));
            assert_eq!(next.page, state.page);
            assert_eq!(next.is_loading, state.is_loading);
            assert_eq!(next.is_error, state.is_error);
        }
    }

    #[test]
    fn test_remove_matches_by_id_only() {
        let state = loaded(&["0", "1"], 0);
        let mut edited = story("1");
        edited.title = "Same id, different title".to_string();

        let next = reduce_stories(state, &StoriesAction::RemoveStory(edited));
        assert_eq!(next.data, vec![story("0")]);
    }

    #[test]
    fn test_fetch_init_sets_loading() {
        for state in states() {
            let next = reduce_stories(state.clone(), &StoriesAction::FetchInit);
            assert!(next.is_loading);
            assert!(!next.is_error);
            assert_eq!(next.data, state.data);
            assert_eq!(next.page, state.page);
        }
    }

    #[test]
    fn test_first_page_replaces() {
        let list = vec![story("7"), story("8")];
        for state in states() {
            let next = reduce_stories(
                state,
                &StoriesAction::FetchSuccess {
                    list: list.clone(),
                    page: 0,
                },
            );
            assert_eq!(next.data, list);
            assert_eq!(next.page, 0);
            assert!(!next.is_loading);
            assert!(!next.is_error);
        }
    }

    #[test]
    fn test_later_page_appends() {
        let list = vec![story("7"), story("8")];
        for state in states() {
            let mut expected = state.data.clone();
            expected.extend(list.clone());

            let next = reduce_stories(
                state,
                &StoriesAction::FetchSuccess {
                    list: list.clone(),
                    page: 4,
                },
            );
            assert_eq!(next.data, expected);
            assert_eq!(next.page, 4);
        }
    }

    #[test]
    fn test_append_skips_known_ids() {
        let state = loaded(&["0", "1"], 0);
        let next = reduce_stories(
            state,
            &StoriesAction::FetchSuccess {
                list: vec![story("1"), story("2")],
                page: 1,
            },
        );
        assert_eq!(next.data, vec![story("0"), story("1"), story("2")]);
    }

    #[test]
    fn test_failure_keeps_data() {
        for state in states() {
            let next = reduce_stories(state.clone(), &StoriesAction::FetchFailure);
            assert!(!next.is_loading);
            assert!(next.is_error);
            assert_eq!(next.data, state.data);
            assert_eq!(next.page, state.page);
        }
    }
}
