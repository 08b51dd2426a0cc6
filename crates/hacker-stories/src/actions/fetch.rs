//! Fetch lifecycle actions
//!
//! Emitted by the fetch controller and tagged with the generation of the
//! request they belong to. Only the latest generation reaches the stories
//! state machine.

use hn_search_client::Story;

use super::StoriesAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchAction {
    /// Request for `generation` has been issued
    Started { generation: u64 },
    /// Request for `generation` returned `stories` for the requested `page`
    Completed {
        generation: u64,
        stories: Vec<Story>,
        page: u32,
    },
    /// Request for `generation` failed
    Failed { generation: u64, error: String },
}

impl FetchAction {
    pub fn generation(&self) -> u64 {
        match self {
            Self::Started { generation }
            | Self::Completed { generation, .. }
            | Self::Failed { generation, .. } => *generation,
        }
    }

    /// The stories transition this lifecycle step stands for
    pub fn to_stories_action(&self) -> StoriesAction {
        match self {
            Self::Started { .. } => StoriesAction::FetchInit,
            Self::Completed { stories, page, .. } => StoriesAction::FetchSuccess {
                list: stories.clone(),
                page: *page,
            },
            Self::Failed { .. } => StoriesAction::FetchFailure,
        }
    }
}
