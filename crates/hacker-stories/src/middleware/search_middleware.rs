//! Search Middleware - the fetch controller
//!
//! Turns search intents (submit, last search, more, start-up) into issued
//! request URLs and runs the requests on the tokio runtime:
//!
//! 1. bump the generation and dispatch `Search::Issued`
//! 2. dispatch `Fetch::Started`
//! 3. spawn the request, which dispatches `Fetch::Completed` or `Fetch::Failed`
//!
//! Every lifecycle action carries the generation it was issued under, so the
//! reducers can drop responses of superseded requests.
//!
//! The committed search term is written to the persistent store here, never
//! from the reducers.

use std::sync::Arc;

use hacker_stories_config::{AppConfig, PersistentStore, SEARCH_TERM_KEY};
use hn_search_client::{SearchClient, SearchUrl};
use tokio::runtime::Handle;

use crate::actions::{
    Action, BootstrapAction, FetchAction, GlobalAction, SearchAction, StatusBarAction,
};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

const SOURCE: &str = "Search";

pub struct SearchMiddleware {
    client: Arc<dyn SearchClient>,
    store: Box<dyn PersistentStore>,
    runtime: Handle,
    api_base: String,
    default_term: String,
    /// Live search term as of the last edit seen in the chain. Ahead of the
    /// shared snapshot when keys arrive faster than the main loop reduces.
    term: String,
    /// Generation of the most recently issued request
    generation: u64,
    /// Generation still waiting for its response
    in_flight: Option<u64>,
}

impl SearchMiddleware {
    pub fn new(
        client: Arc<dyn SearchClient>,
        store: Box<dyn PersistentStore>,
        runtime: Handle,
        config: &AppConfig,
    ) -> Self {
        Self {
            client,
            store,
            runtime,
            api_base: config.api_base.clone(),
            default_term: config.default_search_term.clone(),
            term: String::new(),
            generation: 0,
            in_flight: None,
        }
    }

    /// Restore the stored term (or the default) and search for it
    fn handle_start(&mut self, dispatcher: &Dispatcher) {
        let term = self
            .store
            .get(SEARCH_TERM_KEY)
            .unwrap_or_else(|| self.default_term.clone());
        log::info!("Starting with search term {:?}", term);

        dispatcher.dispatch(Action::Search(SearchAction::SetTerm(term.clone())));
        self.issue(&term, 0, dispatcher);
    }

    /// Apply a term edit the same way the search reducer will
    fn track_term(&mut self, action: &SearchAction) {
        match action {
            SearchAction::InputChar(c) => self.term.push(*c),
            SearchAction::Backspace => {
                self.term.pop();
            }
            SearchAction::ClearInput => self.term.clear(),
            SearchAction::SetTerm(term) => self.term = term.clone(),
            _ => {}
        }
    }

    fn handle_submit(&mut self, dispatcher: &Dispatcher) {
        let term = self.term.clone();
        if term.is_empty() {
            log::debug!("Ignoring submit of an empty search term");
            return;
        }
        self.persist_term(&term, dispatcher);
        self.issue(&term, 0, dispatcher);
        dispatcher.dispatch(Action::Search(SearchAction::FocusList));
    }

    fn handle_last_search(&mut self, index: usize, state: &AppState, dispatcher: &Dispatcher) {
        let Some(term) = state.search.last_searches().into_iter().nth(index) else {
            log::debug!("No last search at index {}", index);
            return;
        };
        dispatcher.dispatch(Action::Search(SearchAction::SetTerm(term.clone())));
        self.persist_term(&term, dispatcher);
        self.issue(&term, 0, dispatcher);
    }

    fn handle_more(&mut self, state: &AppState, dispatcher: &Dispatcher) {
        if self.in_flight.is_some() || state.stories.is_loading {
            log::debug!("Ignoring more while a request is in flight");
            return;
        }
        let Some(last) = state.search.last_url() else {
            log::debug!("Ignoring more before the first search");
            return;
        };
        let term = last.query_term().to_string();
        self.issue(&term, state.stories.page + 1, dispatcher);
    }

    /// Issue a request for `(term, page)` under a fresh generation
    fn issue(&mut self, term: &str, page: u32, dispatcher: &Dispatcher) {
        self.generation += 1;
        let generation = self.generation;
        let url = SearchUrl::with_base(&self.api_base, term, page);

        if let Some(previous) = self.in_flight {
            log::debug!("Generation {} superseded by {}", previous, generation);
        }
        self.in_flight = Some(generation);
        log::info!("Issuing {} (generation {})", url, generation);

        dispatcher.dispatch(Action::Search(SearchAction::Issued {
            url: url.clone(),
            generation,
        }));
        dispatcher.dispatch(Action::Fetch(FetchAction::Started { generation }));
        dispatcher.dispatch(Action::StatusBar(StatusBarAction::running(
            format!("Searching \"{}\" (page {})...", term, page + 1),
            SOURCE,
        )));

        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            let action = match client.search(&url).await {
                Ok(response) => {
                    if response.page != page {
                        log::debug!(
                            "Service reported page {} for requested page {}, keeping {}",
                            response.page,
                            page,
                            page
                        );
                    }
                    log::info!("{} returned {} stories", url, response.hits.len());
                    FetchAction::Completed {
                        generation,
                        stories: response.hits,
                        page,
                    }
                }
                Err(e) => {
                    log::error!("{} failed ({}): {}", url, e.kind(), e);
                    FetchAction::Failed {
                        generation,
                        error: e.to_string(),
                    }
                }
            };
            dispatcher.dispatch(Action::Fetch(action));
        });
    }

    /// Book-keeping for a finished request, reports the outcome in the status bar
    fn observe_fetch(&mut self, fetch: &FetchAction, dispatcher: &Dispatcher) {
        let generation = fetch.generation();
        if generation != self.generation {
            log::info!(
                "Response of generation {} arrived after generation {} was issued, discarding",
                generation,
                self.generation
            );
            return;
        }

        match fetch {
            FetchAction::Started { .. } => {}
            FetchAction::Completed { stories, .. } => {
                self.in_flight = None;
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                    format!("Loaded {} stories", stories.len()),
                    SOURCE,
                )));
            }
            FetchAction::Failed { error, .. } => {
                self.in_flight = None;
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                    format!("Search failed: {}", error),
                    SOURCE,
                )));
            }
        }
    }

    fn persist_term(&mut self, term: &str, dispatcher: &Dispatcher) {
        match self.store.set(SEARCH_TERM_KEY, term) {
            Ok(()) => log::debug!("Stored search term {:?}", term),
            Err(e) => {
                log::warn!("Failed to store search term: {:#}", e);
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                    "Could not remember the search term",
                    SOURCE,
                )));
            }
        }
    }
}

impl Middleware for SearchMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Bootstrap(BootstrapAction::Start) => {
                self.handle_start(dispatcher);
                false
            }
            Action::Search(
                edit @ (SearchAction::InputChar(_)
                | SearchAction::Backspace
                | SearchAction::ClearInput
                | SearchAction::SetTerm(_)),
            ) => {
                self.track_term(edit);
                true
            }
            Action::Search(SearchAction::Submit) => {
                self.handle_submit(dispatcher);
                false
            }
            Action::Search(SearchAction::SelectLastSearch(index)) => {
                self.handle_last_search(*index, state, dispatcher);
                false
            }
            Action::Search(SearchAction::More) => {
                self.handle_more(state, dispatcher);
                false
            }
            Action::Fetch(fetch) => {
                self.observe_fetch(fetch, dispatcher);
                true
            }
            Action::Global(GlobalAction::Quit) => {
                // Status messages cannot be shown any more, just log
                if let Err(e) = self.store.set(SEARCH_TERM_KEY, &self.term) {
                    log::warn!("Failed to store search term on quit: {:#}", e);
                }
                true
            }
            _ => true,
        }
    }
}
