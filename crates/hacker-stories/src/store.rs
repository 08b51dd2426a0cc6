use crate::actions::Action;
use crate::background::SharedState;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;

/// Store - the main thread's view of application state
///
/// The main thread is the only writer: every forwarded action is reduced
/// here and the result is published to the shared state the middleware
/// chain reads from.
pub struct Store {
    state: AppState,
    shared: SharedState,
}

impl Store {
    pub fn new(initial_state: AppState, shared: SharedState) -> Self {
        let store = Self {
            state: initial_state,
            shared,
        };
        store.publish();
        store
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Reduce an action that made it through the middleware chain
    pub fn apply(&mut self, action: &Action) {
        self.state = reduce(self.state.clone(), action);
        self.publish();
    }

    fn publish(&self) {
        match self.shared.write() {
            Ok(mut shared) => *shared = self.state.clone(),
            Err(e) => log::error!("Failed to publish state: {}", e),
        }
    }
}
