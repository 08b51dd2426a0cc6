//! Opens story links in the system browser

use tokio::runtime::Handle;

use crate::actions::{Action, StatusBarAction, StoryListAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::utils::browser::open_url;

pub struct BrowserMiddleware {
    runtime: Handle,
}

impl BrowserMiddleware {
    pub fn new(runtime: Handle) -> Self {
        Self { runtime }
    }
}

impl Middleware for BrowserMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::StoryList(StoryListAction::OpenUrl(url)) = action {
            log::info!("Opening {} in browser", url);
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::info(
                format!("Opening {}", url),
                "Browser",
            )));
            self.runtime.spawn(open_url(url.clone()));
            return false;
        }
        true
    }
}
