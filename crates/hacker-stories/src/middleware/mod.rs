//! Side effects between the key press and the reducers
//!
//! Each middleware sees every action in chain order (see `main.rs`) and
//! either lets it through or consumes it. Consumed actions never reach the
//! reducers; anything a middleware wants reduced it dispatches anew.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod browser_middleware;
pub mod keyboard_middleware;
pub mod search_middleware;
pub mod translation_middleware;

pub use browser_middleware::BrowserMiddleware;
pub use keyboard_middleware::KeyboardMiddleware;
pub use search_middleware::SearchMiddleware;
pub use translation_middleware::TranslationMiddleware;

/// Runs on the background worker, never on the render thread
pub trait Middleware: Send {
    /// `state` is the snapshot published after the last reduction.
    /// Return `false` to stop `action` here.
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
