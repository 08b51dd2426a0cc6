//! The middleware thread
//!
//! The render thread owns the [`Store`](crate::store::Store) and never blocks
//! on I/O. Every action it produces is queued here instead, passed through
//! the middleware chain, and, unless consumed, sent back to be reduced.
//! Middleware read the state through [`SharedState`], which the store
//! refreshes after each reduction.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::thread;

/// Written by the store, read by middleware
pub type SharedState = Arc<RwLock<AppState>>;

struct Worker {
    inbox: Receiver<Action>,
    dispatcher: Dispatcher,
    to_store: Sender<Action>,
    state: SharedState,
    chain: Vec<Box<dyn Middleware>>,
}

/// Start the worker. `action_tx` must be the sender half of `action_rx`,
/// it is how dispatched actions get back into the chain.
pub fn spawn_background_worker(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    middleware: Vec<Box<dyn Middleware>>,
) -> thread::JoinHandle<()> {
    let worker = Worker {
        inbox: action_rx,
        dispatcher: Dispatcher::new(action_tx),
        to_store: result_tx,
        state,
        chain: middleware,
    };
    thread::spawn(move || worker.run())
}

impl Worker {
    fn run(mut self) {
        log::info!("Background worker started");

        while let Ok(action) = self.inbox.recv() {
            let Some(snapshot) = self.snapshot() else {
                continue;
            };

            if matches!(action, Action::Global(GlobalAction::Quit)) {
                self.shut_down(action, &snapshot);
                break;
            }

            if self.pass_through_chain(&action, &snapshot) && self.to_store.send(action).is_err() {
                log::error!("Store is gone, stopping background worker");
                break;
            }
        }

        log::info!("Background worker stopped");
    }

    fn snapshot(&self) -> Option<AppState> {
        match self.state.read() {
            Ok(state) => Some(state.clone()),
            Err(e) => {
                log::error!("Shared state poisoned: {}", e);
                None
            }
        }
    }

    /// `true` when no middleware consumed `action`
    fn pass_through_chain(&mut self, action: &Action, state: &AppState) -> bool {
        let dispatcher = &self.dispatcher;
        self.chain
            .iter_mut()
            .all(|middleware| middleware.handle(action, state, dispatcher))
    }

    /// Quit reaches every middleware, consumed or not, so each can flush
    fn shut_down(&mut self, quit: Action, state: &AppState) {
        log::info!("Background worker shutting down");
        for middleware in &mut self.chain {
            middleware.handle(&quit, state, &self.dispatcher);
        }
        if self.to_store.send(quit).is_err() {
            log::debug!("Store already gone, quit not forwarded");
        }
    }
}
