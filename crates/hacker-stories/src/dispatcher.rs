//! Handle for middleware to emit follow-up actions
//!
//! Dispatched actions are queued on the worker's input channel, so they run
//! through every middleware again before any reducer sees them. Search
//! results spawned on the runtime come back this way.

use crate::actions::Action;
use std::sync::mpsc::Sender;

#[derive(Debug, Clone)]
pub struct Dispatcher {
    queue: Sender<Action>,
}

impl Dispatcher {
    pub fn new(queue: Sender<Action>) -> Self {
        Self { queue }
    }

    /// Enqueue `action`; a closed queue means the app is shutting down
    pub fn dispatch(&self, action: Action) {
        if self.queue.send(action).is_err() {
            log::warn!("Dispatcher: worker is gone, action dropped");
        }
    }
}
