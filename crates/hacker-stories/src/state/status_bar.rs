//! Status Bar State
//!
//! A short log of what the app has been doing. Only the newest entry is
//! rendered; older ones are kept so the log can be inspected in a debugger.

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Entries kept before the oldest one is dropped
const DEFAULT_CAPACITY: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// A request is on its way
    Running,
    Success,
    Error,
    Warning,
    Info,
}

impl StatusKind {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Running => "⏳",
            Self::Success => "✅",
            Self::Error => "🚨",
            Self::Warning => "⚠️",
            Self::Info => "ℹ️",
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub message: String,
    /// Component that reported it, e.g. "Search"
    pub source: String,
    pub timestamp: DateTime<Local>,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, message: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: source.into(),
            timestamp: Local::now(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusBarState {
    entries: VecDeque<StatusMessage>,
    capacity: usize,
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl StatusBarState {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn latest(&self) -> Option<&StatusMessage> {
        self.entries.back()
    }

    pub fn push(&mut self, message: StatusMessage) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oldest_entry_is_dropped_at_capacity() {
        let mut log = StatusBarState::with_capacity(2);
        for (kind, text) in [
            (StatusKind::Running, "Searching"),
            (StatusKind::Success, "Loaded 20 stories"),
            (StatusKind::Error, "Search failed"),
        ] {
            log.push(StatusMessage::new(kind, text, "Search"));
        }

        assert_eq!(log.entries.len(), 2);
        let latest = log.latest().map(|m| (m.kind, m.message.as_str()));
        assert_eq!(latest, Some((StatusKind::Error, "Search failed")));
    }

    #[test]
    fn test_empty_log_has_no_latest() {
        assert!(StatusBarState::default().latest().is_none());
    }
}
