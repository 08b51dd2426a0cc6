//! Status Bar Actions

use crate::state::{StatusKind, StatusMessage};

#[derive(Debug, Clone)]
pub enum StatusBarAction {
    /// Show `message`, stamped when the action was created
    Show(StatusMessage),
}

impl StatusBarAction {
    fn show(kind: StatusKind, message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::Show(StatusMessage::new(kind, message, source))
    }

    pub fn running(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::show(StatusKind::Running, message, source)
    }

    pub fn success(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::show(StatusKind::Success, message, source)
    }

    pub fn error(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::show(StatusKind::Error, message, source)
    }

    pub fn warning(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::show(StatusKind::Warning, message, source)
    }

    pub fn info(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::show(StatusKind::Info, message, source)
    }
}
