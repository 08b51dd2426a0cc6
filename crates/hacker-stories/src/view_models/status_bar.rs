//! Status Bar View Model

use crate::state::{AppState, StatusKind};
use ratatui::style::{Color, Modifier, Style};

/// View model for rendering the status bar
#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    pub icon: &'static str,
    pub message: String,
    /// Formatted as `HH:MM:SS`, empty for the welcome message
    pub timestamp: String,
    pub source: String,
    pub message_style: Style,
    pub bg_color: Color,
    /// Style of timestamp and source
    pub metadata_style: Style,
}

impl StatusBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let metadata_style = Style::default().fg(theme.text_faint);

        let Some(msg) = state.status_bar.latest() else {
            return Self {
                icon: "👋",
                message: "Welcome to Hacker Stories".to_string(),
                timestamp: String::new(),
                source: String::new(),
                message_style: Style::default()
                    .fg(theme.text_faint)
                    .add_modifier(Modifier::ITALIC),
                bg_color: theme.background,
                metadata_style,
            };
        };

        let fg = match msg.kind {
            StatusKind::Running | StatusKind::Warning => theme.pending,
            StatusKind::Success => theme.success,
            StatusKind::Error => theme.failure,
            StatusKind::Info => theme.notice,
        };

        Self {
            icon: msg.kind.icon(),
            message: msg.message.clone(),
            timestamp: msg.timestamp.format("%H:%M:%S").to_string(),
            source: msg.source.clone(),
            message_style: Style::default().fg(fg).add_modifier(Modifier::BOLD),
            bg_color: theme.background,
            metadata_style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StatusMessage;

    #[test]
    fn test_welcome_without_messages() {
        let vm = StatusBarViewModel::from_state(&AppState::default());
        assert_eq!(vm.message, "Welcome to Hacker Stories");
        assert!(vm.timestamp.is_empty());
    }

    #[test]
    fn test_latest_message_is_shown() {
        let mut state = AppState::default();
        state
            .status_bar
            .push(StatusMessage::new(StatusKind::Error, "Search failed", "Search"));

        let vm = StatusBarViewModel::from_state(&state);
        assert_eq!(vm.message, "Search failed");
        assert_eq!(vm.source, "Search");
        assert_eq!(vm.message_style.fg, Some(state.theme.failure));
    }
}
