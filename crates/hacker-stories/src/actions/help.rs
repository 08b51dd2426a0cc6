//! Help panel actions

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpAction {
    ScrollDown,
    ScrollUp,
    ScrollToTop,
    ScrollToBottom,
}
