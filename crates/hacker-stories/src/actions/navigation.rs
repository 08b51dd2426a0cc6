//! Cursor movement, independent of what is being moved through

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// j, ↓, Tab
    Next,
    /// k, ↑, Shift+Tab
    Previous,
    /// gg
    ToTop,
    /// G
    ToBottom,
}
