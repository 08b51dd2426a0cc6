//! Item actions, meaning depends on what the cursor is on

/// Sent by the keymap, turned into a concrete action by
/// `View::translate_context_action`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAction {
    /// Enter: open the story
    Confirm,
    /// d: dismiss the story
    Remove,
}
