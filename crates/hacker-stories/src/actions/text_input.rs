//! Editing keys, routed to whichever view owns a text field

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputAction {
    Char(char),
    /// Drop the last character
    Backspace,
    /// Empty the field (Ctrl+U, Cmd+Backspace)
    ClearLine,
    /// Enter
    Confirm,
    /// Leave the field without submitting
    Escape,
}
