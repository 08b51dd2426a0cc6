//! App-wide actions, handled the same way whichever view is on top

use ratatui::crossterm::event::KeyEvent;

use crate::views::View;

#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Untranslated key press from the terminal
    KeyPressed(KeyEvent),
    /// Pop the top view; popping the last one quits
    Close,
    Quit,
    /// Open `view` on top, or close it if it is already on top
    PushView(Box<dyn View>),
}
