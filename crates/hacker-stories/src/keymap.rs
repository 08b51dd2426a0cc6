pub use crate::{
    command_id::CommandId,
    keybindings::{KeyBinding, Keymap},
};

/// Get the default keymap
pub fn default_keymap() -> Keymap {
    use CommandId::*;

    let bindings = vec![
        // Navigation
        KeyBinding::new("j", "j", NavigateNext),
        KeyBinding::new("down", "↓", NavigateNext),
        KeyBinding::new("k", "k", NavigatePrevious),
        KeyBinding::new("up", "↑", NavigatePrevious),
        KeyBinding::new("g g", "gg", NavigateToTop),
        KeyBinding::new("G", "G", NavigateToBottom),
        // Search
        KeyBinding::new("/", "/", SearchFocusInput),
        KeyBinding::new("tab", "Tab", SearchFocusInput),
        KeyBinding::new("m", "m", SearchMore),
        KeyBinding::new("1", "1", LastSearch1),
        KeyBinding::new("2", "2", LastSearch2),
        KeyBinding::new("3", "3", LastSearch3),
        KeyBinding::new("4", "4", LastSearch4),
        KeyBinding::new("5", "5", LastSearch5),
        // Sorting
        KeyBinding::new("s t", "s → t", SortByTitle),
        KeyBinding::new("s a", "s → a", SortByAuthor),
        KeyBinding::new("s c", "s → c", SortByComments),
        KeyBinding::new("s p", "s → p", SortByPoints),
        KeyBinding::new("s n", "s → n", SortReset),
        // Stories
        KeyBinding::new("enter", "Enter", Confirm),
        KeyBinding::new("o", "o", Confirm),
        KeyBinding::new("d", "d", RemoveStory),
        KeyBinding::new("delete", "Del", RemoveStory),
        // General
        KeyBinding::new("?", "?", HelpToggle),
        KeyBinding::new("q", "q", GlobalClose),
        KeyBinding::new("esc", "Esc", GlobalClose),
        KeyBinding::new("ctrl+c", "Ctrl+C", GlobalQuit),
    ];

    Keymap::new(bindings)
}
