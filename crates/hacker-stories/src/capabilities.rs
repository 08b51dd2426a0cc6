//! Panel capability system
//!
//! Views declare what kind of input they handle so the keyboard middleware
//! can route keys without knowing about specific views.

use bitflags::bitflags;

bitflags! {
    /// Capabilities that a view can declare
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PanelCapabilities: u32 {
        /// Content can scroll vertically
        const SCROLL_VERTICAL = 1 << 0;

        /// Supports vim-style navigation keybindings (j, k, gg, G)
        const VIM_NAVIGATION_BINDINGS = 1 << 1;

        /// Can navigate to next/previous items
        const ITEM_NAVIGATION = 1 << 2;

        /// A text field has focus: printable keys are typed, not looked up in the keymap
        const TEXT_INPUT = 1 << 3;
    }
}

impl PanelCapabilities {
    pub fn accepts_text_input(self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }
}

impl Default for PanelCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}
