//! Help Panel View Model
//!
//! All key bindings grouped by category, in keymap order.

use crate::command_id::CommandId;
use crate::keybindings::Keymap;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpRow {
    /// Combined hint of every key bound to the command (e.g. "j/↓")
    pub keys: String,
    pub description: &'static str,
}

#[derive(Debug, Clone)]
pub struct HelpSection {
    pub category: &'static str,
    pub rows: Vec<HelpRow>,
}

#[derive(Debug, Clone)]
pub struct HelpViewModel {
    pub title: &'static str,
    pub sections: Vec<HelpSection>,
    pub scroll: usize,
    pub scroll_hint: String,
    pub close_hint: String,
}

impl HelpViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let keymap = &state.keymap;
        let hint = |command: CommandId, fallback: &str| {
            keymap
                .compact_hint_for_command(command)
                .unwrap_or_else(|| fallback.to_string())
        };

        Self {
            title: " Keyboard Bindings ",
            sections: build_sections(keymap),
            scroll: state.help.scroll,
            scroll_hint: format!(
                "{}/{}",
                hint(CommandId::NavigateNext, "j"),
                hint(CommandId::NavigatePrevious, "k")
            ),
            close_hint: format!("{}/Esc", hint(CommandId::HelpToggle, "?")),
        }
    }
}

/// One row per command, sections in order of first appearance
fn build_sections(keymap: &Keymap) -> Vec<HelpSection> {
    let mut sections: Vec<HelpSection> = Vec::new();
    let mut seen: Vec<CommandId> = Vec::new();

    for binding in keymap.bindings() {
        let command = binding.command;
        if seen.contains(&command) {
            continue;
        }
        seen.push(command);

        let row = HelpRow {
            keys: keymap
                .compact_hint_for_command(command)
                .unwrap_or_else(|| binding.hint.clone()),
            description: command.description(),
        };
        match sections.iter_mut().find(|s| s.category == command.category()) {
            Some(section) => section.rows.push(row),
            None => sections.push(HelpSection {
                category: command.category(),
                rows: vec![row],
            }),
        }
    }
    sections
}

/// Number of lines the help panel renders for `keymap`
///
/// Each section is a header, a separator, its rows and a blank line.
pub fn help_line_count(keymap: &Keymap) -> usize {
    build_sections(keymap)
        .iter()
        .map(|section| section.rows.len() + 3)
        .sum()
}
