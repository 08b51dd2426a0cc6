//! Keybinding system
//!
//! Maps keyboard input to commands. Supports single keys, modifier
//! combinations and two-key sequences (`"s t"`: press `s`, then `t`).
//!
//! Key patterns are textual so bindings read the same in code, in the help
//! panel and in a future config file.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

use crate::command_id::CommandId;

/// How long the first key of a sequence waits for the second one
const SEQUENCE_TIMEOUT: Duration = Duration::from_secs(2);

/// A single keybinding that maps a key pattern to a command
#[derive(Debug, Clone)]
pub struct KeyBinding {
    /// Textual representation of the key(s) - e.g. "ctrl+c", "s t", "enter"
    pub keys: String,
    /// Display hint for the UI - e.g. "Ctrl+C", "s → t"
    pub hint: String,
    pub command: CommandId,
}

impl KeyBinding {
    pub fn new(keys: impl Into<String>, hint: impl Into<String>, command: CommandId) -> Self {
        Self {
            keys: keys.into(),
            hint: hint.into(),
            command,
        }
    }
}

/// Parsed key pattern for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPattern {
    Single {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    Sequence {
        first: char,
        second: char,
    },
}

impl KeyPattern {
    /// Parse a textual key pattern
    ///
    /// Supported formats:
    /// - Single char, case-sensitive: "q", "1", "G"
    /// - Modifiers: "ctrl+c", "shift+tab"
    /// - Named keys: "tab", "enter", "esc", "backspace", "up", "down", ...
    /// - Two-key sequence: "s t"
    pub fn parse(pattern: &str) -> Option<Self> {
        let pattern = pattern.trim();

        if let Some((first, second)) = pattern.split_once(' ') {
            let (first, second) = (single_char(first)?, single_char(second.trim())?);
            return Some(Self::Sequence { first, second });
        }

        if let Some(c) = single_char(pattern) {
            // Terminals report uppercase letters with SHIFT
            let modifiers = if c.is_ascii_uppercase() {
                KeyModifiers::SHIFT
            } else {
                KeyModifiers::NONE
            };
            return Some(Self::Single {
                code: KeyCode::Char(c),
                modifiers,
            });
        }

        let lower = pattern.to_lowercase();
        let mut parts: Vec<&str> = lower.split('+').collect();
        let key = parts.pop()?;

        let mut modifiers = KeyModifiers::NONE;
        for modifier in parts {
            modifiers |= match modifier {
                "ctrl" | "control" => KeyModifiers::CONTROL,
                "shift" => KeyModifiers::SHIFT,
                "alt" => KeyModifiers::ALT,
                _ => return None,
            };
        }

        Some(Self::Single {
            code: parse_key_code(key)?,
            modifiers,
        })
    }

    fn matches(&self, key: &KeyEvent) -> bool {
        match self {
            // BackTab arrives with or without SHIFT depending on the terminal
            Self::Single {
                code: KeyCode::BackTab,
                ..
            } => key.code == KeyCode::BackTab,
            // Symbols like '?' need SHIFT on some layouts only
            Self::Single {
                code: KeyCode::Char(c),
                modifiers,
            } if !c.is_ascii_alphabetic() => {
                key.code == KeyCode::Char(*c)
                    && key.modifiers - KeyModifiers::SHIFT == *modifiers - KeyModifiers::SHIFT
            }
            Self::Single { code, modifiers } => key.code == *code && key.modifiers == *modifiers,
            Self::Sequence { .. } => false,
        }
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn parse_key_code(s: &str) -> Option<KeyCode> {
    let code = match s {
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" | "bs" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "space" => KeyCode::Char(' '),
        s if s.len() > 1 && s.starts_with('f') => KeyCode::F(s[1..].parse().ok()?),
        s => KeyCode::Char(single_char(s)?),
    };
    Some(code)
}

/// First key of a sequence waiting for its second key
#[derive(Debug, Clone)]
pub struct PendingKey {
    pub key: char,
    pub timestamp: Instant,
}

impl PendingKey {
    pub fn new(key: char) -> Self {
        Self {
            key,
            timestamp: Instant::now(),
        }
    }

    fn is_expired(&self) -> bool {
        self.timestamp.elapsed() >= SEQUENCE_TIMEOUT
    }
}

/// Outcome of feeding one key event into the keymap
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyMatch {
    /// Commands bound to the key, in binding order
    Commands(Vec<CommandId>),
    /// The key starts a sequence, wait for the next key
    Pending(char),
    NoMatch,
}

/// The keymap - a collection of keybindings with matching logic
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, KeyPattern)>,
}

impl Keymap {
    /// Create a keymap, skipping bindings whose pattern does not parse
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let bindings = bindings
            .into_iter()
            .filter_map(|binding| match KeyPattern::parse(&binding.keys) {
                Some(pattern) => Some((binding, pattern)),
                None => {
                    log::warn!("Ignoring unparsable key binding {:?}", binding.keys);
                    None
                }
            })
            .collect();
        Self { bindings }
    }

    /// Match a key event, completing `pending` when it forms a sequence
    ///
    /// Several commands can share a key; the caller picks the first one the
    /// active view accepts.
    pub fn match_key(&self, key: &KeyEvent, pending: Option<&PendingKey>) -> KeyMatch {
        let typed = match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(c)
            }
            _ => None,
        };

        if let (Some(pending), Some(second_key)) = (pending.filter(|p| !p.is_expired()), typed) {
            let completed = self.bindings.iter().find(|(_, pattern)| {
                *pattern
                    == KeyPattern::Sequence {
                        first: pending.key,
                        second: second_key,
                    }
            });
            if let Some((binding, _)) = completed {
                return KeyMatch::Commands(vec![binding.command]);
            }
        }

        let commands: Vec<CommandId> = self
            .bindings
            .iter()
            .filter(|(_, pattern)| pattern.matches(key))
            .map(|(binding, _)| binding.command)
            .collect();
        if !commands.is_empty() {
            return KeyMatch::Commands(commands);
        }

        let starts_sequence = typed.filter(|c| {
            self.bindings
                .iter()
                .any(|(_, pattern)| matches!(pattern, KeyPattern::Sequence { first, .. } if first == c))
        });
        match starts_sequence {
            Some(c) => KeyMatch::Pending(c),
            None => KeyMatch::NoMatch,
        }
    }

    /// All bindings in declaration order (for the help panel)
    pub fn bindings(&self) -> impl Iterator<Item = &KeyBinding> {
        self.bindings.iter().map(|(binding, _)| binding)
    }

    /// Hints of all bindings for `command`, deduplicated and joined with "/"
    pub fn compact_hint_for_command(&self, command: CommandId) -> Option<String> {
        let mut hints: Vec<&str> = Vec::new();
        for binding in self.bindings().filter(|b| b.command == command) {
            if !hints.contains(&binding.hint.as_str()) {
                hints.push(&binding.hint);
            }
        }

        if hints.is_empty() {
            None
        } else {
            Some(hints.join("/"))
        }
    }
}
