//! Colors and styles for the Hacker Stories terminal UI
//!
//! Widgets never pick colors themselves: they ask the [`Theme`] for a style
//! by role (`border`, `key_hint`, `story_row`, ...).

use ratatui::{prelude::*, style::palette::tailwind};

/// The orange of the Hacker News header bar
pub const HN_ORANGE: Color = Color::Rgb(0xff, 0x66, 0x00);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    /// Popups and other raised surfaces
    pub surface: Color,

    pub text: Color,
    pub text_dim: Color,
    pub text_faint: Color,

    pub accent: Color,

    pub success: Color,
    pub failure: Color,
    pub pending: Color,
    pub notice: Color,

    pub cursor_fg: Color,
    pub cursor_bg: Color,

    pub header_fg: Color,
    pub header_bg: Color,
    /// Story rows alternate between these two backgrounds
    pub stripes: [Color; 2],
}

impl Default for Theme {
    fn default() -> Self {
        Self::night()
    }
}

impl Theme {
    /// Dark stone background with Hacker News orange accents
    pub fn night() -> Self {
        Self {
            background: tailwind::STONE.c950,
            surface: tailwind::STONE.c800,

            text: tailwind::STONE.c100,
            text_dim: tailwind::STONE.c300,
            text_faint: tailwind::STONE.c500,

            accent: HN_ORANGE,

            success: tailwind::EMERALD.c400,
            failure: tailwind::ROSE.c500,
            pending: tailwind::AMBER.c300,
            notice: tailwind::SKY.c400,

            cursor_fg: tailwind::STONE.c950,
            cursor_bg: HN_ORANGE,

            header_fg: tailwind::STONE.c200,
            header_bg: tailwind::STONE.c700,
            stripes: [tailwind::STONE.c950, tailwind::STONE.c900],
        }
    }

    fn fg(color: Color) -> Style {
        Style::new().fg(color)
    }

    fn strong(color: Color) -> Style {
        Self::fg(color).bold()
    }

    pub fn surface(&self) -> Style {
        Style::new().bg(self.surface)
    }

    /// Panel border, orange while the panel holds the keyboard
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Self::strong(self.accent)
        } else {
            Self::fg(self.text_faint)
        }
    }

    pub fn title(&self) -> Style {
        Self::strong(self.accent)
    }

    pub fn section_header(&self) -> Style {
        Self::strong(self.pending).underlined()
    }

    pub fn key_hint(&self) -> Style {
        Self::strong(self.accent)
    }

    pub fn key_description(&self) -> Style {
        Self::fg(self.text_dim)
    }

    /// Column header cell, `sorted` marks the column the list is ordered by
    pub fn column_header(&self, sorted: bool) -> Style {
        let style = Style::new().bg(self.header_bg).bold();
        if sorted {
            style.fg(self.accent).underlined()
        } else {
            style.fg(self.header_fg)
        }
    }

    pub fn cursor_row(&self) -> Style {
        Style::new().fg(self.cursor_fg).bg(self.cursor_bg).bold()
    }

    pub fn story_row(&self, index: usize) -> Style {
        Style::new()
            .fg(self.text_dim)
            .bg(self.stripes[index % self.stripes.len()])
    }

    pub fn error_text(&self) -> Style {
        Self::strong(self.failure)
    }

    pub fn loading_text(&self) -> Style {
        Self::strong(self.pending)
    }

    pub fn faint(&self) -> Style {
        Self::fg(self.text_faint)
    }

    pub fn input(&self) -> Style {
        Self::fg(self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_rows_are_striped() {
        let theme = Theme::default();
        let backgrounds: Vec<_> = (0..4).map(|i| theme.story_row(i).bg).collect();
        assert_eq!(
            backgrounds,
            vec![
                Some(theme.stripes[0]),
                Some(theme.stripes[1]),
                Some(theme.stripes[0]),
                Some(theme.stripes[1]),
            ]
        );
    }

    #[test]
    fn test_sorted_column_is_highlighted() {
        let theme = Theme::default();
        assert_eq!(theme.column_header(true).fg, Some(HN_ORANGE));
        assert_eq!(theme.column_header(false).fg, Some(theme.header_fg));
    }
}
