//! Status Bar Widget
//!
//! Format: `[timestamp] icon message                     [source]`

use crate::view_models::StatusBarViewModel;
use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};

pub struct StatusBarWidget<'a>(pub &'a StatusBarViewModel);

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;
        if area.height < 1 {
            return;
        }

        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(vm.bg_color).set_char(' ');
        }

        let source = if vm.source.is_empty() {
            String::new()
        } else {
            format!("[{}]", vm.source)
        };
        let source_width = source.chars().count() as u16;

        let mut x = area.x + 1;
        let right = area.x + area.width;

        if !vm.timestamp.is_empty() {
            let timestamp = format!("[{}] ", vm.timestamp);
            let (next_x, _) = buf.set_stringn(
                x,
                area.y,
                &timestamp,
                right.saturating_sub(x) as usize,
                vm.metadata_style,
            );
            x = next_x;
        }

        // Keep room for the source on the right
        let message_width = right.saturating_sub(x + source_width + 2) as usize;
        let mut message = format!("{} {}", vm.icon, vm.message);
        if Line::raw(message.as_str()).width() > message_width {
            message = message
                .chars()
                .take(message_width.saturating_sub(1))
                .collect::<String>()
                + "…";
        }
        buf.set_stringn(x, area.y, &message, message_width, vm.message_style);

        if !source.is_empty() && area.width > source_width + 1 {
            buf.set_string(right - source_width - 1, area.y, &source, vm.metadata_style);
        }
    }
}
