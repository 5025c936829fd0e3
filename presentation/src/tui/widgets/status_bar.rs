//! Status bar widget — request indicator + key hints

use crate::tui::view::{ResponseView, ScreenView};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    view: &'a ScreenView<'a>,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(view: &'a ScreenView<'a>) -> Self {
        Self { view }
    }

    fn indicator(&self) -> (&'static str, Color) {
        if self.view.input_locked {
            ("LOADING", Color::Yellow)
        } else if matches!(self.view.response, ResponseView::Error(_)) {
            ("ERROR", Color::Red)
        } else {
            ("READY", Color::Green)
        }
    }

    fn hints(&self) -> &'static str {
        if self.view.input_locked {
            "waiting for answer...  ↑/↓:scroll  Esc:quit"
        } else if self.view.submit_enabled {
            "Enter:ask  Shift+Enter:newline  ↑/↓:scroll  Esc:quit"
        } else {
            "type a question  Shift+Enter:newline  Esc:quit"
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        // Left: request indicator
        let (label, color) = self.indicator();
        let mode_style = Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD);
        let mode_line = Line::from(Span::styled(format!(" {} ", label), mode_style));
        let mode_width = label.len() as u16 + 2; // padding

        buf.set_line(area.x, area.y, &mode_line, mode_width);

        // Right: key hints, right-aligned
        let hints = self.hints();
        let right_width = hints.chars().count() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + mode_width {
            let right_line = Line::from(Span::styled(
                hints,
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ));
            buf.set_line(right_x, area.y, &right_line, right_width + 1);
        }
    }
}
