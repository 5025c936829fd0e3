//! Response widget — placeholder, loading indicator, error panel or answer

use crate::tui::state::TuiState;
use crate::tui::view::ResponseView;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct ResponseWidget<'a> {
    state: &'a TuiState,
    view: ResponseView<'a>,
}

impl<'a> ResponseWidget<'a> {
    pub fn new(state: &'a TuiState, view: ResponseView<'a>) -> Self {
        Self { state, view }
    }

    fn content(&self) -> (Text<'a>, &'static str, Color) {
        match self.view {
            ResponseView::Placeholder => (
                Text::from(Line::from(Span::styled(
                    "Type a question below and press Enter.",
                    Style::default().fg(Color::DarkGray),
                ))),
                " Answer ",
                Color::White,
            ),
            ResponseView::Thinking => (
                Text::from(Line::from(vec![
                    Span::styled(
                        format!("{} ", self.state.spinner()),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(
                        "Thinking...",
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::ITALIC),
                    ),
                ])),
                " Answer ",
                Color::Yellow,
            ),
            ResponseView::Error(message) => (
                Text::from(Line::from(Span::styled(
                    message,
                    Style::default().fg(Color::Red),
                ))),
                " Error ",
                Color::Red,
            ),
            // Text::from splits on '\n', so line breaks survive
            ResponseView::Answer(answer) => (Text::from(answer), " Answer ", Color::White),
        }
    }
}

impl<'a> Widget for ResponseWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (text, title, color) = self.content();
        let visible_height = area.height.saturating_sub(2); // borders
        let content_width = area.width.saturating_sub(2); // borders

        // line_count() uses the same wrapping as rendering; built without
        // block so it returns pure content lines.
        let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
        let total_lines =
            u16::try_from(paragraph.line_count(content_width)).unwrap_or(u16::MAX);
        let max_scroll = total_lines.saturating_sub(visible_height);
        let scroll = self.state.scroll_offset.min(max_scroll);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(Style::default().fg(color));
        if max_scroll > 0 {
            block = block.title_bottom(
                Line::from(format!(" {}/{} ", scroll + visible_height, total_lines))
                    .right_aligned(),
            );
        }

        paragraph.block(block).scroll((scroll, 0)).render(area, buf);
    }
}
