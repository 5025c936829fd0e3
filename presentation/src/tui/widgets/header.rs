//! Header widget — shows model and request status

use crate::tui::state::TuiState;
use crate::tui::view::{ResponseView, ScreenView};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    state: &'a TuiState,
    view: &'a ScreenView<'a>,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a TuiState, view: &'a ScreenView<'a>) -> Self {
        Self { state, view }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let status_color = match self.view.response {
            ResponseView::Placeholder => Color::DarkGray,
            ResponseView::Thinking => Color::Yellow,
            ResponseView::Error(_) => Color::Red,
            ResponseView::Answer(_) => Color::Green,
        };

        let line = Line::from(vec![
            Span::styled("◉ ", Style::default().fg(status_color)),
            Span::styled(
                self.state.model_name.as_str(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(
                self.view.response.status_label(),
                Style::default().fg(status_color),
            ),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Query Assistant ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(line).block(block).render(area, buf);
    }
}
