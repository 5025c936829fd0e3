//! Input widget — multiline question editor
//!
//! Text is split on `\n` and rendered as multiple `Line`s inside a
//! `Paragraph`. The prompt prefix is shown only on the first line;
//! continuation lines get a "  " indent. While a request is in flight the
//! box is greyed out and the cursor hidden.

use crate::tui::state::TuiState;
use crate::tui::view::ScreenView;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const PROMPT: &str = "> ";
const CONTINUATION: &str = "  ";

pub struct InputWidget<'a> {
    state: &'a TuiState,
    view: &'a ScreenView<'a>,
}

impl<'a> InputWidget<'a> {
    pub fn new(state: &'a TuiState, view: &'a ScreenView<'a>) -> Self {
        Self { state, view }
    }
}

impl<'a> Widget for InputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let active = !self.view.input_locked;
        let color = if active { Color::Green } else { Color::DarkGray };
        let text = self.state.input.as_str();
        let cursor_pos = self.state.cursor_pos;

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Question ")
            .style(Style::default().fg(color));

        // Inner area height (excluding borders) — used for scroll
        let inner_height = area.height.saturating_sub(2) as usize;

        let lines = if active {
            build_active_lines(text, cursor_pos, color)
        } else {
            build_inactive_lines(text, color)
        };

        // Scroll so the cursor line is visible
        let scroll_offset = if lines.len() > inner_height {
            let cursor_line = find_cursor_line(text, cursor_pos);
            (cursor_line + 1).saturating_sub(inner_height)
        } else {
            0
        };

        // Slice instead of Paragraph::scroll, whose offset is only u16
        let visible: Vec<Line<'static>> = lines
            .into_iter()
            .skip(scroll_offset)
            .take(inner_height)
            .collect();

        Paragraph::new(visible).block(block).render(area, buf);
    }
}

fn prefix(i: usize, color: Color) -> Span<'static> {
    Span::styled(
        if i == 0 { PROMPT } else { CONTINUATION },
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

/// Build lines with a block cursor at `cursor_pos`
fn build_active_lines(text: &str, cursor_pos: usize, color: Color) -> Vec<Line<'static>> {
    let cursor_style = Style::default().fg(Color::Black).bg(color);

    let mut lines = Vec::new();
    let mut line_start = 0;

    for (i, line_text) in text.split('\n').enumerate() {
        let line_end = line_start + line_text.len();
        let mut spans = vec![prefix(i, color)];

        if (line_start..=line_end).contains(&cursor_pos) {
            let local_cursor = cursor_pos - line_start;
            let before = &line_text[..local_cursor];
            let after = &line_text[local_cursor..];

            spans.push(Span::raw(before.to_string()));

            match after.chars().next() {
                // Cursor at end of line — show block cursor on space
                None => spans.push(Span::styled(" ", cursor_style)),
                Some(ch) => {
                    let ch_len = ch.len_utf8();
                    spans.push(Span::styled(after[..ch_len].to_string(), cursor_style));
                    if ch_len < after.len() {
                        spans.push(Span::raw(after[ch_len..].to_string()));
                    }
                }
            }
        } else {
            spans.push(Span::raw(line_text.to_string()));
        }

        lines.push(Line::from(spans));
        line_start = line_end + 1; // +1 for the '\n'
    }

    lines
}

/// Build lines without a cursor
fn build_inactive_lines(text: &str, color: Color) -> Vec<Line<'static>> {
    let inactive_style = Style::default().fg(color);

    text.split('\n')
        .enumerate()
        .map(|(i, line_text)| {
            Line::from(vec![
                prefix(i, color),
                Span::styled(line_text.to_string(), inactive_style),
            ])
        })
        .collect()
}

/// Find which line (0-indexed) the cursor is on
fn find_cursor_line(text: &str, cursor_pos: usize) -> usize {
    text[..cursor_pos.min(text.len())]
        .chars()
        .filter(|&c| c == '\n')
        .count()
}
