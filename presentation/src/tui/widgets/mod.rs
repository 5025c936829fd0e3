//! TUI widgets — ratatui components for the main layout
//!
//! Layout:
//! ┌── Header (3) ────────────────────────────────────┐
//! ├── Response (flex) ───────────────────────────────┤
//! ├── Input (3..max_input_height + 2) ───────────────┤
//! └── StatusBar (1) ─────────────────────────────────┘

pub mod header;
pub mod input;
pub mod response;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Compute the main layout regions from a terminal area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub header: Rect,
    pub response: Rect,
    pub input: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    /// Compute layout with dynamic input height.
    ///
    /// The input area grows from 3 (1 line + borders) up to
    /// `max_input_height + 2`, but is capped so the header and status bar
    /// stay on screen.
    pub fn compute(area: Rect, input_lines: u16, max_input_height: u16) -> Self {
        let header_h: u16 = 3;
        let status_h: u16 = 1;

        let max_for_input = area.height.saturating_sub(header_h + status_h);
        let desired_h = input_lines
            .saturating_add(2)
            .clamp(3, max_input_height.max(1).saturating_add(2));
        let input_h = desired_h.min(max_for_input).max(1);

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header_h),
                Constraint::Fill(1),
                Constraint::Length(input_h),
                Constraint::Length(status_h),
            ])
            .split(area);

        Self {
            header: vertical[0],
            response: vertical[1],
            input: vertical[2],
            status_bar: vertical[3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_input() {
        let layout = MainLayout::compute(Rect::new(0, 0, 80, 24), 1, 8);
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.input.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.response.height, 24 - 3 - 3 - 1);
        assert_eq!(layout.status_bar.y, 23);
    }

    #[test]
    fn test_input_grows_up_to_max() {
        let layout = MainLayout::compute(Rect::new(0, 0, 80, 24), 4, 8);
        assert_eq!(layout.input.height, 6);

        let layout = MainLayout::compute(Rect::new(0, 0, 80, 24), 20, 8);
        assert_eq!(layout.input.height, 10);
    }

    #[test]
    fn test_tiny_terminal_keeps_chrome() {
        let layout = MainLayout::compute(Rect::new(0, 0, 40, 8), 20, 8);
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert!(layout.input.height <= 4);
    }

    #[test]
    fn test_huge_input_is_capped() {
        let layout = MainLayout::compute(Rect::new(0, 0, 80, 24), u16::MAX, 8);
        assert_eq!(layout.input.height, 10);
        assert_eq!(layout.status_bar.height, 1);

        let layout = MainLayout::compute(Rect::new(0, 0, 80, 24), u16::MAX, u16::MAX);
        assert_eq!(layout.input.height, 24 - 3 - 1);
    }
}
