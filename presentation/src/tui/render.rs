//! TUI rendering

use super::state::TuiState;
use super::view::ScreenView;
use super::widgets::{
    MainLayout, header::HeaderWidget, input::InputWidget, response::ResponseWidget,
    status_bar::StatusBarWidget,
};
use assistant_domain::RequestState;

/// Render one frame from the view state and a fresh projection of the
/// request state.
pub(super) fn render(frame: &mut ratatui::Frame, state: &TuiState, request: &RequestState) {
    let view = ScreenView::project(request);
    let layout = MainLayout::compute(
        frame.area(),
        u16::try_from(state.input_line_count()).unwrap_or(u16::MAX),
        state.max_input_height,
    );

    frame.render_widget(HeaderWidget::new(state, &view), layout.header);
    frame.render_widget(ResponseWidget::new(state, view.response), layout.response);
    frame.render_widget(InputWidget::new(state, &view), layout.input);
    frame.render_widget(StatusBarWidget::new(&view), layout.status_bar);
}
