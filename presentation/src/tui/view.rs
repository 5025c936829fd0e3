//! State-to-view projection
//!
//! Widgets never inspect [`RequestState`] directly; every frame they render
//! the projection computed here.

use assistant_domain::{Outcome, RequestPhase, RequestState};

/// What the response panel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseView<'a> {
    /// Nothing asked yet
    Placeholder,
    /// Loading indicator
    Thinking,
    /// Error panel
    Error(&'a str),
    /// Answer panel (line breaks preserved)
    Answer(&'a str),
}

impl<'a> ResponseView<'a> {
    pub fn project(state: &'a RequestState) -> Self {
        match state.phase() {
            RequestPhase::Idle => ResponseView::Placeholder,
            RequestPhase::Loading { .. } => ResponseView::Thinking,
            RequestPhase::Settled {
                outcome: Outcome::Answer(text),
            } => ResponseView::Answer(text),
            RequestPhase::Settled {
                outcome: Outcome::Error(message),
            } => ResponseView::Error(message),
        }
    }

    /// Short label for the header
    pub fn status_label(&self) -> &'static str {
        match self {
            ResponseView::Placeholder => "Ready",
            ResponseView::Thinking => "Thinking...",
            ResponseView::Error(_) => "Failed",
            ResponseView::Answer(_) => "Answered",
        }
    }
}

/// Everything a frame needs from the request state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenView<'a> {
    pub response: ResponseView<'a>,
    /// Submit control enabled (not loading and input not blank)
    pub submit_enabled: bool,
    /// Input box read-only while a request is in flight
    pub input_locked: bool,
}

impl<'a> ScreenView<'a> {
    pub fn project(state: &'a RequestState) -> Self {
        Self {
            response: ResponseView::project(state),
            submit_enabled: state.can_submit(),
            input_locked: state.is_loading(),
        }
    }
}
