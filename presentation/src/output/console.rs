//! Console output formatter for one-shot answers

use assistant_domain::{Outcome, RequestPhase, RequestState};
use colored::Colorize;

/// Formats a settled request for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Turn colored output off for `[output] color = false`; otherwise
    /// `colored` decides from the terminal
    pub fn configure_color(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// Format the settled outcome of `state`.
    ///
    /// Returns `None` while nothing has settled yet.
    pub fn format(state: &RequestState) -> Option<String> {
        match state.phase() {
            RequestPhase::Settled { outcome } => Some(Self::format_outcome(outcome)),
            _ => None,
        }
    }

    pub fn format_outcome(outcome: &Outcome) -> String {
        match outcome {
            Outcome::Answer(text) => format!("{}\n", text),
            Outcome::Error(message) => format!("{} {}\n", "Error:".red().bold(), message),
        }
    }

    /// Question echo shown above the answer (verbose runs only)
    pub fn question_header(question: &str, model: &str) -> String {
        format!(
            "{} {}\n{} {}\n",
            "Q:".cyan().bold(),
            question,
            "Model:".dimmed(),
            model
        )
    }
}
