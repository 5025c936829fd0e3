//! Loading spinner driven by request state transitions

use assistant_application::StateObserver;
use assistant_domain::RequestState;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Shows an `indicatif` spinner while a request is loading.
///
/// The spinner is started on `-> Loading` and cleared on `-> Settled`, so the
/// answer is printed on a clean line.
pub struct SpinnerObserver {
    model: String,
    tick: Duration,
    bar: Mutex<Option<ProgressBar>>,
}

impl SpinnerObserver {
    pub fn new(model: impl Into<String>, tick: Duration) -> Self {
        Self {
            model: model.into(),
            tick,
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn is_spinning(&self) -> bool {
        self.bar.lock().map(|b| b.is_some()).unwrap_or(false)
    }
}

impl StateObserver for SpinnerObserver {
    fn on_transition(&self, state: &RequestState) {
        let Ok(mut slot) = self.bar.lock() else {
            return;
        };

        if state.is_loading() {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::spinner_style());
            pb.set_prefix(self.model.clone());
            pb.set_message("Thinking...");
            pb.enable_steady_tick(self.tick);
            if let Some(old) = slot.replace(pb) {
                old.finish_and_clear();
            }
        } else if let Some(pb) = slot.take() {
            pb.finish_and_clear();
        }
    }
}
