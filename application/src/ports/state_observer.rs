//! State observer port
//!
//! Presentation layers implement this to project the request state into a
//! view after every controller transition.

use assistant_domain::RequestState;

/// Callback invoked after each `Idle/Settled -> Loading` and
/// `Loading -> Settled` transition.
pub trait StateObserver: Send + Sync {
    fn on_transition(&self, state: &RequestState);
}

/// No-op observer for when nothing needs to react to transitions
pub struct NoStateObserver;

impl StateObserver for NoStateObserver {
    fn on_transition(&self, _state: &RequestState) {}
}
