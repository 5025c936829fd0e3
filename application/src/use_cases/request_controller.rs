//! Request lifecycle controller.
//!
//! Owns the session's [`RequestState`] and is the only writer of it.
//!
//! A submit is split in three steps so an event loop can keep handling input
//! while the outbound call runs:
//!
//! 1. [`begin_submit`](RequestController::begin_submit) — guard + `-> Loading`
//! 2. [`dispatch`](RequestController::dispatch) — the gateway call, detached
//!    from `&mut self`
//! 3. [`complete`](RequestController::complete) — `Loading -> Settled`
//!
//! [`submit`](RequestController::submit) runs all three in sequence.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::state_observer::{NoStateObserver, StateObserver};
use assistant_domain::util::log_preview;
use assistant_domain::{FAILURE_MESSAGE, Outcome, Question, RequestId, RequestState};
use futures::future::{BoxFuture, FutureExt};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A request that passed the guard and is waiting to be dispatched.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub request_id: RequestId,
    pub question: Question,
}

/// Gateway result tagged with the request it belongs to.
#[derive(Debug, Clone)]
pub struct Completion {
    pub request_id: RequestId,
    pub result: Result<String, GatewayError>,
}

/// Single-flight controller for the request slot.
pub struct RequestController {
    gateway: Arc<dyn LlmGateway>,
    observer: Arc<dyn StateObserver>,
    state: RequestState,
}

impl RequestController {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            gateway,
            observer: Arc::new(NoStateObserver),
            state: RequestState::new(),
        }
    }

    /// Attach an observer notified after every transition.
    pub fn with_observer(mut self, observer: Arc<dyn StateObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn query(&self) -> &str {
        self.state.query()
    }

    pub fn gateway(&self) -> &Arc<dyn LlmGateway> {
        &self.gateway
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        self.state.can_submit()
    }

    /// Replace the query. Returns false while a request is in flight.
    pub fn set_query(&mut self, text: impl Into<String>) -> bool {
        self.state.set_query(text).is_ok()
    }

    /// Guard and `Idle | Settled -> Loading`.
    ///
    /// Returns `None` (state untouched, gateway not to be called) when the
    /// query is blank or a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<PendingRequest> {
        match self.state.begin() {
            Ok((request_id, question)) => {
                info!(
                    request_id = %request_id,
                    model = %self.gateway.model(),
                    "Submitting: {}",
                    log_preview(question.content(), 80)
                );
                self.observer.on_transition(&self.state);
                Some(PendingRequest {
                    request_id,
                    question,
                })
            }
            Err(e) if e.is_in_flight() => {
                debug!(
                    request_id = ?self.state.in_flight(),
                    "Submit ignored: {}", e
                );
                None
            }
            Err(e) => {
                debug!("Submit ignored: {}", e);
                None
            }
        }
    }

    /// Build the gateway call for `pending`.
    ///
    /// The returned future owns everything it needs, so the caller can run
    /// it on another task while continuing to read `&self`.
    pub fn dispatch(&self, pending: PendingRequest) -> BoxFuture<'static, Completion> {
        let gateway = Arc::clone(&self.gateway);
        async move {
            let result = gateway.fetch_answer(pending.question.content()).await;
            Completion {
                request_id: pending.request_id,
                result,
            }
        }
        .boxed()
    }

    /// `Loading -> Settled`.
    ///
    /// Every failure kind settles to the same user-facing message; the kind
    /// and cause only go to the log. Returns false for a completion that does
    /// not belong to the request in flight.
    pub fn complete(&mut self, completion: Completion) -> bool {
        let Completion { request_id, result } = completion;

        let outcome = match result {
            Ok(answer) => {
                debug!(request_id = %request_id, bytes = answer.len(), "Answer received");
                Outcome::Answer(answer)
            }
            Err(e) => {
                warn!(request_id = %request_id, kind = e.kind(), "Request failed: {}", e);
                Outcome::Error(FAILURE_MESSAGE.to_string())
            }
        };

        if !self.state.settle(request_id, outcome) {
            warn!(
                request_id = %request_id,
                "Dropping completion for a request that is not in flight"
            );
            return false;
        }

        info!(request_id = %request_id, phase = self.state.phase().label(), "Request settled");
        self.observer.on_transition(&self.state);
        true
    }

    /// Run one full submit cycle. Returns false if the guard rejected it.
    pub async fn submit(&mut self) -> bool {
        let Some(pending) = self.begin_submit() else {
            return false;
        };
        let completion = self.dispatch(pending).await;
        self.complete(completion)
    }
}
