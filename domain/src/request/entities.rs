//! Request state entities
//!
//! [`RequestState`] is the only mutable record in the system. Its phase is a
//! single enum, so "answer and error both set" or "loading with an answer"
//! cannot be represented.

use crate::core::error::DomainError;
use crate::core::question::Question;

/// Identifier of one dispatched request, unique per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl RequestId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "req-{}", self.0)
    }
}

/// Result of one request, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Answer(String),
    Error(String),
}

/// Lifecycle phase of the request slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestPhase {
    /// Nothing submitted yet in this session
    #[default]
    Idle,
    /// A request is in flight
    Loading { request_id: RequestId },
    /// The last request finished
    Settled { outcome: Outcome },
}

impl RequestPhase {
    pub fn label(&self) -> &'static str {
        match self {
            RequestPhase::Idle => "idle",
            RequestPhase::Loading { .. } => "loading",
            RequestPhase::Settled {
                outcome: Outcome::Answer(_),
            } => "answered",
            RequestPhase::Settled {
                outcome: Outcome::Error(_),
            } => "failed",
        }
    }
}

/// The session's request record: current query plus lifecycle phase.
#[derive(Debug, Clone, Default)]
pub struct RequestState {
    query: String,
    phase: RequestPhase,
    next_id: u64,
}

impl RequestState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn phase(&self) -> &RequestPhase {
        &self.phase
    }

    /// True strictly between `begin` and `settle`
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, RequestPhase::Loading { .. })
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        match self.phase {
            RequestPhase::Loading { request_id } => Some(request_id),
            _ => None,
        }
    }

    pub fn answer(&self) -> Option<&str> {
        match &self.phase {
            RequestPhase::Settled {
                outcome: Outcome::Answer(text),
            } => Some(text),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            RequestPhase::Settled {
                outcome: Outcome::Error(text),
            } => Some(text),
            _ => None,
        }
    }

    /// Whether a submit would be accepted right now
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !Question::is_blank(&self.query)
    }

    /// Replace the query text. Rejected while a request is in flight.
    pub fn set_query(&mut self, text: impl Into<String>) -> Result<(), DomainError> {
        if self.is_loading() {
            return Err(DomainError::RequestInFlight);
        }
        self.query = text.into();
        Ok(())
    }

    /// `Idle | Settled -> Loading`. Clears any previous outcome.
    pub fn begin(&mut self) -> Result<(RequestId, Question), DomainError> {
        if self.is_loading() {
            return Err(DomainError::RequestInFlight);
        }
        let question = Question::try_new(self.query.clone())?;

        self.next_id += 1;
        let request_id = RequestId(self.next_id);
        self.phase = RequestPhase::Loading { request_id };
        Ok((request_id, question))
    }

    /// `Loading -> Settled`. Returns false (and changes nothing) when
    /// `request_id` is not the request in flight.
    pub fn settle(&mut self, request_id: RequestId, outcome: Outcome) -> bool {
        if self.in_flight() != Some(request_id) {
            return false;
        }
        self.phase = RequestPhase::Settled { outcome };
        true
    }
}
