//! Domain layer for query-assistant
//!
//! This crate contains the request state machine and its value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Question**: a prompt that is non-empty after trimming
//! - **RequestState**: the single mutable record (query + lifecycle phase)
//! - **Single-flight**: at most one request is in flight per session; a
//!   second `begin` while loading is rejected

pub mod core;
pub mod request;
pub mod util;

// Re-export commonly used types
pub use core::{error::DomainError, model::Model, question::Question};
pub use request::{
    entities::{Outcome, RequestId, RequestPhase, RequestState},
    messages::{FAILURE_MESSAGE, FALLBACK_ANSWER, answer_or_fallback},
};
