//! Application layer for query-assistant
//!
//! This crate contains the request lifecycle controller and the ports it
//! depends on. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway},
    state_observer::{NoStateObserver, StateObserver},
};
pub use use_cases::request_controller::{Completion, PendingRequest, RequestController};
