//! LLM Gateway port
//!
//! Defines the interface for the one outbound call to a generative-language
//! service.

use assistant_domain::Model;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The prompt was empty after trimming; nothing was sent.
    #[error("Invalid input: prompt cannot be empty")]
    InvalidInput,

    /// Transport, authentication, or service-side failure. The payload is a
    /// short diagnostic for logs; it is never shown to the user.
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl GatewayError {
    /// Stable kind name for structured log fields
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::InvalidInput => "invalid_input",
            GatewayError::ServiceUnavailable(_) => "service_unavailable",
        }
    }
}

/// Gateway for answer generation
///
/// This port defines how the application layer talks to a model provider.
/// Implementations (adapters) live in the infrastructure layer.
///
/// Contract for [`fetch_answer`](LlmGateway::fetch_answer):
/// - blank prompt → [`GatewayError::InvalidInput`], no network call
/// - success with an empty payload → the fixed fallback answer, not an error
/// - any other failure → [`GatewayError::ServiceUnavailable`]
/// - exactly one outbound call per invocation, no retries
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Model this gateway sends requests to
    fn model(&self) -> &Model;

    /// Send `prompt` as a single content item and return the text answer
    async fn fetch_answer(&self, prompt: &str) -> Result<String, GatewayError>;
}
