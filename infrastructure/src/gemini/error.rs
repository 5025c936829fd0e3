//! Error types for the Gemini adapter

use assistant_application::GatewayError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when calling the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("API key not set (expected GEMINI_API_KEY or API_KEY)")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<GeminiError> for GatewayError {
    fn from(err: GeminiError) -> Self {
        GatewayError::ServiceUnavailable(err.to_string())
    }
}
