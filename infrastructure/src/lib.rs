//! Infrastructure layer for query-assistant
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod credentials;
pub mod gemini;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGeminiConfig, FileOutputConfig,
    FileTuiConfig,
};
pub use credentials::ApiKey;
pub use gemini::{error::GeminiError, gateway::GeminiGateway};
