//! Gemini configuration from TOML (`[gemini]` section)

use crate::gemini::gateway::DEFAULT_BASE_URL;
use assistant_domain::Model;
use serde::{Deserialize, Serialize};

/// Raw Gemini configuration from TOML
///
/// # Example
///
/// ```toml
/// [gemini]
/// model = "gemini-2.5-pro"
/// base_url = "https://generativelanguage.googleapis.com"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Model identifier sent on the wire (unknown names are passed through)
    pub model: Model,
    /// API origin, without the `/v1beta/...` path
    pub base_url: String,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
