//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod gemini;
mod output;
mod tui;

pub use gemini::FileGeminiConfig;
pub use output::FileOutputConfig;
pub use tui::FileTuiConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("gemini.model cannot be empty")]
    EmptyModelName,

    #[error("gemini.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("tui.tick_millis cannot be 0")]
    InvalidTick,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model and endpoint selection
    pub gemini: FileGeminiConfig,
    /// TUI settings
    pub tui: FileTuiConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration, stopping at the first problem
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.gemini.model.as_str().trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        if self.gemini.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }
        if self.tui.tick_millis == 0 {
            return Err(ConfigValidationError::InvalidTick);
        }
        Ok(())
    }

    /// Render as TOML (for `--show-config`)
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assistant_domain::Model;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[gemini]
model = "gemini-2.0-flash"
base_url = "http://localhost:9000"

[tui]
max_input_height = 4
tick_millis = 50

[output]
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.model, Model::Gemini20Flash);
        assert_eq!(config.gemini.base_url, "http://localhost:9000");
        assert_eq!(config.tui.max_input_height, 4);
        assert_eq!(config.tui.tick_millis, 50);
        assert!(!config.output.color);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: FileConfig = toml::from_str("[tui]\ntick_millis = 250").unwrap();
        assert_eq!(config.tui.tick_millis, 250);
        // Defaults should apply
        assert_eq!(config.tui.max_input_height, 8);
        assert_eq!(config.gemini, FileGeminiConfig::default());
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        assert_eq!(FileConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_validate_empty_model() {
        let mut config = FileConfig::default();
        config.gemini.model = Model::Custom("  ".to_string());
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyModelName));
    }

    #[test]
    fn test_validate_empty_base_url() {
        let mut config = FileConfig::default();
        config.gemini.base_url = String::new();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyBaseUrl));
    }

    #[test]
    fn test_validate_zero_tick() {
        let mut config = FileConfig::default();
        config.tui.tick_millis = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTick));
    }

    #[test]
    fn test_to_toml_reparses() {
        let mut config = FileConfig::default();
        config.gemini.model = Model::Gemini25Pro;
        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("model = \"gemini-2.5-pro\""));
        let back: FileConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(back, config);
    }
}
