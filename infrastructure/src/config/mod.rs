//! Configuration file loading for query-assistant
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `QUERY_ASSISTANT_*` (e.g. `QUERY_ASSISTANT_GEMINI__MODEL`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./query-assistant.toml` or `./.query-assistant.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/query-assistant/config.toml`
//! 5. Fallback: `~/.config/query-assistant/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileGeminiConfig, FileOutputConfig, FileTuiConfig,
};
pub use loader::ConfigLoader;
