//! TUI configuration from TOML (`[tui]` section)

use serde::{Deserialize, Serialize};

/// Raw TUI configuration from TOML
///
/// # Example
///
/// ```toml
/// [tui]
/// max_input_height = 8
/// tick_millis = 100
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTuiConfig {
    /// Maximum height of the input box in text lines (default: 8)
    pub max_input_height: u16,
    /// Redraw interval in milliseconds while waiting (default: 100)
    pub tick_millis: u64,
}

impl Default for FileTuiConfig {
    fn default() -> Self {
        Self {
            max_input_height: 8,
            tick_millis: 100,
        }
    }
}
