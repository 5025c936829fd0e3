//! TUI (Text User Interface) module for query-assistant
//!
//! A single screen: header, response panel, multiline question box and a
//! status bar, driven by the request controller.

mod app;
mod keys;
mod render;
mod state;
mod view;
mod widgets;

pub use app::{TuiApp, TuiOptions};
pub use keys::{Action, KeyHandler};
pub use state::TuiState;
pub use view::{ResponseView, ScreenView};
pub use widgets::MainLayout;
