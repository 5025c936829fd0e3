//! TUI application — main loop
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)
//!   ├─ crossterm EventStream ── KeyHandler ── apply_action ──┐
//!   │                                                        │ begin_submit()
//!   ├─ JoinSet<Completion> <── spawn(controller.dispatch) <──┘
//!   │      └── controller.complete()
//!   └─ tick_interval (spinner)
//! ```
//!
//! The gateway call runs in the `JoinSet`, so key events keep being
//! processed while a request is in flight.

use super::keys::{Action, KeyHandler};
use super::render;
use super::state::TuiState;
use assistant_application::{Completion, GatewayError, PendingRequest, RequestController};
use crossterm::{
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        Event, EventStream, KeyboardEnhancementFlags, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use futures::stream::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::panic::PanicHookInfo;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, error, info};

/// Lines moved by PageUp/PageDown
const PAGE_LINES: u16 = 10;

type PanicHook = dyn Fn(&PanicHookInfo<'_>) + Send + Sync + 'static;

/// Screen settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TuiOptions {
    /// Redraw interval while idle or waiting
    pub tick: Duration,
    /// Maximum height of the input box in text lines
    pub max_input_height: u16,
}

impl Default for TuiOptions {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(100),
            max_input_height: 8,
        }
    }
}

/// Main TUI application
pub struct TuiApp {
    controller: RequestController,
    options: TuiOptions,
    keyboard_enhanced: bool,
}

impl TuiApp {
    pub fn new(controller: RequestController, options: TuiOptions) -> Self {
        Self {
            controller,
            options,
            keyboard_enhanced: false,
        }
    }

    pub fn controller(&self) -> &RequestController {
        &self.controller
    }

    /// Run the TUI main loop until the user quits
    pub async fn run(&mut self) -> io::Result<()> {
        let mut terminal = self.setup_terminal()?;
        let previous_hook = install_panic_hook(leave_terminal_on_panic);
        let result = self.event_loop(&mut terminal).await;
        restore_panic_hook(previous_hook);
        self.restore_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&mut self) -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
        self.enter_terminal_modes()?;
        Terminal::new(CrosstermBackend::new(io::stdout()))
    }

    fn enter_terminal_modes(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        )?;

        // Lets Shift+Enter arrive as a distinct key on terminals that support it
        self.keyboard_enhanced = supports_keyboard_enhancement().unwrap_or(false);
        if self.keyboard_enhanced {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
            )?;
        }
        debug!(keyboard_enhanced = self.keyboard_enhanced, "Terminal ready");
        Ok(())
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> io::Result<()> {
        disable_raw_mode()?;
        if self.keyboard_enhanced {
            execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
        }
        execute!(
            terminal.backend_mut(),
            DisableBracketedPaste,
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> io::Result<()> {
        let mut state = TuiState::new(
            self.controller.gateway().model().to_string(),
            self.options.max_input_height,
        );
        state.insert_str(self.controller.query());

        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(self.options.tick);
        tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        let mut tasks: JoinSet<Completion> = JoinSet::new();

        info!(model = %state.model_name, "Interactive session started");

        loop {
            terminal.draw(|frame| render::render(frame, &state, self.controller.state()))?;

            if state.should_quit {
                break;
            }

            tokio::select! {
                // Finished gateway calls
                Some(joined) = tasks.join_next() => {
                    if self.on_task_joined(joined) {
                        // The panic hook already left the alternate screen
                        self.enter_terminal_modes()?;
                        terminal.clear()?;
                    }
                }

                // Terminal events (keyboard, paste, mouse, resize)
                event = event_stream.next() => {
                    match event {
                        Some(Ok(event)) => {
                            if let Some(pending) = self.handle_terminal_event(&mut state, event) {
                                tasks.spawn(self.controller.dispatch(pending));
                            }
                        }
                        Some(Err(e)) => return Err(e),
                        None => break,
                    }
                }

                // Tick for spinner animation
                _ = tick.tick() => {
                    if self.controller.state().is_loading() {
                        state.advance_spinner();
                    }
                }
            }
        }

        if !tasks.is_empty() {
            debug!("Quitting with a request in flight; dropping it");
        }
        info!("Interactive session ended");
        Ok(())
    }

    /// Settle the request a finished task belongs to.
    ///
    /// Returns true when the task panicked.
    fn on_task_joined(&mut self, joined: Result<Completion, JoinError>) -> bool {
        match joined {
            Ok(completion) => {
                self.controller.complete(completion);
                false
            }
            Err(e) => {
                error!("Request task failed: {}", e);
                // Settle so the screen does not stay in Loading forever
                if let Some(request_id) = self.controller.state().in_flight() {
                    self.controller.complete(Completion {
                        request_id,
                        result: Err(GatewayError::ServiceUnavailable(format!(
                            "request task failed: {}",
                            e
                        ))),
                    });
                }
                e.is_panic()
            }
        }
    }

    /// Handle a terminal (crossterm) event
    fn handle_terminal_event(
        &mut self,
        state: &mut TuiState,
        event: Event,
    ) -> Option<PendingRequest> {
        match event {
            Event::Key(key) => apply_action(&mut self.controller, state, KeyHandler::handle(key)),
            Event::Paste(text) => {
                if self.controller.state().is_loading() {
                    return None;
                }
                state.insert_str(&text);
                self.controller.set_query(state.input.clone());
                None
            }
            Event::Mouse(mouse) => {
                match mouse.kind {
                    MouseEventKind::ScrollUp => state.scroll_up(1),
                    MouseEventKind::ScrollDown => state.scroll_down(1),
                    _ => {}
                }
                None
            }
            // Terminal auto-resizes on next draw
            _ => None,
        }
    }
}

/// Install a panic hook that runs `teardown` before the previous hook.
///
/// Returns the previous hook for [`restore_panic_hook`].
fn install_panic_hook(teardown: fn(&PanicHookInfo<'_>)) -> Arc<PanicHook> {
    let previous: Arc<PanicHook> = Arc::from(std::panic::take_hook());
    let chained = Arc::clone(&previous);
    std::panic::set_hook(Box::new(move |info| {
        teardown(info);
        chained(info);
    }));
    previous
}

fn restore_panic_hook(previous: Arc<PanicHook>) {
    std::panic::set_hook(Box::new(move |info| previous(info)));
}

fn leave_terminal_on_panic(_info: &PanicHookInfo<'_>) {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        PopKeyboardEnhancementFlags,
        DisableBracketedPaste,
        LeaveAlternateScreen,
        DisableMouseCapture
    );
}

/// Apply a semantic key action.
///
/// Returns the request to dispatch when the action was an accepted submit.
/// Edits are dropped while a request is in flight; the query is kept after
/// submit so it can be refined and asked again.
pub(super) fn apply_action(
    controller: &mut RequestController,
    state: &mut TuiState,
    action: Action,
) -> Option<PendingRequest> {
    let is_edit = action.is_edit();
    if is_edit && controller.state().is_loading() {
        return None;
    }

    match action {
        Action::Submit => {
            let pending = controller.begin_submit();
            if pending.is_some() {
                state.scroll_to_top();
            }
            return pending;
        }

        // Text editing
        Action::InsertNewline => state.insert_newline(),
        Action::InsertChar(c) => state.insert_char(c),
        Action::DeleteChar => state.delete_char(),
        Action::DeleteForward => state.delete_forward(),
        Action::ClearInput => state.clear_input(),
        Action::CursorLeft => state.cursor_left(),
        Action::CursorRight => state.cursor_right(),
        Action::CursorStart => state.cursor_home(),
        Action::CursorEnd => state.cursor_end(),

        // Response scrolling
        Action::ScrollUp => state.scroll_up(1),
        Action::ScrollDown => state.scroll_down(1),
        Action::PageUp => state.scroll_up(PAGE_LINES),
        Action::PageDown => state.scroll_down(PAGE_LINES),

        Action::Quit => state.should_quit = true,
        Action::None => {}
    }

    if is_edit {
        controller.set_query(state.input.clone());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use assistant_application::LlmGateway;
    use assistant_domain::{FAILURE_MESSAGE, Model};
    use async_trait::async_trait;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct EchoGateway {
        model: Model,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl LlmGateway for EchoGateway {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn fetch_answer(&self, prompt: &str) -> Result<String, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("echo: {}", prompt))
        }
    }

    fn setup() -> (RequestController, TuiState, Arc<EchoGateway>) {
        let gateway = Arc::new(EchoGateway {
            model: Model::default(),
            calls: AtomicUsize::new(0),
        });
        let controller = RequestController::new(gateway.clone());
        (controller, TuiState::new("gemini-2.5-flash", 8), gateway)
    }

    fn press(
        controller: &mut RequestController,
        state: &mut TuiState,
        code: KeyCode,
        modifiers: KeyModifiers,
    ) -> Option<PendingRequest> {
        apply_action(controller, state, KeyHandler::handle(KeyEvent::new(code, modifiers)))
    }

    fn type_text(controller: &mut RequestController, state: &mut TuiState, text: &str) {
        for c in text.chars() {
            press(controller, state, KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    #[test]
    fn test_typing_updates_query() {
        let (mut controller, mut state, _) = setup();
        type_text(&mut controller, &mut state, "sky");
        press(&mut controller, &mut state, KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(controller.query(), "sk");
        assert!(controller.can_submit());
    }

    #[test]
    fn test_enter_on_blank_input_does_nothing() {
        let (mut controller, mut state, _) = setup();
        type_text(&mut controller, &mut state, "   ");
        let pending = press(&mut controller, &mut state, KeyCode::Enter, KeyModifiers::NONE);
        assert!(pending.is_none());
        assert!(!controller.state().is_loading());
    }

    #[test]
    fn test_shift_enter_inserts_newline_instead_of_submitting() {
        let (mut controller, mut state, _) = setup();
        type_text(&mut controller, &mut state, "line one");
        let pending = press(&mut controller, &mut state, KeyCode::Enter, KeyModifiers::SHIFT);
        assert!(pending.is_none());
        type_text(&mut controller, &mut state, "line two");
        assert_eq!(controller.query(), "line one\nline two");
        assert!(!controller.state().is_loading());
    }

    #[tokio::test]
    async fn test_enter_submits_once_and_locks_input() {
        let (mut controller, mut state, gateway) = setup();
        type_text(&mut controller, &mut state, "Why is the sky blue?");

        let pending = press(&mut controller, &mut state, KeyCode::Enter, KeyModifiers::NONE)
            .expect("submit accepted");
        assert!(controller.state().is_loading());

        // Repeated Enter and edits while loading are ignored
        assert!(press(&mut controller, &mut state, KeyCode::Enter, KeyModifiers::NONE).is_none());
        type_text(&mut controller, &mut state, "!!!");
        assert_eq!(state.input, "Why is the sky blue?");
        assert_eq!(controller.query(), "Why is the sky blue?");

        let completion = controller.dispatch(pending).await;
        controller.complete(completion);

        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
        assert_eq!(controller.state().answer(), Some("echo: Why is the sky blue?"));
        // Query is kept after submit
        assert_eq!(controller.query(), "Why is the sky blue?");
    }

    #[test]
    fn test_scrolling_and_quit_work_while_loading() {
        let (mut controller, mut state, _) = setup();
        type_text(&mut controller, &mut state, "q");
        press(&mut controller, &mut state, KeyCode::Enter, KeyModifiers::NONE);

        press(&mut controller, &mut state, KeyCode::PageDown, KeyModifiers::NONE);
        assert_eq!(state.scroll_offset, PAGE_LINES);

        press(&mut controller, &mut state, KeyCode::Esc, KeyModifiers::NONE);
        assert!(state.should_quit);
    }

    #[test]
    fn test_submit_resets_scroll() {
        let (mut controller, mut state, _) = setup();
        type_text(&mut controller, &mut state, "q");
        state.scroll_down(5);
        press(&mut controller, &mut state, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_failed_task_settles_with_generic_message() {
        let (controller, mut state, _) = setup();
        let mut app = TuiApp::new(controller, TuiOptions::default());
        type_text(&mut app.controller, &mut state, "test");
        press(&mut app.controller, &mut state, KeyCode::Enter, KeyModifiers::NONE);

        let request_id = app.controller.state().in_flight().unwrap();
        app.on_task_joined(Ok(Completion {
            request_id,
            result: Err(GatewayError::ServiceUnavailable("connection reset".into())),
        }));

        assert_eq!(app.controller().state().error(), Some(FAILURE_MESSAGE));
    }

    struct PanickingGateway {
        model: Model,
    }

    #[async_trait]
    impl LlmGateway for PanickingGateway {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn fetch_answer(&self, _prompt: &str) -> Result<String, GatewayError> {
            panic!("gateway task blew up")
        }
    }

    #[tokio::test]
    async fn test_panicked_task_settles_with_failure() {
        let gateway = Arc::new(PanickingGateway {
            model: Model::default(),
        });
        let mut app = TuiApp::new(RequestController::new(gateway), TuiOptions::default());
        let mut state = TuiState::new("gemini-2.5-flash", 8);
        type_text(&mut app.controller, &mut state, "q");
        let pending = press(&mut app.controller, &mut state, KeyCode::Enter, KeyModifiers::NONE)
            .expect("submit accepted");

        let mut tasks: JoinSet<Completion> = JoinSet::new();
        tasks.spawn(app.controller.dispatch(pending));
        let joined = tasks.join_next().await.expect("one task");

        assert!(app.on_task_joined(joined));
        assert!(!app.controller().state().is_loading());
        assert_eq!(app.controller().state().error(), Some(FAILURE_MESSAGE));
    }

    #[tokio::test]
    async fn test_finished_task_is_not_a_panic() {
        let (controller, mut state, _) = setup();
        let mut app = TuiApp::new(controller, TuiOptions::default());
        type_text(&mut app.controller, &mut state, "q");
        let pending = press(&mut app.controller, &mut state, KeyCode::Enter, KeyModifiers::NONE)
            .expect("submit accepted");

        let mut tasks: JoinSet<Completion> = JoinSet::new();
        tasks.spawn(app.controller.dispatch(pending));
        let joined = tasks.join_next().await.expect("one task");

        assert!(!app.on_task_joined(joined));
        assert_eq!(app.controller().state().answer(), Some("echo: q"));
    }

    static TEARDOWNS: AtomicUsize = AtomicUsize::new(0);
    static PREVIOUS_HOOK_CALLS: AtomicUsize = AtomicUsize::new(0);

    fn is_marker(info: &PanicHookInfo<'_>) -> bool {
        info.payload().downcast_ref::<&str>() == Some(&"panic hook marker")
    }

    fn count_teardown(info: &PanicHookInfo<'_>) {
        if is_marker(info) {
            TEARDOWNS.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_panic_hook_is_removed_after_restore() {
        std::panic::set_hook(Box::new(|info| {
            if is_marker(info) {
                PREVIOUS_HOOK_CALLS.fetch_add(1, Ordering::SeqCst);
            }
        }));

        let previous = install_panic_hook(count_teardown);
        let _ = std::panic::catch_unwind(|| panic!("panic hook marker"));
        assert_eq!(TEARDOWNS.load(Ordering::SeqCst), 1);
        assert_eq!(PREVIOUS_HOOK_CALLS.load(Ordering::SeqCst), 1);

        restore_panic_hook(previous);
        let _ = std::panic::catch_unwind(|| panic!("panic hook marker"));
        assert_eq!(TEARDOWNS.load(Ordering::SeqCst), 1);
        assert_eq!(PREVIOUS_HOOK_CALLS.load(Ordering::SeqCst), 2);

        let _ = std::panic::take_hook();
    }
}
