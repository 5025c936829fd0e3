//! TUI view state
//!
//! Holds only what the screen needs on top of the controller's
//! [`RequestState`](assistant_domain::RequestState): the editing buffer,
//! cursor, scroll position and spinner frame.

/// Spinner frames for the loading indicator
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct TuiState {
    /// Question being edited (mirrored into the controller after each edit)
    pub input: String,
    /// Cursor position as a byte offset into `input`
    pub cursor_pos: usize,
    /// Response scroll offset in lines from the top
    pub scroll_offset: u16,
    pub spinner_frame: usize,
    pub model_name: String,
    pub max_input_height: u16,
    pub should_quit: bool,
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            input: String::new(),
            cursor_pos: 0,
            scroll_offset: 0,
            spinner_frame: 0,
            model_name: String::new(),
            max_input_height: 8,
            should_quit: false,
        }
    }
}

impl TuiState {
    pub fn new(model_name: impl Into<String>, max_input_height: u16) -> Self {
        Self {
            model_name: model_name.into(),
            max_input_height,
            ..Self::default()
        }
    }

    // -- Input editing --

    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    /// Insert pasted text at the cursor, normalising CRLF/CR to LF
    pub fn insert_str(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        self.input.insert_str(self.cursor_pos, &normalized);
        self.cursor_pos += normalized.len();
    }

    pub fn delete_char(&mut self) {
        if self.cursor_pos > 0 {
            let prev_char_len = self.prev_char_len();
            self.input.remove(self.cursor_pos - prev_char_len);
            self.cursor_pos -= prev_char_len;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor_pos < self.input.len() {
            self.input.remove(self.cursor_pos);
        }
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.cursor_pos = 0;
    }

    pub fn cursor_left(&mut self) {
        self.cursor_pos -= self.prev_char_len();
    }

    pub fn cursor_right(&mut self) {
        let next_char_len = self.input[self.cursor_pos..]
            .chars()
            .next()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        self.cursor_pos += next_char_len;
    }

    pub fn cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_pos = self.input.len();
    }

    /// Insert a newline at the current cursor position
    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Count the number of lines in the input buffer
    pub fn input_line_count(&self) -> usize {
        self.input.split('\n').count()
    }

    fn prev_char_len(&self) -> usize {
        self.input[..self.cursor_pos]
            .chars()
            .next_back()
            .map(|c| c.len_utf8())
            .unwrap_or(0)
    }

    // -- Response scrolling --

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    /// Scroll down; the upper bound is applied when rendering
    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    // -- Spinner --

    pub fn advance_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }
}
