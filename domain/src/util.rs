//! Shared utility functions.

/// Truncate a string to at most `max_bytes` without splitting a UTF-8
/// character.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Single-line preview of user text for log fields.
///
/// Newlines become `⏎` and the result is cut at `max_bytes` with a trailing
/// `...` when shortened.
pub fn log_preview(s: &str, max_bytes: usize) -> String {
    let cut = truncate_str(s, max_bytes);
    let mut out = cut.replace('\n', "⏎");
    if cut.len() < s.len() {
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_ascii() {
        assert_eq!(truncate_str("hello world", 5), "hello");
    }

    #[test]
    fn truncate_no_op_when_short() {
        assert_eq!(truncate_str("hi", 10), "hi");
    }

    #[test]
    fn truncate_multibyte_boundary() {
        // 'é' is 2 bytes; cutting at byte 2 would land inside it
        let s = "aéb";
        assert_eq!(truncate_str(s, 2), "a");
        assert_eq!(truncate_str(s, 3), "aé");
    }

    #[test]
    fn preview_flattens_newlines() {
        assert_eq!(log_preview("line one\nline two", 100), "line one⏎line two");
    }

    #[test]
    fn preview_marks_truncation() {
        assert_eq!(log_preview("Why is the sky blue?", 6), "Why is...");
        assert_eq!(log_preview("short", 6), "short");
    }
}
