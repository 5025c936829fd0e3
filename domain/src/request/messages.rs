//! Fixed user-facing messages.

/// Shown as the answer when the service succeeds with an empty payload.
pub const FALLBACK_ANSWER: &str =
    "I'm sorry, I couldn't generate a response for that. Please try a different query.";

/// Shown for every gateway failure, whatever the cause.
pub const FAILURE_MESSAGE: &str =
    "Failed to get a response. Please check your connection and try again.";

/// Substitute the fallback for an empty or missing payload.
pub fn answer_or_fallback(payload: Option<String>) -> String {
    match payload {
        Some(text) if !text.is_empty() => text,
        _ => FALLBACK_ANSWER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_passes_through() {
        assert_eq!(
            answer_or_fallback(Some("Rayleigh scattering...".to_string())),
            "Rayleigh scattering..."
        );
    }

    #[test]
    fn test_empty_and_missing_use_fallback() {
        assert_eq!(answer_or_fallback(Some(String::new())), FALLBACK_ANSWER);
        assert_eq!(answer_or_fallback(None), FALLBACK_ANSWER);
    }

    #[test]
    fn test_whitespace_payload_is_kept() {
        // Only a falsy (empty) payload triggers the fallback
        assert_eq!(answer_or_fallback(Some(" ".to_string())), " ");
    }
}
