/// Default cap on inbound utterance length, in bytes.
const DEFAULT_MAX_MESSAGE_LENGTH: usize = 2_000;

/// Input sanitizer for inbound chat messages.
///
/// Strips control characters and enforces a length cap so oversized or
/// binary payloads never reach the engine or the logs.
pub struct Sanitizer {
    max_message_length: usize,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self {
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
        }
    }
}

impl Sanitizer {
    /// Create a sanitizer with a custom message length cap.
    pub fn new(max_message_length: usize) -> Self {
        Self { max_message_length }
    }

    /// Sanitize an utterance: enforce the length cap and strip control
    /// characters (keeping newlines, tabs, and carriage returns).
    pub fn sanitize(&self, input: &str) -> SanitizeResult {
        if input.len() > self.max_message_length {
            return SanitizeResult::Rejected("Message exceeds maximum length".to_string());
        }

        let cleaned: String = input
            .chars()
            .filter(|c| !c.is_control() || *c == '\n' || *c == '\t' || *c == '\r')
            .collect();

        if cleaned.is_empty() && !input.is_empty() {
            return SanitizeResult::Rejected(
                "Message contains only control characters".to_string(),
            );
        }

        if cleaned != input {
            SanitizeResult::Cleaned(cleaned)
        } else {
            SanitizeResult::Clean(cleaned)
        }
    }
}

/// Outcome of sanitizing one utterance.
#[derive(Debug, PartialEq)]
pub enum SanitizeResult {
    /// Input was already clean.
    Clean(String),
    /// Input was cleaned (control characters removed).
    Cleaned(String),
    /// Input was rejected entirely.
    Rejected(String),
}

impl SanitizeResult {
    /// The usable text, or `None` when the input was rejected.
    pub fn into_string(self) -> Option<String> {
        match self {
            SanitizeResult::Clean(s) | SanitizeResult::Cleaned(s) => Some(s),
            SanitizeResult::Rejected(_) => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_input_passes_through() {
        let s = Sanitizer::default();
        let result = s.sanitize("How do I deal with cravings?");
        assert_eq!(
            result.into_string().as_deref(),
            Some("How do I deal with cravings?")
        );
    }

    #[test]
    fn test_control_chars_stripped() {
        let s = Sanitizer::default();
        let result = s.sanitize("hello\x00\x01world");
        assert_eq!(result, SanitizeResult::Cleaned("helloworld".to_string()));
    }

    #[test]
    fn test_over_length_rejected() {
        let s = Sanitizer::new(10);
        assert!(s
            .sanitize("this message is far too long")
            .into_string()
            .is_none());
    }

    #[test]
    fn test_empty_input_is_clean() {
        // An empty message is valid; the engine answers it with the
        // fallback reply rather than a protocol error.
        let s = Sanitizer::default();
        assert_eq!(s.sanitize("").into_string().as_deref(), Some(""));
    }
}
