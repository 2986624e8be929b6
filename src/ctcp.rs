//! CTCP ACTION handling for `/me` messages.
//!
//! Twitch delivers `/me` lines as a PRIVMSG whose trailing text is wrapped in
//! the CTCP delimiter: `\x01ACTION waves\x01`.

/// CTCP delimiter byte.
pub const CTCP_DELIM: char = '\x01';

/// Leading marker of an ACTION payload, delimiter included.
pub const ACTION_PREFIX: &str = "\x01ACTION";

/// Strips the CTCP ACTION wrapper from `text`.
///
/// Returns the inner text and whether a wrapper was present. The 7-character
/// marker is removed, leaving the space that separates it from the payload,
/// and a trailing delimiter is removed if present.
///
/// ```
/// use tmi_proto::ctcp::strip_action;
///
/// assert_eq!(strip_action("\x01ACTION waves\x01"), (" waves", true));
/// assert_eq!(strip_action("plain text"), ("plain text", false));
/// ```
pub fn strip_action(text: &str) -> (&str, bool) {
    match text.strip_prefix(ACTION_PREFIX) {
        Some(inner) => (inner.strip_suffix(CTCP_DELIM).unwrap_or(inner), true),
        None => (text, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_action() {
        assert_eq!(strip_action("\x01ACTION dances\x01"), (" dances", true));
    }

    #[test]
    fn test_strip_action_missing_trailing_delimiter() {
        assert_eq!(strip_action("\x01ACTION dances"), (" dances", true));
    }

    #[test]
    fn test_strip_action_empty_payload() {
        assert_eq!(strip_action("\x01ACTION\x01"), ("", true));
        assert_eq!(strip_action("\x01ACTION"), ("", true));
    }

    #[test]
    fn test_strip_action_other_ctcp_untouched() {
        assert_eq!(strip_action("\x01VERSION\x01"), ("\x01VERSION\x01", false));
    }
}
