//! IRCv3 message tag splitting and escaping.
//!
//! Twitch escapes three characters in tag values: `;` as `\:`, space as `\s`
//! and backslash as `\\`.

use std::fmt::{Result as FmtResult, Write};

/// Tag keys promoted to dedicated [`Message`](super::Message) fields.
pub const PROMOTED_KEYS: &[&str] = &[BADGES, COLOR, DISPLAY_NAME, EMOTES, USER_TYPE];

/// Badge list, `name/revision` pairs.
pub const BADGES: &str = "badges";
/// Username color, e.g. `#0B8E70`.
pub const COLOR: &str = "color";
/// Display name with the user's capitalization.
pub const DISPLAY_NAME: &str = "display-name";
/// Emote ids with their codepoint ranges.
pub const EMOTES: &str = "emotes";
/// User type such as `mod` or `staff`.
pub const USER_TYPE: &str = "user-type";
/// Timeout length in seconds, absent for permanent bans.
pub const BAN_DURATION: &str = "ban-duration";
/// Moderator-supplied ban reason.
pub const BAN_REASON: &str = "ban-reason";

/// Escape a tag value for serialization.
///
/// Inverse of [`unescape_tag_value`].
pub fn escape_tag_value(f: &mut dyn Write, value: &str) -> FmtResult {
    for c in value.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            ';' => f.write_str("\\:")?,
            ' ' => f.write_str("\\s")?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}

/// Unescape a tag value from wire format.
///
/// The escapes are decoded in a fixed order, `\:` then `\s` then `\\`, each
/// over the whole value. Backslashes collapse last.
pub fn unescape_tag_value(value: &str) -> String {
    if !value.contains('\\') {
        return value.to_owned();
    }
    value
        .replace("\\:", ";")
        .replace("\\s", " ")
        .replace("\\\\", "\\")
}

/// Iterates over the `key=value` pairs of a tag block.
///
/// Values are returned raw. Iteration ends at the first token that has no
/// `=`, so tags after a malformed token are never seen.
pub fn raw_tags(tags: &str) -> impl Iterator<Item = (&str, &str)> {
    tags.split(';').map_while(|token| {
        let pair = token.split_once('=');
        if pair.is_none() {
            #[cfg(feature = "tracing")]
            tracing::debug!(token = %token, "tag without '=', ignoring remaining tags");
        }
        pair
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape_semicolon() {
        assert_eq!(unescape_tag_value("a\\:b"), "a;b");
    }

    #[test]
    fn test_unescape_space() {
        assert_eq!(unescape_tag_value("hello\\sworld"), "hello world");
    }

    #[test]
    fn test_unescape_backslash() {
        assert_eq!(unescape_tag_value("path\\\\file"), "path\\file");
    }

    #[test]
    fn test_unescape_combined() {
        let input = "a\\:b\\sc\\\\d";
        let expected = "a;b c\\d";
        assert_eq!(unescape_tag_value(input), expected);
    }

    #[test]
    fn test_unescape_order() {
        // `\s` is decoded before `\\` collapses, so an escaped backslash
        // followed by `s` still yields a space.
        assert_eq!(unescape_tag_value("a\\\\sb"), "a\\ b");
    }

    #[test]
    fn test_unescape_leaves_other_sequences() {
        assert_eq!(unescape_tag_value("a\\nb"), "a\\nb");
        assert_eq!(unescape_tag_value("trailing\\"), "trailing\\");
    }

    #[test]
    fn test_escape_roundtrip() {
        let test_values = vec![
            "simple",
            "with space",
            "with;semicolon",
            "Timed\\sout\\sfor\\sspam",
            "",
        ];

        for original in test_values {
            let decoded = unescape_tag_value(original);
            let mut escaped = String::new();
            escape_tag_value(&mut escaped, &decoded).unwrap();
            assert_eq!(
                unescape_tag_value(&escaped),
                decoded,
                "Roundtrip failed: '{}' -> '{}' -> '{}'",
                original,
                decoded,
                escaped
            );
        }
    }

    #[test]
    fn test_escape_reproduces_wire_value() {
        let wire = "Timed\\sout\\:\\sbad\\\\word";
        let mut escaped = String::new();
        escape_tag_value(&mut escaped, &unescape_tag_value(wire)).unwrap();
        assert_eq!(escaped, wire);
    }

    #[test]
    fn test_raw_tags() {
        let pairs: Vec<_> = raw_tags("a=1;b=;c=x=y").collect();
        assert_eq!(pairs, vec![("a", "1"), ("b", ""), ("c", "x=y")]);
    }

    #[test]
    fn test_raw_tags_stops_at_malformed_token() {
        let pairs: Vec<_> = raw_tags("a=1;broken;c=3").collect();
        assert_eq!(pairs, vec![("a", "1")]);
    }
}
