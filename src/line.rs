//! Line classification.
//!
//! Splits a raw line into the three segments the rest of the decoder works
//! on. Anything that does not look like a tagged Twitch line is handed back
//! untouched as plain text.

/// Delimiter between the tags, middle and trailing segments.
const SEGMENT_DELIM: &str = " :";

/// A raw line split into its segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawLine<'a> {
    /// A line without IRCv3 tags, or one that could not be segmented.
    Plain(&'a str),
    /// A tagged line.
    Tagged {
        /// Tag block without the leading `@`.
        tags: &'a str,
        /// Prefix, command and parameters, e.g. `nick!nick@host PRIVMSG #chan`.
        middle: &'a str,
        /// Trailing parameter, still carrying any CTCP wrapper.
        text: &'a str,
    },
}

/// Classifies a raw line.
///
/// A line is tagged when it starts with `@` and contains the `" :"`
/// delimiter at least twice; the trailing segment keeps any further
/// occurrences of the delimiter.
///
/// ```
/// use tmi_proto::line::{classify, RawLine};
///
/// assert_eq!(classify("PING :tmi.twitch.tv"), RawLine::Plain("PING :tmi.twitch.tv"));
/// assert_eq!(
///     classify("@color=#FF0000 :a!a@a PRIVMSG #b :hi :)"),
///     RawLine::Tagged { tags: "color=#FF0000", middle: "a!a@a PRIVMSG #b", text: "hi :)" },
/// );
/// ```
pub fn classify(line: &str) -> RawLine<'_> {
    let Some(tagged) = line.strip_prefix('@') else {
        return RawLine::Plain(line);
    };

    let mut parts = tagged.splitn(3, SEGMENT_DELIM);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(tags), Some(middle), Some(text)) => RawLine::Tagged { tags, middle, text },
        _ => {
            #[cfg(feature = "tracing")]
            tracing::debug!(line = %line, "tagged line without trailing segment, treating as plain text");
            RawLine::Plain(line)
        }
    }
}
