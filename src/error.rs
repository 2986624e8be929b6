//! Error types for the Twitch line decoder.
//!
//! Decoding a whole line never fails: malformed structure degrades to plain
//! text or skips the offending field. The one explicit failure is an emote
//! group whose range cannot be resolved against the message text.

use thiserror::Error;

/// Convenience type alias for Results using [`EmoteParseError`].
pub type Result<T, E = EmoteParseError> = std::result::Result<T, E>;

/// Errors encountered when decoding a single group of the `emotes` tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EmoteParseError {
    /// The group has no `:` separating the emote id from its ranges.
    #[error("emote group has no ranges: {0}")]
    MissingRanges(String),

    /// The first range is not of the form `start-end`.
    #[error("invalid emote range: {0}")]
    InvalidRange(String),

    /// The range starts after it ends.
    #[error("reversed emote range: {start}-{end}")]
    ReversedRange {
        /// First codepoint offset.
        start: usize,
        /// Last codepoint offset (inclusive).
        end: usize,
    },

    /// The range reaches past the end of the message text.
    #[error("emote range {start}-{end} out of bounds for text of {len} codepoints")]
    OutOfBounds {
        /// First codepoint offset.
        start: usize,
        /// Last codepoint offset (inclusive).
        end: usize,
        /// Length of the message text in codepoints.
        len: usize,
    },
}
