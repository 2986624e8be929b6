//! Middle segment parser.
//!
//! The middle segment sits between the tag block and the trailing text:
//!
//! ```text
//! nuuls!nuuls@nuuls.tmi.twitch.tv PRIVMSG #nuuls
//! tmi.twitch.tv CLEARCHAT #forsen
//! ```

use nom::{
    bytes::complete::{take_till, take_until},
    character::complete::char,
    sequence::preceded,
    IResult,
};

use crate::message::MessageKind;

type ParseResult<'a, O> = IResult<&'a str, O>;

/// Fields extracted from the middle segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Middle<'a> {
    /// Nickname before the first `!`, empty for server-originated lines.
    pub username: &'a str,
    /// Message kind derived from the command keyword.
    pub kind: MessageKind,
    /// Channel name without the leading `#`, empty if absent.
    pub channel: &'a str,
}

/// Nickname up to the first `!`. The remainder keeps the `!`.
fn nickname(input: &str) -> ParseResult<'_, &str> {
    take_until("!")(input)
}

/// Skips the prefix remainder and returns the command keyword after it.
fn command(input: &str) -> ParseResult<'_, &str> {
    preceded(
        take_till(|c: char| c == ' '),
        preceded(char(' '), take_till(|c: char| c == ' ')),
    )(input)
}

/// Everything after the last `#`.
fn channel_name(input: &str) -> Option<&str> {
    input.rsplit_once('#').map(|(_, chan)| chan)
}

/// Maps a command keyword to the kind of message it produces.
pub fn kind_for_command(command: &str) -> MessageKind {
    match command {
        "PRIVMSG" => MessageKind::ChatMessage,
        "CLEARCHAT" => MessageKind::TimeoutNotice,
        _ => MessageKind::Unclassified,
    }
}

/// Parses the middle segment of a tagged line.
///
/// Never fails: a missing `!` leaves the username empty, a missing `#`
/// leaves the channel empty and an unknown or missing command keyword
/// yields [`MessageKind::Unclassified`].
pub fn parse_middle(middle: &str) -> Middle<'_> {
    let (input, username) = nickname(middle).unwrap_or((middle, ""));
    let (input, keyword) = command(input).unwrap_or((input, ""));
    let channel = channel_name(input).unwrap_or("");

    Middle {
        username,
        kind: kind_for_command(keyword),
        channel,
    }
}
