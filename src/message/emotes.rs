//! Decoder for the `emotes` tag.
//!
//! The tag lists emote ids with the codepoint ranges they occupy in the
//! message text:
//!
//! ```text
//! 25:0-4,12-16/1902:6-10
//! ```

use std::collections::HashMap;

use nom::{
    character::complete::{char, digit1},
    combinator::{all_consuming, map_res},
    sequence::separated_pair,
    IResult,
};

use super::types::{Emote, EmoteProvider};
use crate::error::{EmoteParseError, Result};
use crate::util::{codepoint_len, codepoint_slice};

fn offset(input: &str) -> IResult<&str, usize> {
    map_res(digit1, str::parse::<usize>)(input)
}

fn range(input: &str) -> IResult<&str, (usize, usize)> {
    separated_pair(offset, char('-'), offset)(input)
}

/// Parses a single `start-end` range.
fn parse_range(raw: &str) -> Result<(usize, usize)> {
    all_consuming(range)(raw)
        .map(|(_, r)| r)
        .map_err(|_| EmoteParseError::InvalidRange(raw.to_owned()))
}

/// Decodes one `/`-separated group such as `25:0-4,12-16`.
///
/// Only the first range is resolved against `text` to obtain the emote name.
/// The occurrence count is the number of `-` in the group, one per range.
pub fn parse_emote(group: &str, text: &str) -> Result<Emote> {
    let (id, ranges) = group
        .split_once(':')
        .ok_or_else(|| EmoteParseError::MissingRanges(group.to_owned()))?;

    let first = ranges.split(',').next().unwrap_or_default();
    let (start, end) = parse_range(first)?;
    if start > end {
        return Err(EmoteParseError::ReversedRange { start, end });
    }

    let name = codepoint_slice(text, start, end).ok_or_else(|| EmoteParseError::OutOfBounds {
        start,
        end,
        len: codepoint_len(text),
    })?;

    Ok(Emote {
        name: name.to_owned(),
        id: id.to_owned(),
        provider: EmoteProvider::Twitch,
        count: group.matches('-').count(),
    })
}

/// Decodes every group of an `emotes` tag value, one result per group.
///
/// Empty groups (an empty tag, or a trailing `/`) are not reported.
pub fn emote_groups<'a>(
    emotes: &'a str,
    text: &'a str,
) -> impl Iterator<Item = Result<Emote>> + 'a {
    emotes
        .split('/')
        .filter(|group| !group.is_empty())
        .map(move |group| parse_emote(group, text))
}

/// Decodes an `emotes` tag value into a map keyed by emote name.
///
/// Groups that fail to decode are skipped. When two groups resolve to the
/// same name the later one replaces the earlier.
pub fn parse_emotes(emotes: &str, text: &str) -> HashMap<String, Emote> {
    emote_groups(emotes, text)
        .filter_map(|result| match result {
            Ok(emote) => Some((emote.name.clone(), emote)),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %_err, "skipping emote");
                None
            }
        })
        .collect()
}
