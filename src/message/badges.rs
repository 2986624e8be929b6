//! Decoder for the `badges` tag.

use std::collections::HashMap;

/// Decodes a `badges` tag value such as `moderator/1,subscriber/12`.
///
/// Entries without a `/` are skipped and a revision that is not an integer
/// decodes as `0`. A repeated badge keeps its last revision.
pub fn parse_badges(badges: &str) -> HashMap<String, i64> {
    badges
        .split(',')
        .filter_map(|badge| badge.split_once('/'))
        .map(|(name, rev)| (name.to_owned(), rev.parse().unwrap_or(0)))
        .collect()
}
