//! Decoded message types.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What kind of line a [`Message`] was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum MessageKind {
    /// A tagged line whose command is neither `PRIVMSG` nor `CLEARCHAT`.
    /// Downstream consumers treat it as a generic chat line.
    #[default]
    Unclassified,
    /// A line without tags, carried verbatim in [`Message::text`].
    PlainText,
    /// A `PRIVMSG`.
    ChatMessage,
    /// A `CLEARCHAT` timeout or ban, with synthesized text.
    TimeoutNotice,
}

/// Where an emote comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EmoteProvider {
    /// First-party Twitch emotes, from the `emotes` tag.
    #[default]
    Twitch,
}

impl AsRef<str> for EmoteProvider {
    fn as_ref(&self) -> &str {
        match self {
            Self::Twitch => "twitch",
        }
    }
}

impl fmt::Display for EmoteProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// An emote found in a message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Emote {
    /// The text the emote replaces, e.g. `Kappa`.
    pub name: String,
    /// Provider-specific emote id.
    pub id: String,
    /// Emote provider.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub provider: EmoteProvider,
    /// Number of positions listed for this emote.
    pub count: usize,
}

/// A decoded chat line.
///
/// Fields that the line does not carry are left empty. For tagged lines
/// `badges` and `emotes` are always present, possibly empty, and `tags`
/// holds every tag that has no dedicated field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Message {
    /// Kind of line this message was decoded from.
    pub kind: MessageKind,
    /// Time the line was decoded.
    pub time: DateTime<Utc>,
    /// Channel name without the leading `#`.
    pub channel: String,
    /// Login name of the sender, or the service name for timeout notices.
    pub username: String,
    /// `display-name` tag.
    pub display_name: String,
    /// `user-type` tag.
    pub user_type: String,
    /// `color` tag, e.g. `#0B8E70`.
    pub color: String,
    /// Badge name to badge revision.
    pub badges: HashMap<String, i64>,
    /// Emote name to emote.
    pub emotes: HashMap<String, Emote>,
    /// Remaining tags, unescaped.
    pub tags: HashMap<String, String>,
    /// Message body.
    pub text: String,
    /// Whether the body was a CTCP ACTION (`/me`).
    pub is_action: bool,
}

impl Message {
    /// A plain-text message carrying `line` verbatim.
    pub fn plain(line: &str, time: DateTime<Utc>) -> Self {
        Self {
            kind: MessageKind::PlainText,
            time,
            channel: String::new(),
            username: String::new(),
            display_name: String::new(),
            user_type: String::new(),
            color: String::new(),
            badges: HashMap::new(),
            emotes: HashMap::new(),
            tags: HashMap::new(),
            text: line.to_owned(),
            is_action: false,
        }
    }

    /// Returns the value of a residual tag.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }
}
