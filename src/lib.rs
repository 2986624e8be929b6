//! # tmi-proto
//!
//! A Rust library for decoding IRCv3-tagged chat lines as sent by the
//! Twitch chat gateway into structured messages.
//!
//! ## Features
//!
//! - Tag block decoding with Twitch's value escaping
//! - Badge and emote annotations, with emote positions resolved by codepoint
//! - `PRIVMSG` chat messages, including `/me` actions
//! - `CLEARCHAT` timeout notices rendered as readable text
//! - Malformed input degrades gracefully and never panics
//! - Optional `serde` support for the decoded types

#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ```rust
//! use tmi_proto::{parse_message, MessageKind};
//!
//! let raw = "@badges=broadcaster/1;color=#0B8E70;display-name=nuuls;emotes=25:0-4;user-type=mod \
//!            :nuuls!nuuls@nuuls.tmi.twitch.tv PRIVMSG #nuuls :Kappa NaM";
//! let msg = parse_message(raw);
//!
//! assert_eq!(msg.kind, MessageKind::ChatMessage);
//! assert_eq!(msg.channel, "nuuls");
//! assert_eq!(msg.badges["broadcaster"], 1);
//! assert_eq!(msg.emotes["Kappa"].id, "25");
//! ```
//!
//! Lines without tags are passed through as plain text:
//!
//! ```rust
//! use tmi_proto::{parse_message, MessageKind};
//!
//! let msg = parse_message("PING :tmi.twitch.tv");
//! assert_eq!(msg.kind, MessageKind::PlainText);
//! assert_eq!(msg.text, "PING :tmi.twitch.tv");
//! ```

pub mod ctcp;
pub mod decoder;
pub mod error;
pub mod line;
pub mod message;
pub mod middle;
pub mod timeout;
pub mod util;

pub use self::decoder::{Decoder, DecoderConfig};
pub use self::error::EmoteParseError;
pub use self::message::{Emote, EmoteProvider, Message, MessageKind};

/// Decodes one raw line with the default configuration.
///
/// See [`Decoder::decode`].
pub fn parse_message(line: &str) -> Message {
    Message::parse(line)
}
