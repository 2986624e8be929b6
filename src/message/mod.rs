//! Decoded messages and the tag decoders that fill them.

pub mod badges;
pub mod emotes;
mod parse;
pub mod tags;
mod types;

pub use self::types::{Emote, EmoteProvider, Message, MessageKind};
