use std::convert::Infallible;
use std::str::FromStr;

use super::badges::parse_badges;
use super::emotes::parse_emotes;
use super::tags::{self, raw_tags, unescape_tag_value};
use super::types::Message;
use crate::decoder::Decoder;

impl Message {
    /// Decodes a raw line with the default [`Decoder`].
    ///
    /// ```
    /// use tmi_proto::{Message, MessageKind};
    ///
    /// let msg = Message::parse("@color=#0B8E70 :nuuls!nuuls@nuuls.tmi.twitch.tv PRIVMSG #nuuls :NaM");
    /// assert_eq!(msg.kind, MessageKind::ChatMessage);
    /// assert_eq!(msg.text, "NaM");
    /// ```
    pub fn parse(line: &str) -> Message {
        Decoder::default().decode(line)
    }

    /// Applies a tag block to this message.
    ///
    /// `text` is the action-stripped body that emote ranges index into.
    /// Processing stops at the first token without `=`; tags before it stay
    /// applied.
    pub(crate) fn apply_tags(&mut self, tag_block: &str, text: &str) {
        for (key, raw) in raw_tags(tag_block) {
            let value = unescape_tag_value(raw);
            match key {
                tags::BADGES => self.badges = parse_badges(&value),
                tags::COLOR => self.color = value,
                tags::DISPLAY_NAME => self.display_name = value,
                tags::EMOTES => self.emotes = parse_emotes(&value, text),
                tags::USER_TYPE => self.user_type = value,
                _ => {
                    self.tags.insert(key.to_owned(), value);
                }
            }
        }
    }
}

impl FromStr for Message {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Message, Self::Err> {
        Ok(Message::parse(s))
    }
}
