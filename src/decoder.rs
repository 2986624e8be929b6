//! Line decoder and its configuration.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::ctcp::strip_action;
use crate::line::{classify, RawLine};
use crate::message::tags::{BAN_DURATION, BAN_REASON};
use crate::message::{Message, MessageKind};
use crate::middle::parse_middle;
use crate::timeout::{ban_duration, timeout_text};

/// Username assigned to timeout notices by default.
pub const DEFAULT_SERVICE_NAME: &str = "twitch";

/// Decoder settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Username given to messages the service itself emits, such as
    /// timeout notices.
    pub service_name: String,

    /// Remove the CTCP ACTION wrapper from `/me` messages.
    pub strip_actions: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            strip_actions: true,
        }
    }
}

impl DecoderConfig {
    /// Sets the username given to service-emitted messages.
    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    /// Enables or disables CTCP ACTION stripping.
    pub fn with_strip_actions(mut self, strip: bool) -> Self {
        self.strip_actions = strip;
        self
    }
}

/// Decodes raw chat lines into [`Message`]s.
///
/// A decoder holds only its configuration; it can be shared between threads
/// and reused for any number of lines.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Creates a decoder with the given configuration.
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Returns the decoder's configuration.
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decodes `line`, stamping it with the current time.
    pub fn decode(&self, line: &str) -> Message {
        self.decode_at(line, Utc::now())
    }

    /// Decodes `line`, stamping it with `time`.
    ///
    /// Never fails. Lines without tags, or whose segments cannot be found,
    /// come back as [`MessageKind::PlainText`] carrying the line verbatim.
    pub fn decode_at(&self, line: &str, time: DateTime<Utc>) -> Message {
        let (tags, middle, text) = match classify(line) {
            RawLine::Plain(line) => return Message::plain(line, time),
            RawLine::Tagged { tags, middle, text } => (tags, middle, text),
        };

        let (text, is_action) = if self.config.strip_actions {
            strip_action(text)
        } else {
            (text, false)
        };

        let middle = parse_middle(middle);
        let mut msg = Message {
            kind: middle.kind,
            time,
            channel: middle.channel.to_owned(),
            username: middle.username.to_owned(),
            display_name: String::new(),
            user_type: String::new(),
            color: String::new(),
            badges: HashMap::new(),
            emotes: HashMap::new(),
            tags: HashMap::new(),
            text: text.to_owned(),
            is_action,
        };
        msg.apply_tags(tags, text);

        if msg.kind == MessageKind::TimeoutNotice {
            msg.username = self.config.service_name.clone();
            msg.text = timeout_text(
                &msg.text,
                ban_duration(msg.tag(BAN_DURATION)),
                msg.tag(BAN_REASON).unwrap_or_default(),
            );
        }

        msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2016, 12, 24, 21, 29, 30).unwrap()
    }

    #[test]
    fn test_decode_at_uses_given_time() {
        let time = fixed_time();
        let decoder = Decoder::default();
        assert_eq!(decoder.decode_at("PING :tmi.twitch.tv", time).time, time);
        assert_eq!(
            decoder
                .decode_at("@a=b :x!x@x PRIVMSG #c :hi", time)
                .time,
            time
        );
    }

    #[test]
    fn test_custom_service_name() {
        let decoder = Decoder::new(DecoderConfig::default().with_service_name("tmi"));
        let msg = decoder.decode_at(
            "@ban-duration=1 :tmi.twitch.tv CLEARCHAT #forsen :someone",
            fixed_time(),
        );
        assert_eq!(msg.username, "tmi");
        assert_eq!(msg.text, "someone was timed out for 1s: ");
    }

    #[test]
    fn test_action_stripping() {
        let line = "@emotes=25:1-5 :a!a@a PRIVMSG #c :\x01ACTION Kappa\x01";
        let msg = Decoder::default().decode_at(line, fixed_time());
        assert!(msg.is_action);
        assert_eq!(msg.text, " Kappa");
        assert_eq!(msg.emotes["Kappa"].id, "25");
    }

    #[test]
    fn test_action_stripping_disabled() {
        let decoder = Decoder::new(DecoderConfig::default().with_strip_actions(false));
        let line = "@badges= :a!a@a PRIVMSG #c :\x01ACTION waves\x01";
        let msg = decoder.decode_at(line, fixed_time());
        assert!(!msg.is_action);
        assert_eq!(msg.text, "\x01ACTION waves\x01");
    }

    #[test]
    fn test_default_config() {
        let config = DecoderConfig::default();
        assert_eq!(config.service_name, DEFAULT_SERVICE_NAME);
        assert!(config.strip_actions);
        assert_eq!(Decoder::default().config(), &config);
    }

    #[test]
    fn test_decoder_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Decoder>();
        assert_send_sync::<Message>();
    }
}
