//! Fuzz target for the `emotes` tag decoder
//!
//! Splits the input into a tag value and a message text at the first newline
//! so ranges and text vary independently.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = str::from_utf8(data) {
        let (emotes, text) = input.split_once('\n').unwrap_or((input, ""));
        for emote in tmi_proto::message::emotes::emote_groups(emotes, text).flatten() {
            assert!(text.contains(&emote.name));
        }
    }
});
