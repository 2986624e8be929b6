//! Fuzz target for chat line decoding
//!
//! Feeds arbitrary UTF-8 lines to the decoder and ensures it never panics.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = str::from_utf8(data) {
        // Twitch lines are capped well below this
        if input.len() > 8192 {
            return;
        }

        let _ = tmi_proto::parse_message(input);
    }
});
