//! Codepoint-indexed string helpers.
//!
//! Twitch reports emote positions as Unicode codepoint offsets, while Rust
//! strings are indexed by byte. These helpers translate between the two
//! without ever slicing inside a multi-byte UTF-8 sequence.

/// Returns the substring spanning codepoints `start..=end` of `s`.
///
/// Returns `None` if `start > end` or if `end` is not a codepoint index of `s`.
///
/// # Examples
///
/// ```
/// use tmi_proto::util::codepoint_slice;
///
/// assert_eq!(codepoint_slice("Kappa test", 0, 4), Some("Kappa"));
///
/// // Offsets count codepoints, not bytes
/// assert_eq!(codepoint_slice("日本 Kappa", 3, 7), Some("Kappa"));
/// assert_eq!(codepoint_slice("👋 hi", 2, 3), Some("hi"));
///
/// // Out of range is reported, not panicked on
/// assert_eq!(codepoint_slice("hi", 0, 2), None);
/// ```
pub fn codepoint_slice(s: &str, start: usize, end: usize) -> Option<&str> {
    if start > end {
        return None;
    }

    let (from, _) = s.char_indices().nth(start)?;
    let rest = &s[from..];
    // `end` itself must be a codepoint; the slice stops where it ends.
    let (last, ch) = rest.char_indices().nth(end - start)?;
    Some(&rest[..last + ch.len_utf8()])
}

/// Number of codepoints in `s`.
#[inline]
pub fn codepoint_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codepoint_slice_ascii() {
        assert_eq!(codepoint_slice("Kappa test", 0, 4), Some("Kappa"));
        assert_eq!(codepoint_slice("Kappa test", 6, 9), Some("test"));
        assert_eq!(codepoint_slice("a", 0, 0), Some("a"));
    }

    #[test]
    fn test_codepoint_slice_multibyte() {
        // é is 2 bytes, € is 3 bytes, 👋 is 4 bytes
        assert_eq!(codepoint_slice("café", 3, 3), Some("é"));
        assert_eq!(codepoint_slice("100€ ok", 3, 3), Some("€"));
        assert_eq!(codepoint_slice("👋🌍🚀", 1, 2), Some("🌍🚀"));
        assert_eq!(codepoint_slice("日本語テスト", 2, 4), Some("語テス"));
    }

    #[test]
    fn test_codepoint_slice_out_of_bounds() {
        assert_eq!(codepoint_slice("hello", 0, 5), None);
        assert_eq!(codepoint_slice("hello", 5, 5), None);
        assert_eq!(codepoint_slice("", 0, 0), None);
        // 4 codepoints, 16 bytes: byte length must not leak into the bound
        assert_eq!(codepoint_slice("👋🌍🚀🎉", 0, 4), None);
    }

    #[test]
    fn test_codepoint_slice_reversed() {
        assert_eq!(codepoint_slice("hello", 3, 1), None);
    }

    #[test]
    fn test_codepoint_len() {
        assert_eq!(codepoint_len("hello"), 5);
        assert_eq!(codepoint_len("日本語"), 3);
        assert_eq!(codepoint_len(""), 0);
    }
}
