//! Timeout notice text for `CLEARCHAT` lines.
//!
//! A `CLEARCHAT` carries the affected user as its trailing parameter and the
//! timeout length and reason in tags:
//!
//! ```text
//! @ban-duration=600;ban-reason=spam :tmi.twitch.tv CLEARCHAT #forsen :badUser
//! ```

use chrono::TimeDelta;

/// Decodes a `ban-duration` tag value as whole seconds.
///
/// A missing or non-numeric value (permanent bans carry none) is zero, as is
/// a value too large to represent. Negative values are kept.
pub fn ban_duration(raw: Option<&str>) -> TimeDelta {
    raw.and_then(|s| s.parse::<i64>().ok())
        .and_then(TimeDelta::try_seconds)
        .unwrap_or_default()
}

/// Renders a duration as hours, minutes and seconds, omitting leading zero
/// units: `45s`, `10m0s`, `1h0m0s`.
///
/// ```
/// use chrono::TimeDelta;
/// use tmi_proto::timeout::format_duration;
///
/// assert_eq!(format_duration(TimeDelta::seconds(600)), "10m0s");
/// assert_eq!(format_duration(TimeDelta::zero()), "0s");
/// ```
pub fn format_duration(duration: TimeDelta) -> String {
    let total = duration.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.unsigned_abs();
    let (hours, minutes, seconds) = (total / 3600, total % 3600 / 60, total % 60);

    if hours > 0 {
        format!("{}{}h{}m{}s", sign, hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}{}m{}s", sign, minutes, seconds)
    } else {
        format!("{}{}s", sign, seconds)
    }
}

/// Builds the display text of a timeout notice.
pub fn timeout_text(target: &str, duration: TimeDelta, reason: &str) -> String {
    format!(
        "{} was timed out for {}: {}",
        target,
        format_duration(duration),
        reason
    )
}
