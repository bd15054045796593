//! Wall-clock resolution for "UTC±HH:MM" offset strings.

use chrono::{DateTime, FixedOffset, Utc};

/// Shown when an offset string cannot be parsed. Best-effort degradation:
/// a country card with a bogus timezone still renders.
const FALLBACK_DISPLAY: &str = "12:00 PM";

/// Parses an offset string into signed minutes east of UTC.
///
/// Accepted forms: "UTC" (zero offset), "UTC±HH", "UTC±HH:MM".
pub fn parse_utc_offset(offset: &str) -> Option<i32> {
    let rest = offset.strip_prefix("UTC")?;
    if rest.is_empty() {
        return Some(0);
    }
    let (sign, rest) = match rest.as_bytes()[0] {
        b'+' => (1, &rest[1..]),
        b'-' => (-1, &rest[1..]),
        _ => return None,
    };
    let mut parts = rest.splitn(2, ':');
    let hours: i32 = parts.next()?.parse().ok()?;
    let minutes: i32 = match parts.next() {
        Some(m) => m.parse().ok()?,
        None => 0,
    };
    if hours < 0 || !(0..60).contains(&minutes) {
        return None;
    }
    Some(sign * (hours * 60 + minutes))
}

/// Formats the wall-clock time at `offset` for the instant `now` as a
/// 12-hour clock string, e.g. "5:30 PM".
///
/// Malformed offsets (including out-of-range ones chrono rejects) return
/// [`FALLBACK_DISPLAY`] instead of an error. Deterministic for a fixed
/// `(offset, now)` pair.
pub fn resolve_local_time(offset: &str, now: DateTime<Utc>) -> String {
    parse_utc_offset(offset)
        .and_then(|minutes| FixedOffset::east_opt(minutes * 60))
        .map(|tz| now.with_timezone(&tz).format("%-I:%M %p").to_string())
        .unwrap_or_else(|| FALLBACK_DISPLAY.to_string())
}
