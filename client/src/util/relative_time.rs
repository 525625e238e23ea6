//! Sort keys for human-written dates such as "Just now" or "Yesterday".
//!
//! Relative phrases resolve against the caller's `now_ms`; anything else is
//! tried as a calendar date. Unparseable input maps to epoch 0 so it sorts
//! as the oldest value instead of failing.

#[cfg(test)]
#[path = "relative_time_test.rs"]
mod relative_time_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::util::clock::{MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, local_midnight_ms};

const MS_PER_SECOND: i64 = 1_000;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%b %d, %Y", "%B %d, %Y", "%m/%d/%Y", "%d %b %Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Resolve `raw` to epoch milliseconds.
#[must_use]
pub fn to_epoch_ms(raw: &str, now_ms: i64) -> i64 {
    let text = raw.trim();
    if text.is_empty() {
        return 0;
    }
    let lower = text.to_ascii_lowercase();
    match lower.as_str() {
        "just now" | "today" => return now_ms,
        "a minute ago" => return now_ms - MS_PER_MINUTE,
        "an hour ago" => return now_ms - MS_PER_HOUR,
        "yesterday" => return now_ms - MS_PER_DAY,
        _ => {}
    }
    parse_ago(&lower, now_ms)
        .or_else(|| parse_today_at(&lower, now_ms))
        .or_else(|| parse_calendar(text))
        .unwrap_or(0)
}

/// "N units ago".
fn parse_ago(lower: &str, now_ms: i64) -> Option<i64> {
    let rest = lower.strip_suffix(" ago")?;
    let (count, unit) = rest.split_once(' ')?;
    let count = match count.trim() {
        "a" | "an" => 1,
        digits => digits.parse::<i64>().ok()?,
    };
    let unit_ms = match unit.trim().trim_end_matches('s') {
        "second" => MS_PER_SECOND,
        "minute" => MS_PER_MINUTE,
        "hour" => MS_PER_HOUR,
        "day" => MS_PER_DAY,
        "week" => 7 * MS_PER_DAY,
        _ => return None,
    };
    Some(now_ms.saturating_sub(count.saturating_mul(unit_ms)))
}

/// "Today, 11:59 AM".
fn parse_today_at(lower: &str, now_ms: i64) -> Option<i64> {
    let rest = lower.strip_prefix("today")?.trim_start_matches([',', ' ']);
    let time = NaiveTime::parse_from_str(&rest.to_ascii_uppercase(), "%I:%M %p")
        .or_else(|_| NaiveTime::parse_from_str(rest, "%H:%M"))
        .ok()?;
    Some(local_midnight_ms(now_ms) + i64::from(time.num_seconds_from_midnight()) * MS_PER_SECOND)
}

fn parse_calendar(text: &str) -> Option<i64> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.timestamp_millis());
    }
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Some(parsed.and_utc().timestamp_millis());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc().timestamp_millis());
        }
    }
    None
}
