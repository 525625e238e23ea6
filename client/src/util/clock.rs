//! Wall-clock helpers shared by reducers that stamp entries.
//!
//! Reducers take `now_ms` as a parameter; these helpers are only called at
//! the component boundary so state logic stays deterministic under test.

use chrono::{Local, TimeZone};

pub const MS_PER_MINUTE: i64 = 60_000;
pub const MS_PER_HOUR: i64 = 3_600_000;
pub const MS_PER_DAY: i64 = 86_400_000;

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let now = js_sys::Date::now() as i64;
        now
    }
    #[cfg(not(feature = "hydrate"))]
    {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Epoch milliseconds of the most recent local midnight before `now_ms`.
pub fn local_midnight_ms(now_ms: i64) -> i64 {
    let Some(now) = Local.timestamp_millis_opt(now_ms).single() else {
        return now_ms - now_ms.rem_euclid(MS_PER_DAY);
    };
    now.date_naive()
        .and_hms_opt(0, 0, 0)
        .and_then(|midnight| Local.from_local_datetime(&midnight).earliest())
        .map_or_else(|| now_ms - now_ms.rem_euclid(MS_PER_DAY), |m| m.timestamp_millis())
}
