//! Time and string helpers used by the listing pipeline.
//!
//! - A [`Clock`] abstraction so "today" can be pinned in tests
//! - Formatting of the portal's `YYYYMMDD` date in Korea Standard Time
//! - String truncation for log previews

use chrono::{DateTime, Duration, Utc};

/// Offset of Korea Standard Time from UTC, in hours. KST has no DST.
pub const KST_OFFSET_HOURS: i64 = 9;

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by [`Utc::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Format `now` as the calendar date in UTC+9, e.g. `20240305`.
///
/// The result has no separators and is independent of the host locale.
pub fn kst_date_string(now: DateTime<Utc>) -> String {
    (now + Duration::hours(KST_OFFSET_HOURS))
        .format("%Y%m%d")
        .to_string()
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (on a char boundary) with an
/// ellipsis and the number of dropped bytes appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}
