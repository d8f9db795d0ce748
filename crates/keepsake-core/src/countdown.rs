//! Countdown and count-up arithmetic.
//!
//! Everything here takes `now` as a parameter; the UI owns the one-second
//! tickers and feeds wall-clock instants in.

use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// A millisecond delta broken into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeParts {
    fn from_millis(ms: i64) -> Self {
        let ms = ms.max(0);
        TimeParts {
            days: ms / MS_PER_DAY,
            hours: (ms % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (ms % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (ms % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    /// Remaining time until `target`, or `None` once it has arrived.
    pub fn until(now: DateTime<Utc>, target: DateTime<Utc>) -> Option<Self> {
        let delta = target.signed_duration_since(now).num_milliseconds();
        if delta <= 0 {
            return None;
        }
        Some(Self::from_millis(delta))
    }

    /// Elapsed time since `start` (zero when `start` is in the future).
    pub fn since(start: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self::from_millis(now.signed_duration_since(start).num_milliseconds())
    }

    /// Total seconds represented, used to assert monotonicity in tests.
    pub fn total_seconds(&self) -> i64 {
        ((self.days * 24 + self.hours) * 60 + self.minutes) * 60 + self.seconds
    }
}

/// Two-digit zero-padded display form for a countdown digit.
pub fn pad2(value: i64) -> String {
    format!("{:02}", value)
}

/// Normalise the configured start date to local midnight in Istanbul
/// (fixed +03:00; the zone has had no DST since 2016), so "days together"
/// rolls over at the couple's midnight rather than UTC's.
pub fn istanbul_midnight(date: DateTime<Utc>) -> DateTime<Utc> {
    let offset = FixedOffset::east_opt(3 * 3600).unwrap_or_else(|| Utc.fix());
    let local = date.with_timezone(&offset).date_naive();
    match offset.from_local_datetime(&local.and_hms_opt(0, 0, 0).unwrap_or_default()) {
        chrono::LocalResult::Single(t) => t.with_timezone(&Utc),
        _ => date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_until_breaks_down_units() {
        let now = ts("2026-01-01T00:00:00Z");
        let target = ts("2026-01-03T04:05:06Z");
        let parts = TimeParts::until(now, target).unwrap();
        assert_eq!(
            parts,
            TimeParts { days: 2, hours: 4, minutes: 5, seconds: 6 }
        );
    }

    #[test]
    fn test_until_is_none_at_and_after_target() {
        let target = ts("2026-01-01T00:00:00Z");
        assert!(TimeParts::until(target, target).is_none());
        assert!(TimeParts::until(ts("2026-01-02T00:00:00Z"), target).is_none());
    }

    #[test]
    fn test_until_strictly_decreases_towards_zero() {
        let target = ts("2026-01-01T00:01:40Z");
        let mut now = ts("2026-01-01T00:00:00Z");
        let mut previous = i64::MAX;
        while let Some(parts) = TimeParts::until(now, target) {
            assert!(parts.total_seconds() < previous);
            previous = parts.total_seconds();
            now += chrono::Duration::seconds(1);
        }
        // The loop must terminate exactly at the target
        assert_eq!(now, target);
    }

    #[test]
    fn test_since_counts_up() {
        let start = ts("2023-01-01T00:00:00Z");
        let now = ts("2023-01-02T01:02:03Z");
        assert_eq!(
            TimeParts::since(start, now),
            TimeParts { days: 1, hours: 1, minutes: 2, seconds: 3 }
        );
    }

    #[test]
    fn test_since_future_start_clamps_to_zero() {
        let start = ts("2030-01-01T00:00:00Z");
        let now = ts("2023-01-01T00:00:00Z");
        assert_eq!(TimeParts::since(start, now).total_seconds(), 0);
    }

    #[test]
    fn test_pad2() {
        assert_eq!(pad2(0), "00");
        assert_eq!(pad2(7), "07");
        assert_eq!(pad2(59), "59");
        assert_eq!(pad2(123), "123");
    }

    #[test]
    fn test_istanbul_midnight_shifts_to_local_day_start() {
        // 22:30 UTC is already the next day, 01:30, in Istanbul
        let stored = ts("2023-06-14T22:30:00Z");
        let midnight = istanbul_midnight(stored);
        assert_eq!(midnight, ts("2023-06-14T21:00:00Z"));

        // Midday UTC stays on the same Istanbul day
        let stored = ts("2023-06-15T12:00:00Z");
        assert_eq!(istanbul_midnight(stored), ts("2023-06-14T21:00:00Z"));
    }
}
