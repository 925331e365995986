//! Time abstraction and timestamp formatting.
//!
//! This module provides a [`Clock`] trait that allows injecting fixed clocks
//! in tests while using the real system clock in production, and
//! [`format_timestamp`] which renders instants the way embeds carry them.

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};

/// Abstraction over wall-clock time for testability.
///
/// # Example
///
/// ```
/// use hookmsg::time::{Clock, SystemClock};
///
/// let clock = SystemClock;
/// let now = clock.now();
/// assert!(now.timestamp() > 0);
/// ```
pub trait Clock: Send + Sync {
    /// Returns the current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock using actual system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Formats an instant as an RFC 3339 UTC timestamp.
///
/// The instant is converted to UTC and rendered with whole seconds and a
/// `Z` suffix, e.g. `2024-01-02T03:04:05Z`. Sub-second precision is dropped.
///
/// # Example
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use hookmsg::time::format_timestamp;
///
/// let offset = FixedOffset::east_opt(2 * 3600).unwrap();
/// let t = offset.with_ymd_and_hms(2024, 1, 2, 5, 4, 5).unwrap();
/// assert_eq!(format_timestamp(&t), "2024-01-02T03:04:05Z");
/// ```
#[must_use]
pub fn format_timestamp<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Formats the current instant of the given clock.
#[must_use]
pub fn format_now<C: Clock + ?Sized>(clock: &C) -> String {
    format_timestamp(&clock.now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use std::time::{Duration, SystemTime};

    /// A clock pinned to a fixed instant.
    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[test]
    fn system_clock_returns_current_time() {
        let before = Utc::now();
        let result = SystemClock.now();
        let after = Utc::now();

        assert!(result >= before);
        assert!(result <= after);
    }

    #[test]
    fn system_clock_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SystemClock>();
    }

    #[test]
    fn formats_utc_with_z_suffix() {
        let t = Utc.with_ymd_and_hms(2024, 5, 1, 12, 34, 56).unwrap();
        assert_eq!(format_timestamp(&t), "2024-05-01T12:34:56Z");
    }

    #[test]
    fn converts_offset_to_utc() {
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let t = offset.with_ymd_and_hms(2024, 1, 1, 22, 0, 0).unwrap();

        assert_eq!(format_timestamp(&t), "2024-01-02T03:00:00Z");
    }

    #[test]
    fn drops_subsecond_precision() {
        let t = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap() + chrono::Duration::milliseconds(789);
        assert_eq!(format_timestamp(&t), "2024-01-02T03:04:05Z");
    }

    #[test]
    fn accepts_system_time() {
        let t: DateTime<Utc> = (SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000)).into();
        assert_eq!(format_timestamp(&t), "1970-01-12T13:46:40Z");
    }

    #[test]
    fn formatted_timestamp_parses_back_to_same_instant() {
        let offset = FixedOffset::east_opt(9 * 3600 + 30 * 60).unwrap();
        let instants = [
            Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 59)
                .unwrap()
                .fixed_offset(),
            offset.with_ymd_and_hms(2024, 2, 29, 0, 15, 0).unwrap(),
        ];

        for t in instants {
            let parsed = DateTime::parse_from_rfc3339(&format_timestamp(&t)).unwrap();
            assert_eq!(parsed, t);
            assert_eq!(parsed.offset().local_minus_utc(), 0);
        }
    }

    #[test]
    fn format_now_uses_given_clock() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2030, 6, 7, 8, 9, 10).unwrap());
        assert_eq!(format_now(&clock), "2030-06-07T08:09:10Z");
    }
}
