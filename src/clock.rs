//! UTC time provider
//!
//! Produces the instant snapshot behind both time endpoints. An instant is
//! captured once per request and discarded after serialization; nothing is
//! cached across requests.

use chrono::{DateTime, SecondsFormat, Utc};

/// Immutable snapshot of "now" in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CurrentInstant {
    instant: DateTime<Utc>,
}

/// Capture the current instant from the system clock.
///
/// A failing clock is a process-level fault, never a handled response.
pub fn now_utc() -> CurrentInstant {
    CurrentInstant {
        instant: Utc::now(),
    }
}

impl CurrentInstant {
    /// ISO-8601 extended format with microsecond precision and an explicit
    /// `+00:00` offset, e.g. `2023-10-27T10:00:00.123456+00:00`.
    pub fn rfc3339_micros(&self) -> String {
        self.instant.to_rfc3339_opts(SecondsFormat::Micros, false)
    }

    /// Calendar date only, zero-padded `YYYY-MM-DD`.
    pub fn calendar_date(&self) -> String {
        self.instant.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed() -> CurrentInstant {
        CurrentInstant {
            instant: Utc.with_ymd_and_hms(2023, 10, 27, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_rfc3339_micros() {
        assert_eq!(fixed().rfc3339_micros(), "2023-10-27T10:00:00.000000+00:00");
    }

    #[test]
    fn test_calendar_date() {
        assert_eq!(fixed().calendar_date(), "2023-10-27");
    }

    #[test]
    fn test_live_clock_has_utc_offset() {
        let s = now_utc().rfc3339_micros();
        assert!(s.ends_with("+00:00"), "expected +00:00 suffix, got: {s}");
        assert_eq!(&s[10..11], "T");
    }

    #[test]
    fn test_calendar_date_shape() {
        let s = now_utc().calendar_date();
        assert_eq!(s.len(), 10);
        let bytes = s.as_bytes();
        assert_eq!(bytes[4], b'-');
        assert_eq!(bytes[7], b'-');
        assert!(s
            .chars()
            .enumerate()
            .all(|(i, c)| matches!(i, 4 | 7) || c.is_ascii_digit()));
    }

    #[test]
    fn test_instants_non_decreasing() {
        let first = now_utc();
        let second = now_utc();
        assert!(second >= first);
    }

    #[test]
    fn test_date_is_prefix_of_datetime() {
        let instant = now_utc();
        assert!(instant
            .rfc3339_micros()
            .starts_with(&instant.calendar_date()));
    }
}
