//! Timestamp value generators.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC time as RFC 3339 with a `Z` suffix.
///
/// Sub-second digits are emitted only when non-zero, in groups of three
/// (`2024-01-01T00:00:00Z`, `2024-01-01T00:00:00.250Z`).
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Generate the current UTC timestamp.
///
/// This is NOT deterministic - each call returns the current time.
pub fn generate_timestamp_now() -> String {
    format_timestamp(Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_whole_seconds() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_timestamp(dt), "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_format_subseconds() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 5).unwrap()
            + chrono::Duration::milliseconds(250);
        assert_eq!(format_timestamp(dt), "2024-01-01T12:30:05.250Z");
    }

    #[test]
    fn test_now_parses_as_rfc3339() {
        let ts = generate_timestamp_now();

        assert!(ts.ends_with('Z'));
        let parsed = DateTime::parse_from_rfc3339(&ts).unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 0);
    }
}
