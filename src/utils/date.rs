use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc};

/// Formats carrying an explicit UTC offset, Jekyll style first
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S %z",
    "%Y-%m-%d %H:%M:%S %:z",
    "%Y-%m-%d %H:%M %z",
    "%Y-%m-%d %H:%M %:z",
];

/// Formats without an offset, read as UTC
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

fn utc() -> FixedOffset {
    Utc.fix()
}

/// Midnight UTC on the given calendar date
pub fn midnight(date: NaiveDate) -> DateTime<FixedOffset> {
    utc().from_utc_datetime(&date.and_time(NaiveTime::default()))
}

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_calendar_date(value: &str) -> Option<DateTime<FixedOffset>> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok().map(midnight)
}

/// Parse a front matter timestamp.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM[:SS]` with or without a trailing
/// offset, and a bare `YYYY-MM-DD`.
pub fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt);
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(utc().from_utc_datetime(&dt));
        }
    }

    parse_calendar_date(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_calendar_date() {
        let dt = parse_calendar_date("2008-11-05").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day(), dt.hour()), (2008, 11, 5, 0));
        assert!(parse_calendar_date("2008-13-05").is_none());
        assert!(parse_calendar_date("2008-02-30").is_none());
    }

    #[test]
    fn test_parse_timestamp_shapes() {
        let dt = parse_timestamp("2008-11-05 13:45:10 +0100").unwrap();
        assert_eq!((dt.day(), dt.hour(), dt.minute()), (5, 13, 45));
        assert_eq!(dt.offset().local_minus_utc(), 3600);

        let dt = parse_timestamp("2008-11-05T13:45:10-05:00").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), -5 * 3600);

        let dt = parse_timestamp("2008-11-05 13:45").unwrap();
        assert_eq!((dt.hour(), dt.minute()), (13, 45));

        assert!(parse_timestamp("2008-11-05").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }
}
