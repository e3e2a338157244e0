use chrono::{DateTime, NaiveDateTime, Utc};

/// Timestamps are kept in UTC. Backends send either RFC 3339 (`...Z`) or Python's
/// naive `isoformat()`; naive values are taken as UTC.
pub type Timestamp = DateTime<Utc>;

pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_rfc3339() {
        let ts = parse_timestamp("2024-03-01T10:20:30.000Z").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2024, 3, 1));
        assert_eq!(ts.hour(), 10);
    }

    #[test]
    fn test_naive_isoformat() {
        let ts = parse_timestamp("2024-03-01T10:20:30.123456").unwrap();
        assert_eq!(ts.minute(), 20);
        assert!(parse_timestamp("2024-03-01T10:20:30").is_some());
    }

    #[test]
    fn test_garbage() {
        assert!(parse_timestamp("yesterday").is_none());
    }
}
