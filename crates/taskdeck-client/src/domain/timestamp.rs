//! Serde adapter for service timestamps.
//!
//! The service emits naive ISO-8601 datetimes (no offset) which are UTC;
//! RFC 3339 values with an offset are accepted as well.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", raw)))
}

pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_naive() {
        let dt = parse("2024-03-05T10:20:30.123456").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 3, 5));
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn test_parse_with_offset() {
        let dt = parse("2024-03-05T12:20:30+02:00").unwrap();
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse("yesterday").is_none());
    }
}
