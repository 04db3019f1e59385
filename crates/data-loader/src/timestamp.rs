//! Timestamp parsing shared by the interaction and care tables.
//!
//! Also usable as a serde `with` module so records deserialize their
//! timestamp columns directly into `NaiveDateTime`.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer};

use crate::error::{LoadError, Result};

/// Output format, matching the generated data files
pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DATETIME_FORMATS: &[&str] = &[
    FORMAT,
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parse a timestamp in any accepted layout.
///
/// Example: "2024-03-01 12:30:00" -> 2024-03-01T12:30:00
///          "2024-03-01"          -> 2024-03-01T00:00:00
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    for format in DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(ts);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| LoadError::InvalidTimestamp {
            value: s.to_string(),
        })
}

pub fn serialize<S>(ts: &NaiveDateTime, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&ts.format(FORMAT).to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        assert_eq!(parse_timestamp("2024-03-01 12:30:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2024-03-01T12:30:00").unwrap(), expected);
        assert_eq!(parse_timestamp(" 2024-03-01 12:30:00.000 ").unwrap(), expected);
    }

    #[test]
    fn test_parse_date_only() {
        let ts = parse_timestamp("2024-03-01").unwrap();
        assert_eq!(ts.format(FORMAT).to_string(), "2024-03-01 00:00:00");
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(
            parse_timestamp("yesterday"),
            Err(LoadError::InvalidTimestamp { .. })
        ));
    }
}
