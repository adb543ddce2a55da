//! Decoding helpers for the remote wire encoding.
//!
//! The remote system encodes most scalars as strings ("20", "0", "1",
//! "2024-03-07 10:30:00"). These helpers parse them into typed values,
//! reporting failures as field-tagged `Mapping` errors. An empty string is
//! treated as "unset" by the `opt_*` variants, matching the remote's habit of
//! sending `""` for absent optional fields.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use fieldgate_core::{FieldgateError, FieldgateResult};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Parses a required string-encoded i32.
pub fn parse_i32(resource: &'static str, field: &str, raw: &str) -> FieldgateResult<i32> {
    raw.trim().parse::<i32>().map_err(|_| {
        FieldgateError::mapping_field(resource, field, format!("unparseable integer '{}'", raw))
    })
}

/// Parses a required string-encoded i64.
pub fn parse_i64(resource: &'static str, field: &str, raw: &str) -> FieldgateResult<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        FieldgateError::mapping_field(resource, field, format!("unparseable integer '{}'", raw))
    })
}

/// Parses a required string-encoded f64.
pub fn parse_f64(resource: &'static str, field: &str, raw: &str) -> FieldgateResult<f64> {
    raw.trim().parse::<f64>().map_err(|_| {
        FieldgateError::mapping_field(resource, field, format!("unparseable number '{}'", raw))
    })
}

/// Parses a required "0"/"1" flag.
pub fn parse_flag(resource: &'static str, field: &str, raw: &str) -> FieldgateResult<bool> {
    match raw.trim() {
        "0" => Ok(false),
        "1" => Ok(true),
        other => Err(FieldgateError::mapping_field(
            resource,
            field,
            format!("unparseable flag '{}', expected \"0\" or \"1\"", other),
        )),
    }
}

/// Parses a required `YYYY-MM-DD` date.
pub fn parse_date(resource: &'static str, field: &str, raw: &str) -> FieldgateResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        FieldgateError::mapping_field(resource, field, format!("unparseable date '{}'", raw))
    })
}

/// Parses a required `YYYY-MM-DD HH:MM:SS` timestamp.
pub fn parse_datetime(
    resource: &'static str,
    field: &str,
    raw: &str,
) -> FieldgateResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), DATETIME_FORMAT).map_err(|_| {
        FieldgateError::mapping_field(resource, field, format!("unparseable timestamp '{}'", raw))
    })
}

/// Parses a required `HH:MM:SS` time of day.
pub fn parse_time(resource: &'static str, field: &str, raw: &str) -> FieldgateResult<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT).map_err(|_| {
        FieldgateError::mapping_field(resource, field, format!("unparseable time '{}'", raw))
    })
}

/// Parses an optional string-encoded i32; empty or absent means unset.
pub fn opt_i32(
    resource: &'static str,
    field: &str,
    raw: Option<&str>,
) -> FieldgateResult<Option<i32>> {
    match unset_to_none(raw) {
        None => Ok(None),
        Some(raw) => parse_i32(resource, field, raw).map(Some),
    }
}

/// Parses an optional string-encoded i64; empty or absent means unset.
pub fn opt_i64(
    resource: &'static str,
    field: &str,
    raw: Option<&str>,
) -> FieldgateResult<Option<i64>> {
    match unset_to_none(raw) {
        None => Ok(None),
        Some(raw) => parse_i64(resource, field, raw).map(Some),
    }
}

/// Parses an optional string-encoded f64; empty or absent means unset.
pub fn opt_f64(
    resource: &'static str,
    field: &str,
    raw: Option<&str>,
) -> FieldgateResult<Option<f64>> {
    match unset_to_none(raw) {
        None => Ok(None),
        Some(raw) => parse_f64(resource, field, raw).map(Some),
    }
}

/// Parses an optional "0"/"1" flag; empty or absent means unset.
pub fn opt_flag(
    resource: &'static str,
    field: &str,
    raw: Option<&str>,
) -> FieldgateResult<Option<bool>> {
    match unset_to_none(raw) {
        None => Ok(None),
        Some(raw) => parse_flag(resource, field, raw).map(Some),
    }
}

/// Parses an optional date; empty or absent means unset.
pub fn opt_date(
    resource: &'static str,
    field: &str,
    raw: Option<&str>,
) -> FieldgateResult<Option<NaiveDate>> {
    match unset_to_none(raw) {
        None => Ok(None),
        Some(raw) => parse_date(resource, field, raw).map(Some),
    }
}

/// Parses an optional timestamp; empty or absent means unset.
pub fn opt_datetime(
    resource: &'static str,
    field: &str,
    raw: Option<&str>,
) -> FieldgateResult<Option<NaiveDateTime>> {
    match unset_to_none(raw) {
        None => Ok(None),
        Some(raw) => parse_datetime(resource, field, raw).map(Some),
    }
}

/// Parses an optional time of day; empty or absent means unset.
pub fn opt_time(
    resource: &'static str,
    field: &str,
    raw: Option<&str>,
) -> FieldgateResult<Option<NaiveTime>> {
    match unset_to_none(raw) {
        None => Ok(None),
        Some(raw) => parse_time(resource, field, raw).map(Some),
    }
}

/// Normalizes an optional string field: empty or absent means unset.
#[must_use]
pub fn opt_string(raw: Option<String>) -> Option<String> {
    raw.filter(|s| !s.trim().is_empty())
}

fn unset_to_none(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_i32_accepts_wire_strings() {
        assert_eq!(parse_i32("appointment", "duration", "20").unwrap(), 20);
        assert_eq!(parse_i32("appointment", "duration", " 45 ").unwrap(), 45);
    }

    #[test]
    fn test_parse_i32_rejects_garbage() {
        let err = parse_i32("appointment", "duration", "twenty").unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains("duration"));
        assert!(rendered.contains("twenty"));
    }

    #[test]
    fn test_parse_flag() {
        assert!(!parse_flag("customer", "status", "0").unwrap());
        assert!(parse_flag("customer", "status", "1").unwrap());
        assert!(parse_flag("customer", "status", "yes").is_err());
    }

    #[test]
    fn test_parse_date_and_datetime() {
        let date = parse_date("route", "date", "2024-03-07").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());

        let ts = parse_datetime("note", "date", "2024-03-07 10:30:00").unwrap();
        assert_eq!(ts.time(), NaiveTime::from_hms_opt(10, 30, 0).unwrap());
    }

    #[test]
    fn test_opt_variants_treat_empty_as_unset() {
        assert_eq!(opt_i32("a", "f", None).unwrap(), None);
        assert_eq!(opt_i32("a", "f", Some("")).unwrap(), None);
        assert_eq!(opt_i32("a", "f", Some("7")).unwrap(), Some(7));
        assert_eq!(opt_date("a", "f", Some(" ")).unwrap(), None);
        assert_eq!(opt_string(Some(String::new())), None);
        assert_eq!(opt_string(Some("x".to_string())), Some("x".to_string()));
    }

    #[test]
    fn test_opt_variant_still_rejects_garbage() {
        assert!(opt_f64("payment", "amount", Some("1,50")).is_err());
    }
}
