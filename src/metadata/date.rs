//! Coercion of date-like attribute values to Unix epoch seconds.
//!
//! Accepted representations: a structured [`DateTime<Utc>`], a parseable date
//! string (RFC 3339, RFC 2822, or `YYYY-MM-DD[ HH:MM[:SS[.fff]]]` read as
//! UTC), or a numeric epoch value. Anything else is rejected.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::value::AttributeValue;

/// Errors raised while coercing a date-like value
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DateError {
    /// The value is neither a date/time, a parseable date string, nor a number
    #[error("Unsupported date representation: {0}")]
    UnsupportedDateRepresentation(String),
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"];

/// Parse a date string; naive values are taken as UTC.
pub fn parse_date(input: &str) -> Result<DateTime<Utc>, DateError> {
    let trimmed = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            if let Some(naive) = date.and_hms_opt(0, 0, 0) {
                return Ok(naive.and_utc());
            }
        }
    }

    Err(DateError::UnsupportedDateRepresentation(format!(
        "unparseable date string {:?}",
        input
    )))
}

/// Coerce to whole seconds since the epoch (fractions are truncated).
pub fn to_epoch_seconds(value: &AttributeValue) -> Result<AttributeValue, DateError> {
    let seconds = match value {
        AttributeValue::DateTime(dt) => dt.timestamp(),
        AttributeValue::String(s) => parse_date(s)?.timestamp(),
        AttributeValue::Integer(v) => *v,
        AttributeValue::Float(v) if v.is_finite() => v.trunc() as i64,
        other => return Err(unsupported(other)),
    };
    Ok(AttributeValue::Integer(seconds))
}

/// Coerce to fractional seconds since the epoch.
pub fn to_fractional_epoch_seconds(value: &AttributeValue) -> Result<AttributeValue, DateError> {
    let seconds = match value {
        AttributeValue::DateTime(dt) => fractional(dt),
        AttributeValue::String(s) => fractional(&parse_date(s)?),
        AttributeValue::Integer(v) => *v as f64,
        AttributeValue::Float(v) if v.is_finite() => *v,
        other => return Err(unsupported(other)),
    };
    Ok(AttributeValue::Float(seconds))
}

fn fractional(dt: &DateTime<Utc>) -> f64 {
    dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_micros()) / 1e6
}

fn unsupported(value: &AttributeValue) -> DateError {
    DateError::UnsupportedDateRepresentation(format!("{} value {}", value.type_name(), value))
}
