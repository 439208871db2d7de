//! Serde helpers for the service's timestamp encoding.
//!
//! Responsibilities:
//! - Accept epoch timestamps as JSON numbers (integer or fractional seconds)
//!   or as strings holding either a number or an RFC 3339 date.
//! - Keep parsing behavior centralized so `Timestamp` stays small.
//!
//! Explicitly does NOT handle:
//! - Time zones other than UTC; all values are normalized to UTC.
//!
//! Invariants / assumptions:
//! - Precision is milliseconds; finer fractions are rounded.
//! - Parse errors are generic and never echo more than the offending value.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::de::Error as _;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EpochOrString {
    I64(i64),
    F64(f64),
    String(String),
}

/// Convert fractional epoch seconds to a UTC instant with millisecond precision.
pub fn from_epoch_seconds(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let millis = (seconds * 1000.0).round();
    if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64)
}

/// Parse a textual timestamp: numeric epoch seconds or RFC 3339.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(seconds) = text.parse::<f64>() {
        return from_epoch_seconds(seconds);
    }
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

pub fn epoch_from_number_or_string<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match EpochOrString::deserialize(deserializer)? {
        EpochOrString::I64(seconds) => DateTime::from_timestamp(seconds, 0)
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {seconds}"))),
        EpochOrString::F64(seconds) => from_epoch_seconds(seconds)
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {seconds}"))),
        EpochOrString::String(text) => parse_timestamp(&text)
            .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {text}"))),
    }
}
