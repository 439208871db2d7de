//! Scalar value types shared by the models.
//!
//! Responsibilities:
//! - `Timestamp`: a UTC instant encoded as epoch seconds on the wire.
//! - `SensitiveString`: a string (password, embed URL) that is redacted in
//!   `Debug` and rendering, but sent verbatim in the JSON body.
//!
//! Invariants:
//! - `Timestamp` holds millisecond precision, so values survive a JSON round
//!   trip unchanged.
//! - `SensitiveString` equality and hashing compare the secret contents.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::serde_helpers;
use crate::shape::Render;

/// A point in time, UTC, millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Build from whole epoch seconds.
    pub fn from_epoch_seconds(seconds: i64) -> Option<Self> {
        DateTime::from_timestamp(seconds, 0).map(Self)
    }

    /// Build from epoch milliseconds.
    pub fn from_epoch_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(Self)
    }

    pub fn now() -> Self {
        Self::from(Utc::now())
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    pub fn epoch_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        let millis = value.timestamp_millis();
        Self(DateTime::from_timestamp_millis(millis).unwrap_or(value))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true))
    }
}

impl Render for Timestamp {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = self.epoch_millis();
        if millis % 1000 == 0 {
            serializer.serialize_i64(millis / 1000)
        } else {
            serializer.serialize_f64(millis as f64 / 1000.0)
        }
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_helpers::epoch_from_number_or_string(deserializer).map(Self::from)
    }
}

/// A string kept out of logs and renderings.
#[derive(Clone)]
pub struct SensitiveString(SecretString);

impl SensitiveString {
    pub fn new(value: impl Into<String>) -> Self {
        let value: String = value.into();
        Self(SecretString::new(value.into()))
    }

    /// The secret contents.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<&str> for SensitiveString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SensitiveString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl PartialEq for SensitiveString {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl Eq for SensitiveString {}

impl Hash for SensitiveString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.expose().hash(state);
    }
}

impl fmt::Debug for SensitiveString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SensitiveString(<redacted>)")
    }
}

impl Render for SensitiveString {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

impl Serialize for SensitiveString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.expose().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SensitiveString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_truncates_to_millis() {
        let dt = DateTime::from_timestamp(1_577_836_800, 123_456_789).unwrap();
        let ts = Timestamp::from(dt);
        assert_eq!(ts.epoch_millis(), 1_577_836_800_123);
    }

    #[test]
    fn test_timestamp_serializes_whole_seconds_as_integer() {
        let ts = Timestamp::from_epoch_seconds(1_577_836_800).unwrap();
        assert_eq!(serde_json::to_string(&ts).unwrap(), "1577836800");
    }

    #[test]
    fn test_timestamp_fractional_round_trip() {
        let ts = Timestamp::from_epoch_millis(1_577_836_800_250).unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "1577836800.25");
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }

    #[test]
    fn test_timestamp_display_is_rfc3339() {
        let ts = Timestamp::from_epoch_seconds(0).unwrap();
        assert_eq!(ts.to_string(), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn test_sensitive_string_is_redacted() {
        let secret = SensitiveString::new("hunter2");
        assert!(!format!("{secret:?}").contains("hunter2"));
        assert_eq!(secret.expose(), "hunter2");
        assert_eq!(serde_json::to_string(&secret).unwrap(), "\"hunter2\"");
    }

    #[test]
    fn test_sensitive_string_equality_compares_contents() {
        assert_eq!(SensitiveString::new("a"), SensitiveString::from("a"));
        assert_ne!(SensitiveString::new("a"), SensitiveString::new("b"));
    }
}
