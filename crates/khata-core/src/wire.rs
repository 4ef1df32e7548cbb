//! # Wire Date Codec
//!
//! Symmetric conversion between in-memory date/time values and their wire
//! string form.
//!
//! ## Wire Formats
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Wire Date Formats                                │
//! │                                                                         │
//! │  Instant fields (DateTime<Utc>)                                        │
//! │  ──────────────────────────────                                        │
//! │  memory:  2025-07-27 13:48:00 UTC                                      │
//! │  wire:    "2025-07-27T13:48:00.000Z"   (ISO-8601, millisecond)         │
//! │                                                                         │
//! │  Calendar fields (NaiveDate)                                           │
//! │  ───────────────────────────                                           │
//! │  memory:  2025-07-27                                                   │
//! │  wire:    "2025-07-27"                                                 │
//! │                                                                         │
//! │  Absent values                                                         │
//! │  ─────────────                                                         │
//! │  encode(None)        → null                                            │
//! │  decode(null or "")  → None                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The codec is a schema-driven field transform: every timestamp field of
//! every entity carries `#[serde(default, with = "wire::instant")]` or
//! `#[serde(default, with = "wire::date")]`, independent of entity type.
//!
//! Round-trip guarantee: `decode(encode(v)) == v` at wire precision
//! (milliseconds for instants, days for calendar dates).
//!
//! Malformed wire strings come from an untrusted source only in theory (the
//! backend is ours); the pure decode helpers treat unparseable input as
//! absent, while full-entity deserialization surfaces a serde error.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

// =============================================================================
// Formats
// =============================================================================

/// Wire format for calendar-date-only fields.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Pure Codec Functions
// =============================================================================

/// Encodes an optional instant to its wire string.
pub fn encode_instant(value: Option<&DateTime<Utc>>) -> Option<String> {
    value.map(|v| v.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Decodes a wire string to an instant.
///
/// Absent, empty, or unparseable input yields `None`.
pub fn decode_instant(wire: Option<&str>) -> Option<DateTime<Utc>> {
    match wire {
        None | Some("") => None,
        Some(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
    }
}

/// Encodes an optional calendar date to its wire string.
pub fn encode_date(value: Option<&NaiveDate>) -> Option<String> {
    value.map(|v| v.format(DATE_FORMAT).to_string())
}

/// Decodes a wire string to a calendar date.
///
/// Absent, empty, or unparseable input yields `None`.
pub fn decode_date(wire: Option<&str>) -> Option<NaiveDate> {
    match wire {
        None | Some("") => None,
        Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT).ok(),
    }
}

// =============================================================================
// Serde Field Adapters
// =============================================================================

/// Serde adapter for `Option<DateTime<Utc>>` fields.
///
/// Usage: `#[serde(default, with = "crate::wire::instant")]`
pub mod instant {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_str(&v.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire: Option<String> = Option::deserialize(deserializer)?;
        match wire.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => DateTime::parse_from_rfc3339(s)
                .map(|dt| Some(dt.with_timezone(&Utc)))
                .map_err(serde::de::Error::custom),
        }
    }
}

/// Serde adapter for `Option<NaiveDate>` fields.
///
/// Usage: `#[serde(default, with = "crate::wire::date")]`
pub mod date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_str(&v.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire: Option<String> = Option::deserialize(deserializer)?;
        match wire.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_encode_instant_wire_form() {
        let v = Utc.with_ymd_and_hms(2025, 7, 27, 13, 48, 0).unwrap();
        assert_eq!(
            encode_instant(Some(&v)),
            Some("2025-07-27T13:48:00.000Z".to_string())
        );
    }

    #[test]
    fn test_instant_round_trip() {
        let v = Utc.with_ymd_and_hms(2025, 7, 27, 13, 48, 0).unwrap();
        let wire = encode_instant(Some(&v));
        assert_eq!(decode_instant(wire.as_deref()), Some(v));
    }

    #[test]
    fn test_date_round_trip() {
        let v = NaiveDate::from_ymd_opt(2025, 7, 27).unwrap();
        let wire = encode_date(Some(&v));
        assert_eq!(wire, Some("2025-07-27".to_string()));
        assert_eq!(decode_date(wire.as_deref()), Some(v));
    }

    #[test]
    fn test_absent_values() {
        assert_eq!(encode_instant(None), None);
        assert_eq!(encode_date(None), None);
        assert_eq!(decode_instant(None), None);
        assert_eq!(decode_date(None), None);
        assert_eq!(decode_instant(Some("")), None);
        assert_eq!(decode_date(Some("")), None);
    }

    #[test]
    fn test_decode_instant_accepts_offset_form() {
        // Backends in other timezones may send an explicit offset; the
        // in-memory form is always UTC.
        let decoded = decode_instant(Some("2025-07-27T18:48:00.000+05:00"));
        let expected = Utc.with_ymd_and_hms(2025, 7, 27, 13, 48, 0).unwrap();
        assert_eq!(decoded, Some(expected));
    }

    #[test]
    fn test_decode_unparseable_is_absent() {
        assert_eq!(decode_instant(Some("not-a-date")), None);
        assert_eq!(decode_date(Some("27/07/2025")), None);
    }
}
