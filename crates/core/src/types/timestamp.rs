//! Loosely-typed date and datetime scalar.
//!
//! API payloads carry dates as RFC 3339 strings, as `Y-m-d H:i:s` or `Y-m-d`
//! strings, or as epoch milliseconds, integral or fractional. [`Timestamp`]
//! accepts all of them without validation and offers a best-effort
//! conversion to UTC.
//!
//! Numbers and non-RFC 3339 strings serialize back exactly as received.
//! RFC 3339 strings are parsed, so they serialize in chrono's normalized
//! form (`2020-04-20T13:53:12.000Z` becomes `2020-04-20T13:53:12Z`).

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A date or datetime, tagged by the representation the producer used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    /// RFC 3339 datetime with offset, e.g. `2020-04-20T13:53:12+02:00`.
    DateTime(DateTime<FixedOffset>),
    /// Milliseconds since the Unix epoch, possibly fractional.
    EpochMillis(Number),
    /// Any other string, kept verbatim.
    Text(String),
}

impl Timestamp {
    /// Best-effort conversion to UTC.
    ///
    /// Naive `Y-m-d H:i:s` and `Y-m-d` strings are read as UTC. Returns `None`
    /// for text in any other format or out-of-range epoch values.
    #[must_use]
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(dt.with_timezone(&Utc)),
            Self::EpochMillis(ms) => match ms.as_i64() {
                Some(ms) => DateTime::from_timestamp_millis(ms),
                None => ms.as_f64().and_then(from_fractional_millis),
            },
            Self::Text(text) => parse_naive(text).map(|naive| naive.and_utc()),
        }
    }
}

// Float-to-int casts saturate; out-of-range seconds are rejected by chrono.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn from_fractional_millis(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() {
        return None;
    }
    let secs = (ms / 1000.0).floor();
    let nanos = ((ms - secs * 1000.0) * 1_000_000.0).round().min(999_999_999.0);
    DateTime::from_timestamp(secs as i64, nanos as u32)
}

fn parse_naive(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, DATETIME_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(text, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::DateTime(dt.fixed_offset())
    }
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self {
        Self::EpochMillis(ms.into())
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::DateTime(dt)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn test_rfc3339_string_becomes_datetime() {
        let ts: Timestamp = serde_json::from_str("\"2020-04-20T13:53:12+02:00\"").unwrap();
        assert!(matches!(ts, Timestamp::DateTime(_)));
        let utc = ts.to_utc().unwrap();
        assert_eq!(utc.hour(), 11);
    }

    #[test]
    fn test_naive_datetime_string_is_kept_as_text() {
        let ts: Timestamp = serde_json::from_str("\"2018-05-23 13:43:32\"").unwrap();
        assert_eq!(ts, Timestamp::Text("2018-05-23 13:43:32".to_string()));
        let utc = ts.to_utc().unwrap();
        assert_eq!((utc.year(), utc.month(), utc.day()), (2018, 5, 23));
        assert_eq!(utc.minute(), 43);
    }

    #[test]
    fn test_date_string() {
        let ts: Timestamp = serde_json::from_str("\"2011-05-23\"").unwrap();
        let utc = ts.to_utc().unwrap();
        assert_eq!((utc.year(), utc.month(), utc.day()), (2011, 5, 23));
        assert_eq!(utc.hour(), 0);
    }

    #[test]
    fn test_epoch_millis() {
        let ts: Timestamp = serde_json::from_str("1700000000000").unwrap();
        assert_eq!(ts, Timestamp::from(1_700_000_000_000));
        assert_eq!(ts.to_utc().unwrap().timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_fractional_epoch_millis() {
        let ts: Timestamp = serde_json::from_str("1700000000000.5").unwrap();
        assert!(matches!(ts, Timestamp::EpochMillis(_)));
        let utc = ts.to_utc().unwrap();
        assert_eq!(utc.timestamp(), 1_700_000_000);
        assert_eq!(utc.timestamp_subsec_nanos(), 500_000);
        assert_eq!(serde_json::to_string(&ts).unwrap(), "1700000000000.5");
    }

    #[test]
    fn test_negative_fractional_epoch_millis() {
        let ts: Timestamp = serde_json::from_str("-1500.5").unwrap();
        let utc = ts.to_utc().unwrap();
        assert_eq!(utc.timestamp(), -2);
        assert_eq!(utc.timestamp_subsec_nanos(), 499_500_000);
    }

    #[test]
    fn test_unparseable_text() {
        let ts: Timestamp = serde_json::from_str("\"next tuesday\"").unwrap();
        assert!(ts.to_utc().is_none());
    }

    #[test]
    fn test_numbers_and_text_serialize_as_received() {
        let ts = Timestamp::from(5);
        assert_eq!(serde_json::to_string(&ts).unwrap(), "5");

        let ts = Timestamp::Text("2011-05-23".to_string());
        assert_eq!(serde_json::to_string(&ts).unwrap(), "\"2011-05-23\"");
    }

    #[test]
    fn test_rfc3339_serializes_normalized() {
        let ts: Timestamp = serde_json::from_str("\"2020-04-20T13:53:12.000Z\"").unwrap();
        assert_eq!(
            serde_json::to_string(&ts).unwrap(),
            "\"2020-04-20T13:53:12Z\""
        );
    }
}
