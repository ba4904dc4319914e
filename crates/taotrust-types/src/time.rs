//! Timestamps and validity periods
//!
//! Evidence documents carry timestamps in the textual form
//! `YYYY-MM-DDZHH:MM.SS` (a literal `Z` between date and time, a dot
//! before the seconds). All times are UTC.

use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// chrono format string for evidence timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dZ%H:%M.%S";

/// Parse an evidence timestamp
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT)
        .map_err(|e| Error::InvalidTimestamp(format!("{:?}: {}", s, e)))?;
    Ok(naive.and_utc())
}

/// Render a timestamp in evidence form
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// A closed interval during which a signed statement is valid
///
/// Both bounds are inclusive: a statement is usable at exactly
/// `not_before` and at exactly `not_after`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidityPeriod {
    not_before: DateTime<Utc>,
    not_after: DateTime<Utc>,
}

impl ValidityPeriod {
    /// Create a period, rejecting an end that precedes the start
    pub fn new(not_before: DateTime<Utc>, not_after: DateTime<Utc>) -> Result<Self> {
        if not_after < not_before {
            return Err(Error::InvalidPeriod(format!(
                "notAfter {} precedes notBefore {}",
                format_timestamp(not_after),
                format_timestamp(not_before)
            )));
        }
        Ok(ValidityPeriod {
            not_before,
            not_after,
        })
    }

    /// Parse both bounds from their textual form
    pub fn parse(not_before: &str, not_after: &str) -> Result<Self> {
        ValidityPeriod::new(parse_timestamp(not_before)?, parse_timestamp(not_after)?)
    }

    /// Start of the period
    pub fn not_before(&self) -> DateTime<Utc> {
        self.not_before
    }

    /// End of the period
    pub fn not_after(&self) -> DateTime<Utc> {
        self.not_after
    }

    /// Whether `at` falls within the period, bounds inclusive
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.not_before <= at && at <= self.not_after
    }
}

impl std::fmt::Display for ValidityPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}]",
            format_timestamp(self.not_before),
            format_timestamp(self.not_after)
        )
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PeriodRepr {
    not_before: String,
    not_after: String,
}

impl Serialize for ValidityPeriod {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        PeriodRepr {
            not_before: format_timestamp(self.not_before),
            not_after: format_timestamp(self.not_after),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ValidityPeriod {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let repr = PeriodRepr::deserialize(deserializer)?;
        ValidityPeriod::parse(&repr.not_before, &repr.not_after).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_parse_format_roundtrip() {
        let at = parse_timestamp("2025-03-07Z16:40.05").unwrap();
        assert_eq!(format_timestamp(at), "2025-03-07Z16:40.05");
    }

    #[test]
    fn test_parse_rejects_iso8601() {
        assert!(parse_timestamp("2025-03-07T16:40:05Z").is_err());
        assert!(parse_timestamp("2025-03-07").is_err());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let period = ValidityPeriod::parse("2025-01-01Z00:00.00", "2026-01-01Z00:00.00").unwrap();
        assert!(period.contains(period.not_before()));
        assert!(period.contains(period.not_after()));
        assert!(!period.contains(period.not_before() - Duration::seconds(1)));
        assert!(!period.contains(period.not_after() + Duration::seconds(1)));
    }

    #[test]
    fn test_rejects_inverted_period() {
        assert!(ValidityPeriod::parse("2026-01-01Z00:00.00", "2025-01-01Z00:00.00").is_err());
    }

    #[test]
    fn test_serde_uses_textual_form() {
        let period = ValidityPeriod::parse("2025-01-01Z00:00.00", "2026-01-01Z00:00.00").unwrap();
        let json = serde_json::to_string(&period).unwrap();
        assert_eq!(
            json,
            r#"{"notBefore":"2025-01-01Z00:00.00","notAfter":"2026-01-01Z00:00.00"}"#
        );
        let back: ValidityPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(back, period);
    }
}
