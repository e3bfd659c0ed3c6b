//! Canonical UWS time format
//!
//! Timestamps are written as ISO-8601 in UTC with milliseconds,
//! e.g. `2016-04-06T14:23:54.123Z`.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::FilterError;

/// Format a timestamp in the canonical UWS form
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an RFC 3339 timestamp, converting it to UTC
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, FilterError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FilterError::MissingCutoff);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| FilterError::InvalidTimestamp {
            value: trimmed.to_string(),
            reason: e.to_string(),
        })
}
