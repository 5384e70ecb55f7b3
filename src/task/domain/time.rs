//! ISO-8601 timestamp helpers.

use chrono::{DateTime, SecondsFormat, Utc};
use mockable::Clock;

/// Formats a timestamp as UTC RFC 3339 with millisecond precision.
#[must_use]
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Captures the clock's current time as an ISO-8601 string.
#[must_use]
pub fn now_iso(clock: &impl Clock) -> String {
    format_timestamp(clock.utc())
}
