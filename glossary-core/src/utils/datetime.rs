//! Timestamp formatting helpers.
//!
//! Glossary records keep `lastModified` as a string stamped at mutation time.
//! The string is RFC 3339 with second precision and a `Z` suffix, e.g.
//! `2024-03-01T12:30:00Z`, so it sorts lexicographically.

use chrono::{DateTime, SecondsFormat, Utc};

/// Formats a mutation time as the `lastModified` string.
#[must_use]
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parses a `lastModified` string back into a timestamp.
///
/// Returns `None` for strings written by other tools in a non-RFC 3339 layout.
#[must_use]
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
