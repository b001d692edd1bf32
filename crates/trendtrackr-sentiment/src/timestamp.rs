//! Publish-timestamp parsing for the daily series.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::SentimentError;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Parse a raw publish timestamp into its UTC calendar date.
///
/// Accepts RFC 3339 (NewsAPI `publishedAt`), RFC 2822 (RSS `pubDate`), naive
/// `YYYY-MM-DD[T ]HH:MM:SS` read as UTC, and bare `YYYY-MM-DD`. Blank input
/// is treated as absent and returns `Ok(None)`.
///
/// # Errors
///
/// Returns [`SentimentError::MalformedTimestamp`] when no format matches.
pub fn parse_published_date(raw: &str) -> Result<Option<NaiveDate>, SentimentError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(Some(dt.with_timezone(&Utc).date_naive()));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(Some(dt.with_timezone(&Utc).date_naive()));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(Some(dt.date()));
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|e| SentimentError::MalformedTimestamp {
            value: raw.to_string(),
            reason: e.to_string(),
        })
}
