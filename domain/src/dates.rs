//! Fail-soft timestamp rendering.
//!
//! Display formatting never fails: input that does not parse as a timestamp
//! is returned verbatim, so a malformed value from the API degrades to raw
//! text instead of breaking a view.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Long-form date: `January 15, 2025`.
pub const DATE_PATTERN: &str = "%B %-d, %Y";

/// Long-form date with time: `January 15, 2025 6:30 PM`.
pub const DATE_TIME_PATTERN: &str = "%B %-d, %Y %-I:%M %p";

/// Compact date used on cards: `Jan 15, 2025`.
pub const CARD_DATE_PATTERN: &str = "%b %-d, %Y";

/// Parse an ISO-8601-ish timestamp string.
///
/// Accepts full RFC 3339, a naive datetime, or a bare date (midnight UTC).
fn parse(input: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed.and_utc());
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(parsed.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

/// Render a timestamp string through an explicit chrono pattern.
///
/// Unparseable input is returned unchanged.
#[must_use]
pub fn format_date_as(input: &str, pattern: &str) -> String {
    parse(input).map_or_else(|| input.to_string(), |dt| dt.format(pattern).to_string())
}

/// Render a timestamp as a long-form date (`January 15, 2025`).
#[must_use]
pub fn format_date(input: &str) -> String {
    format_date_as(input, DATE_PATTERN)
}

/// Render a timestamp as a long-form date and time
/// (`January 15, 2025 6:30 PM`).
#[must_use]
pub fn format_date_time(input: &str) -> String {
    format_date_as(input, DATE_TIME_PATTERN)
}

/// Render a timestamp in the compact card form (`Jan 15, 2025`).
#[must_use]
pub fn format_card_date(input: &str) -> String {
    format_date_as(input, CARD_DATE_PATTERN)
}
