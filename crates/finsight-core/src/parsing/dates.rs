use chrono::{DateTime, NaiveDate};

/// Parse a period end date as entered by the user.
///
/// Accepts an ISO calendar date ("2024-12-31") or an RFC 3339 timestamp,
/// whose calendar date is used as written.
pub fn parse_period_end_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.date_naive())
    })
}
