//! Calendar-date helpers.
//!
//! All dates in the catalog are stored as ISO `YYYY-MM-DD` strings, exactly
//! as they arrive from seed data or the persisted catalog file. This module
//! is the single place that turns those strings into [`NaiveDate`]s.
//! A string that fails to parse yields `None`; date-dependent logic treats
//! that as "no date", never as an error.

use chrono::NaiveDate;

pub const ISO_DATE: &str = "%Y-%m-%d";

/// Parse an ISO calendar date. Empty, whitespace-only, or malformed input
/// yields `None`.
pub fn parse_iso(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, ISO_DATE).ok()
}

/// Format a date back to the canonical ISO form.
pub fn to_iso(date: NaiveDate) -> String {
    date.format(ISO_DATE).to_string()
}

/// Whole calendar days from `today` to `date`. Negative when `date` is in
/// the past, zero when it is today.
pub fn calendar_days_from(today: NaiveDate, date: NaiveDate) -> i64 {
    date.signed_duration_since(today).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_iso_date() {
        assert_eq!(
            parse_iso("2024-07-22"),
            NaiveDate::from_ymd_opt(2024, 7, 22)
        );
    }

    #[test]
    fn trims_before_parsing() {
        assert!(parse_iso("  2024-07-22  ").is_some());
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_iso(""), None);
        assert_eq!(parse_iso("   "), None);
        assert_eq!(parse_iso("not-a-date"), None);
        assert_eq!(parse_iso("2024-13-40"), None);
        assert_eq!(parse_iso("22/07/2024"), None);
    }

    #[test]
    fn day_difference_is_calendar_based() {
        let today = NaiveDate::from_ymd_opt(2024, 7, 21).unwrap();
        let tomorrow = NaiveDate::from_ymd_opt(2024, 7, 22).unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2024, 7, 20).unwrap();

        assert_eq!(calendar_days_from(today, today), 0);
        assert_eq!(calendar_days_from(today, tomorrow), 1);
        assert_eq!(calendar_days_from(today, yesterday), -1);
    }

    #[test]
    fn iso_round_trip() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
        assert_eq!(parse_iso(&to_iso(date)), Some(date));
    }
}
