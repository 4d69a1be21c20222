//! Date arithmetic and the two wire formats for calendar dates.
//!
//! Archive filenames and the `date` field of a theme record use the ISO
//! form `YYYY-MM-DD`; the URL query parameter uses the compact 8-digit
//! form `YYYYMMDD`. Both map to [`chrono::NaiveDate`].

use crate::error::{ThemeError, ThemeResult};
use chrono::{Datelike, NaiveDate};

/// Parse the compact 8-digit `YYYYMMDD` form used by the `date` URL
/// parameter.
pub fn parse_compact(value: &str) -> ThemeResult<NaiveDate> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ThemeError::InvalidDate {
            value: value.to_string(),
            reason: "expected 8 digits (YYYYMMDD)".to_string(),
        });
    }

    NaiveDate::parse_from_str(value, "%Y%m%d").map_err(|e| ThemeError::InvalidDate {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Format a date in the compact 8-digit `YYYYMMDD` form.
pub fn compact(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Parse the ISO `YYYY-MM-DD` form used by archive filenames and record
/// `date` fields.
pub fn parse_iso(value: &str) -> ThemeResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| ThemeError::InvalidDate {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Format a date in the ISO `YYYY-MM-DD` form.
pub fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Number of days in the given month (1-based), accounting for leap years.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or_else(|| panic!("invalid month {year}-{month}"));
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .unwrap_or_else(|| panic!("invalid month {year}-{month}"));
    next.signed_duration_since(first).num_days() as u32
}

/// Weekday offset of the month's first day from Sunday (0..=6), i.e. the
/// number of leading blank cells in a Sunday-first calendar grid.
pub fn leading_offset(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}
