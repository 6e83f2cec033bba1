// Date utility functions
// ISO dates, hour labels and week/month arithmetic shared by the grid builders

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use thiserror::Error;

/// ISO calendar date format used by event data (`yyyy-MM-dd`)
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Hour label format: 24-hour digits with an AM/PM suffix ("14:00 PM")
pub const HOUR_LABEL_FORMAT: &str = "%H:%M %p";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("invalid calendar date '{0}' (expected yyyy-MM-dd)")]
    InvalidDate(String),
    #[error("invalid hour label '{0}' (expected HH:mm)")]
    InvalidHour(String),
}

/// Parse a strict `yyyy-MM-dd` date string.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = value.trim();
    if trimmed.len() != 10 {
        return Err(DateParseError::InvalidDate(value.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT)
        .map_err(|_| DateParseError::InvalidDate(value.to_string()))
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Find the first `HH:mm` digit group inside an hour label.
///
/// Labels such as `"09:00 AM"` or `"13:30 pm"` carry the time as 24-hour
/// digits; the AM/PM suffix is informational only and is ignored.
pub fn extract_hour_digits(label: &str) -> Option<&str> {
    label
        .as_bytes()
        .windows(5)
        .position(|w| {
            w[0].is_ascii_digit()
                && w[1].is_ascii_digit()
                && w[2] == b':'
                && w[3].is_ascii_digit()
                && w[4].is_ascii_digit()
        })
        .map(|start| &label[start..start + 5])
}

/// Parse the time of day out of an hour label.
pub fn parse_hour_label(label: &str) -> Result<NaiveTime, DateParseError> {
    extract_hour_digits(label)
        .and_then(|digits| NaiveTime::parse_from_str(digits, "%H:%M").ok())
        .ok_or_else(|| DateParseError::InvalidHour(label.to_string()))
}

pub fn format_hour_label(time: NaiveTime) -> String {
    time.format(HOUR_LABEL_FORMAT).to_string()
}

/// Label of the hour row starting at `hour` (0-23).
pub fn hour_label(hour: u32) -> String {
    NaiveTime::from_hms_opt(hour % 24, 0, 0)
        .map(format_hour_label)
        .unwrap_or_default()
}

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn get_week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day_of_week as i64 + 7) % 7;
    date - Duration::days(offset)
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// Move by whole months, clamping the day to the target month's length
/// (Jan 31 + 1 month = Feb 28/29).
pub fn shift_months(current: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = current.year() * 12 + current.month0() as i32 + delta_months;
    let year = total_months.div_euclid(12);
    let month = total_months.rem_euclid(12) as u32 + 1;
    let day = current.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(current)
}
