//! Dutch date labels used by the booking page.

use chrono::{Locale, NaiveDate, NaiveDateTime, TimeZone, Utc};

use super::cursor::MonthCursor;

pub const MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maart",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Augustus",
    "September",
    "Oktober",
    "November",
    "December",
];

/// Column headers, Sunday first
pub const WEEKDAY_HEADERS: [&str; 7] = ["Zo", "Ma", "Di", "Wo", "Do", "Vr", "Za"];

/// Shown in the date display while nothing is selected.
pub const NO_DATE_SELECTED: &str = "Geen datum geselecteerd";

/// Grid header, e.g. "Februari 2024".
pub fn month_title(cursor: MonthCursor) -> String {
    format!("{} {}", MONTH_NAMES[cursor.month() as usize], cursor.year())
}

/// Long-form localized date, e.g. "donderdag 15 februari 2024".
pub fn long_date(date: NaiveDate) -> String {
    match date.and_hms_opt(12, 0, 0) {
        Some(noon) => Utc
            .from_utc_datetime(&noon)
            .format_localized("%A %-d %B %Y", Locale::nl_NL)
            .to_string(),
        None => date_key(date),
    }
}

/// Text for the selected-date display.
pub fn selection_display(selection: Option<NaiveDate>) -> String {
    selection
        .map(long_date)
        .unwrap_or_else(|| NO_DATE_SELECTED.to_string())
}

/// `YYYY-MM-DD` key carried by every bookable cell.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Request timestamp in the short Dutch style, e.g. "15-2-2024, 14:03:05".
pub fn submission_timestamp(at: NaiveDateTime) -> String {
    at.format("%-d-%-m-%Y, %H:%M:%S").to_string()
}
