use chrono::{NaiveDate, NaiveDateTime};
use js_sys::Date;

/// Current local wall-clock time as reported by the browser.
pub fn local_now() -> NaiveDateTime {
    let now = Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .and_then(|date| date.and_hms_opt(now.get_hours(), now.get_minutes(), now.get_seconds()))
        .unwrap_or_default()
}

/// Today's local date
pub fn today() -> NaiveDate {
    local_now().date()
}
