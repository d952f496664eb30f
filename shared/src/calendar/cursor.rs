use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// The month currently shown by the booking calendar.
///
/// `month` is zero-based (0 = January). Navigation wraps across year
/// boundaries and stops at the first and last month `i32` years can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    /// Returns `None` when `month` is not in `0..12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (month < 12).then_some(Self { year, month })
    }

    /// Cursor for the month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month index
    pub fn month(&self) -> u32 {
        self.month
    }

    /// One-based month number, as chrono expects it
    pub fn month_number(&self) -> u32 {
        self.month + 1
    }

    pub fn next(self) -> Self {
        if self.month == 11 {
            match self.year.checked_add(1) {
                Some(year) => Self { year, month: 0 },
                None => self,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn previous(self) -> Self {
        if self.month == 0 {
            match self.year.checked_sub(1) {
                Some(year) => Self { year, month: 11 },
                None => self,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn first_day(&self) -> Result<NaiveDate, CalendarError> {
        self.day(1)
    }

    pub fn day(&self, day: u32) -> Result<NaiveDate, CalendarError> {
        NaiveDate::from_ymd_opt(self.year, self.month_number(), day).ok_or(
            CalendarError::OutOfRange {
                year: self.year,
                month: self.month,
            },
        )
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month_number())
    }
}

/// Number of days in a one-based `month` of `year`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Gregorian leap year rule
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range_month() {
        assert!(MonthCursor::new(2024, 11).is_some());
        assert!(MonthCursor::new(2024, 12).is_none());
    }

    #[test]
    fn test_navigation_wraps_across_years() {
        let december = MonthCursor::new(2024, 11).unwrap();
        assert_eq!(december.next(), MonthCursor::new(2025, 0).unwrap());

        let january = MonthCursor::new(2024, 0).unwrap();
        assert_eq!(january.previous(), MonthCursor::new(2023, 11).unwrap());

        let june = MonthCursor::new(2025, 5).unwrap();
        assert_eq!(june.next(), MonthCursor::new(2025, 6).unwrap());
        assert_eq!(june.previous(), MonthCursor::new(2025, 4).unwrap());
    }

    #[test]
    fn test_next_then_previous_is_identity() {
        let mut cursor = MonthCursor::new(1999, 0).unwrap();
        for _ in 0..30 {
            assert_eq!(cursor.next().previous(), cursor);
            cursor = cursor.next();
        }
        assert_eq!(cursor, MonthCursor::new(2001, 6).unwrap());
    }

    #[test]
    fn test_containing() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        let cursor = MonthCursor::containing(date);

        assert_eq!(cursor.year(), 2024);
        assert_eq!(cursor.month(), 1);
        assert_eq!(cursor.month_number(), 2);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
    }

    #[test]
    fn test_is_leap_year() {
        assert!(!is_leap_year(2025));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }

    #[test]
    fn test_navigation_stops_at_year_limits() {
        let last = MonthCursor::new(i32::MAX, 11).unwrap();
        assert_eq!(last.next(), last);
        assert_eq!(last.previous(), MonthCursor::new(i32::MAX, 10).unwrap());

        let first = MonthCursor::new(i32::MIN, 0).unwrap();
        assert_eq!(first.previous(), first);
        assert_eq!(first.next(), MonthCursor::new(i32::MIN, 1).unwrap());
    }

    #[test]
    fn test_first_day_out_of_range() {
        let cursor = MonthCursor::new(i32::MAX, 0).unwrap();
        assert_eq!(
            cursor.first_day(),
            Err(CalendarError::OutOfRange { year: i32::MAX, month: 0 })
        );
    }
}
