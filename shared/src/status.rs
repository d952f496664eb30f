use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Weekday opening hours, `open_hour` inclusive and `close_hour` exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessHours {
    pub open_hour: u32,
    pub close_hour: u32,
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            open_hour: 8,
            close_hour: 18,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpeningStatus {
    Open,
    Closed,
}

impl OpeningStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OpeningStatus::Open => "Nu geopend",
            OpeningStatus::Closed => "Gesloten",
        }
    }
}

/// Open Monday to Friday within business hours, local time.
pub fn opening_status(now: NaiveDateTime, hours: &BusinessHours) -> OpeningStatus {
    let weekday = !matches!(now.weekday(), Weekday::Sat | Weekday::Sun);
    let hour = now.hour();
    if weekday && hour >= hours.open_hour && hour < hours.close_hour {
        OpeningStatus::Open
    } else {
        OpeningStatus::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn test_opening_status() {
        let hours = BusinessHours::default();

        // 2024-02-14 is a Wednesday
        assert_eq!(opening_status(at(2024, 2, 14, 8, 0), &hours), OpeningStatus::Open);
        assert_eq!(opening_status(at(2024, 2, 14, 17, 59), &hours), OpeningStatus::Open);
        assert_eq!(opening_status(at(2024, 2, 14, 18, 0), &hours), OpeningStatus::Closed);
        assert_eq!(opening_status(at(2024, 2, 14, 7, 59), &hours), OpeningStatus::Closed);
        // Saturday
        assert_eq!(opening_status(at(2024, 2, 17, 12, 0), &hours), OpeningStatus::Closed);
    }

    #[test]
    fn test_labels() {
        assert_eq!(OpeningStatus::Closed.label(), "Gesloten");
    }
}
