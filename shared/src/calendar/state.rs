use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::cursor::MonthCursor;
use super::format::{date_key, selection_display};
use super::grid::{classify, generate_grid, MonthGrid};
use crate::error::CalendarError;
use crate::notice::Notice;

/// Input events the booking calendar reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarEvent {
    PreviousMonth,
    NextMonth,
    /// Click on a previous-month filler cell
    ClickFiller,
    ClickDay(NaiveDate),
    /// Issued after a successful booking submission
    ClearSelection,
}

/// Side effects the host must carry out after an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarEffect {
    /// The grid must be regenerated
    Rerender,
    SelectionChanged(Option<NaiveDate>),
    Notice(Notice),
}

/// Cursor plus single-date selection for the booking calendar.
///
/// `today` is captured at construction and never refreshed, so a long-lived
/// page keeps classifying against the day it was opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingCalendar {
    cursor: MonthCursor,
    today: NaiveDate,
    selection: Option<NaiveDate>,
}

impl BookingCalendar {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            cursor: MonthCursor::containing(today),
            today,
            selection: None,
        }
    }

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn selection(&self) -> Option<NaiveDate> {
        self.selection
    }

    /// Long-form date of the selection, or the placeholder.
    pub fn selection_display(&self) -> String {
        selection_display(self.selection)
    }

    /// Apply an event and report what the host has to do.
    pub fn handle(&mut self, event: CalendarEvent) -> Vec<CalendarEffect> {
        match event {
            CalendarEvent::PreviousMonth => {
                self.cursor = self.cursor.previous();
                vec![CalendarEffect::Rerender]
            }
            CalendarEvent::NextMonth => {
                self.cursor = self.cursor.next();
                vec![CalendarEffect::Rerender]
            }
            CalendarEvent::ClickFiller => Vec::new(),
            CalendarEvent::ClickDay(date) => {
                let kind = classify(date, self.today);
                if !kind.is_bookable() {
                    log::debug!("🚫 Rejected {} ({:?})", date_key(date), kind);
                    return vec![CalendarEffect::Notice(Notice::DateUnavailable)];
                }
                log::debug!("📅 Selected {}", date_key(date));
                self.selection = Some(date);
                vec![CalendarEffect::SelectionChanged(self.selection), CalendarEffect::Rerender]
            }
            CalendarEvent::ClearSelection => {
                if self.selection.take().is_none() {
                    return Vec::new();
                }
                vec![CalendarEffect::SelectionChanged(None), CalendarEffect::Rerender]
            }
        }
    }

    /// Build the grid for the current cursor with the selection highlighted.
    ///
    /// The selection is re-applied on every render, so it reappears when the
    /// user navigates back to its month.
    pub fn render(&self) -> Result<MonthGrid, CalendarError> {
        let mut grid = generate_grid(self.cursor, self.today)?;
        grid.apply_selection(self.selection);
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::format::NO_DATE_SELECTED;
    use crate::calendar::grid::DayCell;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_calendar() -> BookingCalendar {
        BookingCalendar::new(date(2024, 2, 10))
    }

    #[test]
    fn test_initial_state() {
        let calendar = create_test_calendar();

        assert_eq!(calendar.cursor(), MonthCursor::new(2024, 1).unwrap());
        assert_eq!(calendar.selection(), None);
        assert_eq!(calendar.selection_display(), NO_DATE_SELECTED);
    }

    #[test]
    fn test_past_and_weekend_clicks_are_rejected() {
        let mut calendar = create_test_calendar();

        for day in [date(2024, 2, 9), date(2024, 2, 17), date(2024, 2, 10), date(2023, 12, 1)] {
            let before = calendar.clone();
            let effects = calendar.handle(CalendarEvent::ClickDay(day));

            assert_eq!(effects, vec![CalendarEffect::Notice(Notice::DateUnavailable)]);
            assert_eq!(calendar, before);
        }
    }

    #[test]
    fn test_rejection_keeps_existing_selection() {
        let mut calendar = create_test_calendar();
        calendar.handle(CalendarEvent::ClickDay(date(2024, 2, 15)));

        calendar.handle(CalendarEvent::ClickDay(date(2024, 2, 9)));
        calendar.handle(CalendarEvent::ClickDay(date(2024, 2, 9)));

        assert_eq!(calendar.selection(), Some(date(2024, 2, 15)));
    }

    #[test]
    fn test_valid_click_selects_and_displays_long_date() {
        let mut calendar = create_test_calendar();
        let effects = calendar.handle(CalendarEvent::ClickDay(date(2024, 2, 15)));

        assert_eq!(
            effects,
            vec![
                CalendarEffect::SelectionChanged(Some(date(2024, 2, 15))),
                CalendarEffect::Rerender
            ]
        );
        assert_eq!(calendar.selection_display(), "donderdag 15 februari 2024");
    }

    #[test]
    fn test_reselection_keeps_a_single_selected_cell() {
        let mut calendar = create_test_calendar();
        calendar.handle(CalendarEvent::ClickDay(date(2024, 2, 15)));
        calendar.handle(CalendarEvent::ClickDay(date(2024, 2, 20)));

        let grid = calendar.render().unwrap();
        let selected: Vec<_> = grid.selected().map(DayCell::day).collect();
        assert_eq!(selected, vec![20]);
    }

    #[test]
    fn test_filler_click_is_a_no_op() {
        let mut calendar = create_test_calendar();
        let before = calendar.clone();

        assert!(calendar.handle(CalendarEvent::ClickFiller).is_empty());
        assert_eq!(calendar, before);
    }

    #[test]
    fn test_navigation_keeps_selection_and_reapplies_highlight() {
        let mut calendar = create_test_calendar();
        calendar.handle(CalendarEvent::ClickDay(date(2024, 2, 15)));

        assert_eq!(calendar.handle(CalendarEvent::NextMonth), vec![CalendarEffect::Rerender]);
        assert_eq!(calendar.cursor(), MonthCursor::new(2024, 2).unwrap());
        assert_eq!(calendar.render().unwrap().selected().count(), 0);
        assert_eq!(calendar.selection(), Some(date(2024, 2, 15)));

        calendar.handle(CalendarEvent::PreviousMonth);
        let grid = calendar.render().unwrap();
        assert_eq!(grid.selected().map(DayCell::day).collect::<Vec<_>>(), vec![15]);
    }

    #[test]
    fn test_navigation_across_year_boundary() {
        let mut calendar = BookingCalendar::new(date(2024, 12, 2));
        calendar.handle(CalendarEvent::NextMonth);
        assert_eq!(calendar.cursor(), MonthCursor::new(2025, 0).unwrap());

        let mut calendar = BookingCalendar::new(date(2024, 1, 2));
        calendar.handle(CalendarEvent::PreviousMonth);
        assert_eq!(calendar.cursor(), MonthCursor::new(2023, 11).unwrap());
    }

    #[test]
    fn test_selecting_in_a_later_month() {
        let mut calendar = create_test_calendar();
        calendar.handle(CalendarEvent::NextMonth);
        // 2024-03-04 is a Monday
        calendar.handle(CalendarEvent::ClickDay(date(2024, 3, 4)));

        assert_eq!(calendar.selection(), Some(date(2024, 3, 4)));
        assert_eq!(calendar.render().unwrap().selected().count(), 1);
    }

    #[test]
    fn test_clear_selection() {
        let mut calendar = create_test_calendar();
        assert!(calendar.handle(CalendarEvent::ClearSelection).is_empty());

        calendar.handle(CalendarEvent::ClickDay(date(2024, 2, 15)));
        let effects = calendar.handle(CalendarEvent::ClearSelection);

        assert_eq!(
            effects,
            vec![CalendarEffect::SelectionChanged(None), CalendarEffect::Rerender]
        );
        assert_eq!(calendar.selection(), None);
        assert_eq!(calendar.render().unwrap().selected().count(), 0);
    }

    #[test]
    fn test_today_on_a_weekday_is_bookable() {
        let mut calendar = BookingCalendar::new(date(2024, 2, 14));
        calendar.handle(CalendarEvent::ClickDay(date(2024, 2, 14)));
        assert_eq!(calendar.selection(), Some(date(2024, 2, 14)));
    }
}
