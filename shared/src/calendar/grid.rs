use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::cursor::{days_in_month, MonthCursor};
use super::format::{date_key, month_title};
use crate::error::CalendarError;

/// Styling class of a day cell. Exactly one applies to every month cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Past,
    Weekend,
    Today,
    Normal,
}

impl CellKind {
    /// Past days and weekends cannot be booked.
    pub fn is_bookable(self) -> bool {
        matches!(self, CellKind::Today | CellKind::Normal)
    }
}

/// Classify `date` against the captured `today` reference.
///
/// Priority is past, then weekend, then today, so a past Saturday is `Past`.
pub fn classify(date: NaiveDate, today: NaiveDate) -> CellKind {
    if date < today {
        CellKind::Past
    } else if is_weekend(date) {
        CellKind::Weekend
    } else if date == today {
        CellKind::Today
    } else {
        CellKind::Normal
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// A day of the displayed month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_past: bool,
    /// Saturday or Sunday that is not in the past
    pub is_weekend: bool,
    pub is_selected: bool,
}

impl DayCell {
    fn new(date: NaiveDate, today: NaiveDate) -> Self {
        let is_past = date < today;
        Self {
            date,
            is_today: date == today,
            is_past,
            is_weekend: is_weekend(date) && !is_past,
            is_selected: false,
        }
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn kind(&self) -> CellKind {
        if self.is_past {
            CellKind::Past
        } else if self.is_weekend {
            CellKind::Weekend
        } else if self.is_today {
            CellKind::Today
        } else {
            CellKind::Normal
        }
    }

    pub fn key(&self) -> String {
        date_key(self.date)
    }
}

/// One slot of the seven-column grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridCell {
    /// Trailing day of the previous month, shown for alignment only
    Filler { day: u32 },
    Day(DayCell),
}

/// A fully generated month. Rebuilt from scratch on every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    pub cursor: MonthCursor,
    /// Weekday index of the 1st (0 = Sunday)
    pub leading_fillers: u32,
    pub cells: Vec<GridCell>,
}

impl MonthGrid {
    pub fn title(&self) -> String {
        month_title(self.cursor)
    }

    pub fn day_cells(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter_map(|cell| match cell {
            GridCell::Day(day) => Some(day),
            GridCell::Filler { .. } => None,
        })
    }

    pub fn selected(&self) -> impl Iterator<Item = &DayCell> {
        self.day_cells().filter(|cell| cell.is_selected)
    }

    /// Mark the cell matching `selection`, clearing any other mark.
    pub fn apply_selection(&mut self, selection: Option<NaiveDate>) {
        for cell in &mut self.cells {
            if let GridCell::Day(day) = cell {
                day.is_selected = Some(day.date) == selection;
            }
        }
    }
}

/// Generate the grid for `cursor`, classifying each day against `today`.
///
/// Leading fillers cover the weekdays before the 1st; the grid ends on the
/// last day of the month without trailing fill.
pub fn generate_grid(cursor: MonthCursor, today: NaiveDate) -> Result<MonthGrid, CalendarError> {
    let first = cursor.first_day()?;
    let leading_fillers = first.weekday().num_days_from_sunday();
    let month_days = cursor.days_in_month();

    let previous = cursor.previous();
    let previous_days = days_in_month(previous.year(), previous.month_number());

    log::debug!(
        "🗓️ Generating grid for {}: {} fillers, {} days",
        month_title(cursor),
        leading_fillers,
        month_days
    );

    let mut cells = Vec::with_capacity((leading_fillers + month_days) as usize);

    for i in 0..leading_fillers {
        cells.push(GridCell::Filler {
            day: previous_days - leading_fillers + i + 1,
        });
    }

    for day in 1..=month_days {
        let date = cursor.day(day)?;
        cells.push(GridCell::Day(DayCell::new(date, today)));
    }

    Ok(MonthGrid {
        cursor,
        leading_fillers,
        cells,
    })
}
