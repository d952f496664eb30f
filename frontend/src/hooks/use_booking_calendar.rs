use chrono::NaiveDate;
use shared::{BookingCalendar, CalendarEffect, CalendarEvent, MonthGrid, Notice};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct BookingCalendarState {
    /// `None` when the cursor left chrono's supported range
    pub grid: Option<MonthGrid>,
    pub selection_display: String,
}

pub struct UseBookingCalendarResult {
    pub state: BookingCalendarState,
    pub actions: UseBookingCalendarActions,
}

#[derive(Clone)]
pub struct UseBookingCalendarActions {
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
    pub dispatch: Callback<CalendarEvent>,
}

/// Booking calendar bound to a component.
///
/// `today` is only called on the first render. Notices raised by the calendar
/// go to `on_notice`.
#[hook]
pub fn use_booking_calendar(
    today: fn() -> NaiveDate,
    on_notice: Callback<Notice>,
) -> UseBookingCalendarResult {
    let calendar = use_mut_ref(|| BookingCalendar::new(today()));
    let force_update = use_force_update();

    let dispatch = {
        let calendar = calendar.clone();
        use_callback(on_notice, move |event: CalendarEvent, on_notice| {
            let effects = calendar.borrow_mut().handle(event);
            let mut rerender = false;
            for effect in effects {
                match effect {
                    CalendarEffect::Rerender => rerender = true,
                    CalendarEffect::SelectionChanged(selection) => {
                        Logger::debug_with_component("booking-calendar", &format!("Selection is now {:?}", selection));
                    }
                    CalendarEffect::Notice(notice) => on_notice.emit(notice),
                }
            }
            if rerender {
                force_update.force_update();
            }
        })
    };

    let prev_month = {
        let dispatch = dispatch.clone();
        use_callback(dispatch, |_: MouseEvent, dispatch| dispatch.emit(CalendarEvent::PreviousMonth))
    };

    let next_month = {
        let dispatch = dispatch.clone();
        use_callback(dispatch, |_: MouseEvent, dispatch| dispatch.emit(CalendarEvent::NextMonth))
    };

    let state = {
        let calendar = calendar.borrow();
        let grid = match calendar.render() {
            Ok(grid) => Some(grid),
            Err(err) => {
                Logger::warn_with_component("booking-calendar", &format!("⚠️ Cannot render month: {}", err));
                None
            }
        };
        BookingCalendarState {
            grid,
            selection_display: calendar.selection_display(),
        }
    };

    let actions = UseBookingCalendarActions {
        prev_month,
        next_month,
        dispatch,
    };

    UseBookingCalendarResult { state, actions }
}
