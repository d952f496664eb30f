use shared::calendar::WEEKDAY_HEADERS;
use shared::{CalendarEvent, CellKind, DayCell, GridCell, MonthGrid};
use web_sys::MouseEvent;
use yew::prelude::*;

const DAY_BASE: &str =
    "aspect-square flex items-center justify-center rounded-xl text-sm font-semibold cursor-pointer transition-all";
const SELECTED: &str = "bg-primary text-white ring-2 ring-primary ring-offset-2";

/// Tailwind classes for a day cell.
pub fn day_class(cell: &DayCell) -> String {
    let kind = match cell.kind() {
        CellKind::Past => "text-gray-300 dark:text-gray-700 cursor-not-allowed",
        CellKind::Weekend => "bg-gray-100 dark:bg-gray-800 text-gray-400 dark:text-gray-500",
        CellKind::Today => "bg-primary/20 text-primary border-2 border-primary hover:bg-primary hover:text-white",
        CellKind::Normal => "hover:bg-primary hover:text-white text-[#1F2937] dark:text-white",
    };
    if cell.is_selected {
        format!("{} {} {}", DAY_BASE, kind, SELECTED)
    } else {
        format!("{} {}", DAY_BASE, kind)
    }
}

#[derive(Properties, PartialEq)]
pub struct BookingCalendarProps {
    pub grid: MonthGrid,
    pub on_prev: Callback<MouseEvent>,
    pub on_next: Callback<MouseEvent>,
    pub on_event: Callback<CalendarEvent>,
}

#[function_component(BookingCalendarView)]
pub fn booking_calendar_view(props: &BookingCalendarProps) -> Html {
    let cells = props.grid.cells.iter().map(|cell| match cell {
        GridCell::Filler { day } => {
            let on_event = props.on_event.clone();
            html! {
                <div
                    key={format!("filler-{}", day)}
                    class="aspect-square flex items-center justify-center text-gray-300 dark:text-gray-700 text-sm"
                    onclick={move |_: MouseEvent| on_event.emit(CalendarEvent::ClickFiller)}
                >
                    {*day}
                </div>
            }
        }
        GridCell::Day(day) => {
            let on_event = props.on_event.clone();
            let date = day.date;
            html! {
                <div
                    key={day.key()}
                    class={day_class(day)}
                    data-date={day.key()}
                    data-past={day.is_past.to_string()}
                    data-weekend={day.is_weekend.to_string()}
                    aria-selected={day.is_selected.to_string()}
                    onclick={move |_: MouseEvent| on_event.emit(CalendarEvent::ClickDay(date))}
                >
                    {day.day()}
                </div>
            }
        }
    });

    html! {
        <div class="booking-calendar">
            <div class="mb-4 flex items-center justify-between">
                <button
                    type="button"
                    class="p-2 hover:bg-gray-100 dark:hover:bg-gray-800 rounded-full transition-colors"
                    title="Vorige maand"
                    onclick={props.on_prev.clone()}
                >
                    <span class="material-symbols-outlined text-gray-600 dark:text-gray-400">{"chevron_left"}</span>
                </button>
                <h3 class="text-xl font-bold text-[#1F2937] dark:text-white">{props.grid.title()}</h3>
                <button
                    type="button"
                    class="p-2 hover:bg-gray-100 dark:hover:bg-gray-800 rounded-full transition-colors"
                    title="Volgende maand"
                    onclick={props.on_next.clone()}
                >
                    <span class="material-symbols-outlined text-gray-600 dark:text-gray-400">{"chevron_right"}</span>
                </button>
            </div>
            <div class="grid grid-cols-7 gap-2 mb-2">
                {for WEEKDAY_HEADERS.iter().map(|header| html! {
                    <div class="text-center text-xs font-bold text-gray-500 dark:text-gray-400 py-2">{*header}</div>
                })}
            </div>
            <div class="grid grid-cols-7 gap-2">
                {for cells}
            </div>
        </div>
    }
}
