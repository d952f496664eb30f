use std::cell::RefCell;
use std::rc::Rc;

use shared::{BookingDetails, BookingEffect, BookingEvent, BookingForm, CalendarEvent, Notice};
use yew::prelude::*;

use super::booking_calendar::BookingCalendarView;
use super::booking_form::{BookingField, BookingFormView};
use super::toast::ToastProvider;
use super::SiteProps;
use crate::hooks::{use_booking_calendar, use_notify, use_timeout_slot, TimeoutSlot};
use crate::services::browser::open_mail_client;
use crate::services::date_utils::{local_now, today};
use crate::services::logging::Logger;

/// Booking page island: calendar, date display and request form.
#[function_component(BookingPage)]
pub fn booking_page(props: &SiteProps) -> Html {
    html! {
        <ToastProvider notices={props.config.notices.clone()}>
            <BookingPageInner config={props.config.clone()} />
        </ToastProvider>
    }
}

/// Everything a booking effect may touch, cloned into the reset timeout.
#[derive(Clone)]
struct BookingHost {
    form: Rc<RefCell<BookingForm>>,
    details: UseStateHandle<BookingDetails>,
    calendar: Callback<CalendarEvent>,
    notify: Callback<Notice>,
    reset: TimeoutSlot,
    force_update: UseForceUpdateHandle,
}

impl BookingHost {
    fn dispatch(&self, event: BookingEvent) {
        let effects = self.form.borrow_mut().handle(event);
        self.apply(effects);
    }

    fn apply(&self, effects: Vec<BookingEffect>) {
        for effect in effects {
            match effect {
                BookingEffect::Notice(notice) => self.notify.emit(notice),
                BookingEffect::OpenMailClient(url) => {
                    if let Err(err) = open_mail_client(&url) {
                        Logger::warn_with_component("booking", &format!("⚠️ {:#}", err));
                    }
                }
                BookingEffect::ScheduleReset { token, delay_ms } => {
                    let host = self.clone();
                    self.reset
                        .schedule(delay_ms, move || host.dispatch(BookingEvent::ResetElapsed { token }));
                }
                BookingEffect::ResetForm => {
                    self.details.set(BookingDetails::default());
                    self.calendar.emit(CalendarEvent::ClearSelection);
                }
            }
        }
        self.force_update.force_update();
    }
}

#[function_component(BookingPageInner)]
fn booking_page_inner(props: &SiteProps) -> Html {
    let notify = use_notify();
    let calendar = use_booking_calendar(today, notify.clone());
    let form = use_mut_ref(|| BookingForm::new(props.config.booking.clone()));
    let details = use_state(BookingDetails::default);
    let reset = use_timeout_slot();
    let force_update = use_force_update();

    let host = BookingHost {
        form: form.clone(),
        details: details.clone(),
        calendar: calendar.actions.dispatch.clone(),
        notify,
        reset,
        force_update,
    };

    let on_change = {
        let details = details.clone();
        Callback::from(move |(field, value): (BookingField, String)| {
            let mut next = (*details).clone();
            field.apply(&mut next, value);
            details.set(next);
        })
    };

    let on_submit = {
        let date_display = calendar.state.selection_display.clone();
        let details = details.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            host.dispatch(BookingEvent::Submit {
                details: (*details).clone(),
                date_display: date_display.clone(),
                submitted_at: local_now(),
            });
        })
    };

    let form = form.borrow();

    html! {
        <div class="grid gap-8 lg:grid-cols-2">
            <div id="calendar">
                {match &calendar.state.grid {
                    Some(grid) => html! {
                        <BookingCalendarView
                            grid={grid.clone()}
                            on_prev={calendar.actions.prev_month.clone()}
                            on_next={calendar.actions.next_month.clone()}
                            on_event={calendar.actions.dispatch.clone()}
                        />
                    },
                    None => html! {
                        <p class="text-sm text-gray-500">{"Deze maand kan niet worden weergegeven."}</p>
                    },
                }}
            </div>
            <BookingFormView
                details={(*details).clone()}
                date_display={calendar.state.selection_display.clone()}
                submit_label={form.submit_label()}
                submitting={form.is_submitting()}
                on_change={on_change}
                on_submit={on_submit}
            />
        </div>
    }
}
