use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::utils::document;
use shared::{Notice, QuoteDetails, QuoteEffect, QuoteEvent, QuoteModal};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement, MouseEvent};
use yew::prelude::*;

use super::booking_form::EVENT_TYPES;
use super::toast::ToastProvider;
use super::SiteProps;
use crate::hooks::{use_notify, use_timeout_slot, TimeoutSlot};
use crate::services::browser::{lock_scroll, open_mail_client};
use crate::services::logging::Logger;

/// Any element with this class opens the modal.
const OPEN_TRIGGER: &str = ".open-quote-modal";

#[function_component(QuoteModalView)]
pub fn quote_modal_view(props: &SiteProps) -> Html {
    html! {
        <ToastProvider notices={props.config.notices.clone()}>
            <QuoteModalInner config={props.config.clone()} />
        </ToastProvider>
    }
}

#[derive(Clone)]
struct QuoteHost {
    modal: Rc<RefCell<QuoteModal>>,
    details: UseStateHandle<QuoteDetails>,
    notify: Callback<Notice>,
    reset: TimeoutSlot,
    force_update: UseForceUpdateHandle,
}

impl QuoteHost {
    fn dispatch(&self, event: QuoteEvent) {
        let effects = self.modal.borrow_mut().handle(event);
        for effect in effects {
            match effect {
                QuoteEffect::Notice(notice) => self.notify.emit(notice),
                QuoteEffect::OpenMailClient(url) => {
                    if let Err(err) = open_mail_client(&url) {
                        Logger::warn_with_component("quote", &format!("⚠️ {:#}", err));
                    }
                }
                QuoteEffect::ScheduleReset { token, delay_ms } => {
                    let host = self.clone();
                    self.reset
                        .schedule(delay_ms, move || host.dispatch(QuoteEvent::ResetElapsed { token }));
                }
                QuoteEffect::ResetForm => self.details.set(QuoteDetails::default()),
            }
        }
        self.force_update.force_update();
    }
}

#[function_component(QuoteModalInner)]
fn quote_modal_inner(props: &SiteProps) -> Html {
    let modal = use_mut_ref(|| QuoteModal::new(props.config.quote.clone()));
    let details = use_state(QuoteDetails::default);
    let host = QuoteHost {
        modal: modal.clone(),
        details: details.clone(),
        notify: use_notify(),
        reset: use_timeout_slot(),
        force_update: use_force_update(),
    };

    // Delegated so that triggers anywhere on the page work.
    {
        let host = host.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&document(), "click", move |event| {
                let trigger = event
                    .target()
                    .and_then(|target| target.dyn_into::<Element>().ok())
                    .and_then(|element| element.closest(OPEN_TRIGGER).ok().flatten());
                if trigger.is_some() {
                    event.prevent_default();
                    host.dispatch(QuoteEvent::Open);
                }
            });
            move || drop(listener)
        });
    }

    let is_open = modal.borrow().is_open();
    use_effect_with(is_open, |is_open| {
        lock_scroll(*is_open);
        || lock_scroll(false)
    });

    let field = |apply: fn(&mut QuoteDetails, String)| {
        let details = details.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*details).clone();
            apply(&mut next, input.value());
            details.set(next);
        })
    };

    let on_event_type = {
        let details = details.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*details).clone();
            next.event_type = select.value();
            details.set(next);
        })
    };

    let on_close = {
        let host = host.clone();
        Callback::from(move |_: MouseEvent| host.dispatch(QuoteEvent::Close))
    };

    let on_backdrop = {
        let host = host.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                host.dispatch(QuoteEvent::Close);
            }
        })
    };

    let on_submit = {
        let host = host.clone();
        let details = details.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            host.dispatch(QuoteEvent::Submit((*details).clone()));
        })
    };

    if !is_open {
        return html! {};
    }

    let submitting = modal.borrow().is_submitting();
    let input_class = "w-full rounded-xl border border-gray-200 dark:border-gray-700 bg-white dark:bg-[#1a2632] px-4 py-3 text-sm";

    html! {
        <div id="quote-modal" class="fixed inset-0 z-50 flex items-center justify-center bg-black/60 p-4" onclick={on_backdrop}>
            <div class="w-full max-w-lg rounded-2xl bg-white dark:bg-[#111a22] p-8 shadow-2xl">
                <div class="mb-6 flex items-center justify-between">
                    <h3 class="text-2xl font-bold">{"Offerte Aanvragen"}</h3>
                    <button type="button" class="close-modal text-gray-400 hover:text-primary" onclick={on_close}>
                        <span class="material-symbols-outlined">{"close"}</span>
                    </button>
                </div>
                <form id="quote-form" class="space-y-4" onsubmit={on_submit}>
                    <input class={input_class} type="text" placeholder="Naam" required=true
                        value={details.name.clone()} oninput={field(|d, v| d.name = v)} />
                    <input class={input_class} type="email" placeholder="Email" required=true
                        value={details.email.clone()} oninput={field(|d, v| d.email = v)} />
                    <select class={input_class} required=true onchange={on_event_type}>
                        <option value="" selected={details.event_type.is_empty()} disabled=true>{"Type evenement"}</option>
                        {for EVENT_TYPES.iter().map(|kind| html! {
                            <option value={*kind} selected={details.event_type == *kind}>{*kind}</option>
                        })}
                    </select>
                    <div class="grid grid-cols-2 gap-4">
                        <input class={input_class} type="date" required=true
                            value={details.date.clone()} oninput={field(|d, v| d.date = v)} />
                        <input class={input_class} type="time" required=true
                            value={details.time.clone()} oninput={field(|d, v| d.time = v)} />
                    </div>
                    <button type="submit" disabled={submitting}
                        class="w-full rounded-xl bg-primary px-6 py-3 font-bold text-white hover:bg-primary/90 disabled:opacity-60">
                        {if submitting { shared::booking::PENDING_LABEL } else { "Verstuur Aanvraag" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
