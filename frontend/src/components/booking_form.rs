use shared::BookingDetails;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

pub const EVENT_TYPES: [&str; 5] = ["Bruiloft", "Verjaardag", "Bedrijfsfeest", "Besnijdenisfeest", "Anders"];

const INPUT_CLASS: &str = "w-full rounded-xl border border-gray-200 dark:border-gray-700 bg-white dark:bg-[#1a2632] px-4 py-3 text-sm focus:ring-2 focus:ring-primary";

/// Editable fields of the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingField {
    Name,
    Email,
    Phone,
    EventType,
    Guests,
    Time,
    Notes,
}

impl BookingField {
    pub fn apply(self, details: &mut BookingDetails, value: String) {
        let slot = match self {
            BookingField::Name => &mut details.name,
            BookingField::Email => &mut details.email,
            BookingField::Phone => &mut details.phone,
            BookingField::EventType => &mut details.event_type,
            BookingField::Guests => &mut details.guests,
            BookingField::Time => &mut details.time,
            BookingField::Notes => &mut details.notes,
        };
        *slot = value;
    }
}

#[derive(Properties, PartialEq)]
pub struct BookingFormProps {
    pub details: BookingDetails,
    pub date_display: String,
    pub submit_label: AttrValue,
    pub submitting: bool,
    pub on_change: Callback<(BookingField, String)>,
    pub on_submit: Callback<SubmitEvent>,
}

#[function_component(BookingFormView)]
pub fn booking_form_view(props: &BookingFormProps) -> Html {
    let input = |field: BookingField| {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((field, input.value()));
        })
    };

    let on_event_type = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit((BookingField::EventType, select.value()));
        })
    };

    let on_notes = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit((BookingField::Notes, area.value()));
        })
    };

    let details = &props.details;

    html! {
        <form id="booking-form" class="space-y-4" onsubmit={props.on_submit.clone()}>
            <div class="rounded-xl bg-primary/10 px-4 py-3 text-sm">
                <span class="font-semibold">{"Geselecteerde datum: "}</span>
                <span id="date-display">{&props.date_display}</span>
            </div>
            <div class="grid gap-4 sm:grid-cols-2">
                <input class={INPUT_CLASS} type="text" name="name" placeholder="Naam" required=true
                    value={details.name.clone()} oninput={input(BookingField::Name)} />
                <input class={INPUT_CLASS} type="email" name="email" placeholder="Email" required=true
                    value={details.email.clone()} oninput={input(BookingField::Email)} />
                <input class={INPUT_CLASS} type="tel" name="phone" placeholder="Telefoon" required=true
                    value={details.phone.clone()} oninput={input(BookingField::Phone)} />
                <select class={INPUT_CLASS} name="event-type" required=true onchange={on_event_type}>
                    <option value="" selected={details.event_type.is_empty()} disabled=true>{"Type evenement"}</option>
                    {for EVENT_TYPES.iter().map(|kind| html! {
                        <option value={*kind} selected={details.event_type == *kind}>{*kind}</option>
                    })}
                </select>
                <input class={INPUT_CLASS} type="number" name="guests" min="1" placeholder="Aantal gasten" required=true
                    value={details.guests.clone()} oninput={input(BookingField::Guests)} />
                <input class={INPUT_CLASS} type="time" name="time" required=true
                    value={details.time.clone()} oninput={input(BookingField::Time)} />
            </div>
            <textarea class={INPUT_CLASS} name="notes" rows="4" placeholder="Extra opmerkingen"
                value={details.notes.clone()} oninput={on_notes} />
            <button
                type="submit"
                class="w-full rounded-xl bg-primary px-6 py-3 font-bold text-white transition-colors hover:bg-primary/90 disabled:opacity-60"
                disabled={props.submitting}
            >
                {props.submit_label.clone()}
            </button>
        </form>
    }
}
