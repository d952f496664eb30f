use shared::calculator::{calculate, parse_guests, CalculatorInput};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::SiteProps;

#[function_component(PriceCalculator)]
pub fn price_calculator(props: &SiteProps) -> Html {
    let config = &props.config.calculator;
    let input = use_state(|| CalculatorInput::new(config));

    let update = |change: fn(&mut CalculatorInput, String, bool)| {
        let input = input.clone();
        move |value: String, checked: bool| {
            let mut next = (*input).clone();
            change(&mut next, value, checked);
            input.set(next);
        }
    };

    // The number field and the slider both write the same guest count.
    let on_guests = {
        let input = input.clone();
        let config = props.config.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*input).clone();
            next.guests = parse_guests(&target.value(), &config.calculator);
            input.set(next);
        })
    };

    let on_meal = {
        let apply = update(|input, value, _| input.meal = value.parse().unwrap_or(0));
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            apply(select.value(), false)
        })
    };
    let on_service = {
        let apply = update(|input, value, _| input.service = value.parse().unwrap_or(0));
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            apply(select.value(), false)
        })
    };
    let on_weekend = {
        let apply = update(|input, _, checked| input.weekend = checked);
        Callback::from(move |e: Event| {
            let checkbox: HtmlInputElement = e.target_unchecked_into();
            apply(String::new(), checkbox.checked())
        })
    };
    let on_equipment = {
        let apply = update(|input, _, checked| input.equipment = checked);
        Callback::from(move |e: Event| {
            let checkbox: HtmlInputElement = e.target_unchecked_into();
            apply(String::new(), checkbox.checked())
        })
    };

    let summary = calculate(config, &input);

    html! {
        <form id="price-calculator" class="grid gap-8 lg:grid-cols-2" onsubmit={|e: SubmitEvent| e.prevent_default()}>
            <div class="space-y-6">
                <label class="block">
                    <span class="text-sm font-semibold">{"Aantal gasten"}</span>
                    <div class="mt-2 flex items-center gap-4">
                        <input id="guests-slider" type="range" class="flex-1 accent-primary"
                            min={config.min_guests.to_string()} max={config.max_guests.to_string()}
                            value={input.guests.to_string()} oninput={on_guests.clone()} />
                        <input id="guests" type="number" class="w-24 rounded-xl border border-gray-200 px-3 py-2"
                            min={config.min_guests.to_string()} max={config.max_guests.to_string()}
                            value={input.guests.to_string()} oninput={on_guests} />
                    </div>
                </label>
                <label class="block">
                    <span class="text-sm font-semibold">{"Type maaltijd"}</span>
                    <select id="meal-type" class="mt-2 w-full rounded-xl border border-gray-200 px-3 py-2" onchange={on_meal}>
                        {for config.meals.iter().enumerate().map(|(index, meal)| html! {
                            <option value={index.to_string()} selected={input.meal == index}>
                                {format!("{} (€{} p.p.)", meal.label, format!("{:.2}", meal.price_per_person).replace('.', ","))}
                            </option>
                        })}
                    </select>
                </label>
                <label class="block">
                    <span class="text-sm font-semibold">{"Service niveau"}</span>
                    <select id="service-level" class="mt-2 w-full rounded-xl border border-gray-200 px-3 py-2" onchange={on_service}>
                        {for config.service_levels.iter().enumerate().map(|(index, level)| html! {
                            <option value={index.to_string()} selected={input.service == index}>{&level.label}</option>
                        })}
                    </select>
                </label>
                <label class="flex items-center gap-3">
                    <input id="weekend" type="checkbox" checked={input.weekend} onchange={on_weekend} />
                    <span>{format!("Weekend (+€{:.0})", config.weekend_surcharge)}</span>
                </label>
                <label class="flex items-center gap-3">
                    <input id="equipment" type="checkbox" checked={input.equipment} onchange={on_equipment} />
                    <span>{format!("Servies huur (€{:.0} p.p.)", config.equipment_per_guest)}</span>
                </label>
            </div>
            {match summary {
                Some(summary) => html! {
                    <div class="rounded-2xl bg-gray-50 dark:bg-[#1a2632] p-6 space-y-3">
                        <div class="flex justify-between"><span>{"Gasten"}</span><span id="summary-guests">{summary.guests}</span></div>
                        <div class="flex justify-between"><span>{"Prijs p.p."}</span><span id="summary-pp">{summary.price_per_person_label()}</span></div>
                        <div class="flex justify-between"><span>{"Service"}</span><span id="summary-service">{&summary.service_name}</span></div>
                        <div id="extra-costs" class="space-y-1 text-sm">
                            {for summary.extras.iter().map(|extra| html! {
                                <div class="flex justify-between"><span>{&extra.name}</span><span>{extra.price_label()}</span></div>
                            })}
                        </div>
                        <div class="flex justify-between border-t pt-3"><span>{"Subtotaal (excl. BTW)"}</span><span id="total-price">{summary.subtotal_label()}</span></div>
                        <div class="flex justify-between text-xl font-bold"><span>{"Totaal (incl. BTW)"}</span><span id="total-vat">{summary.total_label()}</span></div>
                    </div>
                },
                None => html! {},
            }}
        </form>
    }
}
