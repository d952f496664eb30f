use shared::faq::Accordion;
use web_sys::MouseEvent;
use yew::prelude::*;

use super::SiteProps;

#[function_component(Faq)]
pub fn faq(props: &SiteProps) -> Html {
    let accordion = use_state(Accordion::default);

    let items = props.config.content.faq.iter().enumerate().map(|(index, entry)| {
        let open = accordion.is_open(index);
        let on_toggle = {
            let accordion = accordion.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*accordion).clone();
                next.toggle(index);
                accordion.set(next);
            })
        };
        let icon_style = if open { "transform: rotate(180deg)" } else { "transform: rotate(0deg)" };

        html! {
            <div class="rounded-2xl border border-gray-100 dark:border-gray-800">
                <button type="button" class="faq-toggle flex w-full items-center justify-between px-6 py-4 text-left font-semibold"
                    aria-expanded={open.to_string()} onclick={on_toggle}>
                    <span>{&entry.question}</span>
                    <span class="material-symbols-outlined transition-transform" style={icon_style}>{"expand_more"}</span>
                </button>
                if open {
                    <div class="px-6 pb-4 text-gray-600 dark:text-gray-300">{&entry.answer}</div>
                }
            </div>
        }
    });

    html! {
        <div class="space-y-4">{for items}</div>
    }
}
