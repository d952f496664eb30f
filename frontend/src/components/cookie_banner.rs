use shared::preferences::{accept_cookies, cookie_banner_needed};
use web_sys::MouseEvent;
use yew::prelude::*;

use super::SiteProps;
use crate::hooks::use_timeout_slot;
use crate::services::storage::LocalPreferences;

#[function_component(CookieBanner)]
pub fn cookie_banner(props: &SiteProps) -> Html {
    let needed = use_memo((), |_| cookie_banner_needed(&LocalPreferences));
    let visible = use_state(|| false);
    let reveal = use_timeout_slot();

    {
        let visible = visible.clone();
        let delay_ms = props.config.cookie_banner_delay_ms;
        let needed = *needed;
        use_effect_with((), move |_| {
            if needed {
                reveal.schedule(delay_ms, move || visible.set(true));
            }
            || ()
        });
    }

    let on_accept = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| {
            accept_cookies(&mut LocalPreferences);
            visible.set(false);
        })
    };

    if !*needed {
        return html! {};
    }

    let class = if *visible {
        "fixed bottom-0 inset-x-0 z-50 bg-white dark:bg-[#111a22] shadow-2xl p-6 transform transition-transform duration-500"
    } else {
        "fixed bottom-0 inset-x-0 z-50 bg-white dark:bg-[#111a22] shadow-2xl p-6 transform transition-transform duration-500 translate-y-full"
    };

    html! {
        <div id="cookie-banner" class={class}>
            <div class="mx-auto flex max-w-5xl flex-col items-center justify-between gap-4 sm:flex-row">
                <p class="text-sm text-gray-600 dark:text-gray-300">
                    {"Wij gebruiken cookies om uw ervaring op onze website te verbeteren."}
                </p>
                <button id="accept-cookies" type="button" class="rounded-xl bg-primary px-6 py-2 font-bold text-white" onclick={on_accept}>
                    {"Accepteren"}
                </button>
            </div>
        </div>
    }
}
