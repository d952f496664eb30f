use shared::preferences::{resolve_theme, toggle_theme, Theme};
use web_sys::MouseEvent;
use yew::prelude::*;

use super::SiteProps;
use crate::services::browser::{apply_theme, prefers_dark};
use crate::services::storage::LocalPreferences;

#[function_component(ThemeToggle)]
pub fn theme_toggle(_props: &SiteProps) -> Html {
    let theme = use_state(|| resolve_theme(&LocalPreferences, prefers_dark()));

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = toggle_theme(&mut LocalPreferences, *theme);
            apply_theme(next);
            theme.set(next);
        })
    };

    let icon = match *theme {
        Theme::Dark => "light_mode",
        Theme::Light => "dark_mode",
    };

    html! {
        <button id="theme-toggle" type="button" class="rounded-full p-2 hover:bg-gray-100 dark:hover:bg-gray-800"
            title="Thema wisselen" onclick={onclick}>
            <span class="material-symbols-outlined">{icon}</span>
        </button>
    }
}
