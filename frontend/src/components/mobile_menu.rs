use shared::nav::{is_active, MobileMenu as MenuState};
use web_sys::MouseEvent;
use yew::prelude::*;

use super::SiteProps;
use crate::services::browser::{current_path, lock_scroll};

#[function_component(MobileMenu)]
pub fn mobile_menu(props: &SiteProps) -> Html {
    let menu = use_state(MenuState::default);
    let path = use_memo((), |_| current_path());

    use_effect_with(menu.is_open(), |open| {
        lock_scroll(*open);
        || lock_scroll(false)
    });

    let set_open = |open: bool| {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *menu;
            if open {
                next.open();
            } else {
                next.close();
            }
            menu.set(next);
        })
    };

    let links = props.config.content.nav_links.iter().map(|link| {
        let class = if is_active(link, &path) {
            "block py-3 text-2xl font-bold text-primary"
        } else {
            "block py-3 text-2xl font-bold text-[#1F2937] dark:text-white hover:text-primary"
        };
        html! {
            <a href={link.href.clone()} class={class} onclick={set_open(false)}>{&link.label}</a>
        }
    });

    html! {
        <>
            <button id="mobile-menu-btn" type="button" class="md:hidden rounded-full p-2" aria-expanded={menu.is_open().to_string()}
                onclick={set_open(true)}>
                <span class="material-symbols-outlined">{"menu"}</span>
            </button>
            if menu.is_open() {
                <nav id="mobile-menu" class="fixed inset-0 z-50 bg-white dark:bg-[#111a22] p-8">
                    <button id="mobile-menu-close" type="button" class="absolute top-6 right-6" onclick={set_open(false)}>
                        <span class="material-symbols-outlined text-3xl">{"close"}</span>
                    </button>
                    <div class="mt-16">{for links}</div>
                </nav>
            }
        </>
    }
}
