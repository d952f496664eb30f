use gloo::events::EventListener;
use gloo::utils::document;
use shared::gallery::{Filter, Gallery};
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use super::SiteProps;
use crate::services::browser::lock_scroll;

const FILTER_ACTIVE: &str = "filter-btn active bg-primary text-white shadow-lg rounded-full px-5 py-2 text-sm font-semibold";
const FILTER_IDLE: &str =
    "filter-btn bg-white dark:bg-[#1a2632] text-gray-500 dark:text-gray-300 rounded-full px-5 py-2 text-sm font-semibold";

#[function_component(GalleryView)]
pub fn gallery_view(props: &SiteProps) -> Html {
    let gallery = use_mut_ref(|| Gallery::new(props.config.content.gallery.clone()));
    let force_update = use_force_update();

    {
        let gallery = gallery.clone();
        let force_update = force_update.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&document(), "keydown", move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if gallery.borrow_mut().on_key(&event.key()) {
                    force_update.force_update();
                }
            });
            move || drop(listener)
        });
    }

    let lightbox_open = gallery.borrow().lightbox().is_some();
    use_effect_with(lightbox_open, |open| {
        lock_scroll(*open);
        || lock_scroll(false)
    });

    let update = |change: Box<dyn Fn(&mut Gallery)>| {
        let gallery = gallery.clone();
        let force_update = force_update.clone();
        Callback::from(move |_: MouseEvent| {
            change(&mut gallery.borrow_mut());
            force_update.force_update();
        })
    };

    let gallery_ref = gallery.borrow();

    let filter_button = |label: String, filter: Filter| {
        let class = if *gallery_ref.filter() == filter { FILTER_ACTIVE } else { FILTER_IDLE };
        let onclick = update(Box::new(move |gallery: &mut Gallery| gallery.set_filter(filter.clone())));
        html! { <button type="button" class={class} onclick={onclick}>{label}</button> }
    };

    let mut filters = vec![filter_button("Alles".to_string(), Filter::All)];
    for category in gallery_ref.categories() {
        filters.push(filter_button(capitalize(category), Filter::Category(category.to_string())));
    }

    let tiles = gallery_ref.items().map(|(index, item, shown)| {
        let class = if shown {
            "gallery-img block cursor-pointer overflow-hidden rounded-2xl"
        } else {
            "gallery-img hidden"
        };
        let onclick = update(Box::new(move |gallery: &mut Gallery| gallery.open(index)));
        html! {
            <div key={index} class={class} data-category={item.category.clone()} onclick={onclick}>
                <img src={item.src.clone()} alt={item.title.clone()} loading="lazy"
                    class="h-64 w-full object-cover transition-transform duration-300 hover:scale-105" />
            </div>
        }
    });

    let lightbox = gallery_ref.lightbox().map(|item| {
        let on_close = update(Box::new(|gallery: &mut Gallery| gallery.close()));
        let on_backdrop = {
            let on_close = on_close.clone();
            Callback::from(move |e: MouseEvent| {
                if e.target() == e.current_target() {
                    on_close.emit(e);
                }
            })
        };
        html! {
            <div id="lightbox" class="fixed inset-0 z-[60] bg-black/90 flex items-center justify-center p-4" onclick={on_backdrop}>
                <button type="button" class="absolute top-4 right-4 text-white hover:text-primary transition-colors" onclick={on_close}>
                    <span class="material-symbols-outlined text-4xl">{"close"}</span>
                </button>
                <img src={item.src.clone()} alt={item.title.clone()}
                    class="max-h-[90vh] max-w-[90vw] object-contain rounded-lg shadow-2xl" />
                <div class="absolute bottom-8 left-0 right-0 text-center text-white px-4">
                    <h3 class="text-xl font-bold mb-1">{&item.title}</h3>
                    <p class="text-sm text-gray-300">{&item.description}</p>
                </div>
            </div>
        }
    });

    html! {
        <div>
            <div class="mb-8 flex flex-wrap justify-center gap-3">{for filters}</div>
            <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">{for tiles}</div>
            {lightbox.unwrap_or_default()}
        </div>
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
