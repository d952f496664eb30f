use gloo::timers::callback::Interval;
use shared::carousel::Carousel;
use web_sys::MouseEvent;
use yew::prelude::*;

use super::SiteProps;

#[function_component(Testimonials)]
pub fn testimonials(props: &SiteProps) -> Html {
    let slides = &props.config.content.testimonials;
    let carousel = use_mut_ref(|| Carousel::new(slides.len()));
    let force_update = use_force_update();

    let step = |forward: bool| {
        let carousel = carousel.clone();
        let force_update = force_update.clone();
        move || {
            let mut carousel = carousel.borrow_mut();
            if forward {
                carousel.next();
            } else {
                carousel.previous();
            }
            drop(carousel);
            force_update.force_update();
        }
    };

    // Re-armed whenever the pointer leaves; cleared while it hovers.
    let auto_advances = carousel.borrow().auto_advances();
    {
        let advance = step(true);
        let interval_ms = props.config.carousel.interval_ms;
        use_effect_with(auto_advances, move |auto_advances| {
            let interval = auto_advances.then(|| Interval::new(interval_ms, advance));
            move || drop(interval)
        });
    }

    let hover = |hovered: bool| {
        let carousel = carousel.clone();
        let force_update = force_update.clone();
        Callback::from(move |_: MouseEvent| {
            carousel.borrow_mut().set_hovered(hovered);
            force_update.force_update();
        })
    };

    let on_prev = {
        let previous = step(false);
        Callback::from(move |_: MouseEvent| previous())
    };
    let on_next = {
        let next = step(true);
        Callback::from(move |_: MouseEvent| next())
    };

    let transform = format!("transform: {}", carousel.borrow().transform());

    html! {
        <div class="relative overflow-hidden">
            <div
                id="testimonial-slider"
                class="flex transition-transform duration-500"
                style={transform}
                onmouseenter={hover(true)}
                onmouseleave={hover(false)}
            >
                {for slides.iter().map(|slide| html! {
                    <figure class="w-full shrink-0 px-8 text-center">
                        <blockquote class="text-lg italic">{format!("\u{201c}{}\u{201d}", slide.quote)}</blockquote>
                        <figcaption class="mt-4 font-bold">
                            {&slide.author}
                            <span class="block text-sm font-normal text-gray-500">{&slide.event}</span>
                        </figcaption>
                    </figure>
                })}
            </div>
            <div class="mt-6 flex justify-center gap-4">
                <button id="prev-testimonial" type="button" class="rounded-full p-2 hover:bg-gray-100" onclick={on_prev}>
                    <span class="material-symbols-outlined">{"chevron_left"}</span>
                </button>
                <button id="next-testimonial" type="button" class="rounded-full p-2 hover:bg-gray-100" onclick={on_next}>
                    <span class="material-symbols-outlined">{"chevron_right"}</span>
                </button>
            </div>
        </div>
    }
}
