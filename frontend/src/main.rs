use std::rc::Rc;

use log::LevelFilter;
use shared::preferences::resolve_theme;
use shared::SiteConfig;
use yew::BaseComponent;

mod components;
mod hooks;
mod services;

use components::{
    BookingPage, CookieBanner, Faq, GalleryView, MobileMenu, PriceCalculator, QuoteModalView, SiteProps,
    StatusBadge, Testimonials, ThemeToggle,
};
use services::browser::{apply_theme, element_by_id, prefers_dark};
use services::logging::Logger;
use services::storage::LocalPreferences;

/// Render `C` into the element with `id`, if this page has one.
fn mount<C>(id: &str, config: &Rc<SiteConfig>) -> bool
where
    C: BaseComponent<Properties = SiteProps>,
{
    let Some(root) = element_by_id(id) else {
        log::debug!("No #{} on this page, skipping", id);
        return false;
    };

    yew::Renderer::<C>::with_root_and_props(root, SiteProps { config: config.clone() }).render();
    Logger::debug_with_component("main", &format!("Mounted #{}", id));
    true
}

fn main() {
    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    services::logging::init(level);

    // Every page honours the saved theme, with or without a toggle on it.
    apply_theme(resolve_theme(&LocalPreferences, prefers_dark()));

    let config = Rc::new(services::config::load_site_config());

    let mounted = [
        mount::<BookingPage>("booking-root", &config),
        mount::<PriceCalculator>("price-calculator-root", &config),
        mount::<QuoteModalView>("quote-modal-root", &config),
        mount::<Testimonials>("testimonials-root", &config),
        mount::<Faq>("faq-root", &config),
        mount::<GalleryView>("gallery-root", &config),
        mount::<ThemeToggle>("theme-toggle-root", &config),
        mount::<CookieBanner>("cookie-banner-root", &config),
        mount::<StatusBadge>("status-badge-root", &config),
        mount::<MobileMenu>("mobile-menu-root", &config),
    ];

    let count = mounted.iter().filter(|mounted| **mounted).count();
    Logger::info_with_component("main", &format!("🍽️ Mounted {} island(s)", count));
}
