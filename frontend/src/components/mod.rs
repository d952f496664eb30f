use std::rc::Rc;

use shared::SiteConfig;
use yew::Properties;

pub mod booking_calendar;
pub mod booking_form;
pub mod booking_page;
pub mod cookie_banner;
pub mod faq;
pub mod gallery;
pub mod mobile_menu;
pub mod price_calculator;
pub mod quote_modal;
pub mod status_badge;
pub mod testimonials;
pub mod theme_toggle;
pub mod toast;

pub use booking_page::BookingPage;
pub use cookie_banner::CookieBanner;
pub use faq::Faq;
pub use gallery::GalleryView;
pub use mobile_menu::MobileMenu;
pub use price_calculator::PriceCalculator;
pub use quote_modal::QuoteModalView;
pub use status_badge::StatusBadge;
pub use testimonials::Testimonials;
pub use theme_toggle::ThemeToggle;

/// Properties every island is mounted with.
#[derive(Properties, PartialEq)]
pub struct SiteProps {
    pub config: Rc<SiteConfig>,
}
