//! Site configuration.
//!
//! Every field has a default matching the live site, so an absent or partial
//! JSON document still produces a usable configuration.

use serde::{Deserialize, Serialize};

use crate::calculator::CalculatorConfig;
use crate::carousel::Testimonial;
use crate::error::ConfigError;
use crate::faq::FaqEntry;
use crate::gallery::GalleryItem;
use crate::nav::NavLink;
use crate::status::BusinessHours;

pub const DEFAULT_RECIPIENT: &str = "aygulscatering@gmail.com";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub booking: BookingConfig,
    pub quote: QuoteConfig,
    pub notices: NoticeConfig,
    pub carousel: CarouselConfig,
    /// Delay before the cookie banner slides in on first visit
    pub cookie_banner_delay_ms: u32,
    pub calculator: CalculatorConfig,
    pub business_hours: BusinessHours,
    pub content: SiteContent,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            booking: BookingConfig::default(),
            quote: QuoteConfig::default(),
            notices: NoticeConfig::default(),
            carousel: CarouselConfig::default(),
            cookie_banner_delay_ms: 1000,
            calculator: CalculatorConfig::default(),
            business_hours: BusinessHours::default(),
            content: SiteContent::default(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.booking.recipient.trim().is_empty() || self.quote.recipient.trim().is_empty() {
            return Err(ConfigError::Invalid("mail recipient must not be empty".to_string()));
        }
        if self.carousel.interval_ms == 0 {
            return Err(ConfigError::Invalid("carousel interval must be positive".to_string()));
        }
        if self.calculator.meals.is_empty() || self.calculator.service_levels.is_empty() {
            return Err(ConfigError::Invalid(
                "calculator needs at least one meal and one service level".to_string(),
            ));
        }
        if self.calculator.min_guests > self.calculator.max_guests {
            return Err(ConfigError::Invalid(format!(
                "calculator guest range {}..={} is empty",
                self.calculator.min_guests, self.calculator.max_guests
            )));
        }
        if self.business_hours.open_hour >= self.business_hours.close_hour
            || self.business_hours.close_hour > 24
        {
            return Err(ConfigError::Invalid(format!(
                "business hours {}:00-{}:00 are not a valid range",
                self.business_hours.open_hour, self.business_hours.close_hour
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    pub recipient: String,
    /// Time between opening the mail client and resetting the form
    pub reset_delay_ms: u32,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            recipient: DEFAULT_RECIPIENT.to_string(),
            reset_delay_ms: 1500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteConfig {
    pub recipient: String,
    pub reset_delay_ms: u32,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            recipient: DEFAULT_RECIPIENT.to_string(),
            reset_delay_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeConfig {
    pub booking_duration_ms: u32,
    pub site_duration_ms: u32,
    /// Length of the slide-out transition before a toast is removed
    pub exit_ms: u32,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            booking_duration_ms: 4000,
            site_duration_ms: 3000,
            exit_ms: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub interval_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self { interval_ms: 5000 }
    }
}

/// Copy rendered by the interactive widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub nav_links: Vec<NavLink>,
    pub testimonials: Vec<Testimonial>,
    pub faq: Vec<FaqEntry>,
    pub gallery: Vec<GalleryItem>,
}

impl Default for SiteContent {
    fn default() -> Self {
        let link = |label: &str, href: &str| NavLink {
            label: label.to_string(),
            href: href.to_string(),
        };
        let testimonial = |quote: &str, author: &str, event: &str| Testimonial {
            quote: quote.to_string(),
            author: author.to_string(),
            event: event.to_string(),
        };
        let faq = |question: &str, answer: &str| FaqEntry {
            question: question.to_string(),
            answer: answer.to_string(),
        };
        let photo = |src: &str, title: &str, description: &str, category: &str| GalleryItem {
            src: src.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
        };

        Self {
            nav_links: vec![
                link("Home", "index.html"),
                link("Menu", "menu.html"),
                link("Galerij", "gallery.html"),
                link("Prijzen", "calculator.html"),
                link("Reserveren", "booking.html"),
            ],
            testimonials: vec![
                testimonial(
                    "Het eten was overheerlijk en de bediening liep perfect.",
                    "Sanne K.",
                    "Bruiloft",
                ),
                testimonial(
                    "Onze gasten praten nog steeds over de mezze.",
                    "Mehmet Y.",
                    "Bedrijfsfeest",
                ),
                testimonial(
                    "Alles op tijd geleverd, netjes opgebouwd en weer opgeruimd.",
                    "Linda de B.",
                    "Verjaardag",
                ),
            ],
            faq: vec![
                faq(
                    "Hoe ver van tevoren moet ik reserveren?",
                    "Wij adviseren minimaal twee weken, voor bruiloften liefst drie maanden.",
                ),
                faq(
                    "Verzorgen jullie ook vegetarische gerechten?",
                    "Ja, elk menu kan volledig vegetarisch of veganistisch worden samengesteld.",
                ),
                faq(
                    "Werken jullie in het weekend?",
                    "Reserveringen via de website zijn mogelijk op werkdagen; neem voor weekenden contact op.",
                ),
            ],
            gallery: vec![
                photo("img/gallery/bruiloft-1.jpg", "Bruiloftsbuffet", "Buffet voor 150 gasten", "bruiloft"),
                photo("img/gallery/zakelijk-1.jpg", "Lunch op kantoor", "Broodjes en mezze", "zakelijk"),
                photo("img/gallery/feest-1.jpg", "Tuinfeest", "BBQ in de tuin", "feest"),
                photo("img/gallery/bruiloft-2.jpg", "Desserttafel", "Baklava en fruit", "bruiloft"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_yields_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let config =
            SiteConfig::from_json(r#"{"booking": {"recipient": "events@example.nl"}}"#).unwrap();

        assert_eq!(config.booking.recipient, "events@example.nl");
        assert_eq!(config.booking.reset_delay_ms, 1500);
        assert_eq!(config.quote.recipient, DEFAULT_RECIPIENT);
        assert_eq!(config.content, SiteContent::default());
    }

    #[test]
    fn test_content_override() {
        let config = SiteConfig::from_json(
            r#"{"content": {"faq": [{"question": "Q?", "answer": "A."}]}}"#,
        )
        .unwrap();

        assert_eq!(config.content.faq.len(), 1);
        assert_eq!(config.content.faq[0].question, "Q?");
        assert_eq!(config.content.testimonials.len(), 3);
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let result = SiteConfig::from_json("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let result = SiteConfig::from_json(r#"{"carousel": {"interval_ms": 0}}"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let result = SiteConfig::from_json(r#"{"business_hours": {"open_hour": 18, "close_hour": 8}}"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let result = SiteConfig::from_json(r#"{"booking": {"recipient": "  "}}"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
