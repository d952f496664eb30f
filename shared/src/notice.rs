use serde::{Deserialize, Serialize};

use crate::config::NoticeConfig;

/// User-facing transient messages emitted by the domain state machines.
///
/// The frontend renders these as toasts; the domain never touches the DOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    /// A past or weekend day was clicked in the booking calendar.
    DateUnavailable,
    /// The booking form was submitted without a selected date.
    SelectDateFirst,
    /// The booking mail draft was handed to the mail client.
    BookingSent,
    /// The quote mail draft was handed to the mail client.
    QuoteDrafted,
}

/// Visual tone of a notice, mapped to the toast icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeTone {
    Info,
    Success,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::DateUnavailable => {
                "Helaas, wij zijn gesloten in het weekend en kunnen geen verzoeken uit het verleden accepteren."
            }
            Notice::SelectDateFirst => "Selecteer eerst een datum in de kalender.",
            Notice::BookingSent => "Reservering verzonden! Controleer uw email client.",
            Notice::QuoteDrafted => "Email concept aangemaakt!",
        }
    }

    pub fn tone(&self) -> NoticeTone {
        match self {
            Notice::QuoteDrafted => NoticeTone::Success,
            _ => NoticeTone::Info,
        }
    }

    /// How long the toast stays on screen before sliding out.
    ///
    /// Booking page notices linger longer than the site-wide ones.
    pub fn duration_ms(&self, config: &NoticeConfig) -> u32 {
        match self {
            Notice::QuoteDrafted => config.site_duration_ms,
            _ => config.booking_duration_ms,
        }
    }
}
