//! # Shared domain for the catering site
//!
//! Everything the site does that is more than wiring an event to a class
//! toggle lives here, free of any browser dependency:
//!
//! - **calendar**: booking calendar grid generation and the single-date
//!   selection state machine
//! - **booking**: booking form precondition, mail composition and the
//!   submit/reset lifecycle
//! - **quote**: quote request modal
//! - **calculator**: price calculator
//! - **preferences**: theme and cookie consent persisted through a
//!   [`preferences::PreferenceStore`]
//! - **carousel**, **faq**, **gallery**, **nav**, **status**: small UI state
//!   machines
//!
//! State machines take typed events and return the side effects the host
//! (the Yew frontend) has to perform, so each flow can be tested without a
//! rendering surface.

pub mod booking;
pub mod calculator;
pub mod calendar;
pub mod carousel;
pub mod config;
pub mod error;
pub mod faq;
pub mod gallery;
pub mod mailto;
pub mod nav;
pub mod notice;
pub mod preferences;
pub mod quote;
pub mod status;

pub use booking::{BookingDetails, BookingEffect, BookingEvent, BookingForm};
pub use calendar::{
    BookingCalendar, CalendarEffect, CalendarEvent, CellKind, DayCell, GridCell, MonthCursor, MonthGrid,
};
pub use config::SiteConfig;
pub use error::{CalendarError, ConfigError};
pub use mailto::MailDraft;
pub use notice::{Notice, NoticeTone};
pub use quote::{QuoteDetails, QuoteEffect, QuoteEvent, QuoteModal};
