//! Booking form: precondition check, message composition and the
//! submit/reset lifecycle.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::calendar::{submission_timestamp, NO_DATE_SELECTED};
use crate::config::BookingConfig;
use crate::mailto::{MailDraft, SubmissionTracker};
use crate::notice::Notice;

pub const SUBMIT_LABEL: &str = "Reservering Aanvragen";
pub const PENDING_LABEL: &str = "Email Client Geopend...";

/// Raw form fields, as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_type: String,
    pub guests: String,
    pub time: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingEvent {
    Submit {
        details: BookingDetails,
        /// Text of the selected-date display at submit time
        date_display: String,
        submitted_at: NaiveDateTime,
    },
    ResetElapsed { token: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingEffect {
    Notice(Notice),
    OpenMailClient(String),
    ScheduleReset { token: u64, delay_ms: u32 },
    /// Clear the fields, restore the placeholder and drop the calendar selection
    ResetForm,
}

/// Compose the booking request mail.
pub fn compose_booking(
    details: &BookingDetails,
    date_display: &str,
    submitted_at: NaiveDateTime,
    recipient: &str,
) -> MailDraft {
    let notes = if details.notes.trim().is_empty() {
        "Geen opmerkingen"
    } else {
        details.notes.as_str()
    };

    let body = [
        "NIEUWE RESERVERING AANVRAAG".to_string(),
        String::new(),
        format!("Datum: {}", date_display),
        format!("Tijd: {}", details.time),
        String::new(),
        "CONTACTGEGEVENS:".to_string(),
        format!("Naam: {}", details.name),
        format!("Email: {}", details.email),
        format!("Telefoon: {}", details.phone),
        String::new(),
        "EVENEMENT DETAILS:".to_string(),
        format!("Type: {}", details.event_type),
        format!("Aantal gasten: {}", details.guests),
        String::new(),
        "EXTRA OPMERKINGEN:".to_string(),
        notes.to_string(),
        String::new(),
        "---".to_string(),
        "Verzonden via Aygül's Catering Online Boekingssysteem".to_string(),
        format!("Datum aanvraag: {}", submission_timestamp(submitted_at)),
    ]
    .join("\n");

    MailDraft {
        recipient: recipient.to_string(),
        subject: format!("Nieuwe Reservering: {} - {}", details.event_type, details.name),
        body,
    }
}

/// Booking form state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingForm {
    config: BookingConfig,
    submission: SubmissionTracker,
}

impl BookingForm {
    pub fn new(config: BookingConfig) -> Self {
        Self {
            config,
            submission: SubmissionTracker::default(),
        }
    }

    /// The submit control is disabled while a reset is outstanding.
    pub fn is_submitting(&self) -> bool {
        self.submission.is_pending()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            PENDING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn handle(&mut self, event: BookingEvent) -> Vec<BookingEffect> {
        match event {
            BookingEvent::Submit {
                details,
                date_display,
                submitted_at,
            } => {
                if date_display == NO_DATE_SELECTED {
                    return vec![BookingEffect::Notice(Notice::SelectDateFirst)];
                }

                let draft = compose_booking(&details, &date_display, submitted_at, &self.config.recipient);
                let token = self.submission.begin();
                log::info!("📧 Opening mail client for booking on {}", date_display);

                vec![
                    BookingEffect::OpenMailClient(draft.to_mailto_url()),
                    BookingEffect::ScheduleReset {
                        token,
                        delay_ms: self.config.reset_delay_ms,
                    },
                ]
            }
            BookingEvent::ResetElapsed { token } => {
                if !self.submission.finish(token) {
                    log::debug!("Ignoring stale booking reset {}", token);
                    return Vec::new();
                }
                vec![BookingEffect::Notice(Notice::BookingSent), BookingEffect::ResetForm]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn create_test_details() -> BookingDetails {
        BookingDetails {
            name: "Jan de Vries".to_string(),
            email: "jan@example.nl".to_string(),
            phone: "0612345678".to_string(),
            event_type: "Bruiloft".to_string(),
            guests: "80".to_string(),
            time: "18:00".to_string(),
            notes: String::new(),
        }
    }

    fn submitted_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 10).unwrap().and_hms_opt(9, 30, 0).unwrap()
    }

    fn submit(date_display: &str) -> BookingEvent {
        BookingEvent::Submit {
            details: create_test_details(),
            date_display: date_display.to_string(),
            submitted_at: submitted_at(),
        }
    }

    #[test]
    fn test_compose_booking() {
        let draft = compose_booking(
            &create_test_details(),
            "donderdag 15 februari 2024",
            submitted_at(),
            "info@example.nl",
        );

        assert_eq!(draft.recipient, "info@example.nl");
        assert_eq!(draft.subject, "Nieuwe Reservering: Bruiloft - Jan de Vries");
        assert_eq!(
            draft.body,
            "NIEUWE RESERVERING AANVRAAG\n\n\
             Datum: donderdag 15 februari 2024\n\
             Tijd: 18:00\n\n\
             CONTACTGEGEVENS:\n\
             Naam: Jan de Vries\n\
             Email: jan@example.nl\n\
             Telefoon: 0612345678\n\n\
             EVENEMENT DETAILS:\n\
             Type: Bruiloft\n\
             Aantal gasten: 80\n\n\
             EXTRA OPMERKINGEN:\n\
             Geen opmerkingen\n\n\
             ---\n\
             Verzonden via Aygül's Catering Online Boekingssysteem\n\
             Datum aanvraag: 10-2-2024, 09:30:00"
        );
    }

    #[test]
    fn test_compose_booking_keeps_notes() {
        let mut details = create_test_details();
        details.notes = "Vegetarisch menu".to_string();

        let draft = compose_booking(&details, "x", submitted_at(), "info@example.nl");
        assert!(draft.body.contains("EXTRA OPMERKINGEN:\nVegetarisch menu\n"));
    }

    #[test]
    fn test_submit_without_date_is_rejected() {
        let mut form = BookingForm::new(BookingConfig::default());
        let effects = form.handle(submit(NO_DATE_SELECTED));

        assert_eq!(effects, vec![BookingEffect::Notice(Notice::SelectDateFirst)]);
        assert!(!form.is_submitting());
        assert_eq!(form.submit_label(), SUBMIT_LABEL);
    }

    #[test]
    fn test_submit_opens_mail_client_and_schedules_reset() {
        let mut form = BookingForm::new(BookingConfig::default());
        let effects = form.handle(submit("donderdag 15 februari 2024"));

        assert_eq!(effects.len(), 2);
        match &effects[0] {
            BookingEffect::OpenMailClient(url) => {
                assert!(url.starts_with("mailto:aygulscatering@gmail.com?subject=Nieuwe%20Reservering"));
                assert!(url.contains("donderdag%2015%20februari%202024"));
            }
            other => panic!("expected mail client effect, got {:?}", other),
        }
        assert_eq!(effects[1], BookingEffect::ScheduleReset { token: 0, delay_ms: 1500 });
        assert!(form.is_submitting());
        assert_eq!(form.submit_label(), PENDING_LABEL);
    }

    #[test]
    fn test_reset_restores_idle_state() {
        let mut form = BookingForm::new(BookingConfig::default());
        form.handle(submit("donderdag 15 februari 2024"));

        let effects = form.handle(BookingEvent::ResetElapsed { token: 0 });
        assert_eq!(
            effects,
            vec![BookingEffect::Notice(Notice::BookingSent), BookingEffect::ResetForm]
        );
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_overlapping_submissions_only_reset_once() {
        let mut form = BookingForm::new(BookingConfig::default());
        form.handle(submit("donderdag 15 februari 2024"));
        form.handle(submit("vrijdag 16 februari 2024"));

        assert!(form.handle(BookingEvent::ResetElapsed { token: 0 }).is_empty());
        assert!(form.is_submitting());
        assert_eq!(form.handle(BookingEvent::ResetElapsed { token: 1 }).len(), 2);
        assert!(form.handle(BookingEvent::ResetElapsed { token: 1 }).is_empty());
    }
}
