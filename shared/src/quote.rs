//! Quote request modal.

use serde::{Deserialize, Serialize};

use crate::config::QuoteConfig;
use crate::mailto::{MailDraft, SubmissionTracker};
use crate::notice::Notice;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteDetails {
    pub name: String,
    pub email: String,
    pub event_type: String,
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteEvent {
    Open,
    Close,
    Submit(QuoteDetails),
    ResetElapsed { token: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteEffect {
    Notice(Notice),
    OpenMailClient(String),
    ScheduleReset { token: u64, delay_ms: u32 },
    ResetForm,
}

pub fn compose_quote(details: &QuoteDetails, recipient: &str) -> MailDraft {
    let body = format!(
        "Naam: {}\nEmail: {}\nType Evenement: {}\nDatum: {}\nTijd: {}\n\n--- Verstuurd via Aygül's Catering Website ---",
        details.name, details.email, details.event_type, details.date, details.time
    );

    MailDraft {
        recipient: recipient.to_string(),
        subject: format!("Offerte Aanvraag: {} - {}", details.event_type, details.name),
        body,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteModal {
    config: QuoteConfig,
    open: bool,
    submission: SubmissionTracker,
}

impl QuoteModal {
    pub fn new(config: QuoteConfig) -> Self {
        Self {
            config,
            open: false,
            submission: SubmissionTracker::default(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_pending()
    }

    pub fn handle(&mut self, event: QuoteEvent) -> Vec<QuoteEffect> {
        match event {
            QuoteEvent::Open => {
                self.open = true;
                Vec::new()
            }
            QuoteEvent::Close => {
                self.open = false;
                Vec::new()
            }
            QuoteEvent::Submit(details) => {
                let draft = compose_quote(&details, &self.config.recipient);
                let token = self.submission.begin();
                log::info!("📧 Opening mail client for quote request ({})", details.event_type);

                vec![
                    QuoteEffect::OpenMailClient(draft.to_mailto_url()),
                    QuoteEffect::ScheduleReset {
                        token,
                        delay_ms: self.config.reset_delay_ms,
                    },
                ]
            }
            QuoteEvent::ResetElapsed { token } => {
                if !self.submission.finish(token) {
                    return Vec::new();
                }
                self.open = false;
                vec![QuoteEffect::Notice(Notice::QuoteDrafted), QuoteEffect::ResetForm]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_details() -> QuoteDetails {
        QuoteDetails {
            name: "Fatma".to_string(),
            email: "fatma@example.nl".to_string(),
            event_type: "Verjaardag".to_string(),
            date: "2024-03-02".to_string(),
            time: "15:00".to_string(),
        }
    }

    #[test]
    fn test_compose_quote() {
        let draft = compose_quote(&create_test_details(), "info@example.nl");

        assert_eq!(draft.subject, "Offerte Aanvraag: Verjaardag - Fatma");
        assert_eq!(
            draft.body,
            "Naam: Fatma\nEmail: fatma@example.nl\nType Evenement: Verjaardag\nDatum: 2024-03-02\nTijd: 15:00\n\n--- Verstuurd via Aygül's Catering Website ---"
        );
    }

    #[test]
    fn test_open_close() {
        let mut modal = QuoteModal::new(QuoteConfig::default());
        assert!(!modal.is_open());

        modal.handle(QuoteEvent::Open);
        assert!(modal.is_open());
        modal.handle(QuoteEvent::Close);
        assert!(!modal.is_open());
    }

    #[test]
    fn test_submit_then_reset_closes_modal() {
        let mut modal = QuoteModal::new(QuoteConfig::default());
        modal.handle(QuoteEvent::Open);

        let effects = modal.handle(QuoteEvent::Submit(create_test_details()));
        assert!(matches!(&effects[0], QuoteEffect::OpenMailClient(url) if url.starts_with("mailto:")));
        assert_eq!(effects[1], QuoteEffect::ScheduleReset { token: 0, delay_ms: 1000 });
        assert!(modal.is_submitting());
        assert!(modal.is_open());

        let effects = modal.handle(QuoteEvent::ResetElapsed { token: 0 });
        assert_eq!(effects, vec![QuoteEffect::Notice(Notice::QuoteDrafted), QuoteEffect::ResetForm]);
        assert!(!modal.is_open());
        assert!(!modal.is_submitting());
    }

    #[test]
    fn test_stale_reset_is_ignored() {
        let mut modal = QuoteModal::new(QuoteConfig::default());
        modal.handle(QuoteEvent::Open);
        modal.handle(QuoteEvent::Submit(create_test_details()));
        modal.handle(QuoteEvent::Submit(create_test_details()));

        assert!(modal.handle(QuoteEvent::ResetElapsed { token: 0 }).is_empty());
        assert!(modal.is_open());
    }
}
