//! `mailto:` composition and the submit/reset lifecycle shared by the
//! booking and quote forms.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Characters `encodeURIComponent` leaves untouched.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// A message handed to the platform mail client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailDraft {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailDraft {
    pub fn to_mailto_url(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            encode_component(&self.subject),
            encode_component(&self.body)
        )
    }
}

/// Tracks the deferred form reset that follows a submission.
///
/// Every submission takes a fresh token. Only the reset carrying the latest
/// token is honoured, so a burst of submissions cannot interleave resets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionTracker {
    pending: Option<u64>,
    next_token: u64,
}

impl SubmissionTracker {
    pub fn begin(&mut self) -> u64 {
        let token = self.next_token;
        self.next_token += 1;
        self.pending = Some(token);
        token
    }

    /// Returns `true` when `token` is the outstanding reset.
    pub fn finish(&mut self, token: u64) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_component_matches_encode_uri_component() {
        assert_eq!(encode_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_component("line1\nline2"), "line1%0Aline2");
        assert_eq!(encode_component("Aygül's (catering)!"), "Ayg%C3%BCl's%20(catering)!");
        assert_eq!(encode_component("mail@host.nl"), "mail%40host.nl");
        assert_eq!(encode_component("~*_-."), "~*_-.");
    }

    #[test]
    fn test_mailto_url() {
        let draft = MailDraft {
            recipient: "info@example.nl".to_string(),
            subject: "Hallo daar".to_string(),
            body: "Regel 1\nRegel 2".to_string(),
        };

        assert_eq!(
            draft.to_mailto_url(),
            "mailto:info@example.nl?subject=Hallo%20daar&body=Regel%201%0ARegel%202"
        );
    }

    #[test]
    fn test_only_latest_token_finishes() {
        let mut tracker = SubmissionTracker::default();
        assert!(!tracker.is_pending());

        let first = tracker.begin();
        let second = tracker.begin();
        assert_ne!(first, second);

        assert!(!tracker.finish(first));
        assert!(tracker.is_pending());
        assert!(tracker.finish(second));
        assert!(!tracker.is_pending());
        assert!(!tracker.finish(second));
    }
}
