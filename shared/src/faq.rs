use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// FAQ accordion: at most one answer is expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn is_open(&self, item: usize) -> bool {
        self.open == Some(item)
    }

    /// Clicking the expanded item collapses it; any other item replaces it.
    pub fn toggle(&mut self, item: usize) {
        self.open = if self.is_open(item) { None } else { Some(item) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_open_item() {
        let mut accordion = Accordion::default();

        accordion.toggle(1);
        assert!(accordion.is_open(1));
        accordion.toggle(3);
        assert!(!accordion.is_open(1));
        assert!(accordion.is_open(3));
        accordion.toggle(3);
        assert_eq!(accordion, Accordion::default());
    }
}
