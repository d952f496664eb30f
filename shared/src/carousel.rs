use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub event: String,
}

/// Testimonial slider position. Auto-advance pauses while hovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carousel {
    index: usize,
    len: usize,
    hovered: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            hovered: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn auto_advances(&self) -> bool {
        !self.hovered && self.len > 1
    }

    /// CSS transform for the slide track.
    pub fn transform(&self) -> String {
        format!("translateX(-{}%)", self.index * 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_both_ways() {
        let mut carousel = Carousel::new(3);

        carousel.previous();
        assert_eq!(carousel.index(), 2);
        carousel.next();
        assert_eq!(carousel.index(), 0);
        carousel.next();
        carousel.next();
        assert_eq!(carousel.transform(), "translateX(-200%)");
    }

    #[test]
    fn test_hover_pauses_auto_advance() {
        let mut carousel = Carousel::new(3);
        assert!(carousel.auto_advances());

        carousel.set_hovered(true);
        assert!(!carousel.auto_advances());
        carousel.set_hovered(false);
        assert!(carousel.auto_advances());
    }

    #[test]
    fn test_empty_carousel_stays_put() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.previous();

        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_empty());
        assert!(!carousel.auto_advances());
    }
}
