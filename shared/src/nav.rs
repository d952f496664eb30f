//! Site navigation: the mobile menu and active-link highlighting.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// Reduce a path or href to its page file name, ignoring query and fragment.
///
/// `/`, `""` and directory paths resolve to `index.html`.
pub fn page_name(path: &str) -> &str {
    let clean = path.split(['?', '#']).next().unwrap_or_default();
    clean
        .split('/')
        .filter(|segment| !segment.is_empty())
        .last()
        .unwrap_or("index.html")
}

pub fn is_active(link: &NavLink, current_path: &str) -> bool {
    page_name(&link.href) == page_name(current_path)
}

/// Open/closed state of the mobile navigation overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Also used when a link inside the menu is followed.
    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(href: &str) -> NavLink {
        NavLink {
            label: href.to_string(),
            href: href.to_string(),
        }
    }

    #[test]
    fn test_page_name() {
        assert_eq!(page_name("/site/booking.html"), "booking.html");
        assert_eq!(page_name("booking.html?ref=home#form"), "booking.html");
        assert_eq!(page_name("/"), "index.html");
        assert_eq!(page_name(""), "index.html");
        assert_eq!(page_name("#faq"), "index.html");
    }

    #[test]
    fn test_is_active() {
        assert!(is_active(&link("index.html"), "/"));
        assert!(is_active(&link("./menu.html"), "/catering/menu.html"));
        assert!(!is_active(&link("menu.html"), "/catering/booking.html"));
    }

    #[test]
    fn test_mobile_menu() {
        let mut menu = MobileMenu::default();
        menu.open();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }
}
