//! Persisted visitor preferences: colour theme and cookie consent.

use serde::{Deserialize, Serialize};

pub const THEME_KEY: &str = "theme";
pub const COOKIE_CONSENT_KEY: &str = "cookiesAccepted";

/// Key/value string storage. Last write wins.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Saved choice wins; without one, follow the system colour scheme.
pub fn resolve_theme(store: &impl PreferenceStore, prefers_dark: bool) -> Theme {
    match store.get(THEME_KEY).as_deref() {
        Some("dark") => Theme::Dark,
        Some(saved) if !saved.is_empty() => Theme::Light,
        _ if prefers_dark => Theme::Dark,
        _ => Theme::Light,
    }
}

/// Flip the theme and persist the new choice.
pub fn toggle_theme(store: &mut impl PreferenceStore, current: Theme) -> Theme {
    let next = current.toggled();
    store.set(THEME_KEY, next.as_str());
    next
}

pub fn cookie_banner_needed(store: &impl PreferenceStore) -> bool {
    store.get(COOKIE_CONSENT_KEY).map_or(true, |value| value.is_empty())
}

pub fn accept_cookies(store: &mut impl PreferenceStore) {
    store.set(COOKIE_CONSENT_KEY, "true");
}
