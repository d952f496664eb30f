//! Thin wrappers over the page the islands are mounted into.

use anyhow::{anyhow, Context, Result};
use gloo::utils::{body, document, document_element, window};
use shared::preferences::Theme;
use web_sys::Element;

/// Hand a `mailto:` URL to the browser. Whether a mail client picks it up
/// cannot be observed.
pub fn open_mail_client(url: &str) -> Result<()> {
    window()
        .location()
        .set_href(url)
        .map_err(|err| anyhow!("{:?}", err))
        .context("failed to navigate to mailto URL")
}

pub fn prefers_dark() -> bool {
    window()
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Reflect the theme as the `dark` class on `<html>`.
pub fn apply_theme(theme: Theme) {
    let classes = document_element().class_list();
    let result = match theme {
        Theme::Dark => classes.add_1("dark"),
        Theme::Light => classes.remove_1("dark"),
    };
    if let Err(err) = result {
        log::warn!("⚠️ Could not apply {} theme: {:?}", theme.as_str(), err);
    }
}

/// Stop the page behind an overlay from scrolling.
pub fn lock_scroll(locked: bool) {
    let value = if locked { "hidden" } else { "" };
    if let Err(err) = body().style().set_property("overflow", value) {
        log::debug!("Could not set body overflow: {:?}", err);
    }
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn current_path() -> String {
    window().location().pathname().unwrap_or_default()
}
