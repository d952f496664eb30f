use anyhow::{Context, Result};
use shared::SiteConfig;

use super::browser::element_by_id;

/// Id of the `<script type="application/json">` block carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Load the page's configuration, falling back to defaults.
pub fn load_site_config() -> SiteConfig {
    let Some(element) = element_by_id(CONFIG_ELEMENT_ID) else {
        log::debug!("No #{} block, using default configuration", CONFIG_ELEMENT_ID);
        return SiteConfig::default();
    };

    let raw = element.text_content().unwrap_or_default();
    match parse_config(&raw) {
        Ok(config) => {
            log::info!("⚙️ Loaded site configuration");
            config
        }
        Err(err) => {
            log::warn!("⚠️ {:#}; using default configuration", err);
            SiteConfig::default()
        }
    }
}

pub fn parse_config(raw: &str) -> Result<SiteConfig> {
    if raw.trim().is_empty() {
        return Ok(SiteConfig::default());
    }
    SiteConfig::from_json(raw).context("invalid #site-config block")
}
