use gloo::storage::{LocalStorage, Storage};
use shared::preferences::PreferenceStore;

/// `localStorage` holding plain strings, readable by the static pages too.
///
/// gloo's typed accessors JSON-encode values, so this goes through the raw
/// `web_sys::Storage` handle instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPreferences;

impl PreferenceStore for LocalPreferences {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(err) = LocalStorage::raw().set_item(key, value) {
            log::warn!("⚠️ Could not persist {}: {:?}", key, err);
        }
    }
}
