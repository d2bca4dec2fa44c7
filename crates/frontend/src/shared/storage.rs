//! localStorage helpers
//!
//! Missing window or storage (private mode, tests on the host) reads as
//! "nothing stored" and writes are dropped.

use web_sys::window;

pub const SETTINGS_STORAGE_KEY: &str = "catalogue_admin.settings";
pub const SIDEBAR_OPEN_STORAGE_KEY: &str = "catalogue_admin.sidebar_open";

fn local_storage() -> Option<web_sys::Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn load_item(key: &str) -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
}

pub fn save_item(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("Failed to save '{}' to localStorage: {:?}", key, err);
        }
    }
}

pub fn load_bool(key: &str) -> Option<bool> {
    load_item(key).and_then(|value| parse_bool(&value))
}

pub fn save_bool(key: &str, value: bool) {
    save_item(key, if value { "true" } else { "false" });
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
