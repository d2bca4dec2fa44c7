//! Application settings: embedded defaults plus an optional TOML override
//! stored in localStorage under `catalogue_admin.settings`.

use super::storage::{load_item, SETTINGS_STORAGE_KEY};
use contracts::domain::a007_marketplace_product::CATALOGUE_SCHEMA;
use contracts::shared::form_settings::{load_settings, FormSettings};

pub fn load_app_settings() -> Result<FormSettings, String> {
    let overrides = load_item(SETTINGS_STORAGE_KEY);
    let settings = load_settings(overrides.as_deref()).map_err(|e| format!("{e:#}"))?;
    settings
        .validate_against(&CATALOGUE_SCHEMA)
        .map_err(|e| e.to_string())?;
    Ok(settings)
}
