pub mod app;
pub mod domain;
pub mod layout;
pub mod shared;

use contracts::shared::form_settings::FormSettings;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let (settings, load_error) = match shared::settings::load_app_settings() {
        Ok(settings) => (settings, None),
        Err(err) => (FormSettings::default(), Some(err)),
    };

    // initializes logging using the `log` crate; `off` installs no logger
    if let Some(level) = settings.logging.level.to_level() {
        _ = console_log::init_with_level(level);
    }
    console_error_panic_hook::set_once();

    if let Some(err) = load_error {
        log::warn!("Ignoring stored settings, using defaults: {}", err);
    }

    leptos::mount::mount_to_body(move || {
        let settings = settings.clone();
        view! { <app::App settings=settings /> }
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
