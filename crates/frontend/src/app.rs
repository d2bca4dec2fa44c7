use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use contracts::shared::form_settings::FormSettings;
use leptos::prelude::*;

#[component]
pub fn App(settings: FormSettings) -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new(&settings));

    // Settings are read-only after startup
    provide_context(settings);

    view! {
        <Shell />
    }
}
