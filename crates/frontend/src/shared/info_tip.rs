use super::icons::icon;
use leptos::prelude::*;

/// Small "i" marker carrying a hover hint
#[component]
pub fn InfoTip(text: &'static str) -> impl IntoView {
    view! {
        <span class="info-tip" title=text aria-label=text tabindex="0">
            {icon("info")}
        </span>
    }
}
