use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::shared::form_settings::Collapsible;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let is_open = move || ctx.left_open.get();
    let collapsible = ctx.collapsible;

    view! {
        <div
            data-zone="left"
            class="app-sidebar"
            class:app-sidebar--icon=move || collapsible == Collapsible::Icon && !is_open()
            class:hidden=move || collapsible == Collapsible::Offcanvas && !is_open()
        >
            {children()}
        </div>
    }
}

/// Footer button collapsing the sidebar into its rail
#[component]
pub fn RailToggle() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    (ctx.collapsible != Collapsible::Disabled).then(|| {
        view! {
            <div class="app-sidebar__footer">
                <button
                    class="app-sidebar__rail"
                    title="Toggle Sidebar"
                    aria-label="Toggle Sidebar"
                    on:click=move |_| ctx.toggle_left()
                >
                    {icon("panel-left")}
                </button>
            </div>
        }
    })
}
