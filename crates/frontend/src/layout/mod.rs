pub mod center;
pub mod global_context;
pub mod left;

use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |           Content            |
/// |   (Left)  |           (Center)           |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <div class="app-body">
                <left::Left>
                    <left::TeamSwitcher />
                    <left::Sidebar />
                    <left::RailToggle />
                </left::Left>

                <div class="app-main">
                    <center::Center>
                        <center::ActivePage />
                    </center::Center>
                </div>
            </div>
        </div>
    }
}
