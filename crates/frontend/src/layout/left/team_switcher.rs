use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::shared::navigation::TEAMS;
use leptos::prelude::*;

/// Sidebar header: active team with a dropdown to pick another
#[component]
pub fn TeamSwitcher() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let menu_open = RwSignal::new(false);

    let active_team = move || TEAMS.get(ctx.active_team.get()).or(TEAMS.first()).copied();

    view! {
        <div class="app-sidebar__header">
            <button
                class="team-switcher"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                {move || active_team().map(|team| view! {
                    <div class="team-switcher__logo">{icon(team.logo)}</div>
                    <div class="team-switcher__text">
                        <span class="team-switcher__name">{team.name}</span>
                        <span class="team-switcher__plan">{team.plan}</span>
                    </div>
                })}
                {icon("chevrons-up-down")}
            </button>

            <Show when=move || menu_open.get()>
                <div class="team-switcher__menu">
                    <div class="team-switcher__caption">"Teams"</div>
                    {TEAMS.iter().enumerate().map(|(index, team)| view! {
                        <div
                            class="team-switcher__item"
                            class:team-switcher__item--active=move || ctx.active_team.get() == index
                            on:click=move |_| {
                                log::debug!("team switched to '{}'", team.name);
                                ctx.active_team.set(index);
                                menu_open.set(false);
                            }
                        >
                            {icon(team.logo)}
                            <span>{team.name}</span>
                            <span class="team-switcher__shortcut">{format!("⌘{}", index + 1)}</span>
                        </div>
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
