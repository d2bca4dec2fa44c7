//! Sidebar component with collapsible menu items

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::shared::navigation::NAV_ITEMS;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__group-label">"Platform"</div>
            {NAV_ITEMS.iter().map(|item| {
                let has_children = item.has_children();
                let id = item.id;
                let url = item.url;

                view! {
                    <div>
                        // Parent item
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || !has_children && ctx.is_active(url)
                            style:padding-left="12px"
                            title=item.title
                            on:click=move |_| {
                                if has_children {
                                    ctx.toggle_group(id);
                                } else {
                                    ctx.activate(url);
                                }
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(item.icon)}
                                <span>{item.title}</span>
                            </div>
                            {has_children.then(|| view! {
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || ctx.is_expanded(id)
                                >
                                    {icon("chevron-right")}
                                </div>
                            })}
                        </div>

                        // Children
                        {has_children.then(|| view! {
                            <Show when=move || ctx.is_expanded(id)>
                                <div class="app-sidebar__children">
                                    {item.items.iter().map(|link| {
                                        let link_url = link.url;
                                        view! {
                                            <div
                                                class="app-sidebar__item"
                                                class:app-sidebar__item--active=move || ctx.is_active(link_url)
                                                style:padding-left="10px"
                                                on:click=move |_| ctx.activate(link_url)
                                            >
                                                <div class="app-sidebar__item-content">
                                                    <span>{link.title}</span>
                                                </div>
                                            </div>
                                        }
                                    }).collect_view()}
                                </div>
                            </Show>
                        })}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
