//! Picks the page for the active sidebar url

use crate::domain::a007_marketplace_product::ui::details::CatalogueAddPage;
use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a007_marketplace_product::ListingSubmission;
use contracts::shared::navigation::title_for_url;
use leptos::prelude::*;

pub const ADD_PRODUCT_URL: &str = "/catalogue/add";

#[component]
pub fn ActivePage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // The submit boundary: records are only logged, nothing is persisted
    let on_submit = Callback::new(|record: ListingSubmission| log_record("submit", &record));
    let on_save_draft = Callback::new(|record: ListingSubmission| log_record("draft", &record));

    move || {
        let url = ctx.active.get();
        if url == ADD_PRODUCT_URL {
            view! { <CatalogueAddPage on_submit=on_submit on_save_draft=on_save_draft /> }
                .into_any()
        } else {
            let title = title_for_url(&url).unwrap_or("Not found");
            view! {
                <div class="page-placeholder">
                    <h2>{title}</h2>
                    <p class="page-placeholder__url">{url}</p>
                </div>
            }
            .into_any()
        }
    }
}

fn log_record(kind: &str, record: &ListingSubmission) {
    match serde_json::to_string(record) {
        Ok(json) => log::info!("{} {}: {}", kind, record.id, json),
        Err(err) => log::error!("{}: failed to serialize record: {}", kind, err),
    }
}
