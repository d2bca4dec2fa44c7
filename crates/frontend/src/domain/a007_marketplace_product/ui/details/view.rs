use super::field::FieldInput;
use super::view_model::CatalogueFormViewModel;
use crate::shared::icons::icon;
use crate::shared::info_tip::InfoTip;
use contracts::domain::a007_marketplace_product::{ListingSubmission, CATALOGUE_SCHEMA};
use contracts::shared::form_settings::FormSettings;
use contracts::shared::metadata::{AttributeFilter, TabLayout};
use leptos::prelude::*;
use thaw::*;

/// "Add Product" page: tabbed attribute form with submit and draft actions
#[component]
pub fn CatalogueAddPage(
    #[prop(into)] on_submit: Callback<ListingSubmission>,
    #[prop(into)] on_save_draft: Callback<ListingSubmission>,
) -> impl IntoView {
    let settings = use_context::<FormSettings>().unwrap_or_default();
    let vm = CatalogueFormViewModel::new(&settings);

    view! {
        <div class="details-container catalogue-form">
            <div class="details-header">
                <h3>"Add Product"</h3>
                <RadioGroup value=vm.filter_value>
                    {[AttributeFilter::All, AttributeFilter::Required].into_iter().map(|filter| view! {
                        <Radio value=filter.as_str() label=filter.label()/>
                    }).collect_view()}
                </RadioGroup>
            </div>

            <TabList selected_value=vm.active_tab>
                {CATALOGUE_SCHEMA.tabs().iter().map(|tab| {
                    let key = tab.key;
                    view! {
                        <Tab value=key.to_string()>
                            <span class="catalogue-tab">
                                {tab.label}
                                <Show when=move || vm.tab_has_error(key)>
                                    <span class="catalogue-tab__error" title="This tab has errors">
                                        {icon("circle-alert")}
                                    </span>
                                </Show>
                            </span>
                        </Tab>
                    }
                }).collect_view()}
            </TabList>

            <div class="catalogue-form__panel">
                {move || {
                    let key = vm.active_tab.get();
                    vm.layout
                        .with(|layout| layout.tab(&key).cloned())
                        .map(|tab| view! { <TabPanel vm=vm tab=tab /> })
                }}
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.reset()
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_save_draft.run(vm.save_draft())
                >
                    "Save as Draft"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| {
                        if let Some(record) = vm.submit() {
                            on_submit.run(record);
                        }
                    }
                >
                    "Submit"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn TabPanel(vm: CatalogueFormViewModel, tab: TabLayout) -> impl IntoView {
    let empty = tab.field_count() == 0;
    let key = tab.key;

    view! {
        <div class="catalogue-tab-panel" data-tab=key>
            {empty.then(|| view! {
                <p class="catalogue-tab-panel__empty">"No required attributes on this tab."</p>
            })}
            {tab.groups.into_iter().map(|group| view! {
                <section
                    class="catalogue-group"
                    class:catalogue-group--separated=group.show_separator
                >
                    {group.has_header().then(|| view! {
                        <div class="catalogue-group__heading">
                            {group.heading.map(|heading| view! { <h4>{heading}</h4> })}
                            {group.tooltip.map(|text| view! { <InfoTip text=text /> })}
                        </div>
                    })}
                    <div class="catalogue-group__fields">
                        {group.fields.into_iter().map(|field| view! {
                            <FieldInput vm=vm field=field />
                        }).collect_view()}
                    </div>
                </section>
            }).collect_view()}
        </div>
    }
}
