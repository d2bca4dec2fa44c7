use super::view_model::CatalogueFormViewModel;
use crate::shared::info_tip::InfoTip;
use contracts::shared::metadata::FieldLayout;
use leptos::prelude::*;

/// DOM id of a field's text input
pub fn field_input_id(name: &str) -> String {
    format!("catalogue-field-{}", name)
}

/// One labelled text input, with its "does not apply" checkbox when the
/// field has one and the inline validation message
#[component]
pub fn FieldInput(vm: CatalogueFormViewModel, field: FieldLayout) -> impl IntoView {
    let descriptor = field.field;
    let name = descriptor.name;
    let input_id = field_input_id(name);

    view! {
        <div
            class="form-group catalogue-field"
            class:catalogue-field--invalid=move || vm.field_error(name).is_some()
        >
            <div class="catalogue-field__label">
                <label for=input_id.clone()>
                    {field.show_required_marker.then(|| view! {
                        <span class="catalogue-field__required">"* "</span>
                    })}
                    {descriptor.label}
                </label>
                {(!descriptor.tooltip.is_empty())
                    .then(|| view! { <InfoTip text=descriptor.tooltip /> })}
            </div>

            <input
                type="text"
                id=input_id
                placeholder=descriptor.placeholder
                prop:value=move || vm.display_value(name)
                prop:disabled=move || vm.is_not_applicable(name)
                on:input=move |ev| vm.set_text(name, &event_target_value(&ev))
            />

            {descriptor.not_applicable_label.map(|label| view! {
                <label class="catalogue-field__na">
                    <input
                        type="checkbox"
                        prop:checked=move || vm.is_not_applicable(name)
                        on:change=move |ev| vm.set_not_applicable(name, event_target_checked(&ev))
                    />
                    <span>{label}</span>
                </label>
            })}

            {move || vm.field_error(name).map(|message| view! {
                <p class="catalogue-field__error" role="alert">{message}</p>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_input_id() {
        assert_eq!(field_input_id("itemName"), "catalogue-field-itemName");
    }
}
