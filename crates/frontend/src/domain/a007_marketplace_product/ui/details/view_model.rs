use contracts::domain::a007_marketplace_product::{
    catalogue_validator, ListingSubmission, CATALOGUE_SCHEMA,
};
use contracts::shared::form_settings::{FormSettings, ValidationMode};
use contracts::shared::metadata::{
    first_tab_with_error, tab_has_error, AttributeFilter, FormError, FormLayout, FormValidator,
    FormValues, ValidationErrors,
};
use leptos::prelude::*;

/// ViewModel for the "Add Product" form
#[derive(Clone, Copy)]
pub struct CatalogueFormViewModel {
    pub values: RwSignal<FormValues>,
    validator: StoredValue<FormValidator>,
    /// Whole-form validation, recomputed on every value change
    pub errors: Memo<ValidationErrors>,
    pub active_tab: RwSignal<String>,
    /// Radio group value: `AttributeFilter::as_str`
    pub filter_value: RwSignal<String>,
    pub layout: Memo<FormLayout>,
    pub submit_attempted: RwSignal<bool>,
    default_tab: StoredValue<String>,
    mode: ValidationMode,
}

impl CatalogueFormViewModel {
    pub fn new(settings: &FormSettings) -> Self {
        let validator = catalogue_validator();
        if let Err(e) = validator.verify() {
            log::error!("catalogue validator: {}", e);
        }

        let values = RwSignal::new(FormValues::new(CATALOGUE_SCHEMA));
        let validator = StoredValue::new(validator);
        let errors = Memo::new(move |_| {
            values.with(|values| validator.with_value(|validator| validator.validate(values)))
        });

        let filter_value = RwSignal::new(settings.form.attribute_filter.as_str().to_string());
        let layout = Memo::new(move |_| {
            let filter =
                filter_value.with(|value| AttributeFilter::from_key(value).unwrap_or_default());
            FormLayout::build(&CATALOGUE_SCHEMA, filter)
        });

        Self {
            values,
            validator,
            errors,
            active_tab: RwSignal::new(settings.form.default_tab.clone()),
            filter_value,
            layout,
            submit_attempted: RwSignal::new(false),
            default_tab: StoredValue::new(settings.form.default_tab.clone()),
            mode: settings.form.validation_mode,
        }
    }

    pub fn set_text(&self, name: &str, text: &str) {
        let mut outcome = Ok(());
        self.values.update(|values| outcome = values.set_text(name, text));
        self.report(outcome);
    }

    pub fn set_not_applicable(&self, name: &str, flag: bool) {
        log::debug!("{}: not applicable = {}", name, flag);
        let mut outcome = Ok(());
        self.values.update(|values| outcome = values.set_not_applicable(name, flag));
        self.report(outcome);
    }

    fn report(&self, outcome: Result<(), FormError>) {
        if let Err(e) = outcome {
            log::error!("form wiring: {}", e);
        }
    }

    pub fn display_value(&self, name: &str) -> String {
        self.values
            .with(|values| values.display_value(name).map(str::to_string).unwrap_or_default())
    }

    pub fn is_not_applicable(&self, name: &str) -> bool {
        self.values
            .with(|values| values.is_not_applicable(name).unwrap_or(false))
    }

    /// Errors are shown live, except in on-submit mode before the first attempt
    fn errors_visible(&self) -> bool {
        self.mode == ValidationMode::OnChange || self.submit_attempted.get()
    }

    pub fn field_error(&self, name: &str) -> Option<String> {
        if !self.errors_visible() {
            return None;
        }
        self.errors
            .with(|errors| errors.get(name).map(|error| error.message.clone()))
    }

    pub fn tab_has_error(&self, tab_key: &str) -> bool {
        self.errors_visible()
            && self
                .errors
                .with(|errors| tab_has_error(&CATALOGUE_SCHEMA, tab_key, errors))
    }

    pub fn filter(&self) -> AttributeFilter {
        self.filter_value
            .with(|value| AttributeFilter::from_key(value).unwrap_or_default())
    }

    /// Validate and build the record; on errors jump to the first failing tab
    pub fn submit(&self) -> Option<ListingSubmission> {
        self.submit_attempted.set(true);
        let result = self.values.with_untracked(|values| {
            self.validator
                .with_value(|validator| ListingSubmission::submit(values, validator))
        });

        match result {
            Ok(record) => {
                log::info!("listing {} submitted", record.id);
                Some(record)
            }
            Err(errors) => {
                log::warn!("submit blocked: {} invalid field(s)", errors.len());
                if let Some(tab) = first_tab_with_error(&CATALOGUE_SCHEMA, &errors) {
                    self.active_tab.set(tab.to_string());
                }
                None
            }
        }
    }

    pub fn save_draft(&self) -> ListingSubmission {
        let record = self.values.with_untracked(ListingSubmission::draft);
        log::info!("listing {} saved as draft", record.id);
        record
    }

    /// Back to a blank form on the default tab
    pub fn reset(&self) {
        self.values.update(FormValues::reset);
        self.submit_attempted.set(false);
        self.active_tab.set(self.default_tab.get_value());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a007_marketplace_product::ListingStatus;
    use contracts::shared::metadata::FieldValue;

    fn fill_required(vm: &CatalogueFormViewModel) {
        for field in CATALOGUE_SCHEMA.fields().filter(|field| field.required) {
            vm.set_text(field.name, "Adidas");
        }
    }

    #[test]
    fn test_errors_follow_values() {
        Owner::new().with(|| {
            let vm = CatalogueFormViewModel::new(&FormSettings::default());
            assert_eq!(vm.field_error("itemName").as_deref(), Some("Item name is required"));

            vm.set_text("itemName", "Ad");
            assert_eq!(
                vm.field_error("itemName").as_deref(),
                Some("Item name must be at least 4 characters.")
            );

            vm.set_text("itemName", "Adidas");
            assert_eq!(vm.field_error("itemName"), None);
        });
    }

    #[test]
    fn test_not_applicable_toggle() {
        Owner::new().with(|| {
            let vm = CatalogueFormViewModel::new(&FormSettings::default());
            vm.set_text("brandName", "Adi");
            vm.set_not_applicable("brandName", true);
            assert!(vm.is_not_applicable("brandName"));
            assert_eq!(vm.display_value("brandName"), "");
            assert_eq!(vm.field_error("brandName"), None);

            // typing into a disabled field is rejected and leaves it untouched
            vm.set_text("brandName", "Adidas");
            assert!(vm.is_not_applicable("brandName"));

            vm.set_not_applicable("brandName", false);
            assert_eq!(vm.field_error("brandName").as_deref(), Some("Brand name is required"));
        });
    }

    #[test]
    fn test_submit_blocked_jumps_to_failing_tab() {
        Owner::new().with(|| {
            let vm = CatalogueFormViewModel::new(&FormSettings::default());
            fill_required(&vm);
            vm.set_text("quantity", "");
            vm.active_tab.set("description".to_string());

            assert!(vm.submit().is_none());
            assert_eq!(vm.active_tab.get_untracked(), "offer");
            assert!(vm.tab_has_error("offer"));
            assert!(!vm.tab_has_error("description"));
        });
    }

    #[test]
    fn test_submit_and_reset() {
        Owner::new().with(|| {
            let vm = CatalogueFormViewModel::new(&FormSettings::default());
            fill_required(&vm);
            vm.set_not_applicable("externalProductId", true);

            let record = vm.submit().unwrap();
            assert_eq!(record.status, ListingStatus::Submitted);
            assert_eq!(record.values["externalProductId"], FieldValue::NotApplicable);

            vm.reset();
            assert_eq!(vm.display_value("itemName"), "");
            assert!(!vm.submit_attempted.get_untracked());
            assert_eq!(vm.active_tab.get_untracked(), "productIdentity");
        });
    }

    #[test]
    fn test_on_submit_mode_hides_errors_until_attempt() {
        Owner::new().with(|| {
            let mut settings = FormSettings::default();
            settings.form.validation_mode = ValidationMode::OnSubmit;
            let vm = CatalogueFormViewModel::new(&settings);
            assert_eq!(vm.field_error("itemName"), None);
            assert!(!vm.tab_has_error("productIdentity"));

            assert!(vm.submit().is_none());
            assert!(vm.field_error("itemName").is_some());
            assert!(vm.tab_has_error("productIdentity"));
        });
    }

    #[test]
    fn test_draft_ignores_errors() {
        Owner::new().with(|| {
            let vm = CatalogueFormViewModel::new(&FormSettings::default());
            vm.set_text("itemName", "Ad");
            let draft = vm.save_draft();
            assert_eq!(draft.status, ListingStatus::Draft);
            assert_eq!(draft.values["itemName"], FieldValue::Present("Ad".to_string()));
            assert!(!vm.submit_attempted.get_untracked());
        });
    }

    #[test]
    fn test_filter_switch_rebuilds_layout() {
        Owner::new().with(|| {
            let vm = CatalogueFormViewModel::new(&FormSettings::default());
            assert_eq!(vm.filter(), AttributeFilter::All);
            let offer_fields = move || {
                vm.layout
                    .with_untracked(|layout| layout.tab("offer").map(|tab| tab.field_count()))
            };
            let all = offer_fields();

            vm.filter_value.set("required".to_string());
            assert_eq!(vm.filter(), AttributeFilter::Required);
            let required = offer_fields();
            assert!(required < all);
            assert_eq!(vm.layout.with_untracked(|layout| layout.tabs.len()), 5);
        });
    }
}
