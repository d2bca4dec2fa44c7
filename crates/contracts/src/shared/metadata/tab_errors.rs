//! Per-tab error aggregation for the tab trigger indicator

use super::registry::FormSchemaRegistry;
use super::validation::ValidationErrors;

/// True if any field of the tab has an entry in `errors`.
///
/// Unknown tabs and tabs without fields report `false`. Errors for names the
/// schema does not know are ignored.
pub fn tab_has_error(
    registry: &FormSchemaRegistry,
    tab_key: &str,
    errors: &ValidationErrors,
) -> bool {
    if errors.is_empty() {
        return false;
    }
    registry
        .get_tab(tab_key)
        .map(|tab| tab.fields().any(|field| errors.contains(field.name)))
        .unwrap_or(false)
}

/// Keys of all tabs with at least one error, in registry order
pub fn tabs_with_errors(
    registry: &FormSchemaRegistry,
    errors: &ValidationErrors,
) -> Vec<&'static str> {
    registry
        .tabs()
        .iter()
        .filter(|tab| tab_has_error(registry, tab.key, errors))
        .map(|tab| tab.key)
        .collect()
}

/// Tab to switch to when a submit is blocked
pub fn first_tab_with_error(
    registry: &FormSchemaRegistry,
    errors: &ValidationErrors,
) -> Option<&'static str> {
    tabs_with_errors(registry, errors).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::types::{FieldDescriptor, FieldGroup, TabDefinition};
    use crate::shared::metadata::validation::{ValidationError, ValidationErrorKind};

    const TABS: &[TabDefinition] = &[
        TabDefinition {
            key: "description",
            label: "Description",
            groups: &[FieldGroup::plain(&[FieldDescriptor::required(
                "shortDescription",
                "Short Description",
                "",
                "",
            )])],
        },
        TabDefinition {
            key: "offer",
            label: "Offer",
            groups: &[
                FieldGroup::plain(&[FieldDescriptor::optional("sellerSKU", "Seller SKU", "", "")]),
                FieldGroup::headed("Item Dimensions", &[FieldDescriptor::required(
                    "itemLength",
                    "Item Length",
                    "",
                    "",
                )]),
            ],
        },
        TabDefinition {
            key: "empty",
            label: "Empty",
            groups: &[],
        },
        TabDefinition {
            key: "emptyGroup",
            label: "Empty group",
            groups: &[FieldGroup::headed("Nothing", &[])],
        },
    ];

    const REGISTRY: FormSchemaRegistry = FormSchemaRegistry::new(TABS);

    fn error(field_name: &'static str, kind: ValidationErrorKind) -> ValidationError {
        ValidationError {
            field_name,
            kind,
            message: String::new(),
        }
    }

    #[test]
    fn test_offer_error_does_not_leak_into_description() {
        let errors: ValidationErrors =
            vec![error("itemLength", ValidationErrorKind::TooShort { min: 2 })]
                .into_iter()
                .collect();
        assert!(tab_has_error(&REGISTRY, "offer", &errors));
        assert!(!tab_has_error(&REGISTRY, "description", &errors));
        assert_eq!(tabs_with_errors(&REGISTRY, &errors), vec!["offer"]);
    }

    #[test]
    fn test_empty_tabs_have_no_errors() {
        let errors: ValidationErrors =
            vec![error("shortDescription", ValidationErrorKind::Required)]
                .into_iter()
                .collect();
        assert!(!tab_has_error(&REGISTRY, "empty", &errors));
        assert!(!tab_has_error(&REGISTRY, "emptyGroup", &errors));
        assert!(!tab_has_error(&REGISTRY, "missing", &errors));
    }

    #[test]
    fn test_unknown_field_errors_are_ignored() {
        let errors: ValidationErrors = vec![error("ghost", ValidationErrorKind::Required)]
            .into_iter()
            .collect();
        assert!(tabs_with_errors(&REGISTRY, &errors).is_empty());
        assert_eq!(first_tab_with_error(&REGISTRY, &errors), None);
    }

    #[test]
    fn test_first_tab_follows_registry_order() {
        let errors: ValidationErrors = vec![
            error("itemLength", ValidationErrorKind::Required),
            error("shortDescription", ValidationErrorKind::Required),
        ]
        .into_iter()
        .collect();
        assert_eq!(first_tab_with_error(&REGISTRY, &errors), Some("description"));
    }
}
