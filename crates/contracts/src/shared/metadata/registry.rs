//! Ordered registry of form tabs

use super::error::FormError;
use super::types::{FieldDescriptor, TabDefinition};

/// Mapping from tab key to tab definition, in display order.
///
/// Backed by a static slice: insertion order is the slice order and it is
/// read-only for the lifetime of the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSchemaRegistry {
    tabs: &'static [TabDefinition],
}

impl FormSchemaRegistry {
    pub const fn new(tabs: &'static [TabDefinition]) -> Self {
        Self { tabs }
    }

    pub fn tabs(&self) -> &'static [TabDefinition] {
        self.tabs
    }

    /// Tab definition by key
    pub fn get_tab(&self, key: &str) -> Result<&'static TabDefinition, FormError> {
        self.tabs
            .iter()
            .find(|tab| tab.key == key)
            .ok_or_else(|| FormError::UnknownTab(key.to_string()))
    }

    /// `(key, label)` pairs in the order tab triggers are rendered
    pub fn list_tabs(&self) -> Vec<(&'static str, &'static str)> {
        self.tabs.iter().map(|tab| (tab.key, tab.label)).collect()
    }

    /// Every field of every tab, in tab/group/field order
    pub fn fields(&self) -> impl Iterator<Item = &'static FieldDescriptor> {
        self.tabs.iter().flat_map(|tab| tab.fields())
    }

    pub fn find_field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields().find(|field| field.name == name)
    }

    /// Key of the tab owning the field
    pub fn tab_of_field(&self, name: &str) -> Option<&'static str> {
        self.tabs
            .iter()
            .find(|tab| tab.contains_field(name))
            .map(|tab| tab.key)
    }

    /// Field names declared more than once (must be empty for a valid schema)
    pub fn duplicate_field_names(&self) -> Vec<&'static str> {
        let mut seen = std::collections::HashSet::new();
        let mut duplicates = Vec::new();
        for field in self.fields() {
            if !seen.insert(field.name) && !duplicates.contains(&field.name) {
                duplicates.push(field.name);
            }
        }
        duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::types::FieldGroup;

    const TABS: &[TabDefinition] = &[
        TabDefinition {
            key: "identity",
            label: "Identity",
            groups: &[FieldGroup::plain(&[
                FieldDescriptor::required("itemName", "Item Name", "", ""),
                FieldDescriptor::optional("sku", "SKU", "", ""),
            ])],
        },
        TabDefinition {
            key: "empty",
            label: "Empty",
            groups: &[],
        },
        TabDefinition {
            key: "offer",
            label: "Offer",
            groups: &[FieldGroup::headed("Price", &[FieldDescriptor::required(
                "price", "Price", "", "",
            )])],
        },
    ];

    const REGISTRY: FormSchemaRegistry = FormSchemaRegistry::new(TABS);

    #[test]
    fn test_list_tabs_preserves_order() {
        assert_eq!(
            REGISTRY.list_tabs(),
            vec![("identity", "Identity"), ("empty", "Empty"), ("offer", "Offer")]
        );
    }

    #[test]
    fn test_get_tab() {
        assert_eq!(REGISTRY.get_tab("offer").unwrap().label, "Offer");
        assert_eq!(
            REGISTRY.get_tab("shipping"),
            Err(FormError::UnknownTab("shipping".to_string()))
        );
    }

    #[test]
    fn test_field_lookup() {
        assert_eq!(REGISTRY.fields().count(), 3);
        assert_eq!(REGISTRY.find_field("price").unwrap().label, "Price");
        assert!(REGISTRY.find_field("missing").is_none());
        assert_eq!(REGISTRY.tab_of_field("sku"), Some("identity"));
        assert_eq!(REGISTRY.tab_of_field("missing"), None);
    }

    #[test]
    fn test_duplicate_field_names() {
        assert!(REGISTRY.duplicate_field_names().is_empty());

        const DUPLICATED: &[TabDefinition] = &[
            TabDefinition {
                key: "a",
                label: "A",
                groups: &[FieldGroup::plain(&[FieldDescriptor::optional("x", "X", "", "")])],
            },
            TabDefinition {
                key: "b",
                label: "B",
                groups: &[FieldGroup::plain(&[
                    FieldDescriptor::optional("x", "X", "", ""),
                    FieldDescriptor::optional("x", "X", "", ""),
                ])],
            },
        ];
        assert_eq!(FormSchemaRegistry::new(DUPLICATED).duplicate_field_names(), vec!["x"]);
    }
}
