//! Render plan for a schema-driven form
//!
//! A pure fold over the registry: tabs, groups and fields in schema order,
//! filtered by the attribute selector. Dynamic state (values, errors) is not
//! part of the plan; the view reads it per field.

use super::registry::FormSchemaRegistry;
use super::types::FieldDescriptor;
use serde::{Deserialize, Serialize};

/// "All Attributes" / "Required" selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeFilter {
    #[default]
    All,
    #[serde(alias = "required_only")]
    Required,
}

impl AttributeFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Required => "required",
        }
    }

    pub fn from_key(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "required" | "required_only" => Some(Self::Required),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Attributes",
            Self::Required => "Required",
        }
    }

    pub fn keeps(&self, field: &FieldDescriptor) -> bool {
        match self {
            Self::All => true,
            Self::Required => field.required,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    pub field: &'static FieldDescriptor,
    /// Label prefixed with the required marker
    pub show_required_marker: bool,
}

impl FieldLayout {
    pub fn name(&self) -> &'static str {
        self.field.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupLayout {
    pub heading: Option<&'static str>,
    pub tooltip: Option<&'static str>,
    /// Every group after the first one in a tab draws a separator line
    pub show_separator: bool,
    pub fields: Vec<FieldLayout>,
}

impl GroupLayout {
    /// Heading and tooltip render independently; either one needs a header row
    pub fn has_header(&self) -> bool {
        self.heading.is_some() || self.tooltip.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabLayout {
    pub key: &'static str,
    pub label: &'static str,
    pub groups: Vec<GroupLayout>,
}

impl TabLayout {
    pub fn field_count(&self) -> usize {
        self.groups.iter().map(|group| group.fields.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLayout {
    pub tabs: Vec<TabLayout>,
}

impl FormLayout {
    /// Walk the registry once. Groups emptied by the filter are dropped;
    /// tabs never are, so the tab strip stays stable.
    pub fn build(registry: &FormSchemaRegistry, filter: AttributeFilter) -> Self {
        let tabs = registry
            .tabs()
            .iter()
            .map(|tab| {
                let groups = tab
                    .groups
                    .iter()
                    .map(|group| (group, Self::fields_of(group.fields, filter)))
                    .filter(|(_, fields)| !fields.is_empty())
                    .enumerate()
                    .map(|(index, (group, fields))| GroupLayout {
                        heading: group.heading,
                        tooltip: group.tooltip,
                        show_separator: index > 0,
                        fields,
                    })
                    .collect();
                TabLayout {
                    key: tab.key,
                    label: tab.label,
                    groups,
                }
            })
            .collect();
        Self { tabs }
    }

    fn fields_of(fields: &'static [FieldDescriptor], filter: AttributeFilter) -> Vec<FieldLayout> {
        fields
            .iter()
            .filter(|field| filter.keeps(field))
            .map(|field| FieldLayout {
                field,
                show_required_marker: field.required,
            })
            .collect()
    }

    pub fn tab(&self, key: &str) -> Option<&TabLayout> {
        self.tabs.iter().find(|tab| tab.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::types::{FieldGroup, TabDefinition};

    const TABS: &[TabDefinition] = &[
        TabDefinition {
            key: "details",
            label: "Product Details",
            groups: &[
                FieldGroup::plain(&[
                    FieldDescriptor::required("manufacturer", "Manufacturer", "", ""),
                    FieldDescriptor::optional("style", "Style", "", ""),
                ]),
                FieldGroup::headed(
                    "Extras",
                    &[FieldDescriptor::optional("metalType", "Metal Type", "", "")],
                ),
                FieldGroup::headed(
                    "Stones",
                    &[FieldDescriptor::required("stoneId", "Stone ID", "", "")],
                )
                .with_tooltip("One entry per stone type"),
            ],
        },
        TabDefinition {
            key: "empty",
            label: "Empty",
            groups: &[],
        },
    ];

    #[test]
    fn test_all_attributes_keeps_schema_order() {
        let layout = FormLayout::build(&FormSchemaRegistry::new(TABS), AttributeFilter::All);
        let details = layout.tab("details").unwrap();
        assert_eq!(details.groups.len(), 3);
        assert_eq!(details.field_count(), 4);
        assert!(!details.groups[0].show_separator);
        assert!(details.groups[1].show_separator);
        assert_eq!(details.groups[2].tooltip, Some("One entry per stone type"));
        assert!(details.groups[0].fields[0].show_required_marker);
        assert!(!details.groups[0].fields[1].show_required_marker);
    }

    #[test]
    fn test_required_filter_drops_empty_groups() {
        let layout = FormLayout::build(&FormSchemaRegistry::new(TABS), AttributeFilter::Required);
        let details = layout.tab("details").unwrap();
        let headings: Vec<_> = details.groups.iter().map(|g| g.heading).collect();
        assert_eq!(headings, vec![None, Some("Stones")]);
        let names: Vec<_> = details
            .groups
            .iter()
            .flat_map(|g| g.fields.iter().map(FieldLayout::name))
            .collect();
        assert_eq!(names, vec!["manufacturer", "stoneId"]);
        assert!(details.groups[1].show_separator);
        assert_eq!(layout.tabs.len(), 2);
        assert!(layout.tab("empty").unwrap().groups.is_empty());
    }

    #[test]
    fn test_tooltip_without_heading_keeps_header() {
        const HINTED: &[TabDefinition] = &[TabDefinition {
            key: "offer",
            label: "Offer",
            groups: &[
                FieldGroup::plain(&[FieldDescriptor::optional("sellerSKU", "Seller SKU", "", "")])
                    .with_tooltip("Assigned by the seller"),
                FieldGroup::plain(&[FieldDescriptor::optional("quantity", "Quantity", "", "")]),
            ],
        }];

        let layout = FormLayout::build(&FormSchemaRegistry::new(HINTED), AttributeFilter::All);
        let offer = layout.tab("offer").unwrap();
        assert_eq!(offer.groups[0].heading, None);
        assert_eq!(offer.groups[0].tooltip, Some("Assigned by the seller"));
        assert!(offer.groups[0].has_header());
        assert!(!offer.groups[1].has_header());
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!(AttributeFilter::from_key("required"), Some(AttributeFilter::Required));
        assert_eq!(AttributeFilter::from_key("all"), Some(AttributeFilter::All));
        assert_eq!(AttributeFilter::from_key("some"), None);
        assert_eq!(AttributeFilter::Required.label(), "Required");
    }
}
