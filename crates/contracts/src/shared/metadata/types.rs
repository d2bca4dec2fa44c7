//! Core schema types for data-driven forms
//!
//! All types use 'static lifetimes: a form schema is authored as compile-time
//! constants and never mutated.

// ============================================================================
// Field-level metadata
// ============================================================================

/// Static description of a single form input
/// Copy trait enabled for efficient passing by value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Key in the flat value mapping; unique across a registry
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub tooltip: &'static str,
    pub required: bool,
    /// Label of the "does not apply" checkbox, if the field has one
    pub not_applicable_label: Option<&'static str>,
}

impl FieldDescriptor {
    /// Optional field without a "does not apply" checkbox
    pub const fn optional(
        name: &'static str,
        label: &'static str,
        placeholder: &'static str,
        tooltip: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            placeholder,
            tooltip,
            required: false,
            not_applicable_label: None,
        }
    }

    /// Required field without a "does not apply" checkbox
    pub const fn required(
        name: &'static str,
        label: &'static str,
        placeholder: &'static str,
        tooltip: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            placeholder,
            tooltip,
            required: true,
            not_applicable_label: None,
        }
    }

    /// Attach a "does not apply" checkbox to the field
    pub const fn with_not_applicable(mut self, label: &'static str) -> Self {
        self.not_applicable_label = Some(label);
        self
    }

    pub fn supports_not_applicable(&self) -> bool {
        self.not_applicable_label.is_some()
    }
}

// ============================================================================
// Grouping
// ============================================================================

/// Visually separated cluster of fields inside a tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldGroup {
    pub heading: Option<&'static str>,
    pub tooltip: Option<&'static str>,
    pub fields: &'static [FieldDescriptor],
}

impl FieldGroup {
    pub const fn plain(fields: &'static [FieldDescriptor]) -> Self {
        Self {
            heading: None,
            tooltip: None,
            fields,
        }
    }

    pub const fn headed(heading: &'static str, fields: &'static [FieldDescriptor]) -> Self {
        Self {
            heading: Some(heading),
            tooltip: None,
            fields,
        }
    }

    pub const fn with_tooltip(mut self, tooltip: &'static str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }
}

/// Top-level form section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabDefinition {
    pub key: &'static str,
    pub label: &'static str,
    pub groups: &'static [FieldGroup],
}

impl TabDefinition {
    /// All fields of the tab in group order
    pub fn fields(&self) -> impl Iterator<Item = &'static FieldDescriptor> {
        self.groups.iter().flat_map(|group| group.fields.iter())
    }

    pub fn contains_field(&self, name: &str) -> bool {
        self.fields().any(|field| field.name == name)
    }
}
