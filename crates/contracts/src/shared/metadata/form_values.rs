//! Per-session value mapping with tri-state transitions
//!
//! ```text
//!            set_text("")            set_not_applicable(true)
//!   Unset <---------------> Present ------------------------> NotApplicable
//!     ^    set_text("abc")                                          |
//!     +-------------------------------------------------------------+
//!                       set_not_applicable(false)
//! ```

use super::error::FormError;
use super::field_value::FieldValue;
use super::registry::FormSchemaRegistry;
use super::types::FieldDescriptor;
use std::collections::BTreeMap;

/// Flat `name -> value` mapping for one form session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    registry: FormSchemaRegistry,
    values: BTreeMap<&'static str, FieldValue>,
}

impl FormValues {
    /// Every registry field starts `Unset`
    pub fn new(registry: FormSchemaRegistry) -> Self {
        let values = registry
            .fields()
            .map(|field| (field.name, FieldValue::Unset))
            .collect();
        Self { registry, values }
    }

    pub fn registry(&self) -> FormSchemaRegistry {
        self.registry
    }

    fn descriptor(&self, name: &str) -> Result<&'static FieldDescriptor, FormError> {
        self.registry
            .find_field(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    fn slot(&mut self, name: &str) -> Result<&mut FieldValue, FormError> {
        let field = self.descriptor(name)?;
        Ok(self.values.entry(field.name).or_default())
    }

    /// Store typed text. Rejected while the field is not applicable because
    /// the input is disabled in that state.
    pub fn set_text(&mut self, name: &str, text: &str) -> Result<(), FormError> {
        let slot = self.slot(name)?;
        if slot.is_not_applicable() {
            return Err(FormError::InvalidStateTransition {
                field: name.to_string(),
            });
        }
        *slot = FieldValue::from_text(text);
        Ok(())
    }

    /// Checkbox toggle. Unchecking always clears to `Unset`; text discarded by
    /// checking is not restored.
    pub fn set_not_applicable(&mut self, name: &str, flag: bool) -> Result<(), FormError> {
        let field = self.descriptor(name)?;
        if !field.supports_not_applicable() {
            return Err(FormError::UnsupportedOperation {
                field: name.to_string(),
            });
        }
        let slot = self.slot(name)?;
        *slot = if flag {
            FieldValue::NotApplicable
        } else {
            FieldValue::Unset
        };
        Ok(())
    }

    /// Value for the text input; empty when unset or not applicable
    pub fn display_value(&self, name: &str) -> Result<&str, FormError> {
        self.get(name).map(FieldValue::display)
    }

    pub fn is_not_applicable(&self, name: &str) -> Result<bool, FormError> {
        self.get(name).map(FieldValue::is_not_applicable)
    }

    pub fn get(&self, name: &str) -> Result<&FieldValue, FormError> {
        let field = self.descriptor(name)?;
        Ok(self.values.get(field.name).unwrap_or(&FieldValue::Unset))
    }

    /// Back to the initial all-`Unset` state
    pub fn reset(&mut self) {
        self.values
            .values_mut()
            .for_each(|value| *value = FieldValue::Unset);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> + '_ {
        self.values.iter().map(|(name, value)| (*name, value))
    }

    /// Owned copy of the mapping, keyed by field name
    pub fn to_map(&self) -> BTreeMap<String, FieldValue> {
        self.iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }
}
