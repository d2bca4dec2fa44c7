//! Validation rules for form fields

use super::error::FormError;
use super::field_value::FieldValue;
use super::form_values::FormValues;
use super::registry::FormSchemaRegistry;
use super::types::FieldDescriptor;
use std::collections::BTreeMap;

/// Which rule failed, with the bound it was checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    Required,
    TooShort { min: usize },
    InvalidLength { expected: usize },
    TooLong { max: usize },
}

/// User-facing validation failure for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field_name: &'static str,
    pub kind: ValidationErrorKind,
    pub message: String,
}

/// Custom messages overriding the generated ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuleMessages {
    pub required: Option<&'static str>,
    pub too_short: Option<&'static str>,
    pub invalid_length: Option<&'static str>,
    pub too_long: Option<&'static str>,
}

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub exact_length: Option<usize>,
    pub messages: RuleMessages,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min_length: None,
            max_length: None,
            exact_length: None,
            messages: RuleMessages {
                required: None,
                too_short: None,
                invalid_length: None,
                too_long: None,
            },
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        let mut rules = Self::none();
        rules.required = true;
        rules
    }

    /// Base rules implied by the descriptor alone
    pub const fn from_descriptor(field: &FieldDescriptor) -> Self {
        if field.required {
            Self::required()
        } else {
            Self::none()
        }
    }

    pub const fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub const fn exact_length(mut self, expected: usize) -> Self {
        self.exact_length = Some(expected);
        self
    }

    pub const fn required_message(mut self, message: &'static str) -> Self {
        self.messages.required = Some(message);
        self
    }

    pub const fn too_short_message(mut self, message: &'static str) -> Self {
        self.messages.too_short = Some(message);
        self
    }

    pub const fn invalid_length_message(mut self, message: &'static str) -> Self {
        self.messages.invalid_length = Some(message);
        self
    }

    pub const fn too_long_message(mut self, message: &'static str) -> Self {
        self.messages.too_long = Some(message);
        self
    }

    /// Validate a value against the rules.
    ///
    /// A not-applicable value always passes. Lengths are counted in chars.
    pub fn check(
        &self,
        field: &FieldDescriptor,
        value: &FieldValue,
    ) -> Result<(), ValidationError> {
        let text = match value {
            FieldValue::NotApplicable => return Ok(()),
            FieldValue::Unset if self.required => {
                return Err(self.error(field, ValidationErrorKind::Required));
            }
            FieldValue::Unset => return Ok(()),
            FieldValue::Present(text) => text,
        };

        let len = text.chars().count();

        if let Some(min) = self.min_length {
            if len < min {
                return Err(self.error(field, ValidationErrorKind::TooShort { min }));
            }
        }

        if let Some(expected) = self.exact_length {
            if len != expected {
                return Err(self.error(field, ValidationErrorKind::InvalidLength { expected }));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(self.error(field, ValidationErrorKind::TooLong { max }));
            }
        }

        Ok(())
    }

    fn error(&self, field: &FieldDescriptor, kind: ValidationErrorKind) -> ValidationError {
        let custom = match kind {
            ValidationErrorKind::Required => self.messages.required,
            ValidationErrorKind::TooShort { .. } => self.messages.too_short,
            ValidationErrorKind::InvalidLength { .. } => self.messages.invalid_length,
            ValidationErrorKind::TooLong { .. } => self.messages.too_long,
        };
        let message = match (custom, kind) {
            (Some(message), _) => message.to_string(),
            (None, ValidationErrorKind::Required) => format!("{} is required", field.label),
            (None, ValidationErrorKind::TooShort { min }) => {
                format!("{} must be at least {} characters.", field.label, min)
            }
            (None, ValidationErrorKind::InvalidLength { expected }) => {
                format!("{} must be exactly {} characters", field.label, expected)
            }
            (None, ValidationErrorKind::TooLong { max }) => {
                format!("{} must be at most {} characters.", field.label, max)
            }
        };
        ValidationError {
            field_name: field.name,
            kind,
            message,
        }
    }
}

// ============================================================================
// Error set
// ============================================================================

/// Current validation failures keyed by field name, at most one per field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    errors: BTreeMap<String, ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, error: ValidationError) {
        self.errors.insert(error.field_name.to_string(), error);
    }

    pub fn get(&self, field_name: &str) -> Option<&ValidationError> {
        self.errors.get(field_name)
    }

    pub fn contains(&self, field_name: &str) -> bool {
        self.errors.contains_key(field_name)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.values()
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        let mut errors = Self::new();
        iter.into_iter().for_each(|error| errors.insert(error));
        errors
    }
}

// ============================================================================
// Whole-form validator
// ============================================================================

/// Per-field rules derived from a registry, plus field-specific refinements
#[derive(Debug, Clone, PartialEq)]
pub struct FormValidator {
    registry: FormSchemaRegistry,
    refinements: BTreeMap<&'static str, ValidationRules>,
    unknown: Vec<&'static str>,
}

impl FormValidator {
    pub fn new(registry: FormSchemaRegistry) -> Self {
        Self {
            registry,
            refinements: BTreeMap::new(),
            unknown: Vec::new(),
        }
    }

    /// Adjust the rules of one field, starting from its current rules
    pub fn refine(
        mut self,
        name: &'static str,
        f: impl FnOnce(ValidationRules) -> ValidationRules,
    ) -> Self {
        match self.rules_for(name) {
            Some(rules) => {
                self.refinements.insert(name, f(rules));
            }
            None => self.unknown.push(name),
        }
        self
    }

    /// Fails if a refinement named a field missing from the registry
    pub fn verify(&self) -> Result<(), FormError> {
        match self.unknown.first() {
            Some(name) => Err(FormError::UnknownField(name.to_string())),
            None => Ok(()),
        }
    }

    pub fn rules_for(&self, name: &str) -> Option<ValidationRules> {
        let field = self.registry.find_field(name)?;
        Some(
            self.refinements
                .get(field.name)
                .copied()
                .unwrap_or_else(|| ValidationRules::from_descriptor(field)),
        )
    }

    /// Validate every registry field
    pub fn validate(&self, values: &FormValues) -> ValidationErrors {
        self.registry
            .fields()
            .filter_map(|field| self.check_field(field, values).err())
            .collect()
    }

    /// Validate a single field
    pub fn validate_field(
        &self,
        name: &str,
        values: &FormValues,
    ) -> Result<Option<ValidationError>, FormError> {
        let field = self
            .registry
            .find_field(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        Ok(self.check_field(field, values).err())
    }

    fn check_field(
        &self,
        field: &'static FieldDescriptor,
        values: &FormValues,
    ) -> Result<(), ValidationError> {
        let rules = self
            .refinements
            .get(field.name)
            .copied()
            .unwrap_or_else(|| ValidationRules::from_descriptor(field));
        match values.get(field.name) {
            Ok(value) => rules.check(field, value),
            Err(_) => rules.check(field, &FieldValue::Unset),
        }
    }
}
