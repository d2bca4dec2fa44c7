//! Metadata types for schema-driven forms
//!
//! A form is described once as compile-time constants (tabs → groups →
//! fields) and everything else is derived from that description: the value
//! mapping, validation rules, tab error indicators and the render plan.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::shared::metadata::{FormValidator, FormValues, tab_has_error};
//!
//! let mut values = FormValues::new(REGISTRY);
//! values.set_text("itemName", "Ad")?;
//!
//! let errors = validator.validate(&values);
//! for (key, label) in REGISTRY.list_tabs() {
//!     println!("{label}: {}", tab_has_error(&REGISTRY, key, &errors));
//! }
//! ```

mod error;
mod field_value;
mod form_values;
mod layout;
mod registry;
mod tab_errors;
mod types;
mod validation;

pub use error::FormError;
pub use field_value::FieldValue;
pub use form_values::FormValues;
pub use layout::{AttributeFilter, FieldLayout, FormLayout, GroupLayout, TabLayout};
pub use registry::FormSchemaRegistry;
pub use tab_errors::{first_tab_with_error, tab_has_error, tabs_with_errors};
pub use types::{FieldDescriptor, FieldGroup, TabDefinition};
pub use validation::{
    FormValidator, RuleMessages, ValidationError, ValidationErrorKind, ValidationErrors,
    ValidationRules,
};
