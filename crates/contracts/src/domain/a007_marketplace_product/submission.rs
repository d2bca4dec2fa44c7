use crate::shared::metadata::{FieldValue, FormValidator, FormValues, ValidationErrors};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Identifier of a submitted or drafted listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingId(pub Uuid);

impl ListingId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    /// Saved without validation
    Draft,
    /// Passed whole-form validation
    Submitted,
}

// ============================================================================
// Record
// ============================================================================

/// Record handed to the submit boundary.
///
/// `values` holds every schema field: text, `""` for unset, `false` for not
/// applicable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingSubmission {
    pub id: ListingId,
    pub status: ListingStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    pub values: BTreeMap<String, FieldValue>,
}

impl ListingSubmission {
    /// Build a submitted record; refused while any validation error exists
    pub fn submit(
        values: &FormValues,
        validator: &FormValidator,
    ) -> Result<Self, ValidationErrors> {
        let errors = validator.validate(values);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Self::build(values, ListingStatus::Submitted))
    }

    /// Snapshot the form as a draft, whatever its validation state
    pub fn draft(values: &FormValues) -> Self {
        Self::build(values, ListingStatus::Draft)
    }

    fn build(values: &FormValues, status: ListingStatus) -> Self {
        Self {
            id: ListingId::new_v4(),
            status,
            created_at: Utc::now(),
            values: values.to_map(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a007_marketplace_product::rules::catalogue_validator;
    use crate::domain::a007_marketplace_product::schema::CATALOGUE_SCHEMA;

    fn filled_values() -> FormValues {
        let mut values = FormValues::new(CATALOGUE_SCHEMA);
        for field in CATALOGUE_SCHEMA.fields().filter(|field| field.required) {
            values.set_text(field.name, "Adidas").unwrap();
        }
        values
    }

    #[test]
    fn test_submit_refused_with_errors() {
        let values = FormValues::new(CATALOGUE_SCHEMA);
        let errors = ListingSubmission::submit(&values, &catalogue_validator()).unwrap_err();
        assert!(errors.contains("itemName"));
    }

    #[test]
    fn test_submit_carries_every_field() {
        let mut values = filled_values();
        values.set_not_applicable("brandName", true).unwrap();

        let record = ListingSubmission::submit(&values, &catalogue_validator()).unwrap();
        assert_eq!(record.status, ListingStatus::Submitted);
        assert_eq!(record.values.len(), CATALOGUE_SCHEMA.fields().count());
        assert_eq!(record.values["brandName"], FieldValue::NotApplicable);
        assert_eq!(record.values["externalProductId"], FieldValue::Unset);
        assert_eq!(record.values["itemName"], FieldValue::Present("Adidas".to_string()));
    }

    #[test]
    fn test_record_json_shape() {
        let mut values = filled_values();
        values.set_not_applicable("externalProductId", true).unwrap();
        let record = ListingSubmission::submit(&values, &catalogue_validator()).unwrap();

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["status"], "submitted");
        assert_eq!(json["values"]["externalProductId"], serde_json::Value::Bool(false));
        assert_eq!(json["values"]["style"], "");
        assert_eq!(json["values"]["color"], "Adidas");
        assert!(json["createdAt"].is_string());

        let parsed: ListingSubmission = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_draft_skips_validation() {
        let values = FormValues::new(CATALOGUE_SCHEMA);
        let draft = ListingSubmission::draft(&values);
        assert_eq!(draft.status, ListingStatus::Draft);
        assert!(draft.values.values().all(FieldValue::is_unset));
    }

    #[test]
    fn test_listing_ids_are_fresh() {
        let values = FormValues::new(CATALOGUE_SCHEMA);
        let first = ListingSubmission::draft(&values);
        let second = ListingSubmission::draft(&values);
        assert_ne!(first.id, second.id);
        assert_eq!(first.id.to_string(), first.id.0.to_string());
    }
}
