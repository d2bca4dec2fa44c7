//! Field-specific validation on top of the schema's required flags

use super::schema::CATALOGUE_SCHEMA;
use crate::shared::metadata::FormValidator;

/// Minimum length of the identity text fields
pub const IDENTITY_MIN_LENGTH: usize = 4;
/// Exact length of an external product ID
pub const EXTERNAL_PRODUCT_ID_LENGTH: usize = 8;

/// Validator for the "Add Product" form
pub fn catalogue_validator() -> FormValidator {
    FormValidator::new(CATALOGUE_SCHEMA)
        .refine("itemName", |rules| {
            rules
                .min_length(IDENTITY_MIN_LENGTH)
                .max_length(200)
                .required_message("Item name is required")
                .too_short_message("Item name must be at least 4 characters.")
        })
        .refine("productType", |rules| {
            rules
                .min_length(IDENTITY_MIN_LENGTH)
                .required_message("Product type is required")
                .too_short_message("Product type must be at least 4 characters.")
        })
        .refine("recommendedBrowserNode", |rules| {
            rules
                .min_length(IDENTITY_MIN_LENGTH)
                .required_message("Recommended browser node is required")
                .too_short_message("Recommended browser node must be at least 4 characters.")
        })
        .refine("brandName", |rules| {
            rules
                .min_length(IDENTITY_MIN_LENGTH)
                .required_message("Brand name is required")
                .too_short_message("Brand name must be at least 4 characters.")
        })
        .refine("externalProductId", |rules| {
            rules
                .exact_length(EXTERNAL_PRODUCT_ID_LENGTH)
                .invalid_length_message("External product ID must be exactly 8 characters")
        })
        .refine("shortDescription", |rules| {
            rules
                .max_length(2000)
                .required_message("Short description is required")
        })
        .refine("bulletPoints", |rules| rules.max_length(1000))
}
