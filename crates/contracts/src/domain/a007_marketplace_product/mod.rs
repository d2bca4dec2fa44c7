//! Marketplace product listing: the "Add Product" form

pub mod rules;
pub mod schema;
pub mod submission;

pub use rules::catalogue_validator;
pub use schema::CATALOGUE_SCHEMA;
pub use submission::{ListingId, ListingStatus, ListingSubmission};
