mod field;
mod view;
mod view_model;

pub use field::field_input_id;
pub use view::CatalogueAddPage;
pub use view_model::CatalogueFormViewModel;
