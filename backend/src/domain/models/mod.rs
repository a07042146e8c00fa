//! Domain models: inputs for creating records and the validation errors they raise.

pub mod product;
pub mod sale;
pub mod settings;
