//! # Storage Module
//!
//! Persistence for the record store. The domain layer only sees the traits in
//! [`traits`]; [`json`] keeps each collection in its own JSON file.

pub mod json;
pub mod traits;

pub use json::JsonConnection;
pub use traits::*;
