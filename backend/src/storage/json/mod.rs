//! # JSON Storage Module
//!
//! File-based storage with one JSON document per collection.
//!
//! ## File Structure
//!
//! ```text
//! data/
//! ├── sales.json       ← sale history, newest first
//! ├── products.json    ← product catalog
//! └── settings.json    ← display settings
//! ```
//!
//! A missing or unreadable document is replaced by the collection's default,
//! so a corrupt file never stops the dashboard from starting. An unreadable
//! document is renamed to `<name>.corrupt-<millis>` before the default is used.

pub mod connection;
pub mod product_repository;
pub mod sale_repository;
pub mod settings_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::JsonConnection;
pub use product_repository::ProductRepository;
pub use sale_repository::SaleRepository;
pub use settings_repository::SettingsRepository;
