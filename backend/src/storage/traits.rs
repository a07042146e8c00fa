//! # Storage Traits
//!
//! Storage abstraction traits that let the services work with any backend.
//! Each collection is loaded and saved whole, mirroring a key-value store of
//! JSON blobs.

use anyhow::Result;
use shared::{Product, Sale, Settings};

/// Storage of the sales history, newest first
pub trait SaleStorage: Send + Sync {
    /// Load every stored sale, or an empty history if nothing usable is stored
    fn load_sales(&self) -> Result<Vec<Sale>>;

    /// Replace the stored history
    fn save_sales(&self, sales: &[Sale]) -> Result<()>;
}

/// Storage of the product catalog
pub trait ProductStorage: Send + Sync {
    /// Load the catalog, or the default catalog if nothing usable is stored
    fn load_products(&self) -> Result<Vec<Product>>;

    /// Replace the stored catalog
    fn save_products(&self, products: &[Product]) -> Result<()>;
}

/// Storage of the display settings
pub trait SettingsStorage: Send + Sync {
    fn load_settings(&self) -> Result<Settings>;

    fn save_settings(&self, settings: &Settings) -> Result<()>;
}

/// Trait defining the interface for storage connections
///
/// A connection hands out repositories for each collection, so services can
/// be built from any backend without knowing its details.
pub trait Connection: Send + Sync + Clone {
    type SaleRepository: SaleStorage + Clone;
    type ProductRepository: ProductStorage + Clone;
    type SettingsRepository: SettingsStorage + Clone;

    fn create_sale_repository(&self) -> Self::SaleRepository;

    fn create_product_repository(&self) -> Self::ProductRepository;

    fn create_settings_repository(&self) -> Self::SettingsRepository;
}
