//! # JSON Product Repository
//!
//! Keeps the product catalog in `products.json`.

use anyhow::Result;
use log::{info, warn};
use shared::Product;

use super::connection::JsonConnection;
use crate::domain::models::product::default_products;
use crate::storage::traits::ProductStorage;

const PRODUCTS_FILE: &str = "products.json";

#[derive(Debug, Clone)]
pub struct ProductRepository {
    connection: JsonConnection,
}

impl ProductRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

impl ProductStorage for ProductRepository {
    fn load_products(&self) -> Result<Vec<Product>> {
        let products: Vec<Product> = self
            .connection
            .read_document(PRODUCTS_FILE, default_products)?;
        if products.is_empty() {
            // an empty catalog would leave the sale form without a product
            warn!("Stored catalog is empty, using the default catalog");
            return Ok(default_products());
        }
        Ok(products)
    }

    fn save_products(&self, products: &[Product]) -> Result<()> {
        self.connection.write_document(PRODUCTS_FILE, products)?;
        info!("Stored {} products", products.len());
        Ok(())
    }
}
