//! Product catalog management.
//!
//! The catalog always keeps at least one product. Removing a product leaves
//! the sales that reference it untouched.

use anyhow::Result;
use log::info;
use shared::Product;
use std::sync::Arc;

use super::models::product::{NewProduct, ProductError};
use super::models::sale::NewSale;
use crate::storage::{Connection, ProductStorage};

#[derive(Clone)]
pub struct ProductService<C: Connection> {
    product_repository: C::ProductRepository,
}

impl<C: Connection> ProductService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        let product_repository = connection.create_product_repository();
        Self { product_repository }
    }

    pub fn list_products(&self) -> Result<Vec<Product>> {
        self.product_repository.load_products()
    }

    pub fn find_product(&self, name: &str) -> Result<Option<Product>> {
        Ok(self.list_products()?.into_iter().find(|p| p.name == name))
    }

    /// Validate and append a product to the catalog
    pub fn add_product(&self, new_product: NewProduct) -> Result<Product> {
        let mut products = self.product_repository.load_products()?;
        let product = new_product.into_product(&products)?;

        products.push(product.clone());
        self.product_repository.save_products(&products)?;

        info!(
            "Added product {} ({} USD, {} R$, cost {})",
            product.name, product.price, product.robux, product.cost
        );
        Ok(product)
    }

    /// Remove a product by name, refusing to empty the catalog
    pub fn remove_product(&self, name: &str) -> Result<()> {
        let mut products = self.product_repository.load_products()?;

        if !products.iter().any(|p| p.name == name) {
            return Err(ProductError::NotFound(name.to_string()).into());
        }
        if products.len() <= 1 {
            return Err(ProductError::LastProduct.into());
        }

        products.retain(|p| p.name != name);
        self.product_repository.save_products(&products)?;

        info!("Removed product {}", name);
        Ok(())
    }

    /// New-sale form pre-filled from a product, None if the product is unknown
    pub fn sale_template(&self, name: &str, client: &str) -> Result<Option<NewSale>> {
        Ok(self
            .find_product(name)?
            .map(|product| NewSale::from_product(&product, client)))
    }
}
