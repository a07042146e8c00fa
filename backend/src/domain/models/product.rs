//! Domain model for the product catalog.
use shared::Product;

/// Input of the "new product" form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub robux: u64,
    pub cost: f64,
}

impl NewProduct {
    /// Check the form against the current catalog and build the product
    pub fn into_product(self, catalog: &[Product]) -> Result<Product, ProductError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ProductError::EmptyName);
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(ProductError::NonPositivePrice);
        }
        if catalog.iter().any(|p| p.name == name) {
            return Err(ProductError::DuplicateName(name.to_string()));
        }

        Ok(Product {
            name: name.to_string(),
            price: self.price,
            robux: self.robux,
            cost: if self.cost.is_finite() && self.cost > 0.0 {
                self.cost
            } else {
                0.0
            },
        })
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ProductError {
    #[error("Product name cannot be empty")]
    EmptyName,
    #[error("Price must be greater than zero")]
    NonPositivePrice,
    #[error("A product named {0} already exists")]
    DuplicateName(String),
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("The catalog must keep at least one product")]
    LastProduct,
}

/// Catalog of a fresh install
pub fn default_products() -> Vec<Product> {
    vec![Product {
        name: "Atomic".to_string(),
        price: 25.0,
        robux: 3000,
        cost: 0.0,
    }]
}
