//! Sale history management for the dashboard.
//!
//! New sales are prepended so the stored history stays newest first. Amounts
//! are never edited after creation; only the status can be switched.

use anyhow::Result;
use chrono::{DateTime, FixedOffset};
use log::{info, warn};
use shared::Sale;
use std::sync::Arc;

use super::models::sale::{next_sale_id, NewSale, SaleError};
use crate::storage::{Connection, SaleStorage};

#[derive(Clone)]
pub struct SaleService<C: Connection> {
    sale_repository: C::SaleRepository,
}

impl<C: Connection> SaleService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        let sale_repository = connection.create_sale_repository();
        Self { sale_repository }
    }

    /// Current history, newest first
    pub fn list_sales(&self) -> Result<Vec<Sale>> {
        self.sale_repository.load_sales()
    }

    /// Validate and record a sale made at `now`
    pub fn add_sale(&self, new_sale: NewSale, now: DateTime<FixedOffset>) -> Result<Sale> {
        let mut sales = self.sale_repository.load_sales()?;

        let now_millis = now.timestamp_millis().max(0) as u64;
        let id = next_sale_id(&sales, now_millis);
        let sale = new_sale.into_sale(id, now)?;

        info!(
            "Recording sale {} for {} ({} USD, {} R$)",
            sale.id, sale.client, sale.amount, sale.robux
        );
        sales.insert(0, sale.clone());
        self.sale_repository.save_sales(&sales)?;

        Ok(sale)
    }

    /// Remove a sale by id. Returns false if no sale had that id.
    pub fn delete_sale(&self, id: u64) -> Result<bool> {
        let mut sales = self.sale_repository.load_sales()?;
        let before = sales.len();
        sales.retain(|s| s.id != id);

        if sales.len() == before {
            warn!("Sale {} not found, nothing deleted", id);
            return Ok(false);
        }

        self.sale_repository.save_sales(&sales)?;
        info!("Deleted sale {}", id);
        Ok(true)
    }

    /// Switch a sale between completed and pending
    pub fn toggle_status(&self, id: u64) -> Result<Sale> {
        let mut sales = self.sale_repository.load_sales()?;
        let sale = sales
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(SaleError::NotFound(id))?;

        sale.status = sale.status.toggled();
        let updated = sale.clone();
        self.sale_repository.save_sales(&sales)?;

        info!("Sale {} is now {}", id, updated.status);
        Ok(updated)
    }

    /// Replace the whole history, e.g. with the demo data set
    pub fn replace_sales(&self, sales: &[Sale]) -> Result<()> {
        self.sale_repository.save_sales(sales)
    }
}
