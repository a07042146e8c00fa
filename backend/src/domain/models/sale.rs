//! Domain model for creating a sale.
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone};
use shared::{Product, Sale, SaleStatus};
use std::collections::HashSet;

/// Input of the "new sale" form
#[derive(Debug, Clone, PartialEq)]
pub struct NewSale {
    pub client: String,
    pub product: String,
    pub amount: f64,
    pub robux: u64,
    pub status: SaleStatus,
    pub notes: String,
}

impl NewSale {
    /// Form pre-filled with a product's price and Robux amount
    pub fn from_product(product: &Product, client: impl Into<String>) -> Self {
        Self {
            client: client.into(),
            product: product.name.clone(),
            amount: product.price,
            robux: product.robux,
            status: SaleStatus::Completed,
            notes: String::new(),
        }
    }

    /// Check the form and build the stored record
    pub fn into_sale(self, id: u64, date: DateTime<FixedOffset>) -> Result<Sale, SaleError> {
        let client = self.client.trim();
        if client.is_empty() {
            return Err(SaleError::EmptyClient);
        }
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(SaleError::NonPositiveAmount);
        }

        Ok(Sale {
            id,
            client: client.to_string(),
            product: self.product,
            amount: self.amount,
            robux: self.robux,
            date,
            status: self.status,
            notes: self.notes,
        })
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SaleError {
    #[error("Client name cannot be empty")]
    EmptyClient,
    #[error("Amount must be greater than zero")]
    NonPositiveAmount,
    #[error("Sale not found: {0}")]
    NotFound(u64),
}

/// Pick an id for a sale created at `now_millis`, unique among `existing`
pub fn next_sale_id(existing: &[Sale], now_millis: u64) -> u64 {
    match existing.iter().map(|s| s.id).max() {
        Some(max) if max >= now_millis => max
            .checked_add(1)
            .unwrap_or_else(|| lowest_free_id(existing)),
        _ => now_millis,
    }
}

/// Smallest id not taken by `existing`
fn lowest_free_id(existing: &[Sale]) -> u64 {
    let taken: HashSet<u64> = existing.iter().map(|s| s.id).collect();
    (0..=u64::MAX).find(|id| !taken.contains(id)).unwrap_or(u64::MAX)
}

const DEMO_SALES: &[(&str, &str, &str, SaleStatus)] = &[
    ("xDark_Mex", "2026-02-17T14:30:00", "Discord", SaleStatus::Completed),
    ("ShadowFx", "2026-02-17T09:15:00", "PayPal", SaleStatus::Completed),
    ("NightOwl99", "2026-02-18T18:45:00", "", SaleStatus::Completed),
    ("CyberVato", "2026-02-19T11:00:00", "Discord", SaleStatus::Completed),
    ("Glitch404", "2026-02-19T16:20:00", "CashApp", SaleStatus::Completed),
    ("PhantomZz", "2026-02-20T13:00:00", "Discord", SaleStatus::Completed),
    ("ViperX", "2026-02-20T20:10:00", "waiting payment", SaleStatus::Pending),
    ("NoScope_Kid", "2026-02-21T08:30:00", "", SaleStatus::Completed),
    ("DrkMatter", "2026-02-21T22:00:00", "Venmo", SaleStatus::Completed),
    ("ZeroDay", "2026-02-22T15:45:00", "Discord", SaleStatus::Completed),
    ("Specter_7", "2026-02-22T19:30:00", "owes next week", SaleStatus::Pending),
    ("BlkWolf", "2026-02-23T10:15:00", "PayPal", SaleStatus::Completed),
    ("R4venCl4w", "2026-02-23T14:00:00", "", SaleStatus::Completed),
];

/// Sample history used to seed an empty dashboard, in local time
pub fn demo_sales() -> Vec<Sale> {
    DEMO_SALES
        .iter()
        .enumerate()
        .filter_map(|(index, (client, when, notes, status))| {
            let naive = NaiveDateTime::parse_from_str(when, "%Y-%m-%dT%H:%M:%S").ok()?;
            let date = Local.from_local_datetime(&naive).single()?.fixed_offset();
            Some(Sale {
                id: index as u64 + 1,
                client: client.to_string(),
                product: "Atomic".to_string(),
                amount: 25.0,
                robux: 3000,
                date,
                status: *status,
                notes: notes.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::{paid, product};

    fn now() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2026-02-23T10:00:00+00:00").unwrap()
    }

    #[test]
    fn test_from_product_prefills_price() {
        let form = NewSale::from_product(&product("Nova", 40.0, 5000, 3.0), "ZeroDay");
        assert_eq!(form.amount, 40.0);
        assert_eq!(form.robux, 5000);
        assert_eq!(form.product, "Nova");
        assert_eq!(form.status, SaleStatus::Completed);
    }

    #[test]
    fn test_into_sale_trims_client() {
        let mut form = NewSale::from_product(&product("Atomic", 25.0, 3000, 0.0), "  BlkWolf ");
        form.notes = "PayPal".to_string();

        let sale = form.into_sale(7, now()).unwrap();

        assert_eq!(sale.client, "BlkWolf");
        assert_eq!(sale.id, 7);
        assert_eq!(sale.notes, "PayPal");
        assert_eq!(sale.date, now());
    }

    #[test]
    fn test_into_sale_validation() {
        let atomic = product("Atomic", 25.0, 3000, 0.0);
        assert_eq!(
            NewSale::from_product(&atomic, "   ").into_sale(1, now()),
            Err(SaleError::EmptyClient)
        );

        let mut free = NewSale::from_product(&atomic, "a");
        free.amount = 0.0;
        assert_eq!(free.into_sale(1, now()), Err(SaleError::NonPositiveAmount));
    }

    #[test]
    fn test_next_sale_id_avoids_collisions() {
        let existing = vec![paid(1000, "a", 1.0, "2026-02-23T10:00:00")];
        assert_eq!(next_sale_id(&[], 1000), 1000);
        assert_eq!(next_sale_id(&existing, 1000), 1001);
        assert_eq!(next_sale_id(&existing, 2000), 2000);
    }

    #[test]
    fn test_next_sale_id_at_the_top_of_the_range() {
        let existing = vec![
            paid(u64::MAX, "a", 1.0, "2026-02-23T10:00:00"),
            paid(0, "b", 1.0, "2026-02-23T10:00:00"),
        ];

        let id = next_sale_id(&existing, 1000);

        assert_eq!(id, 1);
        assert!(existing.iter().all(|s| s.id != id));
    }

    #[test]
    fn test_demo_sales() {
        let sales = demo_sales();
        assert!(sales.len() <= DEMO_SALES.len());
        assert!(sales.iter().all(|s| s.amount == 25.0 && s.product == "Atomic"));
        assert_eq!(sales.iter().filter(|s| !s.is_completed()).count(), 2);
    }
}
