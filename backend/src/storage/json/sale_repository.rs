//! # JSON Sale Repository
//!
//! Keeps the whole sales history in `sales.json`, newest first.

use anyhow::Result;
use log::info;
use shared::Sale;

use super::connection::JsonConnection;
use crate::storage::traits::SaleStorage;

const SALES_FILE: &str = "sales.json";

#[derive(Debug, Clone)]
pub struct SaleRepository {
    connection: JsonConnection,
}

impl SaleRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

impl SaleStorage for SaleRepository {
    fn load_sales(&self) -> Result<Vec<Sale>> {
        self.connection.read_document(SALES_FILE, Vec::new)
    }

    fn save_sales(&self, sales: &[Sale]) -> Result<()> {
        self.connection.write_document(SALES_FILE, sales)?;
        info!("Stored {} sales", sales.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::{paid, pending};
    use crate::storage::json::test_utils::TestHelper;
    use std::fs;

    #[test]
    fn test_empty_store_has_no_sales() {
        let helper = TestHelper::new().unwrap();
        assert!(helper.sale_repo.load_sales().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load_keep_order() {
        let helper = TestHelper::new().unwrap();
        let mut second = pending(2, "ViperX", 25.0, "2026-02-20T20:10:00");
        second.notes = "waiting \"payment\"".to_string();
        let sales = vec![second, paid(1, "xDark_Mex", 25.0, "2026-02-17T14:30:00")];

        helper.sale_repo.save_sales(&sales).unwrap();

        assert_eq!(helper.sale_repo.load_sales().unwrap(), sales);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_empty_history() {
        let helper = TestHelper::new().unwrap();
        fs::write(helper.env.base_path.join(SALES_FILE), "[{\"id\": \"oops\"}]").unwrap();

        assert!(helper.sale_repo.load_sales().unwrap().is_empty());
    }

    #[test]
    fn test_reads_records_without_optional_fields() {
        let helper = TestHelper::new().unwrap();
        fs::write(
            helper.env.base_path.join(SALES_FILE),
            concat!(
                r#"[{"id":1,"client":"a","product":"Atomic","amount":25,"#,
                r#""date":"2026-02-17T14:30:00Z","status":"pending"}]"#,
            ),
        )
        .unwrap();

        let sales = helper.sale_repo.load_sales().unwrap();
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].robux, 0);
        assert_eq!(sales[0].notes, "");
    }
}
