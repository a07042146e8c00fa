//! # Sales Dashboard Backend
//!
//! Local record store and derived statistics for a sales-tracking dashboard.
//! Services read and write JSON documents through the [`storage`] traits; the
//! statistics in [`domain`] are pure functions over a snapshot of the sales.

use anyhow::Result;
use log::info;
use std::path::Path;
use std::sync::Arc;

pub mod config;
pub mod domain;
pub mod storage;

pub use storage::JsonConnection;

/// Every service wired to one data directory
pub struct Backend {
    pub sale_service: domain::SaleService<JsonConnection>,
    pub product_service: domain::ProductService<JsonConnection>,
    pub settings_service: domain::SettingsService<JsonConnection>,
    pub dashboard_service: domain::DashboardService,
    pub export_service: domain::ExportService,
}

impl Backend {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let connection = Arc::new(JsonConnection::new(data_dir)?);
        info!("Backend ready at {}", connection.base_directory().display());

        Ok(Backend {
            sale_service: domain::SaleService::new(connection.clone()),
            product_service: domain::ProductService::new(connection.clone()),
            settings_service: domain::SettingsService::new(connection),
            dashboard_service: domain::DashboardService::new(),
            export_service: domain::ExportService::new(),
        })
    }
}
