//! Test utilities for the JSON storage
//!
//! Provides RAII-based cleanup so test data is removed even if a test panics.

use anyhow::Result;
use tempfile::TempDir;

use super::connection::JsonConnection;
use super::{ProductRepository, SaleRepository, SettingsRepository};

/// Temporary data directory plus a connection to it, removed on drop
pub struct TestEnvironment {
    pub connection: JsonConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: std::path::PathBuf,
    _temp_dir: TempDir, // Keep alive to prevent cleanup
}

/// Repositories sharing one test environment
pub struct TestHelper {
    pub env: TestEnvironment,
    pub sale_repo: SaleRepository,
    pub product_repo: ProductRepository,
    pub settings_repo: SettingsRepository,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = JsonConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }
}

impl TestHelper {
    pub fn new() -> Result<Self> {
        let env = TestEnvironment::new()?;
        let sale_repo = SaleRepository::new(env.connection.clone());
        let product_repo = ProductRepository::new(env.connection.clone());
        let settings_repo = SettingsRepository::new(env.connection.clone());

        Ok(Self {
            env,
            sale_repo,
            product_repo,
            settings_repo,
        })
    }
}
