use anyhow::Result;
use chrono::Utc;
use log::{debug, info, warn};
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{ProductRepository, SaleRepository, SettingsRepository};
use crate::storage::traits::Connection;

/// JsonConnection owns the data directory and reads/writes its documents
#[derive(Debug, Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a new connection, creating the base directory if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("Created data directory: {:?}", base_path);
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub fn document_path(&self, file_name: &str) -> PathBuf {
        self.base_directory.join(file_name)
    }

    /// Read a document, falling back to `default` when it is missing or malformed.
    ///
    /// A malformed document is renamed to `<name>.corrupt-<millis>` first.
    /// Errors other than "not found" while reading the file are returned.
    pub fn read_document<T, F>(&self, file_name: &str, default: F) -> Result<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        let path = self.document_path(file_name);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No document at {:?}, using defaults", path);
                return Ok(default());
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&content) {
            Ok(value) => {
                debug!("Loaded {:?}", path);
                Ok(value)
            }
            Err(e) => {
                let backup = self.set_aside(&path)?;
                warn!(
                    "Could not parse {:?} ({}), moved it to {:?} and using defaults",
                    path, e, backup
                );
                Ok(default())
            }
        }
    }

    /// Rename an unreadable document so the next save cannot overwrite it
    fn set_aside(&self, path: &Path) -> Result<PathBuf> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let millis = Utc::now().timestamp_millis();

        let mut backup = path.with_file_name(format!("{}.corrupt-{}", file_name, millis));
        let mut attempt = 1;
        while backup.exists() {
            backup = path.with_file_name(format!("{}.corrupt-{}-{}", file_name, millis, attempt));
            attempt += 1;
        }

        fs::rename(path, &backup)?;
        Ok(backup)
    }

    /// Write a document atomically: write to a temp file, then rename
    pub fn write_document<T: Serialize + ?Sized>(&self, file_name: &str, value: &T) -> Result<()> {
        let path = self.document_path(file_name);
        let json = serde_json::to_string_pretty(value)?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &path)?;

        debug!("Saved {:?}", path);
        Ok(())
    }
}

impl Connection for JsonConnection {
    type SaleRepository = SaleRepository;
    type ProductRepository = ProductRepository;
    type SettingsRepository = SettingsRepository;

    fn create_sale_repository(&self) -> Self::SaleRepository {
        SaleRepository::new(self.clone())
    }

    fn create_product_repository(&self) -> Self::ProductRepository {
        ProductRepository::new(self.clone())
    }

    fn create_settings_repository(&self) -> Self::SettingsRepository {
        SettingsRepository::new(self.clone())
    }
}
