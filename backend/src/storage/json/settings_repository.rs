//! # JSON Settings Repository
//!
//! Keeps the display settings in `settings.json`.

use anyhow::Result;
use shared::Settings;

use super::connection::JsonConnection;
use crate::storage::traits::SettingsStorage;

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone)]
pub struct SettingsRepository {
    connection: JsonConnection,
}

impl SettingsRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

impl SettingsStorage for SettingsRepository {
    fn load_settings(&self) -> Result<Settings> {
        self.connection.read_document(SETTINGS_FILE, Settings::default)
    }

    fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.connection.write_document(SETTINGS_FILE, settings)
    }
}
