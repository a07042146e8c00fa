//! Display settings management.

use anyhow::Result;
use log::info;
use shared::Settings;
use std::sync::Arc;

use super::models::settings::parse_color;
use crate::storage::{Connection, SettingsStorage};

#[derive(Clone)]
pub struct SettingsService<C: Connection> {
    settings_repository: C::SettingsRepository,
}

impl<C: Connection> SettingsService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        let settings_repository = connection.create_settings_repository();
        Self { settings_repository }
    }

    pub fn get_settings(&self) -> Result<Settings> {
        self.settings_repository.load_settings()
    }

    pub fn set_accent(&self, color: &str) -> Result<Settings> {
        let accent = parse_color(color)?;
        let mut settings = self.settings_repository.load_settings()?;
        settings.accent = accent;
        self.settings_repository.save_settings(&settings)?;
        info!("Accent color set to {}", settings.accent);
        Ok(settings)
    }

    pub fn set_robux_color(&self, color: &str) -> Result<Settings> {
        let robux_color = parse_color(color)?;
        let mut settings = self.settings_repository.load_settings()?;
        settings.robux_color = robux_color;
        self.settings_repository.save_settings(&settings)?;
        info!("Robux color set to {}", settings.robux_color);
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::settings::SettingsError;
    use crate::storage::json::test_utils::TestEnvironment;
    use crate::storage::JsonConnection;

    fn service_for(env: &TestEnvironment) -> SettingsService<JsonConnection> {
        SettingsService::new(Arc::new(env.connection.clone()))
    }

    #[test]
    fn test_colors_persist() {
        let env = TestEnvironment::new().unwrap();
        let service = service_for(&env);

        service.set_accent("#D4B8FF").unwrap();
        service.set_robux_color("#00ff00").unwrap();

        let reloaded = service_for(&env);
        let settings = reloaded.get_settings().unwrap();
        assert_eq!(settings.accent, "#d4b8ff");
        assert_eq!(settings.robux_color, "#00ff00");
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let env = TestEnvironment::new().unwrap();
        let service = service_for(&env);

        let err = service.set_accent("red").unwrap_err();

        assert_eq!(
            err.downcast_ref::<SettingsError>(),
            Some(&SettingsError::InvalidColor("red".to_string()))
        );
        assert_eq!(service.get_settings().unwrap(), Settings::default());
    }
}
