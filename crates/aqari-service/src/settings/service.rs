//! Notification display settings persistence.

use std::sync::Arc;

use tracing::info;

use aqari_core::error::{AppError, ErrorKind};
use aqari_core::result::AppResult;
use aqari_database::repositories::settings::SettingsRepository;
use aqari_entity::settings::NotificationDisplaySettings;

/// Settings key under which the notification display object is stored.
const NOTIFICATION_DISPLAY_KEY: &str = "notification_display";

/// Reads and writes the notification display settings object.
#[derive(Debug, Clone)]
pub struct SettingsService {
    settings_repo: Arc<SettingsRepository>,
}

impl SettingsService {
    /// Creates a new settings service.
    pub fn new(settings_repo: Arc<SettingsRepository>) -> Self {
        Self { settings_repo }
    }

    /// Load the display settings, falling back to the defaults when no
    /// row has been saved yet.
    pub async fn notification_display(&self) -> AppResult<NotificationDisplaySettings> {
        match self.settings_repo.get(NOTIFICATION_DISPLAY_KEY).await? {
            Some(row) => serde_json::from_value(row.value).map_err(|e| {
                AppError::with_source(
                    ErrorKind::Serialization,
                    "Stored notification display settings are malformed",
                    e,
                )
            }),
            None => Ok(NotificationDisplaySettings::default()),
        }
    }

    /// Replace the display settings object.
    pub async fn update_notification_display(
        &self,
        settings: &NotificationDisplaySettings,
    ) -> AppResult<NotificationDisplaySettings> {
        let value = serde_json::to_value(settings)?;
        self.settings_repo
            .upsert(NOTIFICATION_DISPLAY_KEY, &value)
            .await?;
        info!("Notification display settings updated");
        Ok(settings.clone())
    }
}
