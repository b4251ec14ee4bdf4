//! Key-value application settings repository.

use sqlx::PgPool;

use aqari_core::error::{AppError, ErrorKind};
use aqari_core::result::AppResult;
use aqari_entity::settings::AppSetting;

/// Repository for JSON settings objects keyed by name.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    pool: PgPool,
}

impl SettingsRepository {
    /// Create a new settings repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch a settings object by key.
    pub async fn get(&self, key: &str) -> AppResult<Option<AppSetting>> {
        sqlx::query_as::<_, AppSetting>("SELECT * FROM app_settings WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to get setting", e))
    }

    /// Insert or replace a settings object.
    pub async fn upsert(&self, key: &str, value: &serde_json::Value) -> AppResult<AppSetting> {
        sqlx::query_as::<_, AppSetting>(
            "INSERT INTO app_settings (key, value, updated_at) VALUES ($1, $2, NOW()) \
             ON CONFLICT (key) DO UPDATE SET value = $2, updated_at = NOW() RETURNING *",
        )
        .bind(key)
        .bind(value)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upsert setting", e))
    }
}
