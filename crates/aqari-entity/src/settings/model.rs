//! Application settings models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single key-value settings row. Values are stored as JSON so each
/// logical settings object lives under one key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AppSetting {
    /// Settings key, e.g. `"notification_display"`.
    pub key: String,
    /// JSON value.
    pub value: serde_json::Value,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

/// Notification display preferences for the dashboard.
///
/// An explicit object handed to the rendering layer, persisted under the
/// `"notification_display"` settings key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationDisplaySettings {
    /// Show payment alerts in the bell menu.
    #[serde(default = "default_true")]
    pub show_payment_alerts: bool,
    /// Show lease expiry alerts in the bell menu.
    #[serde(default = "default_true")]
    pub show_lease_alerts: bool,
    /// Show maintenance alerts in the bell menu.
    #[serde(default = "default_true")]
    pub show_maintenance_alerts: bool,
    /// How many notifications the bell menu lists.
    #[serde(default = "default_menu_size")]
    pub menu_size: u32,
}

impl Default for NotificationDisplaySettings {
    fn default() -> Self {
        Self {
            show_payment_alerts: true,
            show_lease_alerts: true,
            show_maintenance_alerts: true,
            menu_size: default_menu_size(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_menu_size() -> u32 {
    10
}
