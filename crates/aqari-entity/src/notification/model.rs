//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::NotificationKind;

/// A generated alert row surfacing a business condition to the operator.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// Notification kind (see [`NotificationKind`]).
    pub kind: String,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub message: String,
    /// The tenant the alert concerns, when applicable.
    pub tenant_id: Option<Uuid>,
    /// The property the alert concerns, when applicable.
    pub property_id: Option<Uuid>,
    /// Deterministic dedup key tying the alert to its source event,
    /// e.g. `"overdue-<invoice id>"`. No two rows may share one.
    pub related_id: String,
    /// Whether the operator has read this notification.
    pub is_read: bool,
    /// When the notification was generated.
    pub created_at: DateTime<Utc>,
}

/// A candidate alert produced by the scan, not yet persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewNotification {
    /// Notification kind.
    pub kind: NotificationKind,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub message: String,
    /// The tenant the alert concerns, when applicable.
    pub tenant_id: Option<Uuid>,
    /// The property the alert concerns, when applicable.
    pub property_id: Option<Uuid>,
    /// Deterministic dedup key.
    pub related_id: String,
}
