//! Tenant entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A person renting one or more units.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tenant {
    /// Unique tenant identifier.
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact phone number. Required non-empty for WhatsApp reminder
    /// eligibility; stored as entered, normalization happens at link
    /// building time.
    pub phone: String,
    /// Contact email.
    pub email: Option<String>,
    /// Kuwaiti civil ID number.
    pub civil_id: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// When the tenant was registered.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

impl Tenant {
    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether the tenant has a usable phone number on file.
    pub fn has_phone(&self) -> bool {
        !self.phone.trim().is_empty()
    }
}
