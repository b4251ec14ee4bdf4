//! Property entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A managed building or compound.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Property {
    /// Unique property identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Area/district within the city.
    pub area: Option<String>,
    /// Property kind: `"building"`, `"villa"`, `"complex"`, etc.
    pub property_type: String,
    /// Number of rentable units.
    pub total_units: i32,
    /// Free-form notes.
    pub notes: Option<String>,
    /// When the property was registered.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}
