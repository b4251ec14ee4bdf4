//! Rental unit entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single rentable unit within a property.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Unit {
    /// Unique unit identifier.
    pub id: Uuid,
    /// Owning property.
    pub property_id: Uuid,
    /// Unit number as displayed on the door.
    pub unit_number: String,
    /// Floor number.
    pub floor: Option<i32>,
    /// Number of bedrooms.
    pub bedrooms: Option<i32>,
    /// Monthly rent in KWD.
    pub rent_amount: f64,
    /// Occupancy status (see [`super::UnitStatus`]).
    pub status: String,
    /// When the unit was registered.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}
