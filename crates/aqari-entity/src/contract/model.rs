//! Lease contract entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A lease agreement between a tenant and a property.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Contract {
    /// Unique contract identifier.
    pub id: Uuid,
    /// Human-readable contract number, e.g. `"CON-2024-0012"`.
    pub contract_number: String,
    /// The leasing tenant.
    pub tenant_id: Uuid,
    /// The leased property.
    pub property_id: Uuid,
    /// The leased unit, when tracked at unit granularity.
    pub unit_id: Option<Uuid>,
    /// Lease start date.
    pub start_date: NaiveDate,
    /// Lease end date.
    pub end_date: NaiveDate,
    /// Monthly rent in KWD.
    pub rent_amount: f64,
    /// Lifecycle status (see [`super::ContractStatus`]). Only `active`
    /// contracts are evaluated for expiry alerts.
    pub status: String,
    /// When the contract was registered.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}
