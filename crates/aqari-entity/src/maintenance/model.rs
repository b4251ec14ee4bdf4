//! Maintenance request entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A repair or maintenance job reported against a property.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaintenanceRequest {
    /// Unique request identifier.
    pub id: Uuid,
    /// Short summary, e.g. `"AC not cooling"`.
    pub title: String,
    /// Longer description of the problem.
    pub description: Option<String>,
    /// The affected property.
    pub property_id: Uuid,
    /// The affected unit, when known.
    pub unit_id: Option<Uuid>,
    /// The reporting tenant, when reported by a tenant.
    pub tenant_id: Option<Uuid>,
    /// Priority: `"low"`, `"medium"`, `"high"`, `"urgent"`.
    pub priority: String,
    /// Workflow status (see [`super::MaintenanceStatus`]).
    pub status: String,
    /// Name of the assigned contractor or handyman.
    pub assigned_to: Option<String>,
    /// When the request was filed.
    pub created_at: DateTime<Utc>,
    /// Last status change. The completion alert window is measured
    /// against this timestamp.
    pub updated_at: DateTime<Utc>,
}
