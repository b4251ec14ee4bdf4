//! Rent invoice entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A rent invoice issued to a tenant.
///
/// `status` is set by explicit user action (marking paid/overdue in the
/// dashboard), never computed by the scan logic.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Invoice {
    /// Unique invoice identifier.
    pub id: Uuid,
    /// Human-readable invoice number, e.g. `"INV-2024-0001"`.
    pub invoice_number: String,
    /// The billed tenant.
    pub tenant_id: Uuid,
    /// The property the invoice relates to.
    pub property_id: Uuid,
    /// Total amount in KWD.
    pub amount: f64,
    /// Payment status (see [`super::InvoiceStatus`]).
    pub status: String,
    /// Date the invoice was issued.
    pub issue_date: NaiveDate,
    /// Date payment is due.
    pub due_date: NaiveDate,
    /// When the invoice row was created.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}
