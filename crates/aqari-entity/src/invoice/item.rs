//! Invoice line item entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single line on an invoice (rent, utilities, late fee, ...).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InvoiceItem {
    /// Unique item identifier.
    pub id: Uuid,
    /// Owning invoice.
    pub invoice_id: Uuid,
    /// Line description.
    pub description: String,
    /// Line amount in KWD.
    pub amount: f64,
}
