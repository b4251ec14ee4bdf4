//! WhatsApp reminder log entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A log row recording that a WhatsApp payment reminder was prepared
/// for an invoice.
///
/// Presence of a row for an invoice makes that invoice ineligible for
/// further reminders; the log never verifies actual delivery.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WhatsAppReminder {
    /// Unique log identifier.
    pub id: Uuid,
    /// The reminded invoice.
    pub invoice_id: Uuid,
    /// The reminded tenant.
    pub tenant_id: Uuid,
    /// Phone number the link was built for, as stored on the tenant.
    pub phone: String,
    /// The full reminder message body.
    pub message: String,
    /// Delivery status (see [`super::ReminderStatus`]).
    pub status: String,
    /// When the operator opened the link.
    pub sent_at: Option<DateTime<Utc>>,
    /// When the log row was created.
    pub created_at: DateTime<Utc>,
}
