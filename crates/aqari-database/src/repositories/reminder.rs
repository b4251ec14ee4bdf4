//! WhatsApp reminder log repository implementation.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use aqari_core::error::{AppError, ErrorKind};
use aqari_core::result::AppResult;
use aqari_core::types::pagination::{PageRequest, PageResponse};
use aqari_entity::reminder::WhatsAppReminder;

/// Repository for the WhatsApp reminder log.
#[derive(Debug, Clone)]
pub struct WhatsAppReminderRepository {
    pool: PgPool,
}

impl WhatsAppReminderRepository {
    /// Create a new reminder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List reminder log rows, newest first.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<WhatsAppReminder>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM whatsapp_reminders")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count reminders", e)
            })?;

        let rows = sqlx::query_as::<_, WhatsAppReminder>(
            "SELECT * FROM whatsapp_reminders ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list reminders", e))?;

        Ok(PageResponse::new(
            rows,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Load the set of invoice ids that already have a reminder log row.
    ///
    /// Presence of any row marks the invoice "already reminded" for
    /// eligibility purposes.
    pub async fn reminded_invoice_ids(&self) -> AppResult<HashSet<Uuid>> {
        let ids: Vec<Uuid> = sqlx::query_scalar("SELECT invoice_id FROM whatsapp_reminders")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to load reminded invoices", e)
            })?;
        Ok(ids.into_iter().collect())
    }

    /// Record a reminder.
    pub async fn create(
        &self,
        invoice_id: Uuid,
        tenant_id: Uuid,
        phone: &str,
        message: &str,
        status: &str,
        sent_at: Option<DateTime<Utc>>,
    ) -> AppResult<WhatsAppReminder> {
        sqlx::query_as::<_, WhatsAppReminder>(
            "INSERT INTO whatsapp_reminders (invoice_id, tenant_id, phone, message, status, sent_at) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(invoice_id)
        .bind(tenant_id)
        .bind(phone)
        .bind(message)
        .bind(status)
        .bind(sent_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create reminder log", e))
    }

    /// Update a reminder's delivery status.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: &str,
        sent_at: Option<DateTime<Utc>>,
    ) -> AppResult<Option<WhatsAppReminder>> {
        sqlx::query_as::<_, WhatsAppReminder>(
            "UPDATE whatsapp_reminders SET status = $2, sent_at = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(sent_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update reminder status", e)
        })
    }

    /// Delete a reminder log row, making its invoice eligible again.
    pub async fn delete(&self, id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM whatsapp_reminders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete reminder log", e)
            })?;
        Ok(result.rows_affected())
    }
}
