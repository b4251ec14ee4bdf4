//! Notification repository implementation.

use std::collections::HashSet;

use sqlx::PgPool;
use uuid::Uuid;

use aqari_core::error::{AppError, ErrorKind};
use aqari_core::result::AppResult;
use aqari_core::types::pagination::{PageRequest, PageResponse};
use aqari_entity::notification::{NewNotification, Notification};

/// Repository for notification reads and writes.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List notifications, newest first, optionally unread only.
    pub async fn find_all(
        &self,
        page: &PageRequest,
        unread_only: bool,
    ) -> AppResult<PageResponse<Notification>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE ($1 = FALSE OR is_read = FALSE)",
        )
        .bind(unread_only)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count notifications", e)
        })?;

        let rows = sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE ($1 = FALSE OR is_read = FALSE) \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(unread_only)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list notifications", e)
        })?;

        Ok(PageResponse::new(
            rows,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Count unread notifications.
    pub async fn count_unread(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM notifications WHERE is_read = FALSE")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count unread", e))
    }

    /// Load the full set of persisted dedup keys.
    ///
    /// The scan takes this snapshot once at the start of a pass; every
    /// candidate whose key is already present gets dropped.
    pub async fn existing_related_ids(&self) -> AppResult<HashSet<String>> {
        let keys: Vec<String> = sqlx::query_scalar("SELECT related_id FROM notifications")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to load notification keys", e)
            })?;
        Ok(keys.into_iter().collect())
    }

    /// Insert all surviving scan candidates in a single statement.
    ///
    /// Returns the number of rows inserted. A unique index on
    /// `related_id` backs this up against concurrent scans; a violation
    /// surfaces as a conflict error rather than a duplicate row.
    pub async fn insert_batch(&self, candidates: &[NewNotification]) -> AppResult<u64> {
        if candidates.is_empty() {
            return Ok(0);
        }

        let mut builder = sqlx::QueryBuilder::new(
            "INSERT INTO notifications (kind, title, message, tenant_id, property_id, related_id) ",
        );
        builder.push_values(candidates, |mut b, n| {
            b.push_bind(n.kind.as_str())
                .push_bind(&n.title)
                .push_bind(&n.message)
                .push_bind(n.tenant_id)
                .push_bind(n.property_id)
                .push_bind(&n.related_id);
        });

        let result = builder.build().execute(&self.pool).await.map_err(|e| {
            if matches!(&e, sqlx::Error::Database(db) if db.is_unique_violation()) {
                AppError::with_source(
                    ErrorKind::Conflict,
                    "Duplicate notification key, a concurrent scan may have run",
                    e,
                )
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to insert notifications", e)
            }
        })?;

        Ok(result.rows_affected())
    }

    /// Mark a notification as read.
    pub async fn mark_read(&self, id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("UPDATE notifications SET is_read = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark read", e))?;
        Ok(result.rows_affected())
    }

    /// Mark all notifications as read.
    pub async fn mark_all_read(&self) -> AppResult<u64> {
        let result = sqlx::query("UPDATE notifications SET is_read = TRUE WHERE is_read = FALSE")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to mark all read", e)
            })?;
        Ok(result.rows_affected())
    }

    /// Delete a notification.
    pub async fn delete(&self, id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete notification", e)
            })?;
        Ok(result.rows_affected())
    }
}
