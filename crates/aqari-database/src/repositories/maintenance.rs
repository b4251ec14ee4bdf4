//! Maintenance request repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use aqari_core::error::{AppError, ErrorKind};
use aqari_core::result::AppResult;
use aqari_core::types::pagination::{PageRequest, PageResponse};
use aqari_entity::maintenance::MaintenanceRequest;

/// Fields accepted when creating or updating a maintenance request.
#[derive(Debug, Clone)]
pub struct MaintenanceInput {
    pub title: String,
    pub description: Option<String>,
    pub property_id: Uuid,
    pub unit_id: Option<Uuid>,
    pub tenant_id: Option<Uuid>,
    pub priority: String,
    pub status: String,
    pub assigned_to: Option<String>,
}

/// Repository for maintenance request CRUD operations.
#[derive(Debug, Clone)]
pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    /// Create a new maintenance repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List requests, optionally filtered by status, newest first.
    pub async fn find_all(
        &self,
        page: &PageRequest,
        status: Option<&str>,
    ) -> AppResult<PageResponse<MaintenanceRequest>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM maintenance_requests WHERE ($1::text IS NULL OR status = $1)",
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count maintenance requests", e)
        })?;

        let rows = sqlx::query_as::<_, MaintenanceRequest>(
            "SELECT * FROM maintenance_requests WHERE ($1::text IS NULL OR status = $1) \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(status)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list maintenance requests", e)
        })?;

        Ok(PageResponse::new(
            rows,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List every request with the given status. Used by the scan.
    pub async fn list_by_status(&self, status: &str) -> AppResult<Vec<MaintenanceRequest>> {
        sqlx::query_as::<_, MaintenanceRequest>(
            "SELECT * FROM maintenance_requests WHERE status = $1 ORDER BY updated_at DESC",
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load maintenance requests", e)
        })
    }

    /// Look up a request by id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<MaintenanceRequest>> {
        sqlx::query_as::<_, MaintenanceRequest>("SELECT * FROM maintenance_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to get maintenance request", e)
            })
    }

    /// Create a request.
    pub async fn create(&self, input: &MaintenanceInput) -> AppResult<MaintenanceRequest> {
        sqlx::query_as::<_, MaintenanceRequest>(
            "INSERT INTO maintenance_requests (title, description, property_id, unit_id, \
             tenant_id, priority, status, assigned_to) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.property_id)
        .bind(input.unit_id)
        .bind(input.tenant_id)
        .bind(&input.priority)
        .bind(&input.status)
        .bind(&input.assigned_to)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create maintenance request", e)
        })
    }

    /// Update a request. Bumps `updated_at`, which drives the
    /// completion-alert lookback window.
    pub async fn update(
        &self,
        id: Uuid,
        input: &MaintenanceInput,
    ) -> AppResult<Option<MaintenanceRequest>> {
        sqlx::query_as::<_, MaintenanceRequest>(
            "UPDATE maintenance_requests SET title = $2, description = $3, property_id = $4, \
             unit_id = $5, tenant_id = $6, priority = $7, status = $8, assigned_to = $9, \
             updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.property_id)
        .bind(input.unit_id)
        .bind(input.tenant_id)
        .bind(&input.priority)
        .bind(&input.status)
        .bind(&input.assigned_to)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update maintenance request", e)
        })
    }

    /// Delete a request.
    pub async fn delete(&self, id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM maintenance_requests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete maintenance request", e)
            })?;
        Ok(result.rows_affected())
    }

    /// Number of requests not yet completed.
    pub async fn count_open(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM maintenance_requests WHERE status <> 'completed'")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count open requests", e)
            })
    }
}
