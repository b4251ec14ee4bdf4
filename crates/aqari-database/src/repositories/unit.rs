//! Rental unit repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use aqari_core::error::{AppError, ErrorKind};
use aqari_core::result::AppResult;
use aqari_core::types::pagination::{PageRequest, PageResponse};
use aqari_entity::unit::Unit;

/// Fields accepted when creating or updating a unit.
#[derive(Debug, Clone)]
pub struct UnitInput {
    pub property_id: Uuid,
    pub unit_number: String,
    pub floor: Option<i32>,
    pub bedrooms: Option<i32>,
    pub rent_amount: f64,
    pub status: String,
}

/// Repository for unit CRUD operations.
#[derive(Debug, Clone)]
pub struct UnitRepository {
    pool: PgPool,
}

impl UnitRepository {
    /// Create a new unit repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List units, optionally restricted to one property.
    pub async fn find_all(
        &self,
        page: &PageRequest,
        property_id: Option<Uuid>,
    ) -> AppResult<PageResponse<Unit>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM units WHERE ($1::uuid IS NULL OR property_id = $1)",
        )
        .bind(property_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count units", e))?;

        let rows = sqlx::query_as::<_, Unit>(
            "SELECT * FROM units WHERE ($1::uuid IS NULL OR property_id = $1) \
             ORDER BY unit_number LIMIT $2 OFFSET $3",
        )
        .bind(property_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list units", e))?;

        Ok(PageResponse::new(
            rows,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Look up a unit by id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Unit>> {
        sqlx::query_as::<_, Unit>("SELECT * FROM units WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to get unit", e))
    }

    /// Create a unit.
    pub async fn create(&self, input: &UnitInput) -> AppResult<Unit> {
        sqlx::query_as::<_, Unit>(
            "INSERT INTO units (property_id, unit_number, floor, bedrooms, rent_amount, status) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(input.property_id)
        .bind(&input.unit_number)
        .bind(input.floor)
        .bind(input.bedrooms)
        .bind(input.rent_amount)
        .bind(&input.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create unit", e))
    }

    /// Update a unit. Returns `None` if no row matched.
    pub async fn update(&self, id: Uuid, input: &UnitInput) -> AppResult<Option<Unit>> {
        sqlx::query_as::<_, Unit>(
            "UPDATE units SET property_id = $2, unit_number = $3, floor = $4, bedrooms = $5, \
             rent_amount = $6, status = $7, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(input.property_id)
        .bind(&input.unit_number)
        .bind(input.floor)
        .bind(input.bedrooms)
        .bind(input.rent_amount)
        .bind(&input.status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update unit", e))
    }

    /// Delete a unit.
    pub async fn delete(&self, id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM units WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete unit", e))?;
        Ok(result.rows_affected())
    }

    /// Total number of units.
    pub async fn count_all(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM units")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count units", e))
    }

    /// Number of units with the given status.
    pub async fn count_by_status(&self, status: &str) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM units WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count units", e))
    }
}
