//! Property repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use aqari_core::error::{AppError, ErrorKind};
use aqari_core::result::AppResult;
use aqari_core::types::pagination::{PageRequest, PageResponse};
use aqari_entity::property::Property;

/// Fields accepted when creating or updating a property.
#[derive(Debug, Clone)]
pub struct PropertyInput {
    pub name: String,
    pub address: String,
    pub area: Option<String>,
    pub property_type: String,
    pub total_units: i32,
    pub notes: Option<String>,
}

/// Repository for property CRUD operations.
#[derive(Debug, Clone)]
pub struct PropertyRepository {
    pool: PgPool,
}

impl PropertyRepository {
    /// Create a new property repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List properties, newest first.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Property>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM properties")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count properties", e)
            })?;

        let rows = sqlx::query_as::<_, Property>(
            "SELECT * FROM properties ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list properties", e))?;

        Ok(PageResponse::new(
            rows,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List every property. Used by the scan to build the name lookup.
    pub async fn list_all(&self) -> AppResult<Vec<Property>> {
        sqlx::query_as::<_, Property>("SELECT * FROM properties ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to load properties", e)
            })
    }

    /// Look up a property by id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Property>> {
        sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to get property", e))
    }

    /// Create a property.
    pub async fn create(&self, input: &PropertyInput) -> AppResult<Property> {
        sqlx::query_as::<_, Property>(
            "INSERT INTO properties (name, address, area, property_type, total_units, notes) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(&input.name)
        .bind(&input.address)
        .bind(&input.area)
        .bind(&input.property_type)
        .bind(input.total_units)
        .bind(&input.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create property", e))
    }

    /// Update a property. Returns `None` if no row matched.
    pub async fn update(&self, id: Uuid, input: &PropertyInput) -> AppResult<Option<Property>> {
        sqlx::query_as::<_, Property>(
            "UPDATE properties SET name = $2, address = $3, area = $4, property_type = $5, \
             total_units = $6, notes = $7, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.address)
        .bind(&input.area)
        .bind(&input.property_type)
        .bind(input.total_units)
        .bind(&input.notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update property", e))
    }

    /// Delete a property.
    pub async fn delete(&self, id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete property", e)
            })?;
        Ok(result.rows_affected())
    }

    /// Total number of properties.
    pub async fn count_all(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM properties")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count properties", e)
            })
    }
}
