//! Lease contract repository implementation.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use aqari_core::error::{AppError, ErrorKind};
use aqari_core::result::AppResult;
use aqari_core::types::pagination::{PageRequest, PageResponse};
use aqari_entity::contract::Contract;

/// Fields accepted when creating or updating a contract.
#[derive(Debug, Clone)]
pub struct ContractInput {
    pub contract_number: String,
    pub tenant_id: Uuid,
    pub property_id: Uuid,
    pub unit_id: Option<Uuid>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub rent_amount: f64,
    pub status: String,
}

/// Repository for contract CRUD operations.
#[derive(Debug, Clone)]
pub struct ContractRepository {
    pool: PgPool,
}

impl ContractRepository {
    /// Create a new contract repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List contracts, optionally filtered by status, soonest-ending first.
    pub async fn find_all(
        &self,
        page: &PageRequest,
        status: Option<&str>,
    ) -> AppResult<PageResponse<Contract>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM contracts WHERE ($1::text IS NULL OR status = $1)",
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count contracts", e))?;

        let rows = sqlx::query_as::<_, Contract>(
            "SELECT * FROM contracts WHERE ($1::text IS NULL OR status = $1) \
             ORDER BY end_date LIMIT $2 OFFSET $3",
        )
        .bind(status)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list contracts", e))?;

        Ok(PageResponse::new(
            rows,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List every contract with the given status. Used by the scan.
    pub async fn list_by_status(&self, status: &str) -> AppResult<Vec<Contract>> {
        sqlx::query_as::<_, Contract>(
            "SELECT * FROM contracts WHERE status = $1 ORDER BY end_date",
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load contracts", e))
    }

    /// Look up a contract by id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Contract>> {
        sqlx::query_as::<_, Contract>("SELECT * FROM contracts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to get contract", e))
    }

    /// Create a contract.
    pub async fn create(&self, input: &ContractInput) -> AppResult<Contract> {
        sqlx::query_as::<_, Contract>(
            "INSERT INTO contracts (contract_number, tenant_id, property_id, unit_id, \
             start_date, end_date, rent_amount, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(&input.contract_number)
        .bind(input.tenant_id)
        .bind(input.property_id)
        .bind(input.unit_id)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(input.rent_amount)
        .bind(&input.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create contract", e))
    }

    /// Update a contract. Returns `None` if no row matched.
    pub async fn update(&self, id: Uuid, input: &ContractInput) -> AppResult<Option<Contract>> {
        sqlx::query_as::<_, Contract>(
            "UPDATE contracts SET contract_number = $2, tenant_id = $3, property_id = $4, \
             unit_id = $5, start_date = $6, end_date = $7, rent_amount = $8, status = $9, \
             updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&input.contract_number)
        .bind(input.tenant_id)
        .bind(input.property_id)
        .bind(input.unit_id)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(input.rent_amount)
        .bind(&input.status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update contract", e))
    }

    /// Delete a contract.
    pub async fn delete(&self, id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM contracts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete contract", e)
            })?;
        Ok(result.rows_affected())
    }

    /// Number of contracts with the given status.
    pub async fn count_by_status(&self, status: &str) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM contracts WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count contracts", e))
    }
}
