//! Invoice and invoice item repository implementation.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use aqari_core::error::{AppError, ErrorKind};
use aqari_core::result::AppResult;
use aqari_core::types::pagination::{PageRequest, PageResponse};
use aqari_entity::invoice::{Invoice, InvoiceItem};

/// Fields accepted when creating or updating an invoice.
#[derive(Debug, Clone)]
pub struct InvoiceInput {
    pub invoice_number: String,
    pub tenant_id: Uuid,
    pub property_id: Uuid,
    pub amount: f64,
    pub status: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
}

/// Repository for invoice CRUD operations and line items.
#[derive(Debug, Clone)]
pub struct InvoiceRepository {
    pool: PgPool,
}

impl InvoiceRepository {
    /// Create a new invoice repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List invoices, optionally filtered by status, newest due first.
    pub async fn find_all(
        &self,
        page: &PageRequest,
        status: Option<&str>,
    ) -> AppResult<PageResponse<Invoice>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM invoices WHERE ($1::text IS NULL OR status = $1)",
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count invoices", e))?;

        let rows = sqlx::query_as::<_, Invoice>(
            "SELECT * FROM invoices WHERE ($1::text IS NULL OR status = $1) \
             ORDER BY due_date DESC LIMIT $2 OFFSET $3",
        )
        .bind(status)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list invoices", e))?;

        Ok(PageResponse::new(
            rows,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List every invoice with the given status. Used by the scan.
    pub async fn list_by_status(&self, status: &str) -> AppResult<Vec<Invoice>> {
        sqlx::query_as::<_, Invoice>("SELECT * FROM invoices WHERE status = $1 ORDER BY due_date")
            .bind(status)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load invoices", e))
    }

    /// List pending invoices due in the inclusive window `[from, to]`,
    /// in natural due-date order. Used by the reminder eligibility finder.
    pub async fn find_pending_due_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<Invoice>> {
        sqlx::query_as::<_, Invoice>(
            "SELECT * FROM invoices WHERE status = 'pending' \
             AND due_date >= $1 AND due_date <= $2 \
             ORDER BY due_date, invoice_number",
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load upcoming invoices", e)
        })
    }

    /// Look up an invoice by id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Invoice>> {
        sqlx::query_as::<_, Invoice>("SELECT * FROM invoices WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to get invoice", e))
    }

    /// Create an invoice.
    pub async fn create(&self, input: &InvoiceInput) -> AppResult<Invoice> {
        sqlx::query_as::<_, Invoice>(
            "INSERT INTO invoices (invoice_number, tenant_id, property_id, amount, status, \
             issue_date, due_date) VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(&input.invoice_number)
        .bind(input.tenant_id)
        .bind(input.property_id)
        .bind(input.amount)
        .bind(&input.status)
        .bind(input.issue_date)
        .bind(input.due_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create invoice", e))
    }

    /// Update an invoice. Returns `None` if no row matched.
    pub async fn update(&self, id: Uuid, input: &InvoiceInput) -> AppResult<Option<Invoice>> {
        sqlx::query_as::<_, Invoice>(
            "UPDATE invoices SET invoice_number = $2, tenant_id = $3, property_id = $4, \
             amount = $5, status = $6, issue_date = $7, due_date = $8, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&input.invoice_number)
        .bind(input.tenant_id)
        .bind(input.property_id)
        .bind(input.amount)
        .bind(&input.status)
        .bind(input.issue_date)
        .bind(input.due_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update invoice", e))
    }

    /// Set only the payment status. Returns `None` if no row matched.
    pub async fn update_status(&self, id: Uuid, status: &str) -> AppResult<Option<Invoice>> {
        sqlx::query_as::<_, Invoice>(
            "UPDATE invoices SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update invoice status", e)
        })
    }

    /// Delete an invoice.
    pub async fn delete(&self, id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete invoice", e)
            })?;
        Ok(result.rows_affected())
    }

    /// Number of invoices with the given status.
    pub async fn count_by_status(&self, status: &str) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM invoices WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count invoices", e))
    }

    /// Sum of invoice amounts with the given status.
    pub async fn sum_amount_by_status(&self, status: &str) -> AppResult<f64> {
        sqlx::query_scalar("SELECT COALESCE(SUM(amount), 0) FROM invoices WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to sum invoices", e))
    }

    /// List line items for an invoice.
    pub async fn list_items(&self, invoice_id: Uuid) -> AppResult<Vec<InvoiceItem>> {
        sqlx::query_as::<_, InvoiceItem>(
            "SELECT * FROM invoice_items WHERE invoice_id = $1 ORDER BY description",
        )
        .bind(invoice_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list invoice items", e))
    }

    /// Add a line item to an invoice.
    pub async fn add_item(
        &self,
        invoice_id: Uuid,
        description: &str,
        amount: f64,
    ) -> AppResult<InvoiceItem> {
        sqlx::query_as::<_, InvoiceItem>(
            "INSERT INTO invoice_items (invoice_id, description, amount) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(invoice_id)
        .bind(description)
        .bind(amount)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add invoice item", e))
    }

    /// Remove a line item.
    pub async fn delete_item(&self, item_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM invoice_items WHERE id = $1")
            .bind(item_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete invoice item", e)
            })?;
        Ok(result.rows_affected())
    }
}
