//! Invoice and invoice item handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use aqari_core::error::AppError;
use aqari_core::types::pagination::PageResponse;
use aqari_entity::invoice::{Invoice, InvoiceItem};

use crate::dto::request::{InvoiceItemRequest, InvoiceRequest, InvoiceStatusRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// Filter parameters for invoice listing.
#[derive(Debug, Deserialize)]
pub struct InvoiceFilter {
    /// Restrict to one payment status.
    pub status: Option<String>,
}

/// GET /api/invoices
pub async fn list_invoices(
    State(state): State<AppState>,
    Query(filter): Query<InvoiceFilter>,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<Invoice>>>> {
    let page = state
        .invoice_repo
        .find_all(&params.into_page_request(), filter.status.as_deref())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/invoices/{id}
pub async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Invoice>>> {
    let invoice = state
        .invoice_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Invoice not found"))?;
    Ok(Json(ApiResponse::ok(invoice)))
}

/// POST /api/invoices
pub async fn create_invoice(
    State(state): State<AppState>,
    Json(req): Json<InvoiceRequest>,
) -> ApiResult<Json<ApiResponse<Invoice>>> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let invoice = state.invoice_repo.create(&req.into_input()?).await?;
    Ok(Json(ApiResponse::ok(invoice)))
}

/// PUT /api/invoices/{id}
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<InvoiceRequest>,
) -> ApiResult<Json<ApiResponse<Invoice>>> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let invoice = state
        .invoice_repo
        .update(id, &req.into_input()?)
        .await?
        .ok_or_else(|| AppError::not_found("Invoice not found"))?;
    Ok(Json(ApiResponse::ok(invoice)))
}

/// PUT /api/invoices/{id}/status
pub async fn update_invoice_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<InvoiceStatusRequest>,
) -> ApiResult<Json<ApiResponse<Invoice>>> {
    let status = req.parse_status()?;
    let invoice = state
        .invoice_repo
        .update_status(id, status.as_str())
        .await?
        .ok_or_else(|| AppError::not_found("Invoice not found"))?;
    Ok(Json(ApiResponse::ok(invoice)))
}

/// DELETE /api/invoices/{id}
pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    let deleted = state.invoice_repo.delete(id).await?;
    if deleted == 0 {
        return Err(AppError::not_found("Invoice not found").into());
    }
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Invoice deleted",
    ))))
}

/// GET /api/invoices/{id}/items
pub async fn list_invoice_items(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Vec<InvoiceItem>>>> {
    let items = state.invoice_repo.list_items(id).await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// POST /api/invoices/{id}/items
pub async fn add_invoice_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<InvoiceItemRequest>,
) -> ApiResult<Json<ApiResponse<InvoiceItem>>> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    state
        .invoice_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Invoice not found"))?;
    let item = state
        .invoice_repo
        .add_item(id, &req.description, req.amount)
        .await?;
    Ok(Json(ApiResponse::ok(item)))
}

/// DELETE /api/invoices/{id}/items/{item_id}
pub async fn delete_invoice_item(
    State(state): State<AppState>,
    Path((_id, item_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    let deleted = state.invoice_repo.delete_item(item_id).await?;
    if deleted == 0 {
        return Err(AppError::not_found("Invoice item not found").into());
    }
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Invoice item deleted",
    ))))
}
