//! Lease contract handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use aqari_core::error::AppError;
use aqari_core::types::pagination::PageResponse;
use aqari_entity::contract::Contract;

use crate::dto::request::ContractRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// Filter parameters for contract listing.
#[derive(Debug, Deserialize)]
pub struct ContractFilter {
    /// Restrict to one lease status.
    pub status: Option<String>,
}

/// GET /api/contracts
pub async fn list_contracts(
    State(state): State<AppState>,
    Query(filter): Query<ContractFilter>,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<Contract>>>> {
    let page = state
        .contract_repo
        .find_all(&params.into_page_request(), filter.status.as_deref())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/contracts/{id}
pub async fn get_contract(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Contract>>> {
    let contract = state
        .contract_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Contract not found"))?;
    Ok(Json(ApiResponse::ok(contract)))
}

/// POST /api/contracts
pub async fn create_contract(
    State(state): State<AppState>,
    Json(req): Json<ContractRequest>,
) -> ApiResult<Json<ApiResponse<Contract>>> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let contract = state.contract_repo.create(&req.into_input()?).await?;
    Ok(Json(ApiResponse::ok(contract)))
}

/// PUT /api/contracts/{id}
pub async fn update_contract(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ContractRequest>,
) -> ApiResult<Json<ApiResponse<Contract>>> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let contract = state
        .contract_repo
        .update(id, &req.into_input()?)
        .await?
        .ok_or_else(|| AppError::not_found("Contract not found"))?;
    Ok(Json(ApiResponse::ok(contract)))
}

/// DELETE /api/contracts/{id}
pub async fn delete_contract(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    let deleted = state.contract_repo.delete(id).await?;
    if deleted == 0 {
        return Err(AppError::not_found("Contract not found").into());
    }
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Contract deleted",
    ))))
}
